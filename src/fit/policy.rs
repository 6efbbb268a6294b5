use crate::{
    card::model::Stretch,
    foundation::error::CardSnapError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Stretch decision for an image bound into a container.
///
/// Derived, never stored independently: recomputed whenever the container
/// width or the image's native width changes.
pub enum FitDecision {
    /// Scale proportionally so the image fits entirely in the container.
    UniformFit,
    /// Render at natural pixel dimensions.
    NativeSize,
}

impl FitDecision {
    /// Decide how an image should stretch inside its container.
    ///
    /// `UniformFit` iff the native width is at least the container width,
    /// equality included. An unknown native width (load pending or failed)
    /// fails closed to `UniformFit`: an image scaled to fit can never
    /// overflow its box, so the default is safe under any later outcome.
    ///
    /// Pure and idempotent; safe to re-run on spurious width notifications.
    pub fn decide(native_width_px: Option<u32>, container_width: f64) -> Self {
        match native_width_px {
            Some(native) if f64::from(native) >= container_width => Self::UniformFit,
            Some(_) => Self::NativeSize,
            None => Self::UniformFit,
        }
    }
}

impl From<FitDecision> for Stretch {
    fn from(decision: FitDecision) -> Self {
        match decision {
            FitDecision::UniformFit => Stretch::Uniform,
            FitDecision::NativeSize => Stretch::None,
        }
    }
}

impl TryFrom<Stretch> for FitDecision {
    type Error = CardSnapError;

    /// The reverse conversion is not defined: a stretch value does not carry
    /// the widths the decision was derived from. Always fails, so callers
    /// probing for support get a typed refusal.
    fn try_from(stretch: Stretch) -> Result<Self, Self::Error> {
        Err(CardSnapError::unsupported_conversion(format!(
            "no fit decision can be recovered from stretch {stretch:?}"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fit/policy.rs"]
mod tests;
