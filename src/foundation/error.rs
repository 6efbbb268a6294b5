/// Convenience result type used across cardsnap.
pub type CardSnapResult<T> = Result<T, CardSnapError>;

/// Top-level error taxonomy used by crate APIs.
///
/// Unresolvable image references and unavailable image sources are not errors:
/// those paths degrade by skipping the image and are modeled as `None` at the
/// call sites instead.
#[derive(thiserror::Error, Debug)]
pub enum CardSnapError {
    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A conversion direction that no caller is expected to take.
    #[error("unsupported conversion: {0}")]
    UnsupportedConversion(String),

    /// Failure during the measure/arrange/capture/encode snapshot pipeline.
    #[error("rasterization error: {0}")]
    Rasterize(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardSnapError {
    /// Build a [`CardSnapError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardSnapError::UnsupportedConversion`] value.
    pub fn unsupported_conversion(msg: impl Into<String>) -> Self {
        Self::UnsupportedConversion(msg.into())
    }

    /// Build a [`CardSnapError::Rasterize`] value.
    pub fn rasterize(msg: impl Into<String>) -> Self {
        Self::Rasterize(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
