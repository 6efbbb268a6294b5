pub use kurbo::{Point, Rect, Size, Vec2};

/// Fixed raster density of the snapshot pipeline, in dots per inch.
///
/// At 96 DPI one device independent unit maps to exactly one pixel, which is
/// what keeps snapshot output reproducible across machines.
pub const SNAPSHOT_DPI: f64 = 96.0;

/// Convert a length in device independent units to a pixel count at
/// [`SNAPSHOT_DPI`].
///
/// Fractional lengths round up so measured content is never truncated.
/// Negative and non-finite inputs clamp to zero; callers that need to reject
/// them do so before converting.
pub fn dip_to_px(dip: f64) -> u32 {
    if !dip.is_finite() || dip <= 0.0 {
        return 0;
    }
    dip.ceil().min(f64::from(u32::MAX)) as u32
}

/// Convert a pixel count back to device independent units at [`SNAPSHOT_DPI`].
pub fn px_to_dip(px: u32) -> f64 {
    f64::from(px)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
