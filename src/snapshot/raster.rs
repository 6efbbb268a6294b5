use std::io::Cursor;

use anyhow::Context;

use crate::{
    assets::decode::unpremultiply_rgba8_in_place,
    foundation::core::{Rect, Size, dip_to_px},
    foundation::error::{CardSnapError, CardSnapResult},
};

/// Extra height in device independent units added before arranging.
///
/// Absorbs layout-engine rounding and clipping artifacts at paragraph and
/// line boundaries; without it, content near the bottom edge can lose its
/// last line.
pub const LAYOUT_BUFFER_DIP: f64 = 100.0;

/// Offscreen capture target: tightly packed premultiplied RGBA8, transparent
/// on allocation.
///
/// A fixed pixel format keeps snapshot output byte-identical across machines
/// regardless of platform surface optimizations.
pub struct FramePixels {
    width: u32,
    height: u32,
    rgba8_premul: Vec<u8>,
}

impl FramePixels {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            rgba8_premul: vec![0u8; (width as usize) * (height as usize) * 4],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Premultiplied RGBA8 value at (`x`, `y`).
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let base = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = &self.rgba8_premul[base..base + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Fill a rectangle (clamped to the frame) with a premultiplied RGBA8
    /// color.
    pub fn fill_rect(&mut self, rect: Rect, rgba8_premul: [u8; 4]) {
        let x0 = rect.x0.max(0.0) as u32;
        let y0 = rect.y0.max(0.0) as u32;
        let x1 = dip_to_px(rect.x1).min(self.width);
        let y1 = dip_to_px(rect.y1).min(self.height);

        for y in y0..y1 {
            for x in x0..x1 {
                let base = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
                self.rgba8_premul[base..base + 4].copy_from_slice(&rgba8_premul);
            }
        }
    }
}

impl std::fmt::Debug for FramePixels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FramePixels")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Seam to the host layout engine for an arbitrary visual subtree.
///
/// The rasterizer drives these in a fixed order: measure, arrange,
/// [`Visual::update_layout`], then draw. Implementations adapt whatever
/// element type the host toolkit uses.
pub trait Visual {
    /// Measure against an available size, returning the desired size.
    fn measure(&mut self, available: Size) -> Size;

    /// Arrange the subtree into final bounds.
    fn arrange(&mut self, bounds: Rect);

    /// Flush pending layout work; nothing may remain pending before capture.
    fn update_layout(&mut self) -> CardSnapResult<()>;

    /// Paint the arranged subtree into the capture target.
    fn draw(&self, frame: &mut FramePixels) -> CardSnapResult<()>;
}

/// Rasterize a visual subtree into single-frame PNG bytes.
///
/// The pipeline, in order:
///
/// 1. measure at (`width_px`, unconstrained height);
/// 2. add [`LAYOUT_BUFFER_DIP`] to the measured height;
/// 3. arrange into (`width_px`, buffered height);
/// 4. flush layout;
/// 5. capture into an offscreen [`FramePixels`] at 96 DPI;
/// 6. encode as PNG with fixed defaults, no quality knob.
///
/// Fails with an explicit error when the measurement is degenerate or any
/// later step fails; a blank or truncated image is never produced silently.
#[tracing::instrument(skip(visual))]
pub fn rasterize(visual: &mut dyn Visual, width_px: u32) -> CardSnapResult<Vec<u8>> {
    if width_px == 0 {
        return Err(CardSnapError::validation("snapshot width must be > 0"));
    }
    let width = f64::from(width_px);

    let desired = visual.measure(Size::new(width, f64::INFINITY));
    if !desired.height.is_finite() || desired.height <= 0.0 {
        return Err(CardSnapError::rasterize(format!(
            "measured height {} is not a positive finite size",
            desired.height
        )));
    }

    let buffered_height = desired.height + LAYOUT_BUFFER_DIP;
    visual.arrange(Rect::new(0.0, 0.0, width, buffered_height));
    visual.update_layout()?;

    // 1 dip == 1 px at the pipeline's fixed 96 DPI.
    let mut frame = FramePixels::new(width_px, dip_to_px(buffered_height));
    visual.draw(&mut frame)?;

    encode_png(&frame)
}

fn encode_png(frame: &FramePixels) -> CardSnapResult<Vec<u8>> {
    let mut rgba = frame.rgba8_premul.clone();
    unpremultiply_rgba8_in_place(&mut rgba);

    let img = image::RgbaImage::from_raw(frame.width, frame.height, rgba)
        .ok_or_else(|| CardSnapError::rasterize("captured frame has inconsistent dimensions"))?;

    // TODO: embed the originating card description as a tEXt chunk once the
    // encoder exposes text metadata.
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode snapshot as png")?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/snapshot/raster.rs"]
mod tests;
