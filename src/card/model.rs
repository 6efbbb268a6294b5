use serde::{Deserialize, Serialize};

use crate::assets::decode::DecodedImage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Toolkit stretch values an image element or brush can take.
pub enum Stretch {
    /// Render at natural pixel dimensions, no scaling.
    None,
    /// Scale proportionally so content fits entirely in available space.
    Uniform,
    /// Scale proportionally so content fills available space, cropping overflow.
    UniformToFill,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Named image size presets from the card object model.
pub enum SizePreset {
    /// Size from content; uniform stretch, no fixed dimensions.
    #[default]
    Auto,
    /// Fill available width; uniform stretch, no fixed dimensions.
    Stretch,
    /// Fixed square at the configured small edge length.
    Small,
    /// Fixed square at the configured medium edge length.
    Medium,
    /// Fixed square at the configured large edge length.
    Large,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Alignment of brush content inside its container.
pub enum Align {
    /// Align to start (left or top).
    #[default]
    Start,
    /// Align to center.
    Center,
    /// Align to end (right or bottom).
    End,
}

#[derive(Clone, Debug)]
/// An image paint applied to a container background.
pub struct ImageBrush {
    /// Decoded bitmap painted by the brush.
    pub image: DecodedImage,
    /// Stretch applied to the bitmap.
    pub stretch: Stretch,
    /// Horizontal alignment of the bitmap.
    pub align_x: Align,
    /// Vertical alignment of the bitmap.
    pub align_y: Align,
}

impl ImageBrush {
    /// Build the background brush used for resolved card backgrounds:
    /// `UniformToFill` with top-left alignment.
    pub fn background(image: DecodedImage) -> Self {
        Self {
            image,
            stretch: Stretch::UniformToFill,
            align_x: Align::Start,
            align_y: Align::Start,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/model.rs"]
mod tests;
