use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Host-supplied rendering configuration consumed by the image helpers.
pub struct HostConfig {
    /// Base URL used to resolve relative image references.
    #[serde(default)]
    pub image_base_url: Option<String>,
    /// Pixel values backing the named image size presets.
    #[serde(default)]
    pub image_sizes: ImageSizes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Pixel edge lengths for the `Small`/`Medium`/`Large` size presets.
pub struct ImageSizes {
    /// Edge length in pixels for [`crate::SizePreset::Small`].
    #[serde(default = "default_small")]
    pub small: u32,
    /// Edge length in pixels for [`crate::SizePreset::Medium`].
    #[serde(default = "default_medium")]
    pub medium: u32,
    /// Edge length in pixels for [`crate::SizePreset::Large`].
    #[serde(default = "default_large")]
    pub large: u32,
}

impl Default for ImageSizes {
    fn default() -> Self {
        Self {
            small: default_small(),
            medium: default_medium(),
            large: default_large(),
        }
    }
}

fn default_small() -> u32 {
    40
}

fn default_medium() -> u32 {
    80
}

fn default_large() -> u32 {
    160
}

#[cfg(test)]
#[path = "../../tests/unit/card/config.rs"]
mod tests;
