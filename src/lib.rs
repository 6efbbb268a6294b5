//! Cardsnap provides the image presentation helpers for a card rendering
//! toolkit: resolving and binding remote or local images into visual
//! elements, keeping a stretch fit policy current as containers resize, and
//! rasterizing an arbitrary visual subtree into PNG bytes.
//!
//! # Component overview
//!
//! 1. **Resolve**: a possibly-relative reference plus an optional base URL
//!    becomes one absolute URL, or nothing ([`resolve_uri`]).
//! 2. **Load**: a host capability ([`ImageSourceResolver`]) turns the URL
//!    into a [`DecodedImage`]; an unavailable source is skipped, not an
//!    error.
//! 3. **Fit**: [`FitDecision`] derives the stretch from native width vs
//!    container width and is kept current reactively ([`bind_fit_policy`])
//!    for the lifetime of the image-container pair.
//! 4. **Snapshot**: [`rasterize`] runs measure → arrange → layout flush →
//!    offscreen capture → PNG encode over any [`Visual`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic snapshots**: fixed 96 DPI, fixed pixel format, fixed
//!   PNG encode defaults; same element and width, same bytes.
//! - **No IO in this crate**: fetching and decoding live behind the host
//!   capability.
//! - **No dangling writes**: async completions upgrade a weak target handle
//!   before applying results.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod card;
mod fit;
mod foundation;
mod snapshot;
mod view;

pub use assets::decode::{DecodedImage, decode_image};
pub use assets::loader::{ImageRef, ImageSourceResolver, InMemoryResolver, load_image};
pub use assets::uri::resolve_uri;
pub use card::config::{HostConfig, ImageSizes};
pub use card::model::{Align, ImageBrush, SizePreset, Stretch};
pub use fit::binding::{
    apply_size_preset, bind_fit_policy, set_background_source, set_image_source,
};
pub use fit::policy::FitDecision;
pub use foundation::core::{Point, Rect, SNAPSHOT_DPI, Size, Vec2, dip_to_px, px_to_dip};
pub use foundation::error::{CardSnapError, CardSnapResult};
pub use snapshot::raster::{FramePixels, LAYOUT_BUFFER_DIP, Visual, rasterize};
pub use view::element::{
    Container, ImageView, SharedContainer, SharedImageView, WidthObserver, WidthSignal,
};
