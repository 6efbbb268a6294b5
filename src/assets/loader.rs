use std::collections::HashMap;

use url::Url;

use crate::assets::decode::{DecodedImage, decode_image};
use crate::assets::uri::resolve_uri;

/// Host-supplied capability that fetches and decodes an image.
///
/// This crate never fetches or decodes on its own; any caching or
/// deduplication is the capability's concern. `None` means the image is
/// unavailable and the caller skips rendering it.
#[allow(async_fn_in_trait)]
pub trait ImageSourceResolver {
    /// Resolve `uri` to a decoded bitmap, or `None` when unavailable.
    async fn resolve_image_source(&self, uri: &Url) -> Option<DecodedImage>;
}

/// Load a decoded bitmap through the host capability.
///
/// The capability is invoked exactly once per call. Callers must not invoke
/// the loader with an unresolved URI; resolution failures are handled before
/// this point.
pub async fn load_image<R: ImageSourceResolver>(resolver: &R, uri: &Url) -> Option<DecodedImage> {
    let decoded = resolver.resolve_image_source(uri).await;
    if decoded.is_none() {
        tracing::debug!(%uri, "image source unavailable, skipping");
    }
    decoded
}

#[derive(Clone, Debug)]
/// Lifecycle record for one image render request.
///
/// Created when rendering is requested; the resolved URL is set once
/// resolution succeeds and the bitmap once the host capability completes.
/// Dropped together with the visual element that owns it.
pub struct ImageRef {
    requested: String,
    resolved: Option<Url>,
    decoded: Option<DecodedImage>,
}

impl ImageRef {
    /// Start a request for a possibly-relative reference.
    pub fn new(requested: impl Into<String>) -> Self {
        Self {
            requested: requested.into(),
            resolved: None,
            decoded: None,
        }
    }

    /// The reference as the card supplied it.
    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// Absolute URL, once resolution has succeeded.
    pub fn resolved(&self) -> Option<&Url> {
        self.resolved.as_ref()
    }

    /// Decoded bitmap, once the load has completed.
    pub fn decoded(&self) -> Option<&DecodedImage> {
        self.decoded.as_ref()
    }

    /// Native pixel width, unknown until the load completes.
    pub fn native_width_px(&self) -> Option<u32> {
        self.decoded.as_ref().map(DecodedImage::native_width_px)
    }

    /// Run the resolution fallback chain against an optional base URL.
    pub fn resolve(&mut self, base_url: Option<&str>) -> Option<&Url> {
        self.resolved = resolve_uri(&self.requested, base_url);
        self.resolved.as_ref()
    }

    /// Load the bitmap through the host capability.
    ///
    /// Does not touch the capability while the reference is unresolved.
    pub async fn load<R: ImageSourceResolver>(&mut self, resolver: &R) -> Option<&DecodedImage> {
        let uri = self.resolved.as_ref()?;
        self.decoded = load_image(resolver, uri).await;
        self.decoded.as_ref()
    }
}

#[derive(Clone, Debug, Default)]
/// Resolver backed by a table of pre-fetched encoded bytes.
///
/// Front-loads IO the way a host image cache would, which keeps the binding
/// operations deterministic in tests and simple embeddings.
pub struct InMemoryResolver {
    bytes_by_uri: HashMap<String, Vec<u8>>,
}

impl InMemoryResolver {
    /// Build an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register encoded image bytes for `uri`.
    pub fn insert(&mut self, uri: &Url, bytes: Vec<u8>) {
        self.bytes_by_uri.insert(uri.to_string(), bytes);
    }
}

impl ImageSourceResolver for InMemoryResolver {
    async fn resolve_image_source(&self, uri: &Url) -> Option<DecodedImage> {
        let bytes = self.bytes_by_uri.get(uri.as_str())?;
        decode_image(bytes).ok()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
