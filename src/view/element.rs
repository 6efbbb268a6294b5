use std::sync::{Arc, Mutex};

use crate::{
    assets::decode::DecodedImage,
    card::model::{ImageBrush, Stretch},
};

/// Shared handle to an image element, as the async binding operations see it.
pub type SharedImageView = Arc<Mutex<ImageView>>;

/// Shared handle to a container element.
pub type SharedContainer = Arc<Mutex<Container>>;

/// Width observer callback. Returning `false` removes the subscription.
pub type WidthObserver = Box<dyn FnMut(f64) -> bool + Send>;

/// Observable container width in device independent units.
///
/// The width is owned and mutated by the container; the fit policy only ever
/// observes it. Observers are invoked once on registration with the current
/// value and then on every subsequent [`WidthSignal::set`].
pub struct WidthSignal {
    width: f64,
    observers: Vec<WidthObserver>,
}

impl WidthSignal {
    /// Build a signal at an initial width.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            observers: Vec::new(),
        }
    }

    /// Current width value.
    pub fn get(&self) -> f64 {
        self.width
    }

    /// Update the width and notify every live observer.
    ///
    /// Observers that return `false` are unregistered; notification is safe
    /// to repeat with an unchanged value (observers must be idempotent).
    pub fn set(&mut self, width: f64) {
        self.width = width;
        self.observers.retain_mut(|observer| observer(width));
    }

    /// Register an observer, invoking it immediately with the current width.
    ///
    /// The observer is dropped right away if that first invocation returns
    /// `false`.
    pub fn observe(&mut self, mut observer: WidthObserver) {
        if observer(self.width) {
            self.observers.push(observer);
        }
    }

    /// Number of live subscriptions, exposed so hosts can assert there is no
    /// unbounded growth per image-container pair.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl std::fmt::Debug for WidthSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidthSignal")
            .field("width", &self.width)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[derive(Debug, Default)]
/// The image element surface this crate mutates.
///
/// Tracks the loaded source plus the stretch and fixed-size outputs of the
/// fit policy and the size presets. `stretch` stays `None` until a decision
/// has been applied, leaving toolkit-default behavior in place.
pub struct ImageView {
    source: Option<DecodedImage>,
    stretch: Option<Stretch>,
    fixed_size: Option<(f64, f64)>,
    fit_bound: bool,
}

impl ImageView {
    /// Build an empty image view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a shared handle around an empty image view.
    pub fn shared() -> SharedImageView {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Loaded bitmap, if any.
    pub fn source(&self) -> Option<&DecodedImage> {
        self.source.as_ref()
    }

    /// Install the loaded bitmap.
    pub fn set_source(&mut self, image: DecodedImage) {
        self.source = Some(image);
    }

    /// Native pixel width of the loaded bitmap, unknown until load completes.
    pub fn native_width_px(&self) -> Option<u32> {
        self.source.as_ref().map(DecodedImage::native_width_px)
    }

    /// Currently applied stretch, if a decision has been applied.
    pub fn stretch(&self) -> Option<Stretch> {
        self.stretch
    }

    /// Apply a stretch value.
    pub fn set_stretch(&mut self, stretch: Stretch) {
        self.stretch = Some(stretch);
    }

    /// Fixed (width, height) in device independent units, if a size preset
    /// pinned one.
    pub fn fixed_size(&self) -> Option<(f64, f64)> {
        self.fixed_size
    }

    /// Pin a fixed size.
    pub fn set_fixed_size(&mut self, width: f64, height: f64) {
        self.fixed_size = Some((width, height));
    }

    /// Mark the fit binding as registered, returning whether it already was.
    ///
    /// Keeps the subscription count at exactly one per image-container pair
    /// even when the source is set repeatedly.
    pub(crate) fn mark_fit_bound(&mut self) -> bool {
        std::mem::replace(&mut self.fit_bound, true)
    }
}

#[derive(Debug)]
/// The container element surface this crate mutates.
///
/// Owns the observable width its hosted images react to, and the optional
/// background image brush.
pub struct Container {
    width: WidthSignal,
    background: Option<ImageBrush>,
}

impl Container {
    /// Build a container at an initial width.
    pub fn new(width: f64) -> Self {
        Self {
            width: WidthSignal::new(width),
            background: None,
        }
    }

    /// Build a shared handle around a container at an initial width.
    pub fn shared(width: f64) -> SharedContainer {
        Arc::new(Mutex::new(Self::new(width)))
    }

    /// Observable width signal.
    pub fn width(&self) -> &WidthSignal {
        &self.width
    }

    /// Mutable width signal, for resizes and observer registration.
    pub fn width_mut(&mut self) -> &mut WidthSignal {
        &mut self.width
    }

    /// Resize the container, notifying width observers.
    pub fn set_width(&mut self, width: f64) {
        self.width.set(width);
    }

    /// Background brush, if a background image resolved.
    pub fn background(&self) -> Option<&ImageBrush> {
        self.background.as_ref()
    }

    /// Install the background brush.
    pub fn set_background(&mut self, brush: ImageBrush) {
        self.background = Some(brush);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/element.rs"]
mod tests;
