use std::sync::{Arc, Mutex, Weak};

use url::Url;

use crate::{
    assets::loader::{ImageSourceResolver, load_image},
    assets::uri::resolve_uri,
    card::config::{HostConfig, ImageSizes},
    card::model::{ImageBrush, SizePreset, Stretch},
    fit::policy::FitDecision,
    view::element::{Container, ImageView, SharedImageView},
};

/// Attach the reactive fit policy for one image-container pair.
///
/// Registers exactly one observer on the container's width signal. The
/// observer recomputes [`FitDecision`] from the image's native width and the
/// new container width, applies the resulting stretch, and unregisters
/// itself once the image view has been dropped, so subscriptions never
/// outlive either endpoint.
///
/// The observer fires immediately with the current width, so a freshly
/// loaded image gets a decision without waiting for the first resize.
/// Binding an already-bound view again registers nothing and instead
/// refreshes the decision once at the current width.
pub fn bind_fit_policy(container: &mut Container, view: &SharedImageView) {
    let already_bound = {
        let Ok(mut view) = view.lock() else {
            return;
        };
        view.mark_fit_bound()
    };
    if already_bound {
        // The live observer reads the native width on every notification, so
        // a replaced source only needs one refresh at the current width.
        let width = container.width().get();
        if let Ok(mut view) = view.lock() {
            let decision = FitDecision::decide(view.native_width_px(), width);
            view.set_stretch(decision.into());
        }
        return;
    }

    let weak = Arc::downgrade(view);
    container.width_mut().observe(Box::new(move |width| {
        let Some(view) = weak.upgrade() else {
            return false;
        };
        let Ok(mut view) = view.lock() else {
            return false;
        };
        let decision = FitDecision::decide(view.native_width_px(), width);
        view.set_stretch(decision.into());
        true
    }));
}

/// Resolve an image element's source and bind its fit policy.
///
/// Loads through the host capability, installs the bitmap, and attaches the
/// width binding. The image view is addressed weakly: a view torn down while
/// the load is in flight makes the completion a no-op instead of a write
/// into a destroyed element. Load failures degrade silently, leaving the
/// view untouched.
#[tracing::instrument(skip(view, container, resolver))]
pub async fn set_image_source<R: ImageSourceResolver>(
    view: Weak<Mutex<ImageView>>,
    container: Weak<Mutex<Container>>,
    uri: &Url,
    resolver: &R,
) {
    let Some(decoded) = load_image(resolver, uri).await else {
        return;
    };

    let Some(view) = view.upgrade() else {
        tracing::debug!(%uri, "image view dropped before load completed");
        return;
    };
    let Ok(mut guard) = view.lock() else {
        return;
    };
    guard.set_source(decoded);
    drop(guard);

    let Some(container) = container.upgrade() else {
        return;
    };
    let Ok(mut container) = container.lock() else {
        return;
    };
    bind_fit_policy(&mut container, &view);
}

/// Resolve and apply a container background image.
///
/// Runs the full resolution fallback chain against the configured base URL.
/// On success the background becomes an image brush with `UniformToFill`
/// stretch and top-left alignment; on any resolution or load failure the
/// background is left unset. The container is addressed weakly for the same
/// dangling-target reason as [`set_image_source`].
#[tracing::instrument(skip(container, config, resolver))]
pub async fn set_background_source<R: ImageSourceResolver>(
    container: Weak<Mutex<Container>>,
    requested: &str,
    config: &HostConfig,
    resolver: &R,
) {
    let Some(uri) = resolve_uri(requested, config.image_base_url.as_deref()) else {
        tracing::debug!(requested, "background image reference did not resolve, skipping");
        return;
    };
    let Some(decoded) = load_image(resolver, &uri).await else {
        return;
    };

    let Some(container) = container.upgrade() else {
        tracing::debug!(%uri, "container dropped before background load completed");
        return;
    };
    let Ok(mut container) = container.lock() else {
        return;
    };
    container.set_background(ImageBrush::background(decoded));
}

/// Apply a named size preset to an image element.
///
/// `Auto` and `Stretch` keep the element unsized with uniform stretch; the
/// named sizes pin a fixed square from the configured pixel values,
/// regardless of the bitmap's native dimensions.
pub fn apply_size_preset(view: &mut ImageView, preset: SizePreset, sizes: &ImageSizes) {
    match preset {
        SizePreset::Auto | SizePreset::Stretch => view.set_stretch(Stretch::Uniform),
        SizePreset::Small => {
            let edge = f64::from(sizes.small);
            view.set_fixed_size(edge, edge);
        }
        SizePreset::Medium => {
            let edge = f64::from(sizes.medium);
            view.set_fixed_size(edge, edge);
        }
        SizePreset::Large => {
            let edge = f64::from(sizes.large);
            view.set_fixed_size(edge, edge);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fit/binding.rs"]
mod tests;
