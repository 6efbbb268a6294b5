use std::io::Cursor;

use super::*;
use crate::assets::decode::decode_image;
use crate::assets::loader::InMemoryResolver;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, vec![255u8; (width * height * 4) as usize])
        .unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn view_with_native_width(width: u32) -> SharedImageView {
    let view = ImageView::shared();
    view.lock()
        .unwrap()
        .set_source(decode_image(&png_bytes(width, 1)).unwrap());
    view
}

#[test]
fn bind_applies_initial_decision_immediately() {
    let mut container = Container::new(300.0);
    let view = view_with_native_width(400);
    bind_fit_policy(&mut container, &view);

    assert_eq!(view.lock().unwrap().stretch(), Some(Stretch::Uniform));
    assert_eq!(container.width().observer_count(), 1);
}

#[test]
fn width_changes_recompute_the_decision() {
    let mut container = Container::new(300.0);
    let view = view_with_native_width(400);
    bind_fit_policy(&mut container, &view);

    container.set_width(500.0);
    assert_eq!(view.lock().unwrap().stretch(), Some(Stretch::None));

    container.set_width(400.0); // equality case
    assert_eq!(view.lock().unwrap().stretch(), Some(Stretch::Uniform));

    // Spurious notification with an unchanged width is harmless.
    container.set_width(400.0);
    assert_eq!(view.lock().unwrap().stretch(), Some(Stretch::Uniform));
    assert_eq!(container.width().observer_count(), 1);
}

#[test]
fn rebinding_the_same_pair_keeps_one_subscription() {
    let mut container = Container::new(300.0);
    let view = view_with_native_width(400);
    bind_fit_policy(&mut container, &view);
    bind_fit_policy(&mut container, &view);
    assert_eq!(container.width().observer_count(), 1);

    // The refresh path still applies the current decision.
    view.lock()
        .unwrap()
        .set_source(decode_image(&png_bytes(100, 1)).unwrap());
    bind_fit_policy(&mut container, &view);
    assert_eq!(view.lock().unwrap().stretch(), Some(Stretch::None));
}

#[test]
fn dropped_view_unsubscribes_on_next_notification() {
    let mut container = Container::new(300.0);
    let view = view_with_native_width(400);
    bind_fit_policy(&mut container, &view);
    assert_eq!(container.width().observer_count(), 1);

    drop(view);
    container.set_width(320.0);
    assert_eq!(container.width().observer_count(), 0);
}

#[tokio::test]
async fn set_image_source_loads_and_binds() {
    let uri = url::Url::parse("https://cdn.example/card.png").unwrap();
    let mut resolver = InMemoryResolver::new();
    resolver.insert(&uri, png_bytes(400, 10));

    let view = ImageView::shared();
    let container = Container::shared(300.0);
    set_image_source(
        std::sync::Arc::downgrade(&view),
        std::sync::Arc::downgrade(&container),
        &uri,
        &resolver,
    )
    .await;

    let guard = view.lock().unwrap();
    assert_eq!(guard.native_width_px(), Some(400));
    assert_eq!(guard.stretch(), Some(Stretch::Uniform));
    drop(guard);
    assert_eq!(container.lock().unwrap().width().observer_count(), 1);
}

#[tokio::test]
async fn set_image_source_skips_unavailable_source() {
    let uri = url::Url::parse("https://cdn.example/missing.png").unwrap();
    let resolver = InMemoryResolver::new();

    let view = ImageView::shared();
    let container = Container::shared(300.0);
    set_image_source(
        std::sync::Arc::downgrade(&view),
        std::sync::Arc::downgrade(&container),
        &uri,
        &resolver,
    )
    .await;

    assert!(view.lock().unwrap().source().is_none());
    assert!(view.lock().unwrap().stretch().is_none());
    assert_eq!(container.lock().unwrap().width().observer_count(), 0);
}

#[tokio::test]
async fn set_image_source_is_a_noop_against_a_dropped_view() {
    let uri = url::Url::parse("https://cdn.example/card.png").unwrap();
    let mut resolver = InMemoryResolver::new();
    resolver.insert(&uri, png_bytes(400, 10));

    let container = Container::shared(300.0);
    let dangling = {
        let view = ImageView::shared();
        std::sync::Arc::downgrade(&view)
    };
    set_image_source(
        dangling,
        std::sync::Arc::downgrade(&container),
        &uri,
        &resolver,
    )
    .await;

    assert_eq!(container.lock().unwrap().width().observer_count(), 0);
}

#[tokio::test]
async fn background_resolves_against_configured_base() {
    let resolved = url::Url::parse("https://cdn.example/logo.png").unwrap();
    let mut resolver = InMemoryResolver::new();
    resolver.insert(&resolved, png_bytes(8, 8));

    let config = HostConfig {
        image_base_url: Some("https://cdn.example/".to_string()),
        image_sizes: ImageSizes::default(),
    };
    let container = Container::shared(300.0);
    set_background_source(
        std::sync::Arc::downgrade(&container),
        "logo.png",
        &config,
        &resolver,
    )
    .await;

    let guard = container.lock().unwrap();
    let brush = guard.background().unwrap();
    assert_eq!(brush.stretch, Stretch::UniformToFill);
    assert_eq!(brush.align_x, crate::card::model::Align::Start);
    assert_eq!(brush.align_y, crate::card::model::Align::Start);
    assert_eq!(brush.image.width, 8);
}

#[tokio::test]
async fn unresolvable_background_is_never_set() {
    let resolver = InMemoryResolver::new();
    let config = HostConfig::default();
    let container = Container::shared(300.0);
    set_background_source(
        std::sync::Arc::downgrade(&container),
        "../logo.png",
        &config,
        &resolver,
    )
    .await;

    assert!(container.lock().unwrap().background().is_none());
}

#[test]
fn size_presets_pin_fixed_squares() {
    let sizes = ImageSizes {
        small: 40,
        medium: 80,
        large: 160,
    };

    let mut view = ImageView::new();
    apply_size_preset(&mut view, SizePreset::Small, &sizes);
    assert_eq!(view.fixed_size(), Some((40.0, 40.0)));

    let mut view = ImageView::new();
    apply_size_preset(&mut view, SizePreset::Large, &sizes);
    assert_eq!(view.fixed_size(), Some((160.0, 160.0)));
}

#[test]
fn auto_and_stretch_presets_keep_content_sizing() {
    let sizes = ImageSizes::default();
    for preset in [SizePreset::Auto, SizePreset::Stretch] {
        let mut view = ImageView::new();
        apply_size_preset(&mut view, preset, &sizes);
        assert_eq!(view.stretch(), Some(Stretch::Uniform));
        assert_eq!(view.fixed_size(), None);
    }
}
