use flare_canvas::{Circle, Rect, SurfaceId, SurfaceRegistry};
use flare_testsuite::{DrawCall, FakeDocument, DEFAULT_CANVAS_WIDTH};
use pretty_assertions::assert_eq;
use rstest::rstest;

const ONE: SurfaceId = SurfaceId::new(1);

#[test]
fn ensure_surface_sizes_and_caches_the_canvas() {
    let document = FakeDocument::new();
    let canvas = document.add_canvas("canvas-1");
    let mut registry = SurfaceRegistry::new(document.clone());

    assert!(registry.ensure_surface(ONE, 200, 100));

    assert_eq!(canvas.size(), (200, 100));
    assert!(registry.contains(ONE));
    assert!(registry.surface(ONE).is_some_and(|surface| surface.same_as(&canvas)));
    assert_eq!(document.lookups(), ["canvas-1"]);

    // Draw calls go through the cached surface without looking it up again.
    registry.fill_rect(ONE, Rect::new(0.0, 0.0, 1.0, 1.0), "red");
    assert_eq!(document.lookups().len(), 1);
}

#[rstest]
#[case::missing(None)]
#[case::not_a_canvas(Some("element"))]
#[case::no_context(Some("lost"))]
fn ensure_surface_reports_failure_without_registering(#[case] element: Option<&str>) {
    let document = FakeDocument::new();
    match element {
        Some("element") => document.add_element("canvas-1"),
        Some(_) => document.add_canvas_without_context("canvas-1"),
        None => {}
    }
    let mut registry = SurfaceRegistry::new(document);

    assert!(!registry.ensure_surface(ONE, 10, 10));
    assert!(!registry.contains(ONE));
    assert!(registry.is_empty());
}

#[test]
fn ensure_surface_reinitializes_existing_entry() {
    let document = FakeDocument::new();
    let canvas = document.add_canvas("canvas-1");
    let mut registry = SurfaceRegistry::new(document.clone());

    assert!(registry.ensure_surface(ONE, 10, 10));
    assert!(registry.ensure_surface(ONE, 20, 30));

    assert_eq!(canvas.size(), (20, 30));
    assert_eq!(registry.len(), 1);
    assert_eq!(document.lookups(), ["canvas-1", "canvas-1"]);
}

#[test]
fn failed_reinitialization_keeps_previous_entry() {
    let document = FakeDocument::new();
    let canvas = document.add_canvas("canvas-1");
    let mut registry = SurfaceRegistry::new(document.clone());

    assert!(registry.ensure_surface(ONE, 200, 100));
    document.remove("canvas-1");
    assert!(!registry.ensure_surface(ONE, 50, 50));

    assert!(registry.contains(ONE));
    assert_eq!(canvas.size(), (200, 100));
}

#[test]
fn surface_key_uses_configured_prefix() {
    let document = FakeDocument::new();
    document.add_canvas("surface-7");
    let mut registry = SurfaceRegistry::with_key_prefix(document.clone(), "surface-");

    assert_eq!(registry.surface_key(SurfaceId::new(7)), "surface-7");
    assert_eq!(registry.surface_key(SurfaceId::new(-3)), "surface--3");
    assert!(registry.ensure_surface(SurfaceId::new(7), 1, 1));

    registry.set_key_prefix("canvas-");
    assert!(!registry.ensure_surface(SurfaceId::new(8), 1, 1));

    assert_eq!(document.lookups(), ["surface-7", "canvas-8"]);
    assert!(registry.contains(SurfaceId::new(7)));
}

#[test]
fn operations_on_unregistered_ids_do_nothing() {
    let document = FakeDocument::new();
    let canvas = document.add_canvas("canvas-1");
    let mut registry = SurfaceRegistry::new(document);

    registry.clear_area(ONE, 10.0, 10.0);
    registry.fill_rect(ONE, Rect::new(0.0, 0.0, 5.0, 5.0), "red");
    registry.fill_circle(ONE, Circle::new(5.0, 5.0, 2.0), "blue");
    registry.resize_surface(ONE, 40.0, 40.0);

    assert!(canvas.calls().is_empty());
    assert_eq!(canvas.size(), (300, 150));
}

#[test]
fn resize_surface_syncs_presentation_size_when_styled() {
    let document = FakeDocument::new();
    let styled = document.add_styled_canvas("canvas-1", 640, 480);
    let plain = document.add_canvas("canvas-2");
    let mut registry = SurfaceRegistry::new(document);

    assert!(registry.ensure_surface(ONE, 100, 100));
    assert!(registry.ensure_surface(SurfaceId::new(2), 100, 100));

    registry.resize_surface(ONE, 320.0, 240.0);
    registry.resize_surface(SurfaceId::new(2), 320.0, 240.0);

    assert_eq!(styled.size(), (320, 240));
    assert_eq!(styled.presentation_size(), Some((320, 240)));
    assert_eq!(plain.size(), (320, 240));
    assert_eq!(plain.presentation_size(), None);
    assert!(!plain
        .calls()
        .iter()
        .any(|call| matches!(call, DrawCall::SyncPresentationSize { .. })));
}

#[rstest]
#[case(300.7, 150.2, (300, 150))]
#[case(-5.0, 20.0, (DEFAULT_CANVAS_WIDTH, 20))]
#[case(20.0, -0.5, (20, 0))]
#[case(4_294_967_306.0, 1.0, (10, 1))]
#[case(f64::NAN, 1.0, (0, 1))]
fn resize_surface_converts_to_pixel_extents(#[case] width: f64, #[case] height: f64, #[case] expected: (u32, u32)) {
    let document = FakeDocument::new();
    let canvas = document.add_canvas("canvas-1");
    let mut registry = SurfaceRegistry::new(document);

    assert!(registry.ensure_surface(ONE, 10, 10));
    registry.resize_surface(ONE, width, height);

    assert_eq!(canvas.size(), expected);
}

#[test]
fn release_forgets_entries() {
    let document = FakeDocument::new();
    document.add_canvas("canvas-1");
    document.add_canvas("canvas-2");
    let mut registry = SurfaceRegistry::new(document);

    assert!(registry.ensure_surface(ONE, 1, 1));
    assert!(registry.ensure_surface(SurfaceId::new(2), 1, 1));

    assert!(registry.release(ONE).is_some());
    assert!(registry.release(ONE).is_none());
    assert_eq!(registry.len(), 1);

    registry.release_all();
    assert!(registry.is_empty());
}
