use flare_canvas::{Bridge, Config, NULL_HANDLE};
use flare_testsuite::FakeDocument;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn bridge_with_canvases(keys: &[&str]) -> (Bridge<FakeDocument>, FakeDocument) {
    let document = FakeDocument::new();
    for key in keys {
        document.add_canvas(key);
    }
    (Bridge::new(document.clone()), document)
}

#[test]
fn null_handle_is_ignored() {
    let document = FakeDocument::new();
    let canvas = document.add_canvas("canvas-1");
    let mut bridge = Bridge::new(document);
    let handle = bridge.create(1, 10, 10);
    canvas.take_calls();

    bridge.clear(NULL_HANDLE);
    bridge.draw_rectangle(NULL_HANDLE, 0.0, 0.0, 10.0, 10.0, "red");
    bridge.draw_circle(NULL_HANDLE, 5.0, 5.0, 5.0, "red");
    bridge.resize(NULL_HANDLE, 100.0, 100.0);
    bridge.destroy(NULL_HANDLE);

    assert!(canvas.calls().is_empty());
    assert_eq!(canvas.size(), (10, 10));
    assert!(!bridge.is_bound(NULL_HANDLE));
    assert_eq!(bridge.width(NULL_HANDLE), 0.0);
    assert_eq!(bridge.height(NULL_HANDLE), 0.0);
    assert_eq!(bridge.live_renderers(), 1);
    assert!(bridge.is_bound(handle));
}

#[test]
fn missing_surface_yields_live_unbound_handle() {
    let (mut bridge, document) = bridge_with_canvases(&["canvas-1"]);

    let handle = bridge.create(9999, 100, 100);

    assert_ne!(handle, NULL_HANDLE);
    assert!(!bridge.is_bound(handle));
    assert_eq!(bridge.width(handle), 100.0);

    bridge.draw_rectangle(handle, 0.0, 0.0, 50.0, 50.0, "red");
    bridge.draw_circle(handle, 10.0, 10.0, 5.0, "red");
    bridge.clear(handle);
    bridge.resize(handle, 20.0, 20.0);

    assert_eq!(bridge.width(handle), 20.0);
    assert!(bridge.registry().borrow().is_empty());
    assert_eq!(document.lookups(), ["canvas-9999"]);
}

#[test]
fn handles_are_never_null() {
    let (mut bridge, _document) = bridge_with_canvases(&[]);

    let handles: Vec<_> = (0..32).map(|id| bridge.create(id, 1, 1)).collect();

    assert!(handles.iter().all(|handle| *handle != NULL_HANDLE));
    assert_eq!(bridge.live_renderers(), 32);
}

#[test]
fn destroyed_handle_is_rejected() {
    let document = FakeDocument::new();
    let canvas = document.add_canvas("canvas-1");
    let mut bridge = Bridge::new(document);

    let stale = bridge.create(1, 10, 10);
    bridge.destroy(stale);
    canvas.take_calls();

    bridge.draw_rectangle(stale, 0.0, 0.0, 10.0, 10.0, "red");
    bridge.resize(stale, 50.0, 50.0);
    bridge.destroy(stale);

    assert!(canvas.calls().is_empty());
    assert!(!bridge.is_bound(stale));
    assert_eq!(bridge.width(stale), 0.0);
    assert_eq!(bridge.live_renderers(), 0);

    // The registry entry outlives the handle.
    assert!(bridge.registry().borrow().contains(1.into()));
}

#[test]
fn reused_slot_does_not_revive_stale_handle() {
    let document = FakeDocument::new();
    let canvas = document.add_canvas("canvas-1");
    let mut bridge = Bridge::new(document);

    let stale = bridge.create(1, 10, 10);
    bridge.destroy(stale);
    let fresh = bridge.create(1, 10, 10);

    assert_ne!(stale, fresh);

    bridge.draw_rectangle(stale, 0.0, 0.0, 10.0, 10.0, "red");
    assert_eq!(canvas.painted_pixels(), 0);

    bridge.draw_rectangle(fresh, 0.0, 0.0, 10.0, 10.0, "red");
    assert_eq!(canvas.painted_pixels(), 100);
}

#[test]
fn exhausted_table_returns_null_handle() {
    let document = FakeDocument::new();
    let config = Config {
        max_renderers: 2,
        ..Config::default()
    };
    let mut bridge = Bridge::with_config(document.clone(), config);

    let first = bridge.create(1, 1, 1);
    let second = bridge.create(2, 1, 1);
    assert_eq!(bridge.create(3, 1, 1), NULL_HANDLE);

    // No surface lookup happens for a renderer that couldn't be allocated.
    assert_eq!(document.lookups(), ["canvas-1", "canvas-2"]);

    bridge.destroy(first);
    let third = bridge.create(3, 1, 1);

    assert_ne!(third, NULL_HANDLE);
    assert_ne!(third, first);
    assert_ne!(third, second);
}

#[test]
fn custom_key_prefix_is_used_for_lookups() {
    let document = FakeDocument::new();
    document.add_canvas("flare-surface-5");
    let config = Config {
        key_prefix: "flare-surface-".to_owned(),
        ..Config::default()
    };
    let mut bridge = Bridge::with_config(document, config);

    let handle = bridge.create(5, 1, 1);

    assert!(bridge.is_bound(handle));
}

#[test]
fn release_surface_unbinds_handles() {
    let (mut bridge, _document) = bridge_with_canvases(&["canvas-1"]);
    let handle = bridge.create(1, 10, 10);

    assert!(bridge.release_surface(1));
    assert!(!bridge.release_surface(1));

    assert!(!bridge.is_bound(handle));
    assert_eq!(bridge.width(handle), 10.0);
}

#[test]
fn teardown_destroys_handles_and_surfaces() {
    let (mut bridge, _document) = bridge_with_canvases(&["canvas-1", "canvas-2"]);
    let handles = [bridge.create(1, 10, 10), bridge.create(2, 10, 10)];

    bridge.teardown();

    assert_eq!(bridge.live_renderers(), 0);
    assert!(bridge.registry().borrow().is_empty());
    for handle in handles {
        assert!(!bridge.is_bound(handle));
        assert_eq!(bridge.width(handle), 0.0);
    }
}

#[rstest]
#[case(0x0001_0000)]
#[case(0x0005_0000)]
#[case(0xFFFF_FFFF)]
fn unknown_tokens_are_ignored(#[case] token: u32) {
    let document = FakeDocument::new();
    let canvas = document.add_canvas("canvas-1");
    let mut bridge = Bridge::new(document);
    let destroyed = bridge.create(1, 10, 10);
    assert_eq!(destroyed, 0x0001_0000);
    bridge.destroy(destroyed);
    assert_eq!(bridge.create(1, 10, 10), 0x0002_0000);
    canvas.take_calls();

    bridge.clear(token);
    bridge.draw_circle(token, 5.0, 5.0, 5.0, "red");
    bridge.resize(token, 1.0, 1.0);

    assert!(canvas.calls().is_empty());
}

#[test]
fn recycled_slot_never_revives_destroyed_handle() {
    let document = FakeDocument::new();
    let canvas = document.add_canvas("canvas-1");
    let mut bridge = Bridge::new(document);

    let stale = bridge.create(1, 10, 10);
    bridge.destroy(stale);

    // Exhaust every generation of the first slot.
    for _ in 1..u16::MAX {
        let handle = bridge.create(1, 10, 10);
        assert_eq!(handle & 0xFFFF, stale & 0xFFFF);
        bridge.destroy(handle);
    }

    let fresh = bridge.create(1, 10, 10);

    assert_ne!(fresh, stale);
    assert_eq!(fresh, 0x0001_0001);

    bridge.draw_rectangle(stale, 0.0, 0.0, 10.0, 10.0, "red");
    assert_eq!(canvas.painted_pixels(), 0);
    assert!(!bridge.is_bound(stale));

    bridge.draw_rectangle(fresh, 0.0, 0.0, 10.0, 10.0, "red");
    assert_eq!(canvas.painted_pixels(), 100);
}
