//! End-to-end synchronization loop against the in-memory canvas: selection,
//! optimistic edits, canvas-originated notifications, and export.

use std::cell::RefCell;
use std::rc::Rc;

use vellum_canvas::{Canvas, MemoryCanvas, NodeId};
use vellum_inspector::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .try_init();
}

fn styled_node(canvas: &MemoryCanvas, pairs: &[(&str, &str)]) -> NodeId {
    canvas.insert_node(
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
    )
}

/// Wire an inspector to a canvas the way a host application would: every
/// canvas-originated change triggers a wholesale re-extraction.
fn wired_inspector(canvas: &Rc<MemoryCanvas>) -> Rc<RefCell<StyleInspector>> {
    let inspector = Rc::new(RefCell::new(StyleInspector::new()));

    let canvas_for_slot = Rc::clone(canvas);
    let inspector_for_slot = Rc::clone(&inspector);
    canvas.events().changed.connect(move |_change| {
        inspector_for_slot
            .borrow_mut()
            .sync_from_canvas(canvas_for_slot.as_ref());
    });

    inspector
}

#[test]
fn canvas_notifications_replace_optimistic_writes() {
    init_tracing();

    let canvas = Rc::new(MemoryCanvas::new());
    let node = styled_node(&canvas, &[("display", "block"), ("font-size", "16px")]);
    let inspector = wired_inspector(&canvas);

    canvas.select(Some(node));
    inspector.borrow_mut().sync_from_canvas(canvas.as_ref());
    assert_eq!(inspector.borrow().snapshot().raw("font-size"), Some("16px"));

    // Optimistic local write through the inspector.
    inspector
        .borrow_mut()
        .edit(canvas.as_ref(), "font-size", ControlValue::Number(24.0));
    assert_eq!(inspector.borrow().snapshot().raw("font-size"), Some("24px"));

    // A divergent edit through the canvas's own UI: its notification must
    // win over the optimistic value, no merging.
    canvas.set_style_direct(node, "font-size", "30px").unwrap();
    assert_eq!(inspector.borrow().snapshot().raw("font-size"), Some("30px"));
}

#[test]
fn removing_the_selected_node_empties_the_snapshot() {
    init_tracing();

    let canvas = Rc::new(MemoryCanvas::new());
    let node = styled_node(&canvas, &[("width", "240px")]);
    let inspector = wired_inspector(&canvas);

    canvas.select(Some(node));
    inspector.borrow_mut().sync_from_canvas(canvas.as_ref());
    assert_eq!(inspector.borrow().snapshot().raw("width"), Some("240px"));

    // The tree-change notification re-extracts; with the node gone the
    // canvas reports no selection and the snapshot collapses to empty.
    canvas.remove_node(node);
    assert!(inspector.borrow().snapshot().is_empty());
    assert_eq!(inspector.borrow().selection(), None);
}

#[test]
fn flex_panel_follows_the_selected_node() {
    init_tracing();

    let canvas = Rc::new(MemoryCanvas::new());
    let flex_node = styled_node(&canvas, &[("display", "flex"), ("align-items", "center")]);
    let block_node = styled_node(&canvas, &[("display", "block")]);
    let inspector = wired_inspector(&canvas);

    canvas.select(Some(flex_node));
    inspector.borrow_mut().sync_from_canvas(canvas.as_ref());
    {
        let inspector = inspector.borrow();
        assert!(inspector.panels().flex_controls);
        assert_eq!(inspector.flex_state().align_items, "center");
        assert_eq!(inspector.flex_state().direction, "row");
    }

    canvas.select(Some(block_node));
    inspector.borrow_mut().sync_from_canvas(canvas.as_ref());
    assert!(!inspector.borrow().panels().flex_controls);
}

#[test]
fn export_reflects_live_values_and_defaults() {
    init_tracing();

    let canvas = Rc::new(MemoryCanvas::new());
    let node = styled_node(&canvas, &[("width", "240px"), ("color", "#336699")]);
    let inspector = wired_inspector(&canvas);

    canvas.select(Some(node));
    inspector.borrow_mut().sync_from_canvas(canvas.as_ref());
    inspector
        .borrow_mut()
        .edit(canvas.as_ref(), "opacity", ControlValue::Number(0.8));

    let text = css_text(inspector.borrow().snapshot());
    assert!(text.contains("width: 240px;"));
    assert!(text.contains("color: #336699;"));
    assert!(text.contains("opacity: 0.8;"));
    // Registry defaults fill the gaps deterministically.
    assert!(text.contains("display: block;"));
    assert_ne!(text, NO_STYLES);
}

#[test]
fn ready_notification_fires_once() {
    init_tracing();

    let canvas = MemoryCanvas::new();
    let fired = Rc::new(RefCell::new(0));

    let counter = Rc::clone(&fired);
    canvas.events().ready.connect(move |()| {
        *counter.borrow_mut() += 1;
    });

    canvas.events().notify_ready();
    canvas.events().notify_ready();

    assert!(canvas.events().is_ready());
    assert_eq!(*fired.borrow(), 1);
}
