#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{DesignStore, ElementPatch};

fn store_with_items() -> (DesignStore, ElementId, ElementId) {
    let mut store = DesignStore::new();
    let text = store.add_text_element(Position::new(0.0, 0.0));
    let tri = store.add_shape_element(Position::new(100.0, 100.0), ShapeKind::Triangle);
    (store, text, tri)
}

// =============================================================
// Items
// =============================================================

#[test]
fn items_follow_document_order() {
    let (store, text, tri) = store_with_items();
    let scene = build(store.state());
    let ids: Vec<_> = scene.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![text, tri]);
}

#[test]
fn selected_item_is_raised_and_has_handles() {
    let (store, text, tri) = store_with_items();
    let scene = build(store.state());
    let raised = scene.items.iter().find(|i| i.id == tri).unwrap();
    let flat = scene.items.iter().find(|i| i.id == text).unwrap();

    assert!(raised.selected);
    assert_eq!(raised.z_index, SELECTED_Z_INDEX);
    assert_eq!(raised.handles.len(), 4);
    assert!(!flat.selected);
    assert_eq!(flat.z_index, BASE_Z_INDEX);
    assert!(flat.handles.is_empty());
}

#[test]
fn handles_hidden_outside_select_mode() {
    let (mut store, _, _) = store_with_items();
    store.set_tool_mode(ToolMode::ColorPicker);
    let scene = build(store.state());
    assert!(scene.items.iter().all(|i| i.handles.is_empty()));
}

#[test]
fn handle_rects_match_corners() {
    let (store, _, tri) = store_with_items();
    let scene = build(store.state());
    let item = scene.items.iter().find(|i| i.id == tri).unwrap();
    let se = item.handles.iter().find(|h| h.handle == Handle::Se).unwrap();
    assert_eq!((se.left, se.top, se.side), (174.0, 174.0, 12.0));
}

#[test]
fn empty_text_shows_placeholder() {
    let (mut store, text, _) = store_with_items();
    store.update_element(&text, &ElementPatch::content(""));
    let scene = build(store.state());
    match &scene.items[0].content {
        SceneContent::Text { text, font_size, .. } => {
            assert_eq!(text, "Your Text");
            assert_eq!(*font_size, 20.0);
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn triangle_has_polygon_others_do_not() {
    let (mut store, _, tri) = store_with_items();
    let rect = store.add_shape_element(Position::default(), ShapeKind::Rectangle);
    let scene = build(store.state());

    let tri_item = scene.items.iter().find(|i| i.id == tri).unwrap();
    match &tri_item.content {
        SceneContent::Shape { polygon: Some(points), .. } => {
            assert_eq!(points[0], Point::new(40.0, 0.0));
            assert_eq!(points[1], Point::new(80.0, 80.0));
            assert_eq!(points[2], Point::new(0.0, 80.0));
        }
        other => panic!("expected triangle polygon, got {other:?}"),
    }
    let rect_item = scene.items.iter().find(|i| i.id == rect).unwrap();
    assert!(matches!(rect_item.content, SceneContent::Shape { polygon: None, .. }));
}

// =============================================================
// Backdrop and hint
// =============================================================

#[test]
fn white_base_has_no_tint() {
    let mut store = DesignStore::new();
    assert_eq!(build(store.state()).backdrop.tint_opacity, 0.0);
    store.set_base_color("#ffffff");
    assert_eq!(build(store.state()).backdrop.tint_opacity, 0.0);
    store.set_base_color("#EF4444");
    let backdrop = build(store.state()).backdrop;
    assert_eq!(backdrop.tint_opacity, TINT_OPACITY);
    assert_eq!(backdrop.tint, "#EF4444");
}

#[test]
fn hint_shown_only_in_placement_modes() {
    let mut store = DesignStore::new();
    assert_eq!(build(store.state()).hint, None);
    store.set_tool_mode(ToolMode::AddText);
    assert_eq!(build(store.state()).hint, Some("Click anywhere to place text"));
    store.set_tool_mode(ToolMode::AddShape);
    assert_eq!(build(store.state()).hint, Some("Click anywhere to place shape"));
}
