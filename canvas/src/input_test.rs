#![allow(clippy::float_cmp)]

use super::*;

fn start() -> (Position, Size) {
    (Position::new(0.0, 0.0), Size::new(100.0, 100.0))
}

// =============================================================
// ToolMode / Key
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(ToolMode::default(), ToolMode::Select);
}

#[test]
fn placement_modes() {
    assert!(ToolMode::AddText.is_placement());
    assert!(ToolMode::AddShape.is_placement());
    assert!(!ToolMode::Select.is_placement());
    assert!(!ToolMode::ColorPicker.is_placement());
}

#[test]
fn tool_serde_uses_camel_case() {
    assert_eq!(serde_json::to_string(&ToolMode::AddShape).unwrap(), "\"addShape\"");
    assert_eq!(serde_json::to_string(&ToolMode::ColorPicker).unwrap(), "\"colorPicker\"");
}

#[test]
fn delete_keys() {
    assert!(Key("Delete".into()).is_delete());
    assert!(Key("Backspace".into()).is_delete());
    assert!(!Key("Escape".into()).is_delete());
    assert!(!Key("d".into()).is_delete());
}

#[test]
fn gesture_default_is_idle() {
    assert_eq!(Gesture::default(), Gesture::Idle);
    assert!(Gesture::Idle.element_id().is_none());
}

// =============================================================
// resize_box
// =============================================================

#[test]
fn se_grows_with_delta_and_keeps_position() {
    let (pos, size) = start();
    let (p, s) = resize_box(Handle::Se, pos, size, 30.0, 10.0);
    assert_eq!(s, Size::new(130.0, 110.0));
    assert_eq!(p, pos);
}

#[test]
fn se_floors_at_minimum_without_moving() {
    let (pos, size) = start();
    let (p, s) = resize_box(Handle::Se, pos, size, -90.0, -90.0);
    assert_eq!(s, Size::new(20.0, 20.0));
    assert_eq!(p, Position::new(0.0, 0.0));
}

#[test]
fn nw_shrink_keeps_bottom_right_fixed() {
    let (pos, size) = start();
    let (p, s) = resize_box(Handle::Nw, pos, size, 90.0, 90.0);
    assert_eq!(s, Size::new(20.0, 20.0));
    assert_eq!(p, Position::new(80.0, 80.0));
    assert_eq!(p.x + s.width, 100.0);
    assert_eq!(p.y + s.height, 100.0);
}

#[test]
fn nw_overshoot_uses_clamped_size_for_position() {
    let (pos, size) = start();
    let (p, s) = resize_box(Handle::Nw, pos, size, 500.0, 500.0);
    assert_eq!(s, Size::new(20.0, 20.0));
    assert_eq!(p, Position::new(80.0, 80.0));
}

#[test]
fn nw_grow_moves_top_left_out() {
    let (pos, size) = start();
    let (p, s) = resize_box(Handle::Nw, pos, size, -10.0, -20.0);
    assert_eq!(s, Size::new(110.0, 120.0));
    assert_eq!(p, Position::new(-10.0, -20.0));
}

#[test]
fn ne_keeps_bottom_left_fixed() {
    let (pos, size) = start();
    let (p, s) = resize_box(Handle::Ne, pos, size, 15.0, 40.0);
    assert_eq!(s, Size::new(115.0, 60.0));
    assert_eq!(p, Position::new(0.0, 40.0));
    assert_eq!(p.y + s.height, 100.0);
}

#[test]
fn sw_keeps_top_right_fixed() {
    let (pos, size) = start();
    let (p, s) = resize_box(Handle::Sw, pos, size, 95.0, 5.0);
    assert_eq!(s, Size::new(20.0, 105.0));
    assert_eq!(p, Position::new(80.0, 0.0));
    assert_eq!(p.x + s.width, 100.0);
}
