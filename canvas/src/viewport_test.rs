#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_viewport_is_identity() {
    let vp = Viewport::default();
    let p = vp.client_to_canvas(Point::new(12.0, 34.0));
    assert_eq!(p, Point::new(12.0, 34.0));
}

#[test]
fn client_to_canvas_subtracts_origin() {
    let vp = Viewport::new(100.0, 50.0);
    let p = vp.client_to_canvas(Point::new(130.0, 70.0));
    assert_eq!(p.x, 30.0);
    assert_eq!(p.y, 20.0);
}

#[test]
fn canvas_to_client_inverts_client_to_canvas() {
    let vp = Viewport::new(-8.5, 240.0);
    let client = Point::new(17.25, 300.0);
    let back = vp.canvas_to_client(vp.client_to_canvas(client));
    assert_eq!(back, client);
}

#[test]
fn point_converts_to_position() {
    let pos: Position = Point::new(3.0, 4.0).into();
    assert_eq!(pos, Position::new(3.0, 4.0));
}
