#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::element::Position;

/// A pointer location, in client (page) or canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Position {
    fn from(pt: Point) -> Self {
        Position::new(pt.x, pt.y)
    }
}

/// Where the canvas sits on the page.
///
/// `origin_x` / `origin_y` are the client coordinates of the canvas top-left
/// corner, as reported by the host's bounding-rect query. There is no zoom:
/// one client pixel is one canvas pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(origin_x: f64, origin_y: f64) -> Self {
        Self { origin_x, origin_y }
    }

    /// Convert a client-space point to canvas-relative coordinates.
    #[must_use]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        Point { x: client.x - self.origin_x, y: client.y - self.origin_y }
    }

    /// Convert a canvas-relative point back to client coordinates.
    #[must_use]
    pub fn canvas_to_client(&self, canvas: Point) -> Point {
        Point { x: canvas.x + self.origin_x, y: canvas.y + self.origin_y }
    }
}
