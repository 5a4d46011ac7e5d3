//! Scene: a render-ready description of the document.
//!
//! The host draws; this module decides what gets drawn. It reads the
//! document and produces a paint list with stacking, display text, shape
//! geometry and handle rects. It never mutates state.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::consts::{BASE_Z_INDEX, DEFAULT_BASE_COLOR, SELECTED_Z_INDEX, TINT_OPACITY};
use crate::doc::DesignState;
use crate::element::{ElementBody, ElementId, Position, ProductType, ShapeKind, Size};
use crate::hit::Handle;
use crate::input::ToolMode;
use crate::viewport::Point;

/// What to draw inside an element box.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneContent {
    Text { text: String, font_size: f64, color: String },
    Shape { kind: ShapeKind, color: String, polygon: Option<[Point; 3]> },
}

/// A corner handle to draw on the selected element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleRect {
    pub handle: Handle,
    pub left: f64,
    pub top: f64,
    pub side: f64,
}

/// One element in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub id: ElementId,
    pub position: Position,
    pub size: Size,
    pub z_index: i32,
    pub selected: bool,
    pub content: SceneContent,
    /// Empty unless the element is selected in select mode.
    pub handles: Vec<HandleRect>,
}

/// The product backdrop under all elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    pub product: ProductType,
    pub tint: String,
    pub tint_opacity: f64,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub backdrop: Backdrop,
    /// Document order; the host stacks by `z_index`.
    pub items: Vec<SceneItem>,
    /// Placement hint shown in the add-element modes.
    pub hint: Option<&'static str>,
}

/// Derive the scene for `state`.
#[must_use]
pub fn build(state: &DesignState) -> Scene {
    let select_mode = state.tool_mode == ToolMode::Select;
    let items = state
        .elements
        .iter()
        .map(|el| {
            let selected = state.selected_element_id == Some(el.id);
            let content = match &el.body {
                ElementBody::Text(text) => SceneContent::Text {
                    text: text.display_text().to_string(),
                    font_size: text.font_size,
                    color: el.color.clone(),
                },
                ElementBody::Shape(shape) => SceneContent::Shape {
                    kind: shape.shape_kind,
                    color: el.color.clone(),
                    polygon: (shape.shape_kind == ShapeKind::Triangle).then(|| triangle(el.size)),
                },
            };
            let handles = if selected && select_mode {
                Handle::ALL
                    .into_iter()
                    .map(|handle| {
                        let (left, top, side) = handle.rect(el);
                        HandleRect { handle, left, top, side }
                    })
                    .collect()
            } else {
                Vec::new()
            };
            SceneItem {
                id: el.id,
                position: el.position,
                size: el.size,
                z_index: if selected { SELECTED_Z_INDEX } else { BASE_Z_INDEX },
                selected,
                content,
                handles,
            }
        })
        .collect();

    let hint = match state.tool_mode {
        ToolMode::AddText => Some("Click anywhere to place text"),
        ToolMode::AddShape => Some("Click anywhere to place shape"),
        ToolMode::Select | ToolMode::ColorPicker => None,
    };

    Scene { backdrop: backdrop(state), items, hint }
}

fn backdrop(state: &DesignState) -> Backdrop {
    let tint_opacity = if state.base_color.eq_ignore_ascii_case(DEFAULT_BASE_COLOR) { 0.0 } else { TINT_OPACITY };
    Backdrop { product: state.product_type, tint: state.base_color.clone(), tint_opacity }
}

/// Upward triangle inscribed in a box, in box-local coordinates.
fn triangle(size: Size) -> [Point; 3] {
    [
        Point::new(size.width / 2.0, 0.0),
        Point::new(size.width, size.height),
        Point::new(0.0, size.height),
    ]
}
