//! Input model: tool modes, keys, and the gesture state machine.
//!
//! `ToolMode` is document state: it decides how a press on the canvas is
//! interpreted. `Gesture` is not: it is the drag or resize in progress
//! between pointer-down and pointer-up, carrying the snapshots needed to
//! compute each move from the gesture start rather than from the last event.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::element::{ElementId, Position, Size};
use crate::hit::Handle;
use crate::viewport::Point;

/// How pointer input on the canvas is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolMode {
    /// Select, drag and resize existing elements (default).
    #[default]
    Select,
    /// Place a text element on the next background press.
    AddText,
    /// Place a shape of the active kind on the next background press.
    AddShape,
    /// Editing colors; background presses only clear the selection.
    ColorPicker,
}

impl ToolMode {
    /// Whether this mode places a new element on a background press.
    #[must_use]
    pub fn is_placement(self) -> bool {
        matches!(self, Self::AddText | Self::AddShape)
    }
}

/// A keyboard key as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this key removes the selected element.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }
}

/// The gesture in progress between pointer-down and pointer-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    /// No gesture; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Moving an element with the pointer.
    Dragging {
        id: ElementId,
        /// Client-space pointer position at pointer-down.
        start_pointer: Point,
        /// Element position at pointer-down.
        start_position: Position,
    },
    /// Resizing an element by one of its corner handles.
    Resizing {
        id: ElementId,
        handle: Handle,
        /// Client-space pointer position at pointer-down.
        start_pointer: Point,
        start_size: Size,
        start_position: Position,
    },
}

impl Gesture {
    /// The element the gesture acts on, if any.
    #[must_use]
    pub fn element_id(&self) -> Option<ElementId> {
        match self {
            Self::Idle => None,
            Self::Dragging { id, .. } | Self::Resizing { id, .. } => Some(*id),
        }
    }
}

/// Box produced by dragging `handle` by `(dx, dy)` from a start box.
///
/// The corner opposite the handle stays fixed. Each dimension is floored at
/// the minimum element size, and the position is shifted by what the clamped
/// size actually changed so the fixed corner never drifts.
#[must_use]
pub fn resize_box(handle: Handle, start_position: Position, start_size: Size, dx: f64, dy: f64) -> (Position, Size) {
    let raw_width = if handle.moves_left_edge() { start_size.width - dx } else { start_size.width + dx };
    let raw_height = if handle.moves_top_edge() { start_size.height - dy } else { start_size.height + dy };
    let size = Size::new(raw_width, raw_height).clamped();

    let mut position = start_position;
    if handle.moves_left_edge() {
        position.x = start_position.x + (start_size.width - size.width);
    }
    if handle.moves_top_edge() {
        position.y = start_position.y + (start_size.height - size.height);
    }
    (position, size)
}
