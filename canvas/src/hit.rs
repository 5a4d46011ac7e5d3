#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::consts::HANDLE_SIZE_PX;
use crate::doc::DesignState;
use crate::element::{DesignElement, ElementId};
use crate::input::ToolMode;
use crate::viewport::Point;

/// One of the four corner grab points of the selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    Nw,
    Ne,
    Sw,
    Se,
}

impl Handle {
    pub const ALL: [Self; 4] = [Self::Nw, Self::Ne, Self::Sw, Self::Se];

    #[must_use]
    pub fn moves_left_edge(self) -> bool {
        matches!(self, Self::Nw | Self::Sw)
    }

    #[must_use]
    pub fn moves_top_edge(self) -> bool {
        matches!(self, Self::Nw | Self::Ne)
    }

    /// CSS cursor shown over this handle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Nw | Self::Se => "nwse-resize",
            Self::Ne | Self::Sw => "nesw-resize",
        }
    }

    /// Canvas-space corner of `element` this handle sits on.
    #[must_use]
    pub fn corner(self, element: &DesignElement) -> Point {
        let x = if self.moves_left_edge() { element.position.x } else { element.position.x + element.size.width };
        let y = if self.moves_top_edge() { element.position.y } else { element.position.y + element.size.height };
        Point::new(x, y)
    }

    /// Square grab area centered on the corner, as `(left, top, side)`.
    #[must_use]
    pub fn rect(self, element: &DesignElement) -> (f64, f64, f64) {
        let corner = self.corner(element);
        let half = HANDLE_SIZE_PX / 2.0;
        (corner.x - half, corner.y - half, HANDLE_SIZE_PX)
    }
}

/// What a canvas-space point landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A corner handle of the selected element.
    Handle(ElementId, Handle),
    /// The body of an element.
    Element(ElementId),
    /// Empty canvas.
    Background,
}

/// Resolve which part of the document is under `pt` (canvas space).
///
/// Handles exist only for the selected element in select mode and are tested
/// first. Elements are then tested top to bottom, with the selected element
/// treated as topmost since it is rendered above everything else.
#[must_use]
pub fn hit_test(pt: Point, state: &DesignState) -> Hit {
    let selected = state
        .selected_element_id
        .and_then(|id| state.elements.iter().find(|el| el.id == id));

    if let Some(el) = selected {
        if state.tool_mode == ToolMode::Select {
            for handle in Handle::ALL {
                let (left, top, side) = handle.rect(el);
                if pt.x >= left && pt.x <= left + side && pt.y >= top && pt.y <= top + side {
                    return Hit::Handle(el.id, handle);
                }
            }
        }
        if el.contains(pt.x, pt.y) {
            return Hit::Element(el.id);
        }
    }

    state
        .elements
        .iter()
        .rev()
        .find(|el| el.contains(pt.x, pt.y))
        .map_or(Hit::Background, |el| Hit::Element(el.id))
}
