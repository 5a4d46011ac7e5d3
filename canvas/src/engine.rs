use tracing::debug;

use crate::consts::{DRAG_THRESHOLD_PX, SHAPE_PLACEMENT_OFFSET, TEXT_PLACEMENT_OFFSET_X, TEXT_PLACEMENT_OFFSET_Y};
use crate::doc::{DesignStore, ElementPatch, LoadedProject};
use crate::element::{DesignElement, ElementId, Position};
use crate::hit::{Hit, hit_test};
use crate::input::{Gesture, Key, ToolMode, resize_box};
use crate::viewport::{Point, Viewport};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Changes reported back to the host after an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ElementCreated(DesignElement),
    ElementUpdated { id: ElementId, patch: ElementPatch },
    ElementDeleted { id: ElementId },
    SelectionChanged(Option<ElementId>),
}

/// Pointer interaction engine.
///
/// Owns the document store and translates raw pointer and keyboard events
/// into store transitions. Gesture tracking lives here, outside the
/// document, so the document is serializable at any moment. Position and
/// size updates stream on every move; nothing is batched until release.
#[derive(Debug, Default)]
pub struct Engine {
    pub store: DesignStore,
    pub viewport: Viewport,
    pub gesture: Gesture,
    /// Set once a drag travels past the threshold; swallows the trailing
    /// click. Cleared by [`Engine::on_tick`] after release.
    dragged: bool,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine over an existing store.
    #[must_use]
    pub fn with_store(store: DesignStore) -> Self {
        Self { store, ..Self::default() }
    }

    /// Update the client-space origin of the canvas.
    pub fn set_viewport(&mut self, origin_x: f64, origin_y: f64) {
        self.viewport = Viewport::new(origin_x, origin_y);
    }

    // --- Input events ---

    /// Pointer pressed at a client-space point.
    pub fn on_pointer_down(&mut self, client: Point) -> Vec<Action> {
        let pt = self.viewport.client_to_canvas(client);
        match hit_test(pt, self.store.state()) {
            Hit::Handle(id, handle) => {
                let Some(el) = self.store.element(&id) else {
                    return Vec::new();
                };
                debug!(%id, ?handle, "resize started");
                self.gesture = Gesture::Resizing {
                    id,
                    handle,
                    start_pointer: client,
                    start_size: el.size,
                    start_position: el.position,
                };
                Vec::new()
            }
            Hit::Element(id) => {
                if self.store.state().tool_mode != ToolMode::Select {
                    return Vec::new();
                }
                let Some(start_position) = self.store.element(&id).map(|el| el.position) else {
                    return Vec::new();
                };
                let actions = self.select(Some(id));
                debug!(%id, "drag started");
                self.gesture = Gesture::Dragging { id, start_pointer: client, start_position };
                self.dragged = false;
                actions
            }
            Hit::Background => self.press_background(pt),
        }
    }

    fn press_background(&mut self, pt: Point) -> Vec<Action> {
        let state = self.store.state();
        let id = match state.tool_mode {
            ToolMode::AddText => {
                let at = Position::from(pt).offset(-TEXT_PLACEMENT_OFFSET_X, -TEXT_PLACEMENT_OFFSET_Y);
                self.store.add_text_element(at)
            }
            ToolMode::AddShape => {
                let kind = state.active_shape_kind;
                let at = Position::from(pt).offset(-SHAPE_PLACEMENT_OFFSET, -SHAPE_PLACEMENT_OFFSET);
                self.store.add_shape_element(at, kind)
            }
            ToolMode::Select | ToolMode::ColorPicker => return self.select(None),
        };
        let mut actions = Vec::with_capacity(2);
        if let Some(el) = self.store.element(&id) {
            actions.push(Action::ElementCreated(el.clone()));
        }
        actions.push(Action::SelectionChanged(Some(id)));
        actions
    }

    /// Pointer moved to a client-space point.
    pub fn on_pointer_move(&mut self, client: Point) -> Vec<Action> {
        let (id, patch) = match self.gesture {
            Gesture::Idle => return Vec::new(),
            Gesture::Dragging { id, start_pointer, start_position } => {
                let dx = client.x - start_pointer.x;
                let dy = client.y - start_pointer.y;
                if dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX {
                    self.dragged = true;
                }
                (id, ElementPatch::position(start_position.offset(dx, dy)))
            }
            Gesture::Resizing { id, handle, start_pointer, start_size, start_position } => {
                let dx = client.x - start_pointer.x;
                let dy = client.y - start_pointer.y;
                let (position, size) = resize_box(handle, start_position, start_size, dx, dy);
                (id, ElementPatch::geometry(position, size))
            }
        };
        if self.store.update_element(&id, &patch) {
            vec![Action::ElementUpdated { id, patch }]
        } else {
            Vec::new()
        }
    }

    /// Pointer released anywhere. Ends any gesture; a drag keeps suppressing
    /// clicks until the next tick.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if let Some(id) = self.gesture.element_id() {
            debug!(%id, dragged = self.dragged, "gesture ended");
        }
        self.gesture = Gesture::Idle;
        Vec::new()
    }

    /// One host tick after release: stop suppressing clicks.
    pub fn on_tick(&mut self) -> Vec<Action> {
        if self.gesture == Gesture::Idle {
            self.dragged = false;
        }
        Vec::new()
    }

    /// Click (press and release without a drag) at a client-space point.
    pub fn on_click(&mut self, client: Point) -> Vec<Action> {
        if self.dragged || self.store.state().tool_mode != ToolMode::Select {
            return Vec::new();
        }
        let pt = self.viewport.client_to_canvas(client);
        match hit_test(pt, self.store.state()) {
            Hit::Element(id) | Hit::Handle(id, _) => self.select(Some(id)),
            Hit::Background => Vec::new(),
        }
    }

    /// Key pressed. `editing_text` is true while focus is in a text input,
    /// where delete keys belong to the input.
    pub fn on_key_down(&mut self, key: &Key, editing_text: bool) -> Vec<Action> {
        if !key.is_delete() || editing_text {
            return Vec::new();
        }
        let Some(id) = self.store.delete_selected() else {
            return Vec::new();
        };
        if self.gesture.element_id() == Some(id) {
            self.gesture = Gesture::Idle;
        }
        vec![Action::ElementDeleted { id }, Action::SelectionChanged(None)]
    }

    // --- Document lifecycle ---

    /// Replace the document with a loaded project and drop any gesture.
    pub fn load_project(&mut self, project: LoadedProject) {
        self.store.load_project(project);
        self.gesture = Gesture::Idle;
        self.dragged = false;
    }

    /// Start a new design and drop any gesture. Returns the new project id.
    pub fn reset_design(&mut self) -> String {
        self.gesture = Gesture::Idle;
        self.dragged = false;
        self.store.reset_design()
    }

    // --- Queries ---

    /// The selected element id, when it resolves.
    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.store.selected_element_id()
    }

    /// Whether the current or just-finished press counted as a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragged
    }

    /// CSS cursor for the pointer at a client-space point.
    #[must_use]
    pub fn cursor_at(&self, client: Point) -> &'static str {
        let state = self.store.state();
        match state.tool_mode {
            ToolMode::AddText => return "text",
            ToolMode::AddShape => return "crosshair",
            ToolMode::ColorPicker => return "default",
            ToolMode::Select => {}
        }
        let pt = self.viewport.client_to_canvas(client);
        match hit_test(pt, state) {
            Hit::Handle(_, handle) => handle.cursor(),
            Hit::Element(id) if state.selected_element_id == Some(id) => "move",
            Hit::Element(_) => "pointer",
            Hit::Background => "default",
        }
    }

    fn select(&mut self, id: Option<ElementId>) -> Vec<Action> {
        if self.store.state().selected_element_id == id {
            return Vec::new();
        }
        self.store.select_element(id);
        vec![Action::SelectionChanged(id)]
    }
}
