//! Document model: the design state and the store that owns it.
//!
//! `DesignState` is the whole document: product choice, the ordered element
//! list, selection, tool state and project identity. `DesignStore` is its only
//! writer. Every transition is a named, infallible method; invalid input is
//! clamped or ignored. Interaction code reads the state through `state()` and
//! never writes fields directly.
//!
//! Element order is paint order (later = on top). Selection does not reorder
//! elements; the scene lifts the selected element at render time instead.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::consts::DEFAULT_BASE_COLOR;
use crate::element::{DesignElement, ElementBody, ElementId, Position, ProductType, ShapeKind, Size};
use crate::input::ToolMode;

/// Name given to a fresh, never-saved document.
pub const DEFAULT_PROJECT_NAME: &str = "My Design";

/// Mint a new project identifier.
#[must_use]
pub fn mint_project_id() -> String {
    Uuid::new_v4().to_string()
}

/// The complete in-memory design for one customization session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignState {
    pub product_type: ProductType,
    /// Color tinting the product backdrop.
    pub base_color: String,
    /// Paint order: later elements are drawn on top.
    pub elements: Vec<DesignElement>,
    /// May dangle after external edits; resolve it with
    /// [`DesignStore::selected_element`].
    pub selected_element_id: Option<ElementId>,
    pub tool_mode: ToolMode,
    /// Shape used by the next add-shape placement.
    pub active_shape_kind: ShapeKind,
    pub project_name: String,
    /// `None` until the document is first saved or loaded.
    pub project_id: Option<String>,
}

impl Default for DesignState {
    fn default() -> Self {
        Self {
            product_type: ProductType::default(),
            base_color: DEFAULT_BASE_COLOR.to_string(),
            elements: Vec::new(),
            selected_element_id: None,
            tool_mode: ToolMode::default(),
            active_shape_kind: ShapeKind::default(),
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            project_id: None,
        }
    }
}

/// Sparse update for an element. Only present fields are applied.
///
/// `content` and `font_size` only apply to text elements, `shape_kind` only to
/// shapes; they are ignored for the other kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Floored at the minimum element size when applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_kind: Option<ShapeKind>,
}

impl ElementPatch {
    #[must_use]
    pub fn position(position: Position) -> Self {
        Self { position: Some(position), ..Default::default() }
    }

    #[must_use]
    pub fn size(size: Size) -> Self {
        Self { size: Some(size), ..Default::default() }
    }

    /// Move and resize in one update.
    #[must_use]
    pub fn geometry(position: Position, size: Size) -> Self {
        Self { position: Some(position), size: Some(size), ..Default::default() }
    }

    #[must_use]
    pub fn color(color: impl Into<String>) -> Self {
        Self { color: Some(color.into()), ..Default::default() }
    }

    #[must_use]
    pub fn content(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()), ..Default::default() }
    }

    #[must_use]
    pub fn font_size(font_size: f64) -> Self {
        Self { font_size: Some(font_size), ..Default::default() }
    }

    #[must_use]
    pub fn shape_kind(shape_kind: ShapeKind) -> Self {
        Self { shape_kind: Some(shape_kind), ..Default::default() }
    }

    fn apply_to(&self, element: &mut DesignElement) {
        if let Some(position) = self.position {
            element.position = position;
        }
        if let Some(size) = self.size {
            element.size = size.clamped();
        }
        if let Some(ref color) = self.color {
            element.color.clone_from(color);
        }
        match &mut element.body {
            ElementBody::Text(text) => {
                if let Some(ref content) = self.content {
                    text.content.clone_from(content);
                }
                if let Some(font_size) = self.font_size {
                    text.font_size = font_size;
                }
            }
            ElementBody::Shape(shape) => {
                if let Some(shape_kind) = self.shape_kind {
                    shape.shape_kind = shape_kind;
                }
            }
        }
    }
}

/// A document rebuilt from a persisted project record, ready to load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProject {
    pub project_id: String,
    pub name: String,
    pub product_type: ProductType,
    pub base_color: String,
    pub elements: Vec<DesignElement>,
}

/// Owner of the live document. All mutation goes through here.
#[derive(Debug, Clone, Default)]
pub struct DesignStore {
    state: DesignState,
}

impl DesignStore {
    /// A store holding a fresh default document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding an existing document.
    #[must_use]
    pub fn from_state(state: DesignState) -> Self {
        Self { state }
    }

    /// Read-only view of the whole document.
    #[must_use]
    pub fn state(&self) -> &DesignState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> DesignState {
        self.state
    }

    // --- Single-field setters ---

    pub fn set_product_type(&mut self, product_type: ProductType) {
        self.state.product_type = product_type;
    }

    pub fn set_base_color(&mut self, color: impl Into<String>) {
        self.state.base_color = color.into();
    }

    pub fn set_tool_mode(&mut self, mode: ToolMode) {
        self.state.tool_mode = mode;
    }

    pub fn set_active_shape_kind(&mut self, kind: ShapeKind) {
        self.state.active_shape_kind = kind;
    }

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.state.project_name = name.into();
    }

    pub fn set_project_id(&mut self, id: Option<String>) {
        self.state.project_id = id;
    }

    // --- Elements ---

    /// Append a default text element at `position`, select it, and return to
    /// the select tool. Returns the new element's id.
    pub fn add_text_element(&mut self, position: Position) -> ElementId {
        self.push_selected(DesignElement::new_text(position))
    }

    /// Append a default `shape_kind` shape at `position`, select it, and
    /// return to the select tool. Returns the new element's id.
    pub fn add_shape_element(&mut self, position: Position, shape_kind: ShapeKind) -> ElementId {
        self.push_selected(DesignElement::new_shape(position, shape_kind))
    }

    fn push_selected(&mut self, element: DesignElement) -> ElementId {
        let id = element.id;
        debug!(%id, kind = ?element.kind(), x = element.position.x, y = element.position.y, "element added");
        self.state.elements.push(element);
        self.state.selected_element_id = Some(id);
        self.state.tool_mode = ToolMode::Select;
        id
    }

    /// Merge `patch` into the element with `id`. Returns false if no such element.
    pub fn update_element(&mut self, id: &ElementId, patch: &ElementPatch) -> bool {
        let Some(element) = self.state.elements.iter_mut().find(|el| el.id == *id) else {
            return false;
        };
        patch.apply_to(element);
        true
    }

    /// Remove the element with `id`, clearing the selection if it pointed there.
    /// Returns false if no such element.
    pub fn delete_element(&mut self, id: &ElementId) -> bool {
        let before = self.state.elements.len();
        self.state.elements.retain(|el| el.id != *id);
        if self.state.selected_element_id.as_ref() == Some(id) {
            self.state.selected_element_id = None;
        }
        let removed = self.state.elements.len() != before;
        if removed {
            debug!(%id, "element deleted");
        }
        removed
    }

    /// Delete the currently selected element, if the selection resolves.
    pub fn delete_selected(&mut self) -> Option<ElementId> {
        let id = self.selected_element_id()?;
        self.delete_element(&id);
        Some(id)
    }

    /// Set or clear the selection. The id is not checked against the element list.
    pub fn select_element(&mut self, id: Option<ElementId>) {
        self.state.selected_element_id = id;
    }

    // --- Whole-document transitions ---

    /// Replace the document with a loaded project. Tool state always starts
    /// over at the select tool and the default shape.
    pub fn load_project(&mut self, project: LoadedProject) {
        debug!(project_id = %project.project_id, elements = project.elements.len(), "project loaded");
        self.state = DesignState {
            product_type: project.product_type,
            base_color: project.base_color,
            elements: project.elements,
            project_name: project.name,
            project_id: Some(project.project_id),
            ..DesignState::default()
        };
    }

    /// Start a new design: defaults everywhere, plus a freshly minted project
    /// id. Returns that id.
    pub fn reset_design(&mut self) -> String {
        let project_id = mint_project_id();
        self.state = DesignState { project_id: Some(project_id.clone()), ..DesignState::default() };
        project_id
    }

    // --- Queries ---

    /// The selected element, if the selection is set and still present.
    #[must_use]
    pub fn selected_element(&self) -> Option<&DesignElement> {
        let id = self.state.selected_element_id?;
        self.element(&id)
    }

    /// The selection id, only when it resolves to a present element.
    #[must_use]
    pub fn selected_element_id(&self) -> Option<ElementId> {
        self.selected_element().map(|el| el.id)
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&DesignElement> {
        self.state.elements.iter().find(|el| el.id == *id)
    }

    #[must_use]
    pub fn elements(&self) -> &[DesignElement] {
        &self.state.elements
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.state.elements.len()
    }

    /// Short description of the active tool for a status bar.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.state.tool_mode {
            ToolMode::Select => "Select mode".to_string(),
            ToolMode::AddText => "Click to add text".to_string(),
            ToolMode::AddShape => format!("Click to add {}", self.state.active_shape_kind.as_str()),
            ToolMode::ColorPicker => "Color picker".to_string(),
        }
    }

    /// Element count with the right plural, e.g. `"1 element"`, `"3 elements"`.
    #[must_use]
    pub fn element_count_text(&self) -> String {
        let count = self.element_count();
        if count == 1 { "1 element".to_string() } else { format!("{count} elements") }
    }
}
