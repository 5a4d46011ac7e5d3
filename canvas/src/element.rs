//! Design element model: the text and shape items placed on a product.
//!
//! An element is a box (`position` + `size`) with a color and a kind-specific
//! payload. The payload is a sum type, so a text element can never carry a
//! shape kind and a shape can never carry a font size. The kind is fixed at
//! creation; every other field is mutable through the store.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{
    DEFAULT_FONT_SIZE, DEFAULT_SHAPE_COLOR, DEFAULT_TEXT_COLOR, MIN_ELEMENT_SIZE, SHAPE_DEFAULT_SIZE,
    TEXT_DEFAULT_HEIGHT, TEXT_DEFAULT_WIDTH,
};

/// Unique identifier for a design element. Minted at creation, never reused.
pub type ElementId = Uuid;

/// Placeholder shown for a text element whose content is empty. Also the
/// content of a freshly placed text element.
pub const PLACEHOLDER_TEXT: &str = "Your Text";

/// Offset of an element's top-left corner from the canvas origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This position shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Width and height of an element box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// This size with both dimensions floored at [`MIN_ELEMENT_SIZE`].
    #[must_use]
    pub fn clamped(self) -> Self {
        Self { width: self.width.max(MIN_ELEMENT_SIZE), height: self.height.max(MIN_ELEMENT_SIZE) }
    }
}

/// Product mockup the design is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductType {
    #[default]
    TShirt,
    Shirt,
    Mug,
    Jug,
}

impl ProductType {
    /// Every product in selector order.
    pub const ALL: [Self; 4] = [Self::TShirt, Self::Shirt, Self::Mug, Self::Jug];

    /// Human-readable product name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TShirt => "T-Shirt",
            Self::Shirt => "Shirt",
            Self::Mug => "Cup",
            Self::Jug => "Jug",
        }
    }

    /// The tag used for this product in the document model.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TShirt => "tShirt",
            Self::Shirt => "shirt",
            Self::Mug => "mug",
            Self::Jug => "jug",
        }
    }
}

/// Geometric primitive drawn by a shape element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [Self; 3] = [Self::Rectangle, Self::Circle, Self::Triangle];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Triangle => "triangle",
        }
    }

    /// Parse a shape-kind name. Returns `None` for anything unrecognised.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

/// Variant tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Shape,
}

/// Payload of a text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAttrs {
    pub content: String,
    pub font_size: f64,
}

impl TextAttrs {
    /// The text to draw: the content, or the placeholder when it is empty.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.content.is_empty() { PLACEHOLDER_TEXT } else { &self.content }
    }
}

impl Default for TextAttrs {
    fn default() -> Self {
        Self { content: PLACEHOLDER_TEXT.to_string(), font_size: DEFAULT_FONT_SIZE }
    }
}

/// Payload of a shape element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeAttrs {
    pub shape_kind: ShapeKind,
}

/// Kind-specific part of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementBody {
    Text(TextAttrs),
    Shape(ShapeAttrs),
}

/// A placed item on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignElement {
    pub id: ElementId,
    pub position: Position,
    pub size: Size,
    /// Any CSS-color-like string. Not validated.
    pub color: String,
    pub body: ElementBody,
}

impl DesignElement {
    /// A text element with the default box, content, font size and color.
    #[must_use]
    pub fn new_text(position: Position) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size: Size::new(TEXT_DEFAULT_WIDTH, TEXT_DEFAULT_HEIGHT),
            color: DEFAULT_TEXT_COLOR.to_string(),
            body: ElementBody::Text(TextAttrs::default()),
        }
    }

    /// A shape element of `shape_kind` with the default box and accent color.
    #[must_use]
    pub fn new_shape(position: Position, shape_kind: ShapeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size: Size::new(SHAPE_DEFAULT_SIZE, SHAPE_DEFAULT_SIZE),
            color: DEFAULT_SHAPE_COLOR.to_string(),
            body: ElementBody::Shape(ShapeAttrs { shape_kind }),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        match self.body {
            ElementBody::Text(_) => ElementKind::Text,
            ElementBody::Shape(_) => ElementKind::Shape,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&TextAttrs> {
        match &self.body {
            ElementBody::Text(text) => Some(text),
            ElementBody::Shape(_) => None,
        }
    }

    #[must_use]
    pub fn as_shape(&self) -> Option<&ShapeAttrs> {
        match &self.body {
            ElementBody::Shape(shape) => Some(shape),
            ElementBody::Text(_) => None,
        }
    }

    /// Whether the point `(x, y)` lies inside the element box, edges included.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.position.x
            && x <= self.position.x + self.size.width
            && y >= self.position.y
            && y <= self.position.y + self.size.height
    }
}
