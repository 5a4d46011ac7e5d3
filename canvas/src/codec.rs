//! Conversion between the live document and the persisted project record.
//!
//! The persisted element is flatter than the live one: a type tag, a box, a
//! color and a single `content` string. Text elements store their text there;
//! shapes store their shape-kind name. Font size is not persisted.
//!
//! Decoding is lossy in two places. Every text element comes back at the
//! default font size, and every shape comes back as a rectangle whatever its
//! `content` says. Element ids are never persisted; decoding mints new ones.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::DEFAULT_FONT_SIZE;
use crate::doc::{DesignState, LoadedProject};
use crate::element::{DesignElement, ElementBody, Position, ProductType, ShapeAttrs, ShapeKind, Size, TextAttrs};

/// Element type tag of the persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersistedElementType {
    Text,
    Shape,
    /// Accepted from the service; decoded as a shape.
    Image,
}

/// Product tag of the persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersistedProductType {
    TShirt,
    Hat,
    Mug,
    /// Also absorbs tags this client does not know.
    #[serde(other)]
    Custom,
}

/// One element as stored by the persistence service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedElement {
    pub element_type: PersistedElementType,
    pub content: String,
    pub color: String,
    pub position: Position,
    pub size: Size,
}

/// A saved project as returned by the persistence service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub project_id: String,
    pub name: String,
    pub product_type: PersistedProductType,
    pub base_color: String,
    #[serde(alias = "designElements")]
    pub elements: Vec<PersistedElement>,
    /// Creation time, nanoseconds since the Unix epoch.
    pub created: i64,
    /// Identity of the owner.
    pub owner: String,
}

/// Everything a save call sends, before the service stamps owner and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub project_id: String,
    pub name: String,
    pub product_type: PersistedProductType,
    pub base_color: String,
    pub elements: Vec<PersistedElement>,
}

// =============================================================
// Product
// =============================================================

#[must_use]
pub fn encode_product(product: ProductType) -> PersistedProductType {
    match product {
        ProductType::TShirt => PersistedProductType::TShirt,
        ProductType::Shirt => PersistedProductType::Hat,
        ProductType::Mug => PersistedProductType::Mug,
        ProductType::Jug => PersistedProductType::Custom,
    }
}

#[must_use]
pub fn decode_product(product: PersistedProductType) -> ProductType {
    match product {
        PersistedProductType::TShirt => ProductType::TShirt,
        PersistedProductType::Hat => ProductType::Shirt,
        PersistedProductType::Mug => ProductType::Mug,
        PersistedProductType::Custom => ProductType::Jug,
    }
}

// =============================================================
// Elements
// =============================================================

#[must_use]
pub fn encode_element(element: &DesignElement) -> PersistedElement {
    let (element_type, content) = match &element.body {
        ElementBody::Text(text) => (PersistedElementType::Text, text.content.clone()),
        ElementBody::Shape(shape) => (PersistedElementType::Shape, shape.shape_kind.as_str().to_string()),
    };
    PersistedElement {
        element_type,
        content,
        color: element.color.clone(),
        position: element.position,
        size: element.size,
    }
}

#[must_use]
pub fn encode_elements(elements: &[DesignElement]) -> Vec<PersistedElement> {
    elements.iter().map(encode_element).collect()
}

/// Rebuild a live element under a fresh id.
#[must_use]
pub fn decode_element(persisted: &PersistedElement) -> DesignElement {
    let body = match persisted.element_type {
        PersistedElementType::Text => {
            ElementBody::Text(TextAttrs { content: persisted.content.clone(), font_size: DEFAULT_FONT_SIZE })
        }
        PersistedElementType::Shape | PersistedElementType::Image => {
            ElementBody::Shape(ShapeAttrs { shape_kind: ShapeKind::Rectangle })
        }
    };
    DesignElement {
        id: Uuid::new_v4(),
        position: persisted.position,
        size: persisted.size,
        color: persisted.color.clone(),
        body,
    }
}

// =============================================================
// Documents
// =============================================================

/// Build the save payload for `state` under the given id and name.
#[must_use]
pub fn encode_draft(state: &DesignState, project_id: &str, name: &str) -> ProjectDraft {
    ProjectDraft {
        project_id: project_id.to_string(),
        name: name.to_string(),
        product_type: encode_product(state.product_type),
        base_color: state.base_color.clone(),
        elements: encode_elements(&state.elements),
    }
}

/// Rebuild a loadable document from a persisted record.
#[must_use]
pub fn decode_record(record: &ProjectRecord) -> LoadedProject {
    LoadedProject {
        project_id: record.project_id.clone(),
        name: record.name.clone(),
        product_type: decode_product(record.product_type),
        base_color: record.base_color.clone(),
        elements: record.elements.iter().map(decode_element).collect(),
    }
}
