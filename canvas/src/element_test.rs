#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Constructors
// =============================================================

#[test]
fn new_text_has_defaults() {
    let el = DesignElement::new_text(Position::new(5.0, 6.0));
    assert_eq!(el.kind(), ElementKind::Text);
    assert_eq!(el.position, Position::new(5.0, 6.0));
    assert_eq!(el.size, Size::new(160.0, 40.0));
    assert_eq!(el.color, "#222222");
    let text = el.as_text().unwrap();
    assert_eq!(text.content, "Your Text");
    assert_eq!(text.font_size, 20.0);
    assert!(el.as_shape().is_none());
}

#[test]
fn new_shape_has_defaults() {
    let el = DesignElement::new_shape(Position::default(), ShapeKind::Triangle);
    assert_eq!(el.kind(), ElementKind::Shape);
    assert_eq!(el.size, Size::new(80.0, 80.0));
    assert_eq!(el.color, "#F59E0B");
    assert_eq!(el.as_shape().unwrap().shape_kind, ShapeKind::Triangle);
    assert!(el.as_text().is_none());
}

#[test]
fn new_elements_get_distinct_ids() {
    let a = DesignElement::new_text(Position::default());
    let b = DesignElement::new_text(Position::default());
    assert_ne!(a.id, b.id);
}

// =============================================================
// Geometry
// =============================================================

#[test]
fn size_clamped_floors_each_dimension() {
    assert_eq!(Size::new(5.0, 50.0).clamped(), Size::new(20.0, 50.0));
    assert_eq!(Size::new(50.0, -3.0).clamped(), Size::new(50.0, 20.0));
    assert_eq!(Size::new(20.0, 20.0).clamped(), Size::new(20.0, 20.0));
}

#[test]
fn position_offset_adds_delta() {
    assert_eq!(Position::new(100.0, 100.0).offset(-80.0, -20.0), Position::new(20.0, 80.0));
}

#[test]
fn contains_includes_edges() {
    let el = DesignElement::new_shape(Position::new(10.0, 10.0), ShapeKind::Rectangle);
    assert!(el.contains(10.0, 10.0));
    assert!(el.contains(90.0, 90.0));
    assert!(el.contains(50.0, 50.0));
    assert!(!el.contains(9.9, 50.0));
    assert!(!el.contains(50.0, 90.1));
}

// =============================================================
// Text display
// =============================================================

#[test]
fn display_text_falls_back_to_placeholder() {
    let empty = TextAttrs { content: String::new(), font_size: 20.0 };
    assert_eq!(empty.display_text(), "Your Text");
    let hi = TextAttrs { content: "Hi".into(), font_size: 20.0 };
    assert_eq!(hi.display_text(), "Hi");
}

// =============================================================
// Enums
// =============================================================

#[test]
fn product_labels() {
    let labels: Vec<&str> = ProductType::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(labels, ["T-Shirt", "Shirt", "Cup", "Jug"]);
}

#[test]
fn product_default_is_tshirt() {
    assert_eq!(ProductType::default(), ProductType::TShirt);
}

#[test]
fn product_serde_uses_model_tags() {
    for product in ProductType::ALL {
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, format!("\"{}\"", product.as_str()));
    }
}

#[test]
fn shape_kind_from_name_roundtrips_names() {
    for kind in ShapeKind::ALL {
        assert_eq!(ShapeKind::from_name(kind.as_str()), Some(kind));
    }
    assert_eq!(ShapeKind::from_name("hexagon"), None);
}

#[test]
fn element_body_is_tagged_by_kind() {
    let el = DesignElement::new_shape(Position::default(), ShapeKind::Circle);
    let json = serde_json::to_value(&el).unwrap();
    assert_eq!(json["body"]["kind"], "shape");
    assert_eq!(json["body"]["shapeKind"], "circle");
}
