//! Canvas core for the product design studio.
//!
//! This crate holds everything about a design that is not I/O: the element
//! model, the document store and its transitions, the pointer interaction
//! engine that turns raw input into those transitions, the codec to and from
//! persisted project records, and a render-ready scene derivation. The host
//! wires DOM events to [`engine::Engine`] and draws [`scene::Scene`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`element`] | Design elements: text and shape variants, geometry, product types |
//! | [`doc`] | The design document and the store that owns it |
//! | [`engine`] | Pointer interaction engine and emitted [`engine::Action`]s |
//! | [`input`] | Tool modes, keys, gesture states and resize geometry |
//! | [`hit`] | Hit-testing against handles and elements |
//! | [`viewport`] | Client-to-canvas coordinate mapping |
//! | [`codec`] | Persisted project record and conversions |
//! | [`scene`] | Paint list, backdrop and hints for the host renderer |
//! | [`consts`] | Shared constants (default sizes, colors, thresholds) |

pub mod codec;
pub mod consts;
pub mod doc;
pub mod element;
pub mod engine;
pub mod hit;
pub mod input;
pub mod scene;
pub mod viewport;
