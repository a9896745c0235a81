//! esui-util - Object and string utilities for the esui component library
//!
//! This crate provides the value-level half of the esui adaptation layer:
//! a dynamic value graph, deep cloning, shallow merging, prototype-style
//! type derivation, HTML entity coding and template formatting.

pub mod error;
pub mod extend;
pub mod has_own_property;
pub mod inherits;
pub mod strings;
pub mod value;
pub mod value_clone;

// Re-exports for convenience
pub use error::{CloneError, RegistryError, ValueError};
pub use extend::extend;
pub use has_own_property::has_own_property;
pub use inherits::{call_super, inherits, Constructor, ConstructorLink, TypeRegistry};
pub use strings::{decode_html, encode_html, format, to_pascal_case, trim};
pub use value::{ArrayRef, Function, JsValue, Object, ObjectRef, Primitive};
pub use value_clone::clone;
