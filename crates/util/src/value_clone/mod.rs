//! Deep cloning of value graphs.
//!
//! Provides a recursive duplicator for [`JsValue`](crate::JsValue) trees
//! that refuses cyclic input instead of recursing forever.

mod clone;

pub use clone::clone;
