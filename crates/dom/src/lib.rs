//! esui-dom - Document helpers for the esui component library
//!
//! Element lookup, class-list editing, sibling insertion, text extraction
//! and page geometry, all written against the [`DocumentHost`] trait.
//! [`Document`] is an in-memory host for headless use and tests.

pub mod class_list;
pub mod document;
pub mod error;
pub mod geometry;
pub mod host;
pub mod lookup;
pub mod metrics;
pub mod token_set;
pub mod tree;

// Re-exports for convenience
pub use class_list::{add_class, add_classes, has_class, remove_class, remove_classes, toggle_class};
pub use document::Document;
pub use error::DomError;
pub use geometry::{get_offset, ie_version, page, Offset};
pub use host::{DocumentHost, NodeId, NodeType, Rect};
pub use lookup::{g, resolve, ElementRef};
pub use metrics::{BoxMetrics, CompatMode, PageMetrics};
pub use token_set::TokenSet;
pub use tree::{get_text, insert_after, insert_before, remove_node};
