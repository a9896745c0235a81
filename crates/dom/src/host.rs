//! The document host: what the helpers in this crate need from a DOM.

use crate::error::DomError;
use crate::metrics::PageMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to a node owned by a [`DocumentHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// DOM node types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Text = 3,
    CData = 4,
    Comment = 8,
    Document = 9,
}

/// A client rectangle, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Rect {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Element lookup, attribute access and tree mutation.
///
/// Every operation in this crate goes through this trait, so any DOM (a
/// browser binding, a headless tree, [`crate::Document`]) can back it.
pub trait DocumentHost {
    /// First attached element whose `id` attribute equals `id`, in tree order.
    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    /// `None` if `node` does not exist.
    fn node_type(&self, node: NodeId) -> Option<NodeType>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn next_sibling(&self, node: NodeId) -> Option<NodeId>;

    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Character data of text, CDATA and comment nodes.
    fn node_value(&self, node: NodeId) -> Option<String>;

    /// Moves `node` under `parent`, before `reference` or at the end when
    /// `reference` is `None`.
    fn insert_before(
        &mut self,
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), DomError>;

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError>;

    fn bounding_client_rect(&self, node: NodeId) -> Rect;

    fn metrics(&self) -> &PageMetrics;
}
