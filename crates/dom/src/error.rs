use crate::host::NodeId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    /// A lookup by identifier or node handle found nothing.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("{child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// The insertion would make a node its own ancestor.
    #[error("cannot insert {node} under {parent}: hierarchy request")]
    HierarchyRequest { parent: NodeId, node: NodeId },
}
