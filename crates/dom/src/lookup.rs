use crate::error::DomError;
use crate::host::{DocumentHost, NodeId, NodeType};

/// An element given either by identifier or by handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRef<'a> {
    Id(&'a str),
    Node(NodeId),
}

impl<'a> From<&'a str> for ElementRef<'a> {
    fn from(id: &'a str) -> Self {
        ElementRef::Id(id)
    }
}

impl<'a> From<&'a String> for ElementRef<'a> {
    fn from(id: &'a String) -> Self {
        ElementRef::Id(id)
    }
}

impl From<NodeId> for ElementRef<'_> {
    fn from(node: NodeId) -> Self {
        ElementRef::Node(node)
    }
}

/// Look up an element.
///
/// Identifiers go through [`DocumentHost::element_by_id`]; an empty
/// identifier finds nothing. Handles pass through when they name an element
/// or the document node.
pub fn g<'a, H>(host: &H, element: impl Into<ElementRef<'a>>) -> Option<NodeId>
where
    H: DocumentHost + ?Sized,
{
    match element.into() {
        ElementRef::Id("") => None,
        ElementRef::Id(id) => host.element_by_id(id),
        ElementRef::Node(node) => match host.node_type(node) {
            Some(NodeType::Element | NodeType::Document) => Some(node),
            _ => None,
        },
    }
}

/// Like [`g`], but a miss is an error.
pub fn resolve<'a, H>(host: &H, element: impl Into<ElementRef<'a>>) -> Result<NodeId, DomError>
where
    H: DocumentHost + ?Sized,
{
    let element = element.into();
    g(host, element).ok_or_else(|| {
        DomError::ElementNotFound(match element {
            ElementRef::Id(id) => id.to_string(),
            ElementRef::Node(node) => node.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Document;

    #[test]
    fn test_g_by_id() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        doc.set_attribute(el, "id", "main");
        doc.append_child(doc.root(), el).unwrap();

        assert_eq!(g(&doc, "main"), Some(el));
        assert_eq!(g(&doc, "missing"), None);
        assert_eq!(g(&doc, ""), None);
    }

    #[test]
    fn test_g_by_node() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        let text = doc.create_text("hi");

        assert_eq!(g(&doc, el), Some(el));
        assert_eq!(g(&doc, doc.root()), Some(doc.root()));
        assert_eq!(g(&doc, text), None);
        assert_eq!(g(&doc, NodeId(999)), None);
    }

    #[test]
    fn test_resolve_reports_what_was_missing() {
        let doc = Document::new();
        assert_eq!(
            resolve(&doc, "nope"),
            Err(DomError::ElementNotFound("nope".to_string()))
        );
        assert_eq!(
            resolve(&doc, NodeId(7)),
            Err(DomError::ElementNotFound("node#7".to_string()))
        );
    }
}
