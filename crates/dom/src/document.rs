//! In-memory document host.

use crate::error::DomError;
use crate::host::{DocumentHost, NodeId, NodeType, Rect};
use crate::metrics::PageMetrics;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
struct Node {
    node_type: NodeType,
    tag_name: Option<String>,
    attributes: BTreeMap<String, String>,
    value: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Rect,
}

impl Node {
    fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            tag_name: None,
            attributes: BTreeMap::new(),
            value: None,
            parent: None,
            children: Vec::new(),
            rect: Rect::default(),
        }
    }
}

/// A node arena implementing [`DocumentHost`].
///
/// Node 0 is the document node. Created nodes start detached. Every
/// [`DocumentHost::set_attribute`] call is counted, which lets callers see
/// whether an operation wrote to the tree at all.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    metrics: PageMetrics,
    attribute_writes: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_metrics(PageMetrics::default())
    }

    pub fn with_metrics(metrics: PageMetrics) -> Self {
        Self {
            nodes: vec![Node::new(NodeType::Document)],
            metrics,
            attribute_writes: 0,
        }
    }

    /// The document node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn create_element(&mut self, tag_name: &str) -> NodeId {
        let mut node = Node::new(NodeType::Element);
        node.tag_name = Some(tag_name.to_ascii_lowercase());
        self.push(node)
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.create_character_data(NodeType::Text, text)
    }

    pub fn create_cdata(&mut self, text: &str) -> NodeId {
        self.create_character_data(NodeType::CData, text)
    }

    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.create_character_data(NodeType::Comment, text)
    }

    fn create_character_data(&mut self, node_type: NodeType, text: &str) -> NodeId {
        let mut node = Node::new(node_type);
        node.value = Some(text.to_string());
        self.push(node)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.insert_before(parent, child, None)
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.node(node).and_then(|n| n.tag_name.as_deref())
    }

    pub fn set_rect(&mut self, node: NodeId, rect: Rect) {
        if let Some(n) = self.node_mut(node) {
            n.rect = rect;
        }
    }

    pub fn metrics_mut(&mut self) -> &mut PageMetrics {
        &mut self.metrics
    }

    /// Number of attribute writes performed so far.
    pub fn attribute_writes(&self) -> usize {
        self.attribute_writes
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    fn require(&self, id: NodeId) -> Result<&Node, DomError> {
        self.node(id)
            .ok_or_else(|| DomError::ElementNotFound(id.to_string()))
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.node(node).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|&c| c != node);
        }
        if let Some(n) = self.node_mut(node) {
            n.parent = None;
        }
    }
}

impl DocumentHost for Document {
    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let mut stack = vec![self.root()];
        while let Some(current) = stack.pop() {
            let node = self.node(current)?;
            if node.node_type == NodeType::Element
                && node.attributes.get("id").map(String::as_str) == Some(id)
            {
                return Some(current);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    fn node_type(&self, node: NodeId) -> Option<NodeType> {
        self.node(node).map(|n| n.node_type)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.node(node).and_then(|n| n.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.node_mut(node) {
            n.attributes.insert(name.to_string(), value.to_string());
            self.attribute_writes += 1;
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|n| n.parent)
    }

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.node(self.parent(node)?)?;
        let index = parent.children.iter().position(|&c| c == node)?;
        parent.children.get(index + 1).copied()
    }

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn node_value(&self, node: NodeId) -> Option<String> {
        self.node(node).and_then(|n| n.value.clone())
    }

    fn insert_before(
        &mut self,
        parent: NodeId,
        node: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), DomError> {
        self.require(parent)?;
        self.require(node)?;
        if self.is_inclusive_ancestor(node, parent) {
            return Err(DomError::HierarchyRequest { parent, node });
        }
        // Inserting a node before itself means before its next sibling.
        let reference = match reference {
            Some(r) if r == node => self.next_sibling(node),
            other => other,
        };
        if let Some(r) = reference {
            if self.parent(r) != Some(parent) {
                return Err(DomError::NotAChild { parent, child: r });
            }
        }

        self.detach(node);
        let children = &mut self.nodes[parent.0 as usize].children;
        let index = reference
            .and_then(|r| children.iter().position(|&c| c == r))
            .unwrap_or(children.len());
        children.insert(index, node);
        self.nodes[node.0 as usize].parent = Some(parent);

        tracing::trace!(%parent, %node, "inserted node");
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        if self.parent(child) != Some(parent) {
            return Err(DomError::NotAChild { parent, child });
        }
        self.detach(child);
        tracing::trace!(%parent, %child, "removed node");
        Ok(())
    }

    fn bounding_client_rect(&self, node: NodeId) -> Rect {
        self.node(node).map(|n| n.rect).unwrap_or_default()
    }

    fn metrics(&self) -> &PageMetrics {
        &self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> (Document, NodeId, Vec<NodeId>) {
        let mut doc = Document::new();
        let body = doc.create_element("BODY");
        doc.append_child(doc.root(), body).unwrap();
        let kids: Vec<NodeId> = (0..3)
            .map(|_| {
                let el = doc.create_element("div");
                doc.append_child(body, el).unwrap();
                el
            })
            .collect();
        (doc, body, kids)
    }

    #[test]
    fn test_create_element_lowercases_tag() {
        let mut doc = Document::new();
        let el = doc.create_element("DIV");
        assert_eq!(doc.tag_name(el), Some("div"));
        assert_eq!(doc.node_type(el), Some(NodeType::Element));
    }

    #[test]
    fn test_element_by_id_only_finds_attached() {
        let (mut doc, body, kids) = tree();
        doc.set_attribute(kids[1], "id", "target");
        let detached = doc.create_element("span");
        doc.set_attribute(detached, "id", "loose");

        assert_eq!(doc.element_by_id("target"), Some(kids[1]));
        assert_eq!(doc.element_by_id("loose"), None);

        doc.set_attribute(body, "id", "target");
        assert_eq!(doc.element_by_id("target"), Some(body));
    }

    #[test]
    fn test_next_sibling() {
        let (doc, body, kids) = tree();
        assert_eq!(doc.next_sibling(kids[0]), Some(kids[1]));
        assert_eq!(doc.next_sibling(kids[2]), None);
        assert_eq!(doc.next_sibling(body), None);
    }

    #[test]
    fn test_insert_before_moves_node() {
        let (mut doc, body, kids) = tree();
        doc.insert_before(body, kids[2], Some(kids[0])).unwrap();
        assert_eq!(doc.children(body), vec![kids[2], kids[0], kids[1]]);
    }

    #[test]
    fn test_insert_before_self_is_noop() {
        let (mut doc, body, kids) = tree();
        doc.insert_before(body, kids[1], Some(kids[1])).unwrap();
        assert_eq!(doc.children(body), kids);
    }

    #[test]
    fn test_insert_rejects_foreign_reference() {
        let (mut doc, body, kids) = tree();
        let other = doc.create_element("p");
        let err = doc.insert_before(body, other, Some(body)).unwrap_err();
        assert_eq!(err, DomError::NotAChild { parent: body, child: body });
        assert_eq!(doc.children(body), kids);
    }

    #[test]
    fn test_insert_rejects_ancestor() {
        let (mut doc, body, kids) = tree();
        let err = doc.append_child(kids[0], body).unwrap_err();
        assert_eq!(err, DomError::HierarchyRequest { parent: kids[0], node: body });
    }

    #[test]
    fn test_remove_child() {
        let (mut doc, body, kids) = tree();
        doc.remove_child(body, kids[1]).unwrap();
        assert_eq!(doc.children(body), vec![kids[0], kids[2]]);
        assert_eq!(doc.parent(kids[1]), None);
        assert!(doc.remove_child(body, kids[1]).is_err());
    }

    #[test]
    fn test_attribute_writes_are_counted() {
        let (mut doc, _, kids) = tree();
        assert_eq!(doc.attribute_writes(), 0);
        doc.set_attribute(kids[0], "class", "a");
        doc.set_attribute(kids[0], "class", "a");
        assert_eq!(doc.attribute_writes(), 2);
        assert_eq!(doc.attribute(kids[0], "class").as_deref(), Some("a"));
    }
}
