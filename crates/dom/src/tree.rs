use crate::error::DomError;
use crate::host::{DocumentHost, NodeId, NodeType};
use crate::lookup::{resolve, ElementRef};

/// Places `new_element` right after `exist_element`.
///
/// Does nothing when `exist_element` has no parent. Returns `new_element`
/// either way.
pub fn insert_after<'a, 'b, H>(
    host: &mut H,
    new_element: impl Into<ElementRef<'a>>,
    exist_element: impl Into<ElementRef<'b>>,
) -> Result<NodeId, DomError>
where
    H: DocumentHost + ?Sized,
{
    let new_node = resolve(&*host, new_element)?;
    let exist = resolve(&*host, exist_element)?;
    if let Some(parent) = host.parent(exist) {
        let next = host.next_sibling(exist);
        host.insert_before(parent, new_node, next)?;
    }
    Ok(new_node)
}

/// Places `new_element` right before `exist_element`.
///
/// Does nothing when `exist_element` has no parent. Returns `new_element`
/// either way.
pub fn insert_before<'a, 'b, H>(
    host: &mut H,
    new_element: impl Into<ElementRef<'a>>,
    exist_element: impl Into<ElementRef<'b>>,
) -> Result<NodeId, DomError>
where
    H: DocumentHost + ?Sized,
{
    let new_node = resolve(&*host, new_element)?;
    let exist = resolve(&*host, exist_element)?;
    if let Some(parent) = host.parent(exist) {
        host.insert_before(parent, new_node, Some(exist))?;
    }
    Ok(new_node)
}

/// Detaches an element from its parent. Detached elements are left alone.
pub fn remove_node<'a, H>(host: &mut H, element: impl Into<ElementRef<'a>>) -> Result<(), DomError>
where
    H: DocumentHost + ?Sized,
{
    let node = resolve(&*host, element)?;
    match host.parent(node) {
        Some(parent) => host.remove_child(parent, node),
        None => Ok(()),
    }
}

/// Text content of `node`: the data of every text and CDATA node beneath
/// it, in document order. Comments contribute nothing.
pub fn get_text<H>(host: &H, node: NodeId) -> String
where
    H: DocumentHost + ?Sized,
{
    let mut out = String::new();
    collect_text(host, node, &mut out);
    out
}

fn collect_text<H>(host: &H, node: NodeId, out: &mut String)
where
    H: DocumentHost + ?Sized,
{
    match host.node_type(node) {
        Some(NodeType::Text | NodeType::CData) => {
            if let Some(value) = host.node_value(node) {
                out.push_str(&value);
            }
        }
        Some(NodeType::Comment) | None => {}
        Some(NodeType::Element | NodeType::Document) => {
            for child in host.children(node) {
                collect_text(host, child, out);
            }
        }
    }
}
