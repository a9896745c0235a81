//! Class attribute editing.
//!
//! Each operation reads the `class` attribute once, edits it as a
//! [`TokenSet`], and writes it back in a single [`DocumentHost::set_attribute`]
//! call, only when the token list actually changed (except [`toggle_class`],
//! which always changes it). Skipping the write matters to hosts that fire
//! attribute-change notifications.
//!
//! The read-modify-write is not atomic. A host shared between threads must
//! serialize these calls.

use crate::error::DomError;
use crate::host::{DocumentHost, NodeId};
use crate::lookup::{resolve, ElementRef};
use crate::token_set::TokenSet;

const CLASS: &str = "class";

fn read<H: DocumentHost + ?Sized>(host: &H, node: NodeId) -> TokenSet {
    TokenSet::parse(&host.attribute(node, CLASS).unwrap_or_default())
}

fn write_if<H: DocumentHost + ?Sized>(host: &mut H, node: NodeId, set: &TokenSet, changed: bool) {
    if changed {
        let value = set.to_string();
        tracing::debug!(%node, class = %value, "writing class attribute");
        host.set_attribute(node, CLASS, &value);
    } else {
        tracing::trace!(%node, "class attribute unchanged");
    }
}

/// Whether the element's class list contains `class_name`.
pub fn has_class<'a, H>(
    host: &H,
    element: impl Into<ElementRef<'a>>,
    class_name: &str,
) -> Result<bool, DomError>
where
    H: DocumentHost + ?Sized,
{
    let node = resolve(host, element)?;
    Ok(read(host, node).contains(class_name))
}

/// Appends `class_name` unless the element already has it.
pub fn add_class<'a, H>(
    host: &mut H,
    element: impl Into<ElementRef<'a>>,
    class_name: &str,
) -> Result<NodeId, DomError>
where
    H: DocumentHost + ?Sized,
{
    let node = resolve(&*host, element)?;
    let mut set = read(&*host, node);
    let changed = set.insert(class_name);
    write_if(host, node, &set, changed);
    Ok(node)
}

/// Appends every class the element does not have yet, in order.
pub fn add_classes<'a, 'c, H, I>(
    host: &mut H,
    element: impl Into<ElementRef<'a>>,
    class_names: I,
) -> Result<NodeId, DomError>
where
    H: DocumentHost + ?Sized,
    I: IntoIterator<Item = &'c str>,
{
    let node = resolve(&*host, element)?;
    let mut set = read(&*host, node);
    let changed = set.insert_all(class_names);
    write_if(host, node, &set, changed);
    Ok(node)
}

/// Removes every occurrence of `class_name`.
pub fn remove_class<'a, H>(
    host: &mut H,
    element: impl Into<ElementRef<'a>>,
    class_name: &str,
) -> Result<NodeId, DomError>
where
    H: DocumentHost + ?Sized,
{
    let node = resolve(&*host, element)?;
    let mut set = read(&*host, node);
    let changed = set.remove(class_name);
    write_if(host, node, &set, changed);
    Ok(node)
}

/// Removes every occurrence of each listed class.
pub fn remove_classes<'a, 'c, H, I>(
    host: &mut H,
    element: impl Into<ElementRef<'a>>,
    class_names: I,
) -> Result<NodeId, DomError>
where
    H: DocumentHost + ?Sized,
    I: IntoIterator<Item = &'c str>,
{
    let node = resolve(&*host, element)?;
    let mut set = read(&*host, node);
    let changed = set.remove_all(class_names);
    write_if(host, node, &set, changed);
    Ok(node)
}

/// Removes `class_name` if present (all occurrences), adds it otherwise.
pub fn toggle_class<'a, H>(
    host: &mut H,
    element: impl Into<ElementRef<'a>>,
    class_name: &str,
) -> Result<NodeId, DomError>
where
    H: DocumentHost + ?Sized,
{
    let node = resolve(&*host, element)?;
    let mut set = read(&*host, node);
    set.toggle(class_name);
    write_if(host, node, &set, true);
    Ok(node)
}
