use super::{JsValue, ObjectRef};
use crate::error::ValueError;
use indexmap::IndexMap;
use std::rc::Rc;

/// A keyed mapping of own properties plus an optional prototype link.
///
/// Own properties keep insertion order. Lookups that miss fall through to the
/// prototype chain; see [`JsValue::get`].
#[derive(Clone, Default)]
pub struct Object {
    properties: IndexMap<String, JsValue>,
    prototype: Option<ObjectRef>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object whose prototype is `proto`.
    pub fn with_prototype(proto: Option<ObjectRef>) -> Self {
        Self {
            properties: IndexMap::new(),
            prototype: proto,
        }
    }

    pub fn prototype(&self) -> Option<&ObjectRef> {
        self.prototype.as_ref()
    }

    /// Replace the prototype link.
    ///
    /// Fails if `self_ref` is reachable from `proto`, which would close a
    /// cycle in the chain.
    pub fn set_prototype(self_ref: &ObjectRef, proto: Option<ObjectRef>) -> Result<(), ValueError> {
        let mut current = proto.clone();
        while let Some(p) = current {
            if Rc::ptr_eq(&p, self_ref) {
                return Err(ValueError::PrototypeCycle);
            }
            current = p.borrow().prototype.clone();
        }
        self_ref.borrow_mut().prototype = proto;
        Ok(())
    }

    /// Own property, without consulting the prototype chain.
    pub fn get_own(&self, key: &str) -> Option<&JsValue> {
        self.properties.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: JsValue) {
        self.properties.insert(key.into(), value);
    }

    /// Removes an own property, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<JsValue> {
        self.properties.shift_remove(key)
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.properties.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &JsValue)> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, JsValue)> for Object {
    fn from_iter<T: IntoIterator<Item = (K, JsValue)>>(iter: T) -> Self {
        Self {
            properties: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            prototype: None,
        }
    }
}

/// `[[Get]]`: own property first, then each prototype in turn.
pub(super) fn lookup(obj: &ObjectRef, key: &str) -> JsValue {
    let mut current = Some(obj.clone());
    while let Some(o) = current {
        let o = o.borrow();
        if let Some(v) = o.properties.get(key) {
            return v.clone();
        }
        current = o.prototype.clone();
    }
    JsValue::Undefined
}
