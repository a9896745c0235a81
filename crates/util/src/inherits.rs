//! Type constructors and prototype derivation.
//!
//! A [`Constructor`] pairs a name with a prototype object, the method table
//! its instances share. [`inherits`] links a subtype's table to a
//! supertype's, and [`TypeRegistry`] performs those links by name as an
//! explicit initialization step.

use crate::error::RegistryError;
use crate::value::{JsValue, Object, ObjectRef};
use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

struct ConstructorInner {
    name: String,
    prototype: RefCell<ObjectRef>,
    super_class: RefCell<Option<ObjectRef>>,
}

/// A named type constructor with a replaceable prototype.
///
/// Cloning yields another handle to the same constructor.
#[derive(Clone)]
pub struct Constructor {
    inner: Rc<ConstructorInner>,
}

/// Weak reference from a prototype back to its constructor.
///
/// Stored as the `constructor` property so that prototypes do not keep their
/// constructors alive.
#[derive(Clone)]
pub struct ConstructorLink(Weak<ConstructorInner>);

impl Constructor {
    /// Creates a constructor whose prototype holds only a `constructor`
    /// back-link.
    pub fn new(name: impl Into<String>) -> Self {
        let ctor = Self {
            inner: Rc::new(ConstructorInner {
                name: name.into(),
                prototype: RefCell::new(Rc::new(RefCell::new(Object::new()))),
                super_class: RefCell::new(None),
            }),
        };
        ctor.prototype()
            .borrow_mut()
            .set("constructor", JsValue::Constructor(ctor.link()));
        ctor
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The current prototype. Replaced by [`inherits`].
    pub fn prototype(&self) -> ObjectRef {
        self.inner.prototype.borrow().clone()
    }

    /// The supertype's prototype, recorded by [`inherits`].
    pub fn super_class(&self) -> Option<ObjectRef> {
        self.inner.super_class.borrow().clone()
    }

    pub fn link(&self) -> ConstructorLink {
        ConstructorLink(Rc::downgrade(&self.inner))
    }

    pub fn ptr_eq(&self, other: &Constructor) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Defines `key` on the prototype, shared by all instances.
    pub fn define(&self, key: impl Into<String>, value: JsValue) {
        self.prototype().borrow_mut().set(key, value);
    }

    /// A new, empty instance whose prototype is the current prototype.
    pub fn instantiate(&self) -> JsValue {
        JsValue::object(Object::with_prototype(Some(self.prototype())))
    }

    /// Whether the current prototype appears on `value`'s prototype chain.
    pub fn is_instance(&self, value: &JsValue) -> bool {
        let Some(obj) = value.as_object() else {
            return false;
        };
        let target = self.prototype();
        let mut current = obj.borrow().prototype().cloned();
        while let Some(p) = current {
            if Rc::ptr_eq(&p, &target) {
                return true;
            }
            current = p.borrow().prototype().cloned();
        }
        false
    }
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[class {}]", self.name())
    }
}

impl ConstructorLink {
    pub fn upgrade(&self) -> Option<Constructor> {
        self.0.upgrade().map(|inner| Constructor { inner })
    }

    /// The constructor's name, or an empty string once it has been dropped.
    pub fn name(&self) -> String {
        self.0
            .upgrade()
            .map(|inner| inner.name.clone())
            .unwrap_or_default()
    }

    pub fn ptr_eq(&self, other: &ConstructorLink) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }

    pub fn points_to(&self, ctor: &Constructor) -> bool {
        std::ptr::eq(self.0.as_ptr(), Rc::as_ptr(&ctor.inner))
    }
}

impl fmt::Debug for ConstructorLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Function: {}]", self.name())
    }
}

/// Makes `sub` derive from `sup`.
///
/// `sub` gets a fresh prototype that
///
/// * carries a copy of every property visible through `sub`'s previous
///   prototype, own or inherited, the nearest definition winning,
/// * has `constructor` pointing back at `sub`,
/// * chains to an empty object whose prototype is `sup`'s prototype, so
///   properties later added to `sup`'s prototype stay visible unless
///   shadowed.
///
/// `sub.super_class()` is set to `sup`'s prototype. Returns `sub`.
///
/// Deriving again starts over from whatever `sub`'s prototype holds at that
/// point, including what it inherited from an earlier supertype.
///
/// # Examples
///
/// ```
/// use esui_util::{inherits, Constructor, JsValue};
///
/// let control = Constructor::new("Control");
/// let button = Constructor::new("Button");
/// button.define("type", JsValue::from("button"));
/// inherits(&button, &control);
///
/// control.define("render", JsValue::from("control-render"));
/// let instance = button.instantiate();
/// assert_eq!(instance.get("type"), JsValue::from("button"));
/// assert_eq!(instance.get("render"), JsValue::from("control-render"));
/// assert!(control.is_instance(&instance));
/// ```
pub fn inherits(sub: &Constructor, sup: &Constructor) -> Constructor {
    let empty = Rc::new(RefCell::new(Object::with_prototype(Some(sup.prototype()))));
    let self_prototype = sub.prototype();

    let mut proto = Object::with_prototype(Some(empty));
    let mut current = Some(self_prototype);
    while let Some(source) = current {
        let source = source.borrow();
        for (key, value) in source.iter() {
            if !proto.has_own(key) {
                proto.set(key.clone(), value.clone());
            }
        }
        current = source.prototype().cloned();
    }
    proto.set("constructor", JsValue::Constructor(sub.link()));

    *sub.inner.prototype.borrow_mut() = Rc::new(RefCell::new(proto));
    *sub.inner.super_class.borrow_mut() = Some(sup.prototype());

    tracing::debug!(sub = sub.name(), sup = sup.name(), "derived type");
    sub.clone()
}

/// Calls the supertype's `name` method on `this`.
///
/// Returns `undefined` when `ctor` has no supertype or the supertype has no
/// callable `name`.
pub fn call_super(ctor: &Constructor, this: &JsValue, name: &str, args: &[JsValue]) -> JsValue {
    let Some(super_proto) = ctor.super_class() else {
        return JsValue::Undefined;
    };
    match JsValue::Object(super_proto).get(name) {
        JsValue::Function(method) => method.call(this, args),
        _ => JsValue::Undefined,
    }
}

/// Named constructors, derived from one another at start-up.
///
/// # Examples
///
/// ```
/// use esui_util::{JsValue, TypeRegistry};
///
/// let mut types = TypeRegistry::new();
/// types.define("Control").define("type", JsValue::from("control"));
/// types.define("Panel");
/// types.derive("Panel", "Control").unwrap();
///
/// let panel = types.get("Panel").unwrap().instantiate();
/// assert_eq!(panel.get("type"), JsValue::from("control"));
/// ```
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: IndexMap<String, Constructor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new constructor under `name`, replacing any previous one.
    pub fn define(&mut self, name: &str) -> &Constructor {
        tracing::trace!(type_name = name, "registering type");
        self.types.insert(name.to_string(), Constructor::new(name));
        &self.types[name]
    }

    pub fn get(&self, name: &str) -> Option<&Constructor> {
        self.types.get(name)
    }

    /// Applies [`inherits`] to the constructors registered as `sub` and `sup`.
    pub fn derive(&self, sub: &str, sup: &str) -> Result<Constructor, RegistryError> {
        let sub_ctor = self
            .get(sub)
            .ok_or_else(|| RegistryError::UnknownType(sub.to_string()))?;
        let sup_ctor = self
            .get(sup)
            .ok_or_else(|| RegistryError::UnknownType(sup.to_string()))?;
        Ok(inherits(sub_ctor, sup_ctor))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }
}
