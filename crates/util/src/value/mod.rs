//! Dynamic value graph.
//!
//! [`JsValue`] models the loosely typed values the UI layer passes around:
//! scalars, reference-counted arrays and objects (which may share sub-trees or
//! even form cycles), boxed primitives, callables and constructor links.

mod coerce;
mod equal;
mod function;
mod json;
mod object;

pub use function::Function;
pub use object::Object;

use crate::inherits::ConstructorLink;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared, mutable handle to an [`Object`].
pub type ObjectRef = Rc<RefCell<Object>>;

/// Shared, mutable handle to an array.
pub type ArrayRef = Rc<RefCell<Vec<JsValue>>>;

/// The payload of a wrapper-boxed primitive (`new Number(1)` and friends).
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Number(f64),
    String(String),
    Bool(bool),
}

/// Any value the utilities operate on.
#[derive(Clone, Default)]
pub enum JsValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Boxed primitive. Treated as immutable and shared by reference.
    Boxed(Rc<Primitive>),
    Array(ArrayRef),
    Object(ObjectRef),
    Function(Function),
    /// Link to a type constructor, as stored under a prototype's `constructor` key.
    Constructor(ConstructorLink),
}

impl JsValue {
    /// Wraps `items` in a fresh array.
    pub fn array(items: Vec<JsValue>) -> Self {
        JsValue::Array(Rc::new(RefCell::new(items)))
    }

    /// Wraps `obj` in a fresh object handle.
    pub fn object(obj: Object) -> Self {
        JsValue::Object(Rc::new(RefCell::new(obj)))
    }

    /// A new object with no properties and no prototype.
    pub fn empty_object() -> Self {
        Self::object(Object::new())
    }

    /// A boxed primitive.
    pub fn boxed(primitive: Primitive) -> Self {
        JsValue::Boxed(Rc::new(primitive))
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    /// `null` or `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, JsValue::Undefined | JsValue::Null)
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            JsValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayRef> {
        match self {
            JsValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            JsValue::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Property read, `value[key]`.
    ///
    /// Objects resolve through their prototype chain. Arrays and strings
    /// expose their indices and `length`. Everything else reads as
    /// `undefined`.
    pub fn get(&self, key: &str) -> JsValue {
        match self {
            JsValue::Object(obj) => object::lookup(obj, key),
            JsValue::Array(arr) => {
                let arr = arr.borrow();
                if key == "length" {
                    return JsValue::Number(arr.len() as f64);
                }
                parse_index(key)
                    .and_then(|i| arr.get(i).cloned())
                    .unwrap_or(JsValue::Undefined)
            }
            JsValue::String(s) => {
                if key == "length" {
                    return JsValue::Number(s.chars().count() as f64);
                }
                parse_index(key)
                    .and_then(|i| s.chars().nth(i))
                    .map(|c| JsValue::String(c.to_string()))
                    .unwrap_or(JsValue::Undefined)
            }
            JsValue::Boxed(b) => match &**b {
                Primitive::String(s) => JsValue::String(s.clone()).get(key),
                _ => JsValue::Undefined,
            },
            _ => JsValue::Undefined,
        }
    }

    /// Enumerable own `(key, value)` pairs, in enumeration order.
    ///
    /// Objects yield their own properties, arrays and strings yield their
    /// indices. Scalars, functions and constructor links have none.
    pub fn own_entries(&self) -> Vec<(String, JsValue)> {
        match self {
            JsValue::Object(obj) => obj
                .borrow()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            JsValue::Array(arr) => arr
                .borrow()
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v.clone()))
                .collect(),
            JsValue::String(s) => s
                .chars()
                .enumerate()
                .map(|(i, c)| (i.to_string(), JsValue::String(c.to_string())))
                .collect(),
            JsValue::Boxed(b) => match &**b {
                Primitive::String(s) => JsValue::String(s.clone()).own_entries(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }
}

/// Canonical array index: decimal digits without a leading zero.
pub(crate) fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || (key.len() > 1 && key.starts_with('0')) {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

/// Debug output does not guard against cycles.
impl fmt::Debug for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsValue::Undefined => f.write_str("undefined"),
            JsValue::Null => f.write_str("null"),
            JsValue::Bool(b) => write!(f, "{}", b),
            JsValue::Number(n) => write!(f, "{}", n),
            JsValue::String(s) => write!(f, "{:?}", s),
            JsValue::Boxed(b) => write!(f, "Boxed({:?})", b),
            JsValue::Array(arr) => f.debug_list().entries(arr.borrow().iter()).finish(),
            JsValue::Object(obj) => {
                let obj = obj.borrow();
                f.debug_map().entries(obj.iter()).finish()
            }
            JsValue::Function(func) => write!(f, "{:?}", func),
            JsValue::Constructor(link) => write!(f, "{:?}", link),
        }
    }
}

impl From<bool> for JsValue {
    fn from(b: bool) -> Self {
        JsValue::Bool(b)
    }
}

impl From<f64> for JsValue {
    fn from(n: f64) -> Self {
        JsValue::Number(n)
    }
}

impl From<i64> for JsValue {
    fn from(n: i64) -> Self {
        JsValue::Number(n as f64)
    }
}

impl From<String> for JsValue {
    fn from(s: String) -> Self {
        JsValue::String(s)
    }
}

impl From<&str> for JsValue {
    fn from(s: &str) -> Self {
        JsValue::String(s.to_string())
    }
}

impl From<Object> for JsValue {
    fn from(obj: Object) -> Self {
        JsValue::object(obj)
    }
}

impl From<ObjectRef> for JsValue {
    fn from(obj: ObjectRef) -> Self {
        JsValue::Object(obj)
    }
}

impl From<Function> for JsValue {
    fn from(func: Function) -> Self {
        JsValue::Function(func)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_array_index_and_length() {
        let arr = JsValue::from(json!(["a", "b"]));
        assert_eq!(arr.get("1"), JsValue::from("b"));
        assert_eq!(arr.get("length"), JsValue::Number(2.0));
        assert!(arr.get("2").is_undefined());
        assert!(arr.get("01").is_undefined());
    }

    #[test]
    fn test_get_string_index() {
        let s = JsValue::from("héllo");
        assert_eq!(s.get("1"), JsValue::from("é"));
        assert_eq!(s.get("length"), JsValue::Number(5.0));
    }

    #[test]
    fn test_get_on_scalars_is_undefined() {
        assert!(JsValue::Null.get("a").is_undefined());
        assert!(JsValue::Number(1.0).get("a").is_undefined());
    }

    #[test]
    fn test_own_entries_of_string() {
        let entries = JsValue::from("ab").own_entries();
        assert_eq!(
            entries,
            vec![
                ("0".to_string(), JsValue::from("a")),
                ("1".to_string(), JsValue::from("b")),
            ]
        );
    }

    #[test]
    fn test_own_entries_excludes_prototype() {
        let proto = Rc::new(RefCell::new(Object::new()));
        proto.borrow_mut().set("inherited", JsValue::from(1i64));
        let mut child = Object::with_prototype(Some(proto));
        child.set("own", JsValue::from(2i64));
        let value = JsValue::object(child);

        let keys: Vec<String> = value.own_entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["own".to_string()]);
        assert_eq!(value.get("inherited"), JsValue::Number(1.0));
    }
}
