use super::JsValue;
use std::rc::Rc;

/// Structural equality for scalars, arrays and objects; reference identity
/// for boxed primitives, functions and constructor links.
///
/// Only own properties take part; prototypes are ignored. Comparing cyclic
/// graphs does not terminate.
impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Bool(a), JsValue::Bool(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Boxed(a), JsValue::Boxed(b)) => Rc::ptr_eq(a, b),
            (JsValue::Array(a), JsValue::Array(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (JsValue::Object(a), JsValue::Object(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let (a, b) = (a.borrow(), b.borrow());
                a.len() == b.len()
                    && a.iter().all(|(k, v)| b.get_own(k).is_some_and(|w| v == w))
            }
            (JsValue::Function(a), JsValue::Function(b)) => a.ptr_eq(b),
            (JsValue::Constructor(a), JsValue::Constructor(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}
