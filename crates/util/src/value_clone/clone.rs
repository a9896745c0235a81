use crate::error::CloneError;
use crate::value::{JsValue, Object};
use std::collections::HashSet;
use std::rc::Rc;

/// Creates a deep clone of a value graph.
///
/// Arrays are copied element by element and objects key by key (own
/// properties only; the copy has no prototype), recursively. Scalars, boxed
/// primitives, functions and constructor links are immutable from the
/// graph's point of view and are returned as-is.
///
/// A sub-tree reachable along two paths is copied twice, so the result never
/// shares containers with the input or with itself. A container that contains
/// itself (directly or through its descendants) yields [`CloneError::Cycle`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use esui_util::{clone, JsValue};
///
/// let original = JsValue::from(json!({"foo": [1, 2, 3]}));
/// let cloned = clone(&original).unwrap();
///
/// assert_eq!(original, cloned);
/// ```
pub fn clone(value: &JsValue) -> Result<JsValue, CloneError> {
    let mut ancestors = HashSet::new();
    clone_inner(value, &mut ancestors)
}

fn clone_inner(value: &JsValue, ancestors: &mut HashSet<usize>) -> Result<JsValue, CloneError> {
    match value {
        JsValue::Array(arr) => {
            let id = Rc::as_ptr(arr) as *const () as usize;
            enter(id, ancestors)?;
            let items = arr
                .borrow()
                .iter()
                .map(|item| clone_inner(item, ancestors))
                .collect::<Result<Vec<_>, _>>();
            ancestors.remove(&id);
            Ok(JsValue::array(items?))
        }
        JsValue::Object(obj) => {
            let id = Rc::as_ptr(obj) as *const () as usize;
            enter(id, ancestors)?;
            let mut copy = Object::new();
            let mut result = Ok(());
            for (key, val) in obj.borrow().iter() {
                match clone_inner(val, ancestors) {
                    Ok(v) => copy.set(key.clone(), v),
                    Err(e) => {
                        result = Err(e);
                        break;
                    }
                }
            }
            ancestors.remove(&id);
            result.map(|()| JsValue::object(copy))
        }
        other => Ok(other.clone()),
    }
}

fn enter(id: usize, ancestors: &mut HashSet<usize>) -> Result<(), CloneError> {
    if !ancestors.insert(id) {
        tracing::debug!("refusing to clone cyclic value graph");
        return Err(CloneError::Cycle);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Primitive;
    use serde_json::json;
    use std::cell::RefCell;

    #[test]
    fn test_clone_scalars() {
        for value in [
            JsValue::Undefined,
            JsValue::Null,
            JsValue::Bool(false),
            JsValue::Number(0.0),
            JsValue::from(""),
            JsValue::from("hello"),
        ] {
            assert_eq!(clone(&value).unwrap(), value);
        }
    }

    #[test]
    fn test_clone_nested() {
        let value = JsValue::from(json!({
            "array": [1, 2, {"nested": true}],
            "object": {"a": "b"},
            "scalar": 42
        }));
        let cloned = clone(&value).unwrap();
        assert_eq!(value, cloned);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = JsValue::from(json!({"arr": [1, 2, {"x": 1}]}));
        let cloned = clone(&original).unwrap();

        let arr = cloned.get("arr");
        arr.as_array().unwrap().borrow_mut().push(JsValue::from(4i64));
        let inner = arr.get("2");
        inner.as_object().unwrap().borrow_mut().set("x", JsValue::from(2i64));

        assert_eq!(original, JsValue::from(json!({"arr": [1, 2, {"x": 1}]})));
        assert_ne!(original, cloned);
    }

    #[test]
    fn test_clone_shares_boxed_primitives() {
        let boxed = JsValue::boxed(Primitive::String("s".into()));
        let value = JsValue::array(vec![boxed.clone()]);
        let cloned = clone(&value).unwrap();
        match (&boxed, cloned.get("0")) {
            (JsValue::Boxed(a), JsValue::Boxed(b)) => assert!(Rc::ptr_eq(a, &b)),
            _ => panic!("Expected boxed primitive"),
        }
    }

    #[test]
    fn test_clone_drops_prototype_properties() {
        let proto = Rc::new(RefCell::new(Object::new()));
        proto.borrow_mut().set("inherited", JsValue::from(1i64));
        let mut obj = Object::with_prototype(Some(proto));
        obj.set("own", JsValue::from(2i64));
        let value = JsValue::object(obj);

        let cloned = clone(&value).unwrap();
        assert_eq!(cloned.get("own"), JsValue::Number(2.0));
        assert!(cloned.get("inherited").is_undefined());
        assert!(cloned.as_object().unwrap().borrow().prototype().is_none());
    }

    #[test]
    fn test_clone_duplicates_shared_subtrees() {
        let shared = JsValue::from(json!({"n": 1}));
        let value = JsValue::array(vec![shared.clone(), shared]);
        let cloned = clone(&value).unwrap();

        let (a, b) = (cloned.get("0"), cloned.get("1"));
        assert!(!Rc::ptr_eq(a.as_object().unwrap(), b.as_object().unwrap()));
        assert_eq!(a, b);
    }

    #[test]
    fn test_clone_rejects_self_reference() {
        let arr = JsValue::array(Vec::new());
        arr.as_array().unwrap().borrow_mut().push(arr.clone());
        assert_eq!(clone(&arr), Err(CloneError::Cycle));
        // break the cycle so the test does not leak
        arr.as_array().unwrap().borrow_mut().clear();
    }

    #[test]
    fn test_clone_rejects_mutual_reference() {
        let a = JsValue::empty_object();
        let b = JsValue::empty_object();
        a.as_object().unwrap().borrow_mut().set("b", b.clone());
        b.as_object().unwrap().borrow_mut().set("a", a.clone());

        assert_eq!(clone(&a), Err(CloneError::Cycle));
        b.as_object().unwrap().borrow_mut().remove("a");
    }
}
