use crate::value::{JsValue, ObjectRef};

/// Copies the enumerable own properties of each source onto `target`.
///
/// Sources are applied left to right, so later sources win over earlier ones
/// and over properties `target` already had. Falsy sources (`undefined`,
/// `null`, `false`, `0`, `""`) are skipped. The copy is shallow: nested
/// arrays and objects end up shared between the source and the target.
///
/// Returns the same `target` handle.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use esui_util::{extend, JsValue};
///
/// let target = JsValue::empty_object();
/// let obj = target.as_object().unwrap();
/// extend(obj, [&JsValue::from(json!({"a": 1})), &JsValue::Null, &JsValue::from(json!({"a": 2}))]);
///
/// assert_eq!(target, JsValue::from(json!({"a": 2})));
/// ```
pub fn extend<'a, I>(target: &ObjectRef, sources: I) -> ObjectRef
where
    I: IntoIterator<Item = &'a JsValue>,
{
    for source in sources {
        if !source.is_truthy() {
            continue;
        }
        // Entries are collected before the target is borrowed mutably, so a
        // source may alias the target.
        let entries = source.own_entries();
        let mut target = target.borrow_mut();
        for (key, value) in entries {
            target.set(key, value);
        }
    }
    target.clone()
}
