use crate::value::{parse_index, JsValue};

/// Check if a value has an own property with the given key.
///
/// This is the Rust equivalent of `Object.prototype.hasOwnProperty.call(obj, key)`:
/// prototype properties do not count, array and string indices do.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use esui_util::{has_own_property, JsValue};
///
/// let obj = JsValue::from(json!({"foo": 1}));
///
/// assert!(has_own_property(&obj, "foo"));
/// assert!(!has_own_property(&obj, "baz"));
/// ```
pub fn has_own_property(value: &JsValue, key: &str) -> bool {
    match value {
        JsValue::Object(obj) => obj.borrow().has_own(key),
        JsValue::Array(arr) => {
            key == "length" || parse_index(key).is_some_and(|i| i < arr.borrow().len())
        }
        JsValue::String(s) => {
            key == "length" || parse_index(key).is_some_and(|i| i < s.chars().count())
        }
        _ => false,
    }
}
