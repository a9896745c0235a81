use crate::value::JsValue;
use regex::{Captures, Regex};
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$\{(.+?)\}").expect("placeholder pattern is valid"))
}

/// Replace every `${name}` placeholder in `template` with a value from `data`.
///
/// Without data (`None`, `null` or `undefined`) the template comes back
/// untouched. Otherwise each placeholder is looked up with
/// [`JsValue::get`]; a function value is called with the placeholder name
/// as its only argument and its return value is used instead. `undefined`
/// renders as the empty string, anything else through
/// [`JsValue::to_js_string`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use esui_util::strings::format;
/// use esui_util::JsValue;
///
/// let data = JsValue::from(json!({"name": "Ann"}));
/// assert_eq!(format("Hi ${name}", Some(&data)), "Hi Ann");
/// assert_eq!(format("Hi ${x}", Some(&JsValue::empty_object())), "Hi ");
/// assert_eq!(format("Hi ${x}", None), "Hi ${x}");
/// ```
pub fn format(template: &str, data: Option<&JsValue>) -> String {
    let data = match data {
        Some(data) if !data.is_nullish() => data,
        _ => return template.to_string(),
    };

    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            let value = match data.get(key) {
                JsValue::Function(func) => func.call(&JsValue::Undefined, &[JsValue::from(key)]),
                other => other,
            };
            if value.is_undefined() {
                String::new()
            } else {
                value.to_js_string()
            }
        })
        .into_owned()
}
