//! Conversions between [`JsValue`] and `serde_json::Value`.

use super::{JsValue, Object, Primitive};
use serde_json::{Map, Number, Value};

impl From<Value> for JsValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsValue::Null,
            Value::Bool(b) => JsValue::Bool(b),
            Value::Number(n) => JsValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => JsValue::String(s),
            Value::Array(arr) => JsValue::array(arr.into_iter().map(JsValue::from).collect()),
            Value::Object(obj) => {
                JsValue::object(obj.into_iter().map(|(k, v)| (k, JsValue::from(v))).collect::<Object>())
            }
        }
    }
}

impl JsValue {
    /// Converts to a JSON value.
    ///
    /// Lossy: `undefined`, functions, constructor links and non-finite
    /// numbers become `null`, boxed primitives are unwrapped and prototypes
    /// are dropped. Does not guard against cycles.
    pub fn to_json(&self) -> Value {
        match self {
            JsValue::Undefined | JsValue::Null => Value::Null,
            JsValue::Function(_) | JsValue::Constructor(_) => Value::Null,
            JsValue::Bool(b) => Value::Bool(*b),
            JsValue::Number(n) => number_to_json(*n),
            JsValue::String(s) => Value::String(s.clone()),
            JsValue::Boxed(b) => match &**b {
                Primitive::Number(n) => number_to_json(*n),
                Primitive::String(s) => Value::String(s.clone()),
                Primitive::Bool(b) => Value::Bool(*b),
            },
            JsValue::Array(arr) => Value::Array(arr.borrow().iter().map(JsValue::to_json).collect()),
            JsValue::Object(obj) => {
                let mut map = Map::new();
                for (key, val) in obj.borrow().iter() {
                    map.insert(key.clone(), val.to_json());
                }
                Value::Object(map)
            }
        }
    }
}

fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        return Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
}
