//! JavaScript-style coercions.

use super::{JsValue, Primitive};

impl JsValue {
    /// Truthiness. `undefined`, `null`, `false`, `0`, `NaN` and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Bool(b) => *b,
            JsValue::Number(n) => *n != 0.0 && !n.is_nan(),
            JsValue::String(s) => !s.is_empty(),
            JsValue::Boxed(_)
            | JsValue::Array(_)
            | JsValue::Object(_)
            | JsValue::Function(_)
            | JsValue::Constructor(_) => true,
        }
    }

    /// `String(value)`.
    ///
    /// Arrays join their elements with `,` (nullish elements print empty).
    /// Does not guard against cyclic arrays.
    pub fn to_js_string(&self) -> String {
        match self {
            JsValue::Undefined => "undefined".to_string(),
            JsValue::Null => "null".to_string(),
            JsValue::Bool(b) => b.to_string(),
            JsValue::Number(n) => number_to_string(*n),
            JsValue::String(s) => s.clone(),
            JsValue::Boxed(b) => match &**b {
                Primitive::Number(n) => number_to_string(*n),
                Primitive::String(s) => s.clone(),
                Primitive::Bool(b) => b.to_string(),
            },
            JsValue::Array(arr) => arr
                .borrow()
                .iter()
                .map(|v| if v.is_nullish() { String::new() } else { v.to_js_string() })
                .collect::<Vec<_>>()
                .join(","),
            JsValue::Object(_) => "[object Object]".to_string(),
            JsValue::Function(f) => format!("function {}", f.name().unwrap_or_default()),
            JsValue::Constructor(link) => format!("function {}", link.name()),
        }
    }
}

/// `Number.prototype.toString()`: the shortest digits that round-trip,
/// in positional notation for `1e-6 <= |n| < 1e21` and exponent notation
/// (`1.5e+21`, `1e-7`) outside it.
pub(crate) fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let sci = format!("{:e}", n.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the start of `digits`.
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= point && point <= 21 {
        format!("{}{}", digits, "0".repeat((point - k) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{}.{}", int, frac)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat(-point as usize), digits)
    } else {
        let (first, rest) = digits.split_at(1);
        let sign = if point > 0 { '+' } else { '-' };
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, (point - 1).abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, (point - 1).abs())
        }
    };

    if n < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(1.0), "1");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(1.5), "1.5");
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
        assert_eq!(number_to_string(123.456), "123.456");
        assert_eq!(number_to_string(-0.25), "-0.25");
    }

    #[test]
    fn test_number_to_string_exponent_form() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.5e21), "1.5e+21");
        assert_eq!(number_to_string(-2e22), "-2e+22");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(1.25e-7), "1.25e-7");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(0.1), "0.1");
        assert_eq!(number_to_string(5e-324), "5e-324");
    }

    #[test]
    fn test_truthiness() {
        assert!(!JsValue::Undefined.is_truthy());
        assert!(!JsValue::Null.is_truthy());
        assert!(!JsValue::Number(0.0).is_truthy());
        assert!(!JsValue::Number(f64::NAN).is_truthy());
        assert!(!JsValue::from("").is_truthy());
        assert!(JsValue::from("0").is_truthy());
        assert!(JsValue::empty_object().is_truthy());
        assert!(JsValue::boxed(Primitive::Bool(false)).is_truthy());
    }

    #[test]
    fn test_to_js_string_containers() {
        assert_eq!(JsValue::from(json!([1, null, "x"])).to_js_string(), "1,,x");
        assert_eq!(JsValue::from(json!({"a": 1})).to_js_string(), "[object Object]");
        assert_eq!(JsValue::Null.to_js_string(), "null");
        assert_eq!(JsValue::Bool(true).to_js_string(), "true");
    }
}
