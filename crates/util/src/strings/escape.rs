use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Escape the five HTML-significant characters.
///
/// This function escapes:
/// - Ampersand (`&amp;`)
/// - Less-than and greater-than (`&lt;`, `&gt;`)
/// - Double quote (`&quot;`)
/// - Single quote (`&#39;`)
///
/// Every character is substituted exactly once, so entities produced for one
/// character are never escaped again.
///
/// # Examples
///
/// ```
/// use esui_util::strings::encode_html;
///
/// assert_eq!(encode_html("hello"), "hello");
/// assert_eq!(encode_html("<a href=\"#\">"), "&lt;a href=&quot;#&quot;&gt;");
/// assert_eq!(encode_html("&lt;"), "&amp;lt;");
/// ```
pub fn encode_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for (i, ch) in s.char_indices() {
        let escaped = match ch {
            '&' => "&amp;",
            '<' => "&lt;",
            '>' => "&gt;",
            '"' => "&quot;",
            '\'' => "&#39;",
            _ => continue,
        };
        result.push_str(&s[last..i]);
        result.push_str(escaped);
        last = i + ch.len_utf8();
    }

    result.push_str(&s[last..]);
    result
}

fn entity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"&(?:(quot|lt|gt|amp)|#(\d+));").expect("entity pattern is valid"))
}

/// Decode `&quot;`, `&lt;`, `&gt;`, `&amp;` and decimal `&#NNN;` references.
///
/// The input is scanned once from left to right and decoded text is never
/// scanned again, so `&amp;lt;` decodes to `&lt;` rather than `<`. Numeric
/// references that do not name a Unicode scalar value, and any other
/// entity, are left as they are.
///
/// # Examples
///
/// ```
/// use esui_util::strings::decode_html;
///
/// assert_eq!(decode_html("&lt;b&gt;"), "<b>");
/// assert_eq!(decode_html("&#20013;&#25991;"), "中文");
/// assert_eq!(decode_html("&amp;lt;"), "&lt;");
/// assert_eq!(decode_html("&nbsp;"), "&nbsp;");
/// ```
pub fn decode_html(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    entity_regex()
        .replace_all(s, |caps: &Captures| {
            if let Some(name) = caps.get(1) {
                return match name.as_str() {
                    "quot" => "\"",
                    "lt" => "<",
                    "gt" => ">",
                    _ => "&",
                }
                .to_string();
            }
            caps[2]
                .parse::<u32>()
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
