/// Check if a character counts as whitespace for [`trim`].
///
/// Covers the Unicode `White_Space` set (which includes U+00A0 and the
/// ideographic space U+3000) plus the byte-order mark, minus U+0085 (NEL),
/// which regex `\s` in browsers does not match.
///
/// # Examples
///
/// ```
/// use esui_util::strings::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\t'));
/// assert!(is_whitespace('\u{3000}'));
/// assert!(!is_whitespace('a'));
/// ```
pub fn is_whitespace(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}

/// Remove leading and trailing whitespace.
///
/// # Examples
///
/// ```
/// use esui_util::strings::trim;
///
/// assert_eq!(trim("\u{3000} hi \u{a0}"), "hi");
/// ```
pub fn trim(source: &str) -> &str {
    source.trim_matches(is_whitespace)
}

/// Upper-case the first character, leave the rest alone.
///
/// # Examples
///
/// ```
/// use esui_util::strings::to_pascal_case;
///
/// assert_eq!(to_pascal_case("textBox"), "TextBox");
/// assert_eq!(to_pascal_case(""), "");
/// ```
pub fn to_pascal_case(source: &str) -> String {
    let mut chars = source.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_ascii() {
        assert_eq!(trim("  a b \t\n"), "a b");
    }

    #[test]
    fn test_trim_wide_spaces() {
        assert_eq!(trim("\u{a0}\u{3000}x\u{3000}"), "x");
        assert_eq!(trim("\u{feff}x"), "x");
    }

    #[test]
    fn test_trim_keeps_next_line() {
        assert!(!is_whitespace('\u{85}'));
        assert_eq!(trim("\u{85}x\u{85}"), "\u{85}x\u{85}");
        assert_eq!(trim(" \u{85} "), "\u{85}");
    }

    #[test]
    fn test_trim_keeps_inner_whitespace() {
        assert_eq!(trim(" a\u{3000}b "), "a\u{3000}b");
    }

    #[test]
    fn test_trim_all_whitespace() {
        assert_eq!(trim(" \t "), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("a"), "A");
        assert_eq!(to_pascal_case("select"), "Select");
        assert_eq!(to_pascal_case("Already"), "Already");
        assert_eq!(to_pascal_case("ßa"), "SSa");
    }
}
