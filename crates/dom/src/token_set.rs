use std::fmt;

/// An ordered list of whitespace-separated tokens, as found in a `class`
/// attribute.
///
/// Parsing drops empty entries, so leading, trailing and repeated
/// whitespace does not produce tokens. Duplicates in the parsed input are
/// kept until an operation on that token cleans them up. The mutating
/// methods report whether anything changed, so callers can skip writing the
/// attribute back.
///
/// # Examples
///
/// ```
/// use esui_dom::TokenSet;
///
/// let mut set = TokenSet::parse(" a  b c b ");
/// assert!(set.remove("b"));
/// assert_eq!(set.to_string(), "a c");
/// assert!(!set.insert("a"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: Vec<String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(value: &str) -> Self {
        Self {
            tokens: value.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Appends `token` unless it is already present or empty.
    pub fn insert(&mut self, token: &str) -> bool {
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Appends each absent token in order. A token listed twice is added once.
    pub fn insert_all<'a, I>(&mut self, tokens: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut changed = false;
        for token in tokens {
            changed |= self.insert(token);
        }
        changed
    }

    /// Removes every occurrence of `token`, keeping the order of the rest.
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    /// Removes every occurrence of every listed token.
    pub fn remove_all<'a, I>(&mut self, tokens: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let doomed: Vec<&str> = tokens.into_iter().collect();
        let before = self.tokens.len();
        self.tokens.retain(|t| !doomed.contains(&t.as_str()));
        self.tokens.len() != before
    }

    /// Removes all occurrences of `token` if there are any, otherwise
    /// appends it. Returns whether the token is present afterwards.
    pub fn toggle(&mut self, token: &str) -> bool {
        if self.remove(token) {
            false
        } else {
            self.insert(token)
        }
    }
}

impl fmt::Display for TokenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

impl<'a> FromIterator<&'a str> for TokenSet {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut set = TokenSet::new();
        set.insert_all(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_empty_entries() {
        let set = TokenSet::parse("\t a \n b  ");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(TokenSet::parse("   ").is_empty());
    }

    #[test]
    fn test_contains_is_verbatim() {
        let set = TokenSet::parse("ui-button ui-button-active");
        assert!(set.contains("ui-button"));
        assert!(!set.contains("ui"));
        assert!(!set.contains("UI-BUTTON"));
    }

    #[test]
    fn test_insert_appends_once() {
        let mut set = TokenSet::parse("a");
        assert!(set.insert("b"));
        assert!(!set.insert("b"));
        assert!(!set.insert(""));
        assert_eq!(set.to_string(), "a b");
    }

    #[test]
    fn test_insert_all_collapses_duplicates() {
        let mut set = TokenSet::parse("a");
        assert!(set.insert_all(["b", "a", "c", "b"]));
        assert_eq!(set.to_string(), "a b c");
        assert!(!set.insert_all(["a", "c"]));
    }

    #[test]
    fn test_remove_adjacent_duplicates() {
        let mut set = TokenSet::parse("b b a b b c b");
        assert!(set.remove("b"));
        assert_eq!(set.to_string(), "a c");
        assert!(!set.remove("b"));
    }

    #[test]
    fn test_remove_all() {
        let mut set = TokenSet::parse("a b c a d");
        assert!(set.remove_all(["a", "d", "x"]));
        assert_eq!(set.to_string(), "b c");
        assert!(!set.remove_all(["x"]));
    }

    #[test]
    fn test_toggle_purges_duplicates() {
        let mut set = TokenSet::parse("x a x");
        assert!(!set.toggle("x"));
        assert_eq!(set.to_string(), "a");
        assert!(set.toggle("x"));
        assert_eq!(set.to_string(), "a x");
    }

    #[test]
    fn test_from_iter() {
        let set: TokenSet = ["a", "b", "a"].into_iter().collect();
        assert_eq!(set.to_string(), "a b");
    }
}
