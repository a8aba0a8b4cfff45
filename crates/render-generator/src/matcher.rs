//! Attribute-name matchers.

use regex::{Regex, RegexBuilder};
use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether an attribute name qualifies for a generator.
#[derive(Clone, Default)]
pub enum Matcher {
    /// Matches every name
    #[default]
    Any,

    /// Regular expression search (unanchored unless the pattern anchors itself)
    Pattern(Regex),

    /// Arbitrary predicate over the name
    Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl Matcher {
    /// Compile a case-insensitive pattern.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map(Self::Pattern)
    }

    /// Wrap a predicate.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Whether `name` qualifies.
    pub fn is_match(&self, name: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Pattern(regex) => regex.is_match(name),
            Self::Predicate(predicate) => predicate(name),
        }
    }
}

impl From<Regex> for Matcher {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Pattern(regex) => write!(f, "/{}/i", regex.as_str()),
            Self::Predicate(_) => f.write_str("<predicate>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_matches_everything() {
        assert!(Matcher::Any.is_match(""));
        assert!(Matcher::Any.is_match("film_title"));
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let matcher = Matcher::pattern("film_title.*").unwrap();
        assert!(matcher.is_match("FILM_TITLE_en"));
        assert!(!matcher.is_match("director"));
    }

    #[test]
    fn test_pattern_partial_and_anchored() {
        let partial = Matcher::pattern("id").unwrap();
        assert!(partial.is_match("user_id"));

        let anchored = Matcher::pattern("^id$").unwrap();
        assert!(anchored.is_match("ID"));
        assert!(!anchored.is_match("user_id"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Matcher::pattern("(unclosed").is_err());
    }

    #[test]
    fn test_predicate() {
        let matcher = Matcher::predicate(|name| name.ends_with("_at"));
        assert!(matcher.is_match("created_at"));
        assert!(!matcher.is_match("created"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Matcher::Any.to_string(), "*");
        assert_eq!(Matcher::pattern("^id$").unwrap().to_string(), "/^id$/i");
    }
}
