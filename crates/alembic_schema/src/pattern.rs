//! JSON Schema `pattern` strings embedded as regex literals.
//!
//! Patterns are ECMA-262 text written by the schema author and are passed
//! through unchanged apart from delimiter escaping. A pattern is dropped only
//! when it cannot be embedded: it would break the `/.../` literal, its
//! parentheses do not balance, or it opens a group with syntax ECMA-262 has
//! no form for, such as inline flags `(?i)` or `(?P<name>...)`.

use once_cell::sync::Lazy;
use regex::Regex;

/// One token of the scan: an escape, a complete character class, a group
/// opener with its extension character, a group closer, or a construct that
/// breaks the literal (unclosed class, trailing backslash).
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)(?P<escape>\\.)|(?P<class>\[(?:\\.|[^\]\\])*\])|(?P<open>\((?:\?(?P<ext>.?))?)|(?P<close>\))|(?P<broken>\[|\\$)",
    )
    .expect("token grammar is a valid regex")
});

/// Body of the `/.../` literal for a pattern, or `None` if it must be dropped
#[must_use]
pub(crate) fn literal_body(pattern: &str) -> Option<String> {
    let mut depth: usize = 0;
    for token in TOKEN.captures_iter(pattern) {
        if token.name("broken").is_some() {
            return None;
        }
        if token.name("open").is_some() {
            if let Some(ext) = token.name("ext") {
                if !matches!(ext.as_str(), ":" | "=" | "!" | "<") {
                    return None;
                }
            }
            depth += 1;
        } else if token.name("close").is_some() {
            depth = depth.checked_sub(1)?;
        }
    }
    (depth == 0).then(|| escape_delimiters(pattern))
}

/// Check if a pattern survives into the validator expression
#[must_use]
pub(crate) fn is_embeddable(pattern: &str) -> bool {
    literal_body(pattern).is_some()
}

/// Unescaped `/` gets a backslash; existing escapes are kept as they are.
fn escape_delimiters(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut escaped = false;
    for c in pattern.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '/' if !escaped => out.push_str("\\/"),
            _ => out.push(c),
        }
        escaped = c == '\\' && !escaped;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookaround_and_backreference_pass_through() {
        assert_eq!(literal_body("^(?!tmp).*$").as_deref(), Some("^(?!tmp).*$"));
        assert_eq!(literal_body("(?<=@)\\w+").as_deref(), Some("(?<=@)\\w+"));
        assert_eq!(literal_body(r"(a)\1").as_deref(), Some(r"(a)\1"));
        assert_eq!(
            literal_body(r"(?<year>\d{4})").as_deref(),
            Some(r"(?<year>\d{4})")
        );
    }

    #[test]
    fn test_non_ecma_groups_are_dropped() {
        assert_eq!(literal_body("(?i)^abc$"), None);
        assert_eq!(literal_body(r"(?P<year>\d{4})"), None);
        assert_eq!(literal_body("(?x) a b"), None);
        assert_eq!(literal_body("abc(?"), None);
    }

    #[test]
    fn test_literal_breaking_patterns_are_dropped() {
        assert_eq!(literal_body("([a-z"), None);
        assert_eq!(literal_body("abc\\"), None);
        assert_eq!(literal_body("(abc"), None);
        assert_eq!(literal_body("abc)"), None);
    }

    #[test]
    fn test_group_syntax_inside_class_or_escape_is_literal() {
        assert_eq!(literal_body("[(?i)]").as_deref(), Some("[(?i)]"));
        assert_eq!(literal_body(r"\(?i\)").as_deref(), Some(r"\(?i\)"));
        assert_eq!(literal_body(r"[\]]+").as_deref(), Some(r"[\]]+"));
    }

    #[test]
    fn test_delimiters_escaped() {
        assert_eq!(literal_body("^https?://").as_deref(), Some(r"^https?:\/\/"));
        assert_eq!(literal_body(r"a\/b").as_deref(), Some(r"a\/b"));
        assert_eq!(literal_body(r"a\\/b").as_deref(), Some(r"a\\\/b"));
        assert_eq!(literal_body("[/]").as_deref(), Some(r"[\/]"));
    }

    #[test]
    fn test_is_embeddable() {
        assert!(is_embeddable("^[a-z]+$"));
        assert!(!is_embeddable("(?i)x"));
    }
}
