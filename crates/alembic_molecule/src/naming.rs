//! Display and identifier names derived from raw tool names.

/// Title-case a raw tool name: underscores become spaces, words capitalized
///
/// Empty segments from repeated underscores are dropped, so
/// `git__status` renders as `Git Status`.
#[must_use]
pub fn title_case(name: &str) -> String {
    words(name).collect::<Vec<_>>().join(" ")
}

/// Identifier-safe PascalCase name used to declare a validator
///
/// Non-alphanumeric characters are dropped. A name that would be empty or
/// start with a digit is prefixed with `Tool`.
#[must_use]
pub fn type_name(name: &str) -> String {
    let joined: String = words(name)
        .collect::<String>()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    match joined.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => joined,
        _ => format!("Tool{}", joined),
    }
}

fn words(name: &str) -> impl Iterator<Item = String> + '_ {
    name.split('_').filter(|w| !w.is_empty()).map(capitalize)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("git_status_check"), "Git Status Check");
        assert_eq!(title_case("custom_search"), "Custom Search");
        assert_eq!(title_case("ping"), "Ping");
        assert_eq!(title_case("_leading__double_"), "Leading Double");
        assert_eq!(title_case("fetchURL"), "FetchURL");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name("custom_search"), "CustomSearch");
        assert_eq!(type_name("web-fetch_v2"), "WebfetchV2");
        assert_eq!(type_name("3d_render"), "Tool3dRender");
        assert_eq!(type_name(""), "Tool");
    }

    proptest! {
        #[test]
        fn prop_title_case_words(words in proptest::collection::vec("[a-z][a-z0-9]{0,6}", 1..5)) {
            let name = words.join("_");
            let expected: Vec<String> = words
                .iter()
                .map(|w| format!("{}{}", w[..1].to_uppercase(), &w[1..]))
                .collect();
            prop_assert_eq!(title_case(&name), expected.join(" "));
            prop_assert!(!title_case(&name).contains('_'));
        }
    }
}
