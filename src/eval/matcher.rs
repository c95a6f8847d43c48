use std::sync::OnceLock;

use regex::Regex;

fn non_word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\w\s]").expect("static pattern compiles"))
}

fn whitespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("static pattern compiles"))
}

pub fn fuzzy_normalize(value: &str) -> String {
    let lowered = value.to_lowercase();
    let stripped = non_word_pattern().replace_all(&lowered, "");
    let collapsed = whitespace_pattern().replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

pub fn strings_match(a: &str, b: &str) -> bool {
    fuzzy_normalize(a) == fuzzy_normalize(b)
}

#[cfg(test)]
mod tests {
    use super::{fuzzy_normalize, strings_match};

    #[test]
    fn punctuation_case_and_whitespace_are_ignored() {
        assert!(strings_match("Hello,  World!", "hello world"));
        assert!(strings_match("St. Mark's Square", "st marks square"));
        assert!(strings_match("  1920.  ", "1920"));
    }

    #[test]
    fn differing_words_do_not_match() {
        assert!(!strings_match("Florence", "Venice"));
        assert!(!strings_match("oil on canvas", "oil on panel"));
    }

    #[test]
    fn accents_are_not_folded() {
        assert!(!strings_match("Château, 1920.", "chateau 1920"));
        assert!(strings_match("Château", "château"));
    }

    #[test]
    fn fuzzy_form_is_trimmed_and_collapsed() {
        assert_eq!(fuzzy_normalize("  A --- B  "), "a b");
        assert_eq!(fuzzy_normalize("...!!!"), "");
    }
}
