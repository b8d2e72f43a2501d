use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Punctuation stripped from word edges when comparing terms. Interior
/// punctuation is significant, so "cat-dog" never matches "cat".
pub(crate) const EDGE_PUNCT: &[char] =
    &['.', ',', '!', '?', ';', ':', '"', '(', ')', '[', ']', '{', '}'];

/// Lowercase, trim, and collapse whitespace runs to single spaces.
///
/// Idempotent: normalizing twice is the same as normalizing once.
pub fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").to_lowercase()
}

/// Normalize and split on whitespace. Empty input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Count whole-word occurrences of `term` in `text`, case-insensitive.
///
/// Each word is compared after stripping edge punctuation, so "mining,"
/// counts as "mining" but "datamining" does not count as "data".
pub fn count_term(text: &str, term: &str) -> usize {
    let needle = term.to_lowercase();
    text.split_whitespace()
        .filter(|word| word.trim_matches(EDGE_PUNCT).to_lowercase() == needle)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_collapses() {
        assert_eq!(normalize("  Hello   WORLD  "), "hello world");
        assert_eq!(normalize("Data\t\nMining"), "data mining");
    }

    #[test]
    fn normalize_is_idempotent() {
        for s in ["  MiXeD   Case \t text ", "", "one", " a  b   c "] {
            assert_eq!(normalize(&normalize(s)), normalize(s));
        }
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
    }

    #[test]
    fn count_term_whole_words_only() {
        assert_eq!(count_term("Data mining is about mining data", "mining"), 2);
        assert_eq!(count_term("The cat sat on the mat", "cat"), 1);
        assert_eq!(count_term("database systems", "data"), 0);
        assert_eq!(count_term("mining, and more (mining)", "mining"), 2);
    }
}
