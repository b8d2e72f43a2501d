use crate::text::EDGE_PUNCT;

pub const DEFAULT_PRE_TAG: &str = "<b>";
pub const DEFAULT_POST_TAG: &str = "</b>";

/// Default character budget for hit snippets before truncation.
pub const DEFAULT_SNIPPET_MAX_CHARS: usize = 160;

const ELLIPSIS: &str = "…";

/// Wrap every case-insensitive whole-word occurrence of each term in
/// `pre`/`post` markers.
///
/// Matching is word-wise: the text is split on whitespace and each word is
/// compared after stripping edge punctuation, which stays outside the
/// markers. Substrings inside longer words never match. The output is
/// single-spaced.
pub fn highlight<S: AsRef<str>>(text: &str, terms: &[S], pre: &str, post: &str) -> String {
    let needles: Vec<String> = terms
        .iter()
        .map(|term| term.as_ref().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect();

    text.split_whitespace()
        .map(|word| {
            let stripped = word.trim_start_matches(EDGE_PUNCT);
            let lead = word.len() - stripped.len();
            let core = stripped.trim_end_matches(EDGE_PUNCT);
            if !core.is_empty() && needles.iter().any(|t| *t == core.to_lowercase()) {
                let tail = lead + core.len();
                format!("{}{}{}{}{}", &word[..lead], pre, core, post, &word[tail..])
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate at the last word boundary at or before `max_chars` and append an
/// ellipsis. Text within budget is returned unchanged. Lengths are counted
/// in characters, so the result never shows more than `max_chars` + 1 of
/// them.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    match cut.rfind(' ') {
        Some(boundary) => format!("{}{}", &cut[..boundary], ELLIPSIS),
        None => format!("{cut}{ELLIPSIS}"),
    }
}

/// Truncate to the default display budget, then bold the matching terms.
pub fn snippet<S: AsRef<str>>(text: &str, terms: &[S]) -> String {
    highlight(
        &truncate(text, DEFAULT_SNIPPET_MAX_CHARS),
        terms,
        DEFAULT_PRE_TAG,
        DEFAULT_POST_TAG,
    )
}
