use std::collections::HashMap;

use crate::text::tokenize;
use crate::{DocId, Score};

/// Rank documents by how much of the query they cover.
///
/// A document's score is the number of query tokens it matches (each query
/// occurrence matched at most once per matching document occurrence) divided
/// by the query's token count, so a document containing the whole query
/// scores 1.0. Results are sorted descending; the sort is stable, so tied
/// documents keep their original order. At most `top_k` entries are returned.
///
/// An empty query, an empty collection, or `top_k == 0` yield an empty
/// result rather than an error.
pub fn rank<S: AsRef<str>>(query: &str, documents: &[S], top_k: usize) -> Vec<(DocId, Score)> {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() || documents.is_empty() || top_k == 0 {
        return Vec::new();
    }

    let mut query_counts: HashMap<&str, u32> = HashMap::new();
    for token in &query_tokens {
        *query_counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let query_len = query_tokens.len() as Score;

    let mut scored: Vec<(DocId, Score)> = Vec::with_capacity(documents.len());
    for (pos, doc) in documents.iter().enumerate() {
        let doc_tokens = tokenize(doc.as_ref());
        let mut doc_counts: HashMap<&str, u32> = HashMap::new();
        for token in &doc_tokens {
            *doc_counts.entry(token.as_str()).or_insert(0) += 1;
        }

        let mut matched = 0u32;
        for (term, query_count) in &query_counts {
            matched += (*query_count).min(doc_counts.get(term).copied().unwrap_or(0));
        }
        scored.push((pos as DocId, matched as Score / query_len));
    }

    // Stable sort keeps original document order for equal scores.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(top_k);

    tracing::debug!(
        query,
        docs = documents.len(),
        returned = scored.len(),
        "ranked documents"
    );
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCS: [&str; 3] = [
        "data mining algorithms",
        "machine learning methods",
        "database systems",
    ];

    #[test]
    fn full_coverage_scores_one() {
        let ranked = rank("data mining", &DOCS, 3);
        assert_eq!(ranked[0], (0, 1.0));
    }

    #[test]
    fn respects_top_k_and_ordering() {
        let ranked = rank("data mining", &DOCS, 2);
        assert_eq!(ranked.len(), 2);
        assert!(ranked[0].1 >= ranked[1].1);
        for (pos, _) in &ranked {
            assert!((*pos as usize) < DOCS.len());
        }
    }

    #[test]
    fn ties_keep_original_document_order() {
        let ranked = rank("zebra", &DOCS, 3);
        let positions: Vec<DocId> = ranked.iter().map(|(pos, _)| *pos).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[test]
    fn repeated_query_terms_cap_at_document_count() {
        let ranked = rank("dog dog", &["dog", "dog dog park"], 2);
        // One "dog" in doc 0 covers half the query; doc 1 covers all of it.
        assert_eq!(ranked[0], (1, 1.0));
        assert_eq!(ranked[1], (0, 0.5));
    }

    #[test]
    fn empty_inputs_return_empty() {
        assert!(rank("", &DOCS, 5).is_empty());
        assert!(rank("data", &[] as &[&str], 5).is_empty());
        assert!(rank("data", &DOCS, 0).is_empty());
    }
}
