use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

use crate::error::{Error, Result};
use crate::text::tokenize;
use crate::DocId;

/// Ordered set of document positions containing a term. Ordered storage keeps
/// retrieval output deterministic across runs.
pub type PostingSet = BTreeSet<DocId>;

/// Mapping from normalized term to the positions of the documents containing
/// it. Positions refer to the document's index in the slice passed to
/// [`InvertedIndex::build`]. Built fresh per collection; never updated
/// incrementally.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, PostingSet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndexStats {
    pub term_count: usize,
    pub posting_count: usize,
    pub avg_postings_per_term: f32,
}

impl InvertedIndex {
    /// Tokenize each document and record its position under every token.
    pub fn build<S: AsRef<str>>(documents: &[S]) -> Self {
        let mut postings: HashMap<String, PostingSet> = HashMap::new();
        for (pos, doc) in documents.iter().enumerate() {
            for token in tokenize(doc.as_ref()) {
                postings.entry(token).or_default().insert(pos as DocId);
            }
        }
        tracing::debug!(
            terms = postings.len(),
            docs = documents.len(),
            "built inverted index"
        );
        Self { postings }
    }

    pub fn postings(&self, term: &str) -> Option<&PostingSet> {
        self.postings.get(term)
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Boolean AND retrieval: the positions of documents containing every
    /// query term. A term absent from the index has an empty posting set and
    /// therefore zeroes the intersection.
    ///
    /// A query that normalizes to nothing is an error; there is no match-all
    /// default.
    pub fn retrieve(&self, query: &str) -> Result<PostingSet> {
        let terms = tokenize(query);
        let Some(first) = terms.first() else {
            return Err(Error::EmptyQuery);
        };

        let mut matched = self.postings.get(first).cloned().unwrap_or_default();
        for term in &terms[1..] {
            if matched.is_empty() {
                break;
            }
            match self.postings.get(term) {
                Some(set) => matched.retain(|pos| set.contains(pos)),
                None => matched.clear(),
            }
        }
        Ok(matched)
    }

    pub fn stats(&self) -> IndexStats {
        let posting_count: usize = self.postings.values().map(BTreeSet::len).sum();
        let avg = if self.postings.is_empty() {
            0.0
        } else {
            posting_count as f32 / self.postings.len() as f32
        };
        IndexStats {
            term_count: self.postings.len(),
            posting_count,
            avg_postings_per_term: avg,
        }
    }
}
