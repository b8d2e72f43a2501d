//! In-memory search over small document collections: inverted index with
//! boolean AND retrieval, term-frequency ranking, and result formatting
//! (highlighting, snippet truncation, pagination).
//!
//! Every operation is a pure computation over the documents passed in; the
//! index and score structures are built per call and discarded. The
//! [`SearchEngine`] facade ties the pieces together and dispatches between
//! boolean and ranked matching.

pub mod engine;
pub mod error;
pub mod index;
pub mod rank;
pub mod results;
pub mod snippet;
pub mod text;

/// A document's ordinal position in the input collection.
pub type DocId = u32;

/// Relevance score for a (query, document) pair. Non-negative.
pub type Score = f32;

pub use engine::{Document, SearchEngine, SearchHit, SearchMode, SearchRecord};
pub use error::{Error, Result};
pub use index::{IndexStats, InvertedIndex, PostingSet};
pub use rank::rank;
pub use results::{filter_sort_paginate, paginate, Page, ResultOptions, ScoredDoc, SortKey};
pub use snippet::{highlight, snippet, truncate};
pub use text::{count_term, normalize, tokenize};
