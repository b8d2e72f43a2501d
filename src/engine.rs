use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::index::{InvertedIndex, IndexStats};
use crate::rank::rank;
use crate::results::{paginate, Page};
use crate::snippet::snippet;
use crate::text::{normalize, tokenize};
use crate::{DocId, Score};

/// A document in the collection. Identity, title, and body must be
/// non-empty; the date is free-form and only used for date sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub date: Option<String>,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        let title = title.into();
        let body = body.into();
        if id.trim().is_empty() {
            return Err(Error::EmptyField("document id"));
        }
        if title.trim().is_empty() {
            return Err(Error::EmptyField("document title"));
        }
        if body.trim().is_empty() {
            return Err(Error::EmptyField("document body"));
        }
        Ok(Self {
            id,
            title,
            body,
            date: None,
        })
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// The text searches run against: title and body joined.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.body)
    }
}

/// How a query is matched against the collection.
///
/// `Semantic` is accepted for compatibility with callers that ask for it,
/// but there is no model behind it; it falls back to term-frequency ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Boolean,
    Ranked,
    Semantic,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Boolean => "boolean",
            SearchMode::Ranked => "ranked",
            SearchMode::Semantic => "semantic",
        }
    }
}

impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "boolean" => Ok(SearchMode::Boolean),
            "ranked" => Ok(SearchMode::Ranked),
            "semantic" => Ok(SearchMode::Semantic),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One search result: the document's position, its score, and a highlighted
/// snippet of the body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub position: DocId,
    pub score: Score,
    pub title: String,
    pub snippet: String,
}

/// Record of one executed search, kept in the engine's in-memory history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRecord {
    pub query: String,
    pub normalized: String,
    pub mode: SearchMode,
    pub hits: usize,
}

/// Facade over the collection: holds documents, dispatches searches by mode,
/// and tracks history. The index and score structures are rebuilt on every
/// search and discarded afterwards.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    id: String,
    name: String,
    mode: SearchMode,
    documents: Vec<Document>,
    history: Vec<SearchRecord>,
}

impl SearchEngine {
    pub fn new(id: impl Into<String>, name: impl Into<String>, mode: SearchMode) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(Error::EmptyField("engine id"));
        }
        if name.trim().is_empty() {
            return Err(Error::EmptyField("engine name"));
        }
        Ok(Self {
            id,
            name,
            mode,
            documents: Vec::new(),
            history: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn add_document(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn search_count(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[SearchRecord] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Run `query` against the collection in this engine's mode.
    ///
    /// Boolean mode builds a fresh inverted index and reports every matching
    /// document with score 1.0, in position order. Ranked (and semantic)
    /// mode scores the whole collection by query coverage, best first.
    pub fn search(&mut self, query: &str) -> Result<Vec<SearchHit>> {
        let texts: Vec<String> = self
            .documents
            .iter()
            .map(Document::searchable_text)
            .collect();
        let terms = tokenize(query);

        let scored: Vec<(DocId, Score)> = match self.mode {
            SearchMode::Boolean => {
                let index = InvertedIndex::build(&texts);
                index
                    .retrieve(query)?
                    .into_iter()
                    .map(|pos| (pos, 1.0))
                    .collect()
            }
            SearchMode::Ranked => rank(query, &texts, texts.len()),
            SearchMode::Semantic => {
                tracing::debug!("no semantic model available, using term-frequency ranking");
                rank(query, &texts, texts.len())
            }
        };

        let hits: Vec<SearchHit> = scored
            .into_iter()
            .map(|(position, score)| {
                let document = &self.documents[position as usize];
                SearchHit {
                    position,
                    score,
                    title: document.title.clone(),
                    snippet: snippet(&document.body, &terms),
                }
            })
            .collect();

        tracing::debug!(
            engine = %self.id,
            mode = %self.mode,
            query,
            hits = hits.len(),
            "search complete"
        );
        self.history.push(SearchRecord {
            query: query.to_string(),
            normalized: normalize(query),
            mode: self.mode,
            hits: hits.len(),
        });
        Ok(hits)
    }

    /// Search, then slice out one 1-indexed page of hits.
    pub fn search_page(
        &mut self,
        query: &str,
        page: usize,
        per_page: usize,
    ) -> Result<Page<SearchHit>> {
        let hits = self.search(query)?;
        paginate(&hits, page, per_page)
    }

    /// Statistics for an index built over the current collection.
    pub fn index_stats(&self) -> IndexStats {
        let texts: Vec<String> = self
            .documents
            .iter()
            .map(Document::searchable_text)
            .collect();
        InvertedIndex::build(&texts).stats()
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} docs, {} searches)",
            self.name,
            self.document_count(),
            self.search_count()
        )
    }
}
