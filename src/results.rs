use serde::{Deserialize, Serialize};

use crate::engine::Document;
use crate::error::{Error, Result};
use crate::text::count_term;
use crate::{DocId, Score};

/// One page of results plus the totals a caller needs to render pagination
/// controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Slice out the 1-indexed `page` of `results`.
///
/// Out-of-range pages (including page 0) produce an empty item list while
/// still reporting the totals. `per_page` must be at least 1.
pub fn paginate<T: Clone>(results: &[T], page: usize, per_page: usize) -> Result<Page<T>> {
    if per_page == 0 {
        return Err(Error::InvalidPageSize);
    }

    let total = results.len();
    let total_pages = (total + per_page - 1) / per_page;

    let items = if page == 0 {
        Vec::new()
    } else {
        let start = (page - 1) * per_page;
        if start >= total {
            Vec::new()
        } else {
            results[start..(start + per_page).min(total)].to_vec()
        }
    };

    Ok(Page {
        items,
        page,
        per_page,
        total,
        total_pages,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Score,
    Date,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultOptions {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    #[serde(default)]
    pub sort_by: SortKey,
    #[serde(default)]
    pub min_score: Score,
}

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    10
}

impl Default for ResultOptions {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            sort_by: SortKey::default(),
            min_score: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDoc {
    pub position: DocId,
    pub document: Document,
    pub score: Score,
}

/// Score documents against the query terms, drop those under
/// `opts.min_score`, sort, and slice one page.
///
/// Scoring is whole-word term frequency with title matches weighted double.
/// Date sorting is descending, with undated documents last.
pub fn filter_sort_paginate<S: AsRef<str>>(
    documents: &[Document],
    query_terms: &[S],
    opts: &ResultOptions,
) -> Result<Page<ScoredDoc>> {
    let mut scored: Vec<ScoredDoc> = Vec::new();
    for (pos, document) in documents.iter().enumerate() {
        let mut score = 0.0;
        for term in query_terms {
            let term = term.as_ref();
            score += count_term(&document.title, term) as Score * 2.0;
            score += count_term(&document.body, term) as Score;
        }
        if score >= opts.min_score {
            scored.push(ScoredDoc {
                position: pos as DocId,
                document: document.clone(),
                score,
            });
        }
    }

    match opts.sort_by {
        SortKey::Score => scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortKey::Date => scored.sort_by(|a, b| b.document.date.cmp(&a.document.date)),
    }

    paginate(&scored, opts.page, opts.per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginate_slices_middle_page() {
        let page = paginate(&[1, 2, 3, 4, 5], 2, 2).unwrap();
        assert_eq!(page.items, vec![3, 4]);
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn paginate_out_of_range_is_empty_not_an_error() {
        let page = paginate(&[1, 2, 3], 9, 2).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);

        let zeroth = paginate(&[1, 2, 3], 0, 2).unwrap();
        assert!(zeroth.items.is_empty());
    }

    #[test]
    fn paginate_empty_input_has_zero_pages() {
        let page = paginate(&[] as &[u8], 1, 10).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn paginate_rejects_zero_per_page() {
        assert!(matches!(
            paginate(&[1, 2], 1, 0),
            Err(Error::InvalidPageSize)
        ));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: ResultOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.page, 1);
        assert_eq!(opts.per_page, 10);
        assert_eq!(opts.sort_by, SortKey::Score);

        let opts: ResultOptions = serde_json::from_str(r#"{"sort_by":"date"}"#).unwrap();
        assert_eq!(opts.sort_by, SortKey::Date);
    }

    fn doc(id: &str, title: &str, body: &str) -> Document {
        Document::new(id, title, body).unwrap()
    }

    #[test]
    fn title_matches_weigh_double() {
        let docs = vec![
            doc("1", "data mining", "all about algorithms"),
            doc("2", "algorithms", "data data data"),
        ];
        let page =
            filter_sort_paginate(&docs, &["data"], &ResultOptions::default()).unwrap();
        // 2.0 for the title hit loses to 3.0 for three body hits.
        assert_eq!(page.items[0].position, 1);
        assert_eq!(page.items[0].score, 3.0);
        assert_eq!(page.items[1].score, 2.0);
    }

    #[test]
    fn min_score_filters_out_misses() {
        let docs = vec![
            doc("1", "data mining", "about data"),
            doc("2", "web dev", "frameworks"),
        ];
        let opts = ResultOptions {
            min_score: 1.0,
            ..ResultOptions::default()
        };
        let page = filter_sort_paginate(&docs, &["data"], &opts).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].document.id, "1");
    }

    #[test]
    fn date_sort_puts_newest_first_and_undated_last() {
        let docs = vec![
            doc("1", "old", "content").with_date("2020-01-01"),
            doc("2", "undated", "content"),
            doc("3", "new", "content").with_date("2024-06-01"),
        ];
        let opts = ResultOptions {
            sort_by: SortKey::Date,
            ..ResultOptions::default()
        };
        let page = filter_sort_paginate(&docs, &["content"], &opts).unwrap();
        let ids: Vec<&str> = page.items.iter().map(|s| s.document.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
