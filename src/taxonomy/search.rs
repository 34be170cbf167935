//! Query filtering and the listings shown while typing a search.

use crate::catalog::{CategoryKey, DocumentRecord};
use crate::taxonomy::entry::{Entry, SearchHeader};
use crate::taxonomy::grouping::{bucket_by_category, group_by_sub_category, list_categories};
use serde::Serialize;

/// Why a listing is (or is not) empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    Populated,
    /// Nothing exists in the selected scope, query or not.
    NoDocuments,
    /// Documents exist in scope but the query matched none of them.
    NoMatches,
}

/// A listing plus the reason it is empty, when it is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct View {
    pub entries: Vec<Entry>,
    pub status: ViewStatus,
}

impl View {
    /// `scope_len` is the number of records in scope before any query filter.
    pub(crate) fn new(entries: Vec<Entry>, scope_len: usize) -> Self {
        let status = if scope_len == 0 {
            ViewStatus::NoDocuments
        } else if entries.is_empty() {
            ViewStatus::NoMatches
        } else {
            ViewStatus::Populated
        };
        Self { entries, status }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Selectable entries, i.e. everything except search headers.
    pub fn element_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !matches!(entry, Entry::SearchHeader(_)))
            .count()
    }
}

/// Lowercased, trimmed query; `None` when blank.
pub fn normalize_query(query: Option<&str>) -> Option<String> {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase)
}

/// Case-insensitive substring match on title, description or category.
/// `needle` must already be lowercased.
pub fn matches_query(record: &DocumentRecord, needle: &str) -> bool {
    [&record.title, &record.description, &record.category]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Listing for `scope` filtered by `query`.
///
/// Without a query this is the plain browse listing: category tabs for
/// "Tous", sub-category partitioning for a named category. With a query,
/// "Tous" yields one header per category followed by its matching records,
/// while a named category re-partitions only the matching records, so groups
/// and counts reflect matching members alone.
pub fn search(records: &[DocumentRecord], query: Option<&str>, scope: &CategoryKey) -> View {
    let scope_len = records
        .iter()
        .filter(|record| scope.contains(&record.category))
        .count();

    let Some(needle) = normalize_query(query) else {
        let entries = match scope {
            CategoryKey::All => list_categories(records)
                .into_iter()
                .map(Entry::Category)
                .collect(),
            CategoryKey::Named(_) => group_by_sub_category(records, scope).into_entries(),
        };
        return View::new(entries, scope_len);
    };

    let entries = match scope {
        CategoryKey::All => search_all_categories(records, &needle),
        CategoryKey::Named(_) => {
            let matching: Vec<DocumentRecord> = records
                .iter()
                .filter(|record| scope.contains(&record.category) && matches_query(record, &needle))
                .cloned()
                .collect();
            group_by_sub_category(&matching, scope).into_entries()
        }
    };
    View::new(entries, scope_len)
}

fn search_all_categories(records: &[DocumentRecord], needle: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    for (category, members) in bucket_by_category(records) {
        let color = members[0].color.clone();
        let matching: Vec<&DocumentRecord> = members
            .into_iter()
            .filter(|record| matches_query(record, needle))
            .collect();
        if matching.is_empty() {
            continue;
        }
        entries.push(Entry::SearchHeader(SearchHeader {
            category,
            color,
            count: matching.len(),
        }));
        entries.extend(matching.into_iter().cloned().map(Entry::Item));
    }
    entries
}
