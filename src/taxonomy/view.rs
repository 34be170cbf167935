//! Drill-down navigation: category → sub-category → group.
//!
//! The selection is caller-held navigation state. A stale selection (a
//! sub-category or group that no longer exists in scope) yields an empty view
//! with [`ViewStatus::NoDocuments`] rather than an error.

use crate::catalog::{CategoryKey, DocumentId, DocumentRecord};
use crate::taxonomy::entry::{DocumentNode, Entry};
use crate::taxonomy::grouping::{group_by_id, group_by_sub_category};
use crate::taxonomy::search::{View, matches_query, normalize_query, search};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub category: CategoryKey,
    pub sub_category: Option<String>,
    pub group: Option<DocumentId>,
}

impl Selection {
    pub fn category(category: CategoryKey) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    pub fn with_group(mut self, group: DocumentId) -> Self {
        self.group = Some(group);
        self
    }
}

/// Listing for the current selection and query.
///
/// Drill-downs are cut from the same partition as the listing that led to
/// them: a sub-category holds whole id-groups filed under their first
/// member's sub-category, and a group holds every member of that id in scope.
/// A group drill-down lists the members; a sub-category drill-down lists its
/// records collapsed by id; otherwise this is [`search`]. The query filters
/// members at every level.
pub fn view(records: &[DocumentRecord], selection: &Selection, query: Option<&str>) -> View {
    if selection.group.is_none() && selection.sub_category.is_none() {
        return search(records, query, &selection.category);
    }

    let scope: Vec<DocumentRecord> = match &selection.sub_category {
        Some(name) => group_by_sub_category(records, &selection.category)
            .sub_categories
            .into_iter()
            .find(|sub| &sub.name == name)
            .map(|sub| sub.documents)
            .unwrap_or_default(),
        None => records
            .iter()
            .filter(|record| selection.category.contains(&record.category))
            .cloned()
            .collect(),
    };

    let in_scope: Vec<DocumentRecord> = match &selection.group {
        Some(id) => group_by_id(&scope)
            .into_iter()
            .find(|node| node.id() == id)
            .map(DocumentNode::into_records)
            .unwrap_or_default(),
        None => scope,
    };

    let needle = normalize_query(query);
    let scope_len = in_scope.len();
    let matching: Vec<DocumentRecord> = in_scope
        .into_iter()
        .filter(|record| needle.as_deref().is_none_or(|n| matches_query(record, n)))
        .collect();

    let entries = if selection.group.is_some() {
        matching.into_iter().map(Entry::Item).collect()
    } else {
        group_by_id(&matching).into_iter().map(Entry::from).collect()
    };
    View::new(entries, scope_len)
}
