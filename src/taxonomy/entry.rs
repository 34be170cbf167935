//! View entries produced by the taxonomy engine.
//!
//! Every entry kind is an explicit variant of [`Entry`]; callers dispatch on
//! the variant (or on the serialized `kind` tag) to decide how to render it
//! and what a tap does.

use crate::catalog::{CategoryKey, DocumentId, DocumentRecord, IconType};
use crate::display::{available_label, documents_label};
use serde::Serialize;
use std::slice;

/// Two or more records sharing one `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentGroup {
    pub id: DocumentId,
    pub title: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    pub icon_type: IconType,
    pub color: String,
    /// "N documents".
    #[serde(rename = "type")]
    pub type_label: String,
    /// "N documents disponibles".
    pub description: String,
    pub documents: Vec<DocumentRecord>,
}

impl DocumentGroup {
    /// Display fields come from the first member. Callers guarantee at least
    /// two members.
    pub(crate) fn from_members(documents: Vec<DocumentRecord>) -> Self {
        debug_assert!(documents.len() >= 2, "a group needs at least two members");
        let first = &documents[0];
        let count = documents.len();
        Self {
            id: first.id.clone(),
            title: first.title.clone(),
            category: first.category.clone(),
            sub_category: first.sub_category.clone(),
            icon_type: first.icon_type,
            color: first.color.clone(),
            type_label: documents_label(count),
            description: available_label(count),
            documents,
        }
    }

    pub fn count(&self) -> usize {
        self.documents.len()
    }
}

/// Output of id grouping: a lone record or a collapsed group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentNode {
    Item(DocumentRecord),
    Group(DocumentGroup),
}

impl DocumentNode {
    pub fn id(&self) -> &DocumentId {
        match self {
            DocumentNode::Item(record) => &record.id,
            DocumentNode::Group(group) => &group.id,
        }
    }

    pub fn sub_category(&self) -> Option<&str> {
        match self {
            DocumentNode::Item(record) => record.sub_category.as_deref(),
            DocumentNode::Group(group) => group.sub_category.as_deref(),
        }
    }

    /// The raw records behind this node.
    pub fn records(&self) -> &[DocumentRecord] {
        match self {
            DocumentNode::Item(record) => slice::from_ref(record),
            DocumentNode::Group(group) => &group.documents,
        }
    }

    pub fn into_records(self) -> Vec<DocumentRecord> {
        match self {
            DocumentNode::Item(record) => vec![record],
            DocumentNode::Group(group) => group.documents,
        }
    }

    /// Number of raw records, not nodes.
    pub fn count(&self) -> usize {
        self.records().len()
    }
}

/// Items of one sub-category within a category scope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryGroup {
    #[serde(rename = "subCategory")]
    pub name: String,
    pub category: String,
    pub color: String,
    /// Raw records, with groups expanded back to their members.
    pub documents: Vec<DocumentRecord>,
    pub count: usize,
}

/// One category tab, or the synthetic "Tous" tab.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    #[serde(rename = "category")]
    pub key: CategoryKey,
    pub color: String,
    pub count: usize,
}

impl CategoryGroup {
    pub fn name(&self) -> &str {
        self.key.as_str()
    }
}

/// Non-interactive separator shown above a category's matches when searching
/// across every category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchHeader {
    pub category: String,
    pub color: String,
    pub count: usize,
}

/// Anything a listing can show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Entry {
    #[serde(rename = "item")]
    Item(DocumentRecord),
    #[serde(rename = "group")]
    Group(DocumentGroup),
    #[serde(rename = "subcategory")]
    SubCategory(SubCategoryGroup),
    #[serde(rename = "category")]
    Category(CategoryGroup),
    #[serde(rename = "search_header")]
    SearchHeader(SearchHeader),
}

impl Entry {
    /// Entries whose selection opens a deeper listing.
    pub fn is_navigable(&self) -> bool {
        matches!(
            self,
            Entry::Group(_) | Entry::SubCategory(_) | Entry::Category(_)
        )
    }
}

impl From<DocumentNode> for Entry {
    fn from(node: DocumentNode) -> Self {
        match node {
            DocumentNode::Item(record) => Entry::Item(record),
            DocumentNode::Group(group) => Entry::Group(group),
        }
    }
}
