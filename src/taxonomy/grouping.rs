//! Category listing, duplicate-id collapse and sub-category partitioning.
//!
//! Every grouping here keeps first-seen order: the position of a bucket is the
//! position of the first record that produced it, never an alphabetical sort.
//! Counts always refer to raw records, so they survive the id collapse.

use crate::catalog::{CategoryKey, DocumentRecord};
use crate::config::DisplayConfig;
use crate::taxonomy::entry::{CategoryGroup, DocumentGroup, DocumentNode, Entry, SubCategoryGroup};
use std::collections::BTreeMap;

/// One tab per authored category, in first-seen order.
pub fn list_categories(records: &[DocumentRecord]) -> Vec<CategoryGroup> {
    bucket_by_category(records)
        .into_iter()
        .map(|(category, members)| CategoryGroup {
            key: CategoryKey::Named(category),
            color: members[0].color.clone(),
            count: members.len(),
        })
        .collect()
}

pub(crate) fn bucket_by_category(records: &[DocumentRecord]) -> Vec<(String, Vec<&DocumentRecord>)> {
    bucket_first_seen(records.iter(), |record| record.category.clone())
}

/// [`list_categories`] preceded by the synthetic "Tous" tab.
pub fn categories_with_all(records: &[DocumentRecord], display: &DisplayConfig) -> Vec<CategoryGroup> {
    let mut categories = vec![CategoryGroup {
        key: CategoryKey::All,
        color: display.all_color.clone(),
        count: records.len(),
    }];
    categories.extend(list_categories(records));
    categories
}

/// Collapse records sharing an `id` into groups, keeping first-seen order of
/// ids. Members of a group keep their source order.
pub fn group_by_id(records: &[DocumentRecord]) -> Vec<DocumentNode> {
    bucket_first_seen(records.iter().cloned(), |record| record.id.clone())
        .into_iter()
        .map(|(_, mut members)| {
            if members.len() == 1 {
                DocumentNode::Item(members.remove(0))
            } else {
                DocumentNode::Group(DocumentGroup::from_members(members))
            }
        })
        .collect()
}

/// Expand nodes back into their raw records.
pub fn flatten(nodes: Vec<DocumentNode>) -> Vec<DocumentRecord> {
    nodes.into_iter().flat_map(DocumentNode::into_records).collect()
}

/// Sub-category groups of a scope, followed by the items that have none.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubCategoryListing {
    pub sub_categories: Vec<SubCategoryGroup>,
    pub ungrouped: Vec<DocumentNode>,
}

impl SubCategoryListing {
    pub fn is_empty(&self) -> bool {
        self.sub_categories.is_empty() && self.ungrouped.is_empty()
    }

    /// Raw records across every sub-category and ungrouped item.
    pub fn document_count(&self) -> usize {
        self.sub_categories.iter().map(|sub| sub.count).sum::<usize>()
            + self.ungrouped.iter().map(DocumentNode::count).sum::<usize>()
    }

    /// Sub-categories first, then ungrouped items.
    pub fn into_entries(self) -> Vec<Entry> {
        self.sub_categories
            .into_iter()
            .map(Entry::SubCategory)
            .chain(self.ungrouped.into_iter().map(Entry::from))
            .collect()
    }
}

/// Filter to `scope`, collapse duplicate ids, then partition by sub-category.
///
/// A group lands in the sub-category of its first member; its members are
/// counted there as raw records.
pub fn group_by_sub_category(records: &[DocumentRecord], scope: &CategoryKey) -> SubCategoryListing {
    let in_scope: Vec<DocumentRecord> = records
        .iter()
        .filter(|record| scope.contains(&record.category))
        .cloned()
        .collect();

    let (with_sub, ungrouped): (Vec<DocumentNode>, Vec<DocumentNode>) = group_by_id(&in_scope)
        .into_iter()
        .partition(|node| node.sub_category().is_some());

    let sub_categories = bucket_first_seen(with_sub, |node| {
        node.sub_category().unwrap_or_default().to_string()
    })
    .into_iter()
    .map(|(name, nodes)| {
        let documents = flatten(nodes);
        SubCategoryGroup {
            name,
            category: documents[0].category.clone(),
            color: documents[0].color.clone(),
            count: documents.len(),
            documents,
        }
    })
    .collect();

    SubCategoryListing {
        sub_categories,
        ungrouped,
    }
}

// Buckets are never empty: each one is created by the item that keys it.
fn bucket_first_seen<K, T, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<(K, Vec<T>)>
where
    K: Ord + Clone,
    F: FnMut(&T) -> K,
{
    let mut slots: BTreeMap<K, usize> = BTreeMap::new();
    let mut buckets: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let k = key(&item);
        match slots.get(&k) {
            Some(&slot) => buckets[slot].1.push(item),
            None => {
                slots.insert(k.clone(), buckets.len());
                buckets.push((k, vec![item]));
            }
        }
    }
    buckets
}
