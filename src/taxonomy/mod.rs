//! Catalog taxonomy engine.
//!
//! Pure functions that shape a flat document list into the browsing
//! hierarchy (category → sub-category → document, with same-id documents
//! collapsed into groups) and into search listings that keep category
//! context. Nothing here mutates or caches; each call builds fresh entries.

pub mod entry;
pub mod grouping;
pub mod search;
pub mod view;

pub use entry::{CategoryGroup, DocumentGroup, DocumentNode, Entry, SearchHeader, SubCategoryGroup};
pub use grouping::{
    SubCategoryListing, categories_with_all, flatten, group_by_id, group_by_sub_category,
    list_categories,
};
pub use search::{View, ViewStatus, matches_query, normalize_query, search};
pub use view::{Selection, view};

use crate::catalog::{CategoryKey, DocumentCatalog};
use crate::config::DisplayConfig;

impl DocumentCatalog {
    /// Category tabs, "Tous" first.
    pub fn categories(&self, display: &DisplayConfig) -> Vec<CategoryGroup> {
        categories_with_all(self.records(), display)
    }

    pub fn search(&self, query: Option<&str>, scope: &CategoryKey) -> View {
        search(self.records(), query, scope)
    }

    pub fn view(&self, selection: &Selection, query: Option<&str>) -> View {
        view(self.records(), selection, query)
    }
}
