//! Labels and icon names used when rendering entries.
//!
//! Icon names are Ionicons identifiers; labels are the French strings shown
//! in the listings.

use crate::catalog::{CategoryKey, IconType};
use crate::config::DisplayConfig;
use crate::taxonomy::{Entry, ViewStatus};

fn plural(count: usize) -> &'static str {
    if count > 1 { "s" } else { "" }
}

/// "3 documents", "1 document".
pub fn documents_label(count: usize) -> String {
    let s = plural(count);
    format!("{count} document{s}")
}

/// "3 documents disponibles".
pub fn available_label(count: usize) -> String {
    let s = plural(count);
    format!("{count} document{s} disponible{s}")
}

/// "3 documents trouvés".
pub fn found_label(count: usize) -> String {
    let s = plural(count);
    format!("{count} document{s} trouvé{s}")
}

/// "3 éléments".
pub fn elements_label(count: usize) -> String {
    let s = plural(count);
    format!("{count} élément{s}")
}

/// Icon for a free-form document type label.
pub fn type_icon(doc_type: &str) -> &'static str {
    match doc_type.trim().to_lowercase().as_str() {
        "pdf" => "document-text",
        "video" => "videocam",
        "ppt" => "easel",
        "web" => "globe",
        _ => "document",
    }
}

/// Icon of a category tab.
pub fn category_icon<'a>(key: &CategoryKey, display: &'a DisplayConfig) -> &'a str {
    match key {
        CategoryKey::All => "apps",
        CategoryKey::Named(name) => display
            .category_icons
            .get(name)
            .map(String::as_str)
            .unwrap_or("folder"),
    }
}

/// Title and hint shown in place of an empty listing.
pub fn empty_state(status: ViewStatus) -> Option<(&'static str, &'static str)> {
    match status {
        ViewStatus::Populated => None,
        ViewStatus::NoMatches => Some(("Aucun document trouvé", "Essayez avec d'autres mots-clés")),
        ViewStatus::NoDocuments => Some(("Aucun document disponible", "Revenez plus tard")),
    }
}

impl Entry {
    pub fn icon(&self) -> &'static str {
        match self {
            Entry::Category(_) | Entry::Group(_) => "folder",
            Entry::SubCategory(_) => "folder-open",
            Entry::SearchHeader(_) => "albums-outline",
            Entry::Item(record) => type_icon(&record.doc_type),
        }
    }

    /// Trailing affordance; headers have none.
    pub fn action_icon(&self) -> Option<&'static str> {
        if self.is_navigable() {
            return Some("chevron-forward");
        }
        match self {
            Entry::Item(record) => Some(match record.icon_type {
                IconType::External => "open-outline",
                IconType::Download => "download-outline",
            }),
            _ => None,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Entry::Item(record) => &record.title,
            Entry::Group(group) => &group.title,
            Entry::SubCategory(sub) => &sub.name,
            Entry::Category(category) => category.name(),
            Entry::SearchHeader(header) => &header.category,
        }
    }

    /// Short label beside the title: the document type, or a count.
    pub fn subtitle(&self) -> String {
        match self {
            Entry::Item(record) => record.doc_type.clone(),
            Entry::Group(group) => group.type_label.clone(),
            Entry::SubCategory(sub) => documents_label(sub.count),
            Entry::Category(category) => documents_label(category.count),
            Entry::SearchHeader(header) => found_label(header.count),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Entry::Item(record) => record.description.clone(),
            Entry::Group(group) => group.description.clone(),
            Entry::SubCategory(sub) => available_label(sub.count),
            Entry::Category(category) => available_label(category.count),
            Entry::SearchHeader(header) => found_label(header.count),
        }
    }
}
