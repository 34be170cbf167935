//! Validated, immutable view of a document catalog.
//!
//! Loading is the only place malformed data is handled: records missing a
//! required field, records filed under the reserved "Tous" category, unknown
//! `iconType` values and metadata that disagrees with the document list are
//! rejected here so the taxonomy engine only ever sees well-formed records.

use crate::catalog::{
    CatalogFile, CatalogMetadata, DocumentId, DocumentRecord, IconType, RawDocumentRecord,
    is_reserved_category, load_catalog_from_path,
};
use crate::catalog::model::DEFAULT_DOCUMENT_TYPE;
use crate::config::DisplayConfig;
use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, warn};

// Generated catalogs carry this version; hand-authored files may omit the
// metadata block entirely. The env var widens the accepted set.
pub const DEFAULT_CATALOG_VERSION: &str = "1.0.0";
const ENV_ALLOWED_CATALOG_VERSIONS: &str = "MEDIDOCS_ALLOWED_CATALOG_VERSIONS";

/// The loaded document list. Immutable once built; every grouped or filtered
/// view is derived from it on demand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentCatalog {
    records: Vec<DocumentRecord>,
    metadata: Option<CatalogMetadata>,
}

impl DocumentCatalog {
    /// Load, validate and normalize the catalog at `path`.
    pub fn load(path: &Path, display: &DisplayConfig) -> Result<Self> {
        let file =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        let catalog = Self::from_file(file, display)
            .with_context(|| format!("validating {}", path.display()))?;
        debug!(
            path = %path.display(),
            documents = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Validate an already parsed catalog file.
    pub fn from_file(file: CatalogFile, display: &DisplayConfig) -> Result<Self> {
        if let Some(meta) = &file.metadata {
            validate_metadata(meta, file.documents.len())?;
        }
        let records = normalize_records(file.documents, display)?;
        Ok(Self {
            records,
            metadata: file.metadata,
        })
    }

    /// Build a catalog from authored records with no metadata block.
    pub fn from_raw(raw: Vec<RawDocumentRecord>, display: &DisplayConfig) -> Result<Self> {
        Self::from_file(
            CatalogFile {
                documents: raw,
                metadata: None,
            },
            display,
        )
    }

    /// Records in source order.
    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn metadata(&self) -> Option<&CatalogMetadata> {
        self.metadata.as_ref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every variant sharing `id`, in source order.
    pub fn find(&self, id: &DocumentId) -> Vec<&DocumentRecord> {
        self.records.iter().filter(|r| &r.id == id).collect()
    }
}

/// Catalog versions accepted by the loader.
pub fn allowed_catalog_versions() -> BTreeSet<String> {
    let mut versions: BTreeSet<String> = BTreeSet::new();
    versions.insert(DEFAULT_CATALOG_VERSION.to_string());
    if let Ok(raw) = std::env::var(ENV_ALLOWED_CATALOG_VERSIONS) {
        for v in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            versions.insert(v.to_string());
        }
    }
    versions
}

fn validate_metadata(meta: &CatalogMetadata, document_count: usize) -> Result<()> {
    let allowed = allowed_catalog_versions();
    if !allowed.contains(&meta.version) {
        bail!(
            "metadata.version '{}' not in allowed set {:?}",
            meta.version,
            allowed
        );
    }
    if meta.total_documents != document_count {
        bail!(
            "metadata.totalDocuments is {} but the catalog lists {} documents",
            meta.total_documents,
            document_count
        );
    }
    Ok(())
}

fn normalize_records(
    raw: Vec<RawDocumentRecord>,
    display: &DisplayConfig,
) -> Result<Vec<DocumentRecord>> {
    // Records without a color take the first color authored for their category.
    let mut category_colors: BTreeMap<String, String> = BTreeMap::new();
    for record in &raw {
        if let (Some(category), Some(color)) = (present(&record.category), present(&record.color)) {
            category_colors
                .entry(category.to_string())
                .or_insert_with(|| color.to_string());
        }
    }

    let mut records = Vec::with_capacity(raw.len());
    for (idx, record) in raw.into_iter().enumerate() {
        let position = idx + 1;
        let id = required(&record.id, "id", position, None)?;
        let title = required(&record.title, "title", position, Some(&id))?;
        let category = required(&record.category, "category", position, Some(&id))?;
        if is_reserved_category(&category) {
            bail!(
                "document #{position} (id {id}) uses the reserved category name '{category}'"
            );
        }

        let icon_type = match present(&record.icon_type) {
            None => IconType::default(),
            Some(raw_icon) => IconType::parse(raw_icon).with_context(|| {
                format!(
                    "document #{position} (id {id}) has unknown iconType '{raw_icon}', expected external or download"
                )
            })?,
        };

        let color = present(&record.color)
            .map(str::to_string)
            .or_else(|| category_colors.get(&category).cloned())
            .unwrap_or_else(|| display.default_color.clone());

        records.push(DocumentRecord {
            id: DocumentId(id),
            title,
            description: present(&record.description).unwrap_or_default().to_string(),
            category,
            sub_category: present(&record.sub_category).map(str::to_string),
            doc_type: present(&record.doc_type)
                .unwrap_or(DEFAULT_DOCUMENT_TYPE)
                .to_string(),
            year: present(&record.year).map(str::to_string),
            url: present(&record.url).map(str::to_string),
            icon_type,
            color,
        });
    }

    warn_on_inconsistent_duplicates(&records);
    Ok(records)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required(
    value: &Option<String>,
    field: &str,
    position: usize,
    id: Option<&str>,
) -> Result<String> {
    match present(value) {
        Some(v) => Ok(v.to_string()),
        None => match id {
            Some(id) => bail!("document #{position} (id {id}) is missing required field '{field}'"),
            None => bail!("document #{position} is missing required field '{field}'"),
        },
    }
}

// Groups copy their display fields from the first member, so disagreeing
// variants are allowed but reported.
fn warn_on_inconsistent_duplicates(records: &[DocumentRecord]) {
    let mut first_seen: BTreeMap<&DocumentId, &DocumentRecord> = BTreeMap::new();
    for record in records {
        match first_seen.get(&record.id) {
            None => {
                first_seen.insert(&record.id, record);
            }
            Some(first) => {
                if first.title != record.title
                    || first.category != record.category
                    || first.sub_category != record.sub_category
                    || first.icon_type != record.icon_type
                    || first.color != record.color
                {
                    warn!(
                        id = %record.id,
                        "documents sharing this id disagree on display fields; the first one wins"
                    );
                }
            }
        }
    }
}
