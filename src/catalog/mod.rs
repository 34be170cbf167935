//! Document catalog wiring.
//!
//! This module owns everything about the document list itself: the on-disk
//! shapes (`catalogs/documents.json`, or the authored CSV it is generated
//! from), the identifiers records are keyed by, and the load-time validation
//! that produces an immutable [`DocumentCatalog`]. Grouping and search live in
//! [`crate::taxonomy`].

pub mod csv_source;
pub mod identity;
pub mod index;
pub mod model;

pub use identity::{ALL_CATEGORY, CategoryKey, DocumentId, is_reserved_category};
pub use index::{DEFAULT_CATALOG_VERSION, DocumentCatalog, allowed_catalog_versions};
pub use model::{
    CatalogFile, CatalogMetadata, DocumentRecord, IconType, RawDocumentRecord,
    load_catalog_from_path, parse_catalog_str,
};
