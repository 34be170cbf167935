//! Reference-document catalog for the training app.
//!
//! Load a static document list once ([`DocumentCatalog`]), then ask the
//! taxonomy engine for category tabs, sub-category listings, duplicate-id
//! groups and search results. The binaries in `src/bin` wrap the same API.

pub mod catalog;
pub mod config;
pub mod display;
pub mod locator;
pub mod schema_loader;
pub mod taxonomy;

pub use catalog::{
    ALL_CATEGORY, CatalogFile, CatalogMetadata, CategoryKey, DocumentCatalog, DocumentId,
    DocumentRecord, IconType, RawDocumentRecord, load_catalog_from_path,
};
pub use config::{CatalogConfig, DisplayConfig};
pub use locator::{DocumentLocator, LocalAssets, Target, resolve_target};
pub use schema_loader::CatalogSchema;
pub use taxonomy::{
    CategoryGroup, DocumentGroup, DocumentNode, Entry, SearchHeader, Selection, SubCategoryGroup,
    View, ViewStatus,
};

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

const ROOT_SENTINEL: &str = config::DEFAULT_CATALOG_PATH;

fn is_repo_root(candidate: &Path) -> bool {
    candidate.join(ROOT_SENTINEL).is_file()
}

fn repo_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_repo_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_repo_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the directory holding `catalogs/documents.json`.
///
/// Checks `MEDIDOCS_ROOT`, then the executable's ancestors, then the
/// build-time `MEDIDOCS_ROOT_HINT`.
pub fn find_repo_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var("MEDIDOCS_ROOT") {
        if let Some(root) = repo_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("MEDIDOCS_ROOT_HINT") {
        if let Some(root) = repo_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!(
        "Unable to locate the medidocs root ({ROOT_SENTINEL} not found). Set MEDIDOCS_ROOT or pass --catalog."
    );
}

/// Configuration for a binary: repository defaults when a root is found,
/// overlaid with the environment.
pub fn load_config() -> CatalogConfig {
    let root = find_repo_root().ok();
    CatalogConfig::from_env(root.as_deref())
}

/// Stderr logging for the binaries; `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn search_upwards_finds_catalog_root() {
        let temp = TempRepo::new();
        let catalogs = temp.root.join("catalogs");
        fs::create_dir_all(&catalogs).unwrap();
        fs::write(catalogs.join("documents.json"), "[]").unwrap();
        let nested = temp.root.join("target/debug");
        fs::create_dir_all(&nested).unwrap();

        let found = search_upwards(&nested).unwrap();
        assert_eq!(found, fs::canonicalize(&temp.root).unwrap());
    }

    #[test]
    fn hint_without_catalog_is_ignored() {
        let temp = TempRepo::new();
        assert!(repo_root_from_hint(temp.root.to_str().unwrap()).is_none());
        assert!(repo_root_from_hint("").is_none());
    }

    struct TempRepo {
        root: PathBuf,
    }

    impl TempRepo {
        fn new() -> Self {
            static COUNTER: AtomicUsize = AtomicUsize::new(0);
            let mut dir = env::temp_dir();
            dir.push(format!(
                "medidocs-root-test-{}-{}",
                std::process::id(),
                COUNTER.fetch_add(1, Ordering::SeqCst)
            ));
            fs::create_dir_all(&dir).unwrap();
            Self { root: dir }
        }
    }

    impl Drop for TempRepo {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }
}
