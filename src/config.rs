//! Startup configuration.
//!
//! Everything the engine and the CLIs need beyond the document list itself
//! (paths, fallback URL, theme colors, category icons) lives here and is passed
//! explicitly. Values come from defaults, then environment variables, then CLI
//! flags applied by the binaries.

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

pub const ENV_CATALOG: &str = "MEDIDOCS_CATALOG";
pub const ENV_LOCAL_ASSETS: &str = "MEDIDOCS_LOCAL_ASSETS";
pub const ENV_FALLBACK_URL: &str = "MEDIDOCS_FALLBACK_URL";

/// Catalog location relative to the repository root.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/documents.json";
/// Directory holding the files referenced by `file://` URLs.
pub const DEFAULT_LOCAL_ASSETS_PATH: &str = "assets/local-files";
/// Portal page opened for documents that carry no URL.
pub const DEFAULT_FALLBACK_URL: &str =
    "https://play.senzu.app/s/53182@3b5e6adfe66aea771c693ea21860551b";
/// Color of the synthetic "Tous" category.
pub const DEFAULT_ALL_COLOR: &str = "#007AFF";
/// Color for records whose category never declares one.
pub const DEFAULT_DOCUMENT_COLOR: &str = "#2E86AB";

/// Theme values consumed by the display helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    pub all_color: String,
    pub default_color: String,
    /// Icon name per category; categories not listed use `folder`.
    pub category_icons: BTreeMap<String, String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let category_icons = [
            ("FORMATION", "school"),
            ("LOCAUX HYGIENE PROTECTION", "shield-checkmark"),
            ("DISPOSITIFS MEDICAUX", "medical"),
            ("DASRI AIR EAU", "water"),
            ("PROTOCOLES", "document-text"),
            ("GUIDES OFFICIELS", "book"),
            ("ARTICLES", "newspaper"),
            ("A.R.S", "business"),
        ]
        .into_iter()
        .map(|(name, icon)| (name.to_string(), icon.to_string()))
        .collect();

        Self {
            all_color: DEFAULT_ALL_COLOR.to_string(),
            default_color: DEFAULT_DOCUMENT_COLOR.to_string(),
            category_icons,
        }
    }
}

/// Resolved configuration for one process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub catalog_path: PathBuf,
    pub local_assets_dir: PathBuf,
    pub fallback_url: String,
    pub display: DisplayConfig,
}

impl CatalogConfig {
    /// Defaults rooted at `root` (paths are relative to the working directory
    /// when no root is known).
    pub fn rooted_at(root: Option<&Path>) -> Self {
        let base = root.map(Path::to_path_buf).unwrap_or_default();
        Self {
            catalog_path: base.join(DEFAULT_CATALOG_PATH),
            local_assets_dir: base.join(DEFAULT_LOCAL_ASSETS_PATH),
            fallback_url: DEFAULT_FALLBACK_URL.to_string(),
            display: DisplayConfig::default(),
        }
    }

    /// Defaults overlaid with `MEDIDOCS_*` environment variables.
    pub fn from_env(root: Option<&Path>) -> Self {
        let mut config = Self::rooted_at(root);
        if let Some(path) = env_value(ENV_CATALOG) {
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(path) = env_value(ENV_LOCAL_ASSETS) {
            config.local_assets_dir = PathBuf::from(path);
        }
        if let Some(url) = env_value(ENV_FALLBACK_URL) {
            config.fallback_url = url;
        }
        config
    }

    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.catalog_path = path;
        }
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::rooted_at(None)
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooted_defaults_join_relative_paths() {
        let config = CatalogConfig::rooted_at(Some(Path::new("/srv/medidocs")));
        assert_eq!(
            config.catalog_path,
            PathBuf::from("/srv/medidocs/catalogs/documents.json")
        );
        assert_eq!(
            config.local_assets_dir,
            PathBuf::from("/srv/medidocs/assets/local-files")
        );
        assert_eq!(config.display.all_color, DEFAULT_ALL_COLOR);
    }

    #[test]
    fn explicit_catalog_path_wins() {
        let config = CatalogConfig::default().with_catalog_path(Some(PathBuf::from("x.json")));
        assert_eq!(config.catalog_path, PathBuf::from("x.json"));
        let untouched = CatalogConfig::default().with_catalog_path(None);
        assert_eq!(untouched.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
    }
}
