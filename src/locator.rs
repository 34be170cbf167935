//! Where a document actually lives.
//!
//! A record's `url` is either a remote HTTP(S) address or a `file://<name>`
//! pseudo-URL naming a file shipped next to the catalog. Local files are
//! looked up in an explicit [`LocalAssets`] registry built at startup.

use crate::catalog::{DocumentRecord, IconType};
use crate::config::CatalogConfig;
use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_SCHEME: &str = "file://";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentLocator {
    Remote(String),
    Local(String),
}

impl DocumentLocator {
    pub fn parse(url: &str) -> Self {
        match url.strip_prefix(LOCAL_SCHEME) {
            Some(name) => DocumentLocator::Local(name.to_string()),
            None => DocumentLocator::Remote(url.to_string()),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, DocumentLocator::Local(_))
    }
}

/// Files that `file://` URLs may refer to, keyed by file name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalAssets {
    files: BTreeMap<String, PathBuf>,
}

impl LocalAssets {
    /// Register every regular file directly under `dir`. A missing directory
    /// yields an empty registry.
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut files = BTreeMap::new();
        if !dir.is_dir() {
            return Ok(Self { files });
        }
        let entries =
            fs::read_dir(dir).with_context(|| format!("listing local assets in {}", dir.display()))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("reading entry in {}", dir.display()))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.insert(name.to_string(), path.clone());
            }
        }
        Ok(Self { files })
    }

    pub fn from_paths(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        let files = paths
            .into_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?.to_string();
                Some((name, path))
            })
            .collect();
        Self { files }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn resolve(&self, name: &str) -> Result<&Path> {
        match self.files.get(name) {
            Some(path) => Ok(path.as_path()),
            None => bail!(
                "local file not found: {name} (available: {})",
                self.names().collect::<Vec<_>>().join(", ")
            ),
        }
    }
}

/// MIME type from a file extension; unknown extensions are opaque bytes.
pub fn mime_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "xls" => "application/vnd.ms-excel",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "doc" => "application/msword",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "ppt" => "application/vnd.ms-powerpoint",
        _ => "application/octet-stream",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteAction {
    Open,
    Download,
}

/// What selecting a document leads to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum Target {
    Remote { url: String, action: RemoteAction },
    Local { path: PathBuf, mime: &'static str },
}

/// Resolve a record to a concrete target. Records without a URL point at the
/// configured fallback page.
pub fn resolve_target(
    record: &DocumentRecord,
    assets: &LocalAssets,
    config: &CatalogConfig,
) -> Result<Target> {
    let url = record.url.as_deref().unwrap_or(&config.fallback_url);
    match DocumentLocator::parse(url) {
        DocumentLocator::Local(name) => {
            let path = assets
                .resolve(&name)
                .with_context(|| format!("opening document {}", record.id))?;
            Ok(Target::Local {
                path: path.to_path_buf(),
                mime: mime_type(&name),
            })
        }
        DocumentLocator::Remote(url) => {
            let action = match record.icon_type {
                IconType::External => RemoteAction::Open,
                IconType::Download => RemoteAction::Download,
            };
            Ok(Target::Remote { url, action })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_local_and_remote_urls() {
        assert_eq!(
            DocumentLocator::parse("file://fiche.docx"),
            DocumentLocator::Local("fiche.docx".to_string())
        );
        assert!(!DocumentLocator::parse("https://adf.asso.fr/guide.pdf").is_local());
    }

    #[test]
    fn mime_types_by_extension() {
        assert_eq!(mime_type("Guide.PDF"), "application/pdf");
        assert_eq!(mime_type("tableur.xlsx"), mime_type("autre.XLSX"));
        assert_eq!(mime_type("archive.zip"), "application/octet-stream");
        assert_eq!(mime_type("noextension"), "application/octet-stream");
    }

    #[test]
    fn missing_local_file_lists_available_names() {
        let assets = LocalAssets::from_paths([PathBuf::from("/a/one.pdf"), PathBuf::from("/a/two.xlsx")]);
        let err = assets.resolve("three.docx").unwrap_err().to_string();
        assert!(err.contains("three.docx"));
        assert!(err.contains("one.pdf, two.xlsx"));
    }
}
