//! Serde model for catalog files and the normalized document record.
//!
//! `RawDocumentRecord` mirrors what authors write (every field optional, so
//! load-time validation can name the offending record instead of failing
//! inside serde). `DocumentRecord` is the shape the taxonomy engine works on:
//! required fields present, defaults applied, colors resolved.

use crate::catalog::DocumentId;
use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;

/// Label used when a record does not declare a `type`.
pub const DEFAULT_DOCUMENT_TYPE: &str = "Document";

/// Whether a document is framed as a link to open or a file to download.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconType {
    External,
    #[default]
    Download,
}

impl IconType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "external" => Some(IconType::External),
            "download" => Some(IconType::Download),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconType::External => "external",
            IconType::Download => "download",
        }
    }
}

impl fmt::Display for IconType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document entry exactly as authored in JSON or CSV.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocumentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A validated document record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub icon_type: IconType,
    pub color: String,
}

/// Generation metadata written next to the documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    pub total_documents: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    pub version: String,
}

/// On-disk catalog: the document list plus optional metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub documents: Vec<RawDocumentRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<CatalogMetadata>,
}

/// Read a catalog file from disk without validating its contents.
pub fn load_catalog_from_path(path: &Path) -> Result<CatalogFile> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog_str(&data).with_context(|| format!("parsing catalog {}", path.display()))
}

/// Parse catalog JSON. Accepts the wrapped `{documents, metadata}` form or a
/// bare array of records.
pub fn parse_catalog_str(input: &str) -> Result<CatalogFile> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("catalog input is empty");
    }

    let value: Value = serde_json::from_str(trimmed).context("catalog is not valid JSON")?;
    match value {
        Value::Array(_) => {
            let documents: Vec<RawDocumentRecord> = serde_json::from_value(value)
                .context("unable to parse JSON array of document records")?;
            Ok(CatalogFile {
                documents,
                metadata: None,
            })
        }
        Value::Object(_) => {
            serde_json::from_value(value).context("unable to parse catalog object")
        }
        _ => bail!("unsupported catalog JSON; expected object or array"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wrapped_and_bare_forms() {
        let wrapped = parse_catalog_str(
            r#"{"documents":[{"id":"1","title":"t","category":"c"}],
                "metadata":{"totalDocuments":1,"version":"1.0.0"}}"#,
        )
        .unwrap();
        assert_eq!(wrapped.documents.len(), 1);
        assert_eq!(wrapped.metadata.unwrap().total_documents, 1);

        let bare = parse_catalog_str(r#"[{"id":"1","title":"t","category":"c","subCategory":"s"}]"#)
            .unwrap();
        assert!(bare.metadata.is_none());
        assert_eq!(bare.documents[0].sub_category.as_deref(), Some("s"));
    }

    #[test]
    fn rejects_scalars_and_empty_input() {
        assert!(parse_catalog_str("").is_err());
        assert!(parse_catalog_str("42").is_err());
    }

    #[test]
    fn icon_type_parsing_is_lenient_on_case() {
        assert_eq!(IconType::parse("External"), Some(IconType::External));
        assert_eq!(IconType::parse("download "), Some(IconType::Download));
        assert_eq!(IconType::parse("stream"), None);
    }
}
