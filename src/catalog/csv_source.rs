//! CSV authoring format.
//!
//! Authors maintain the document list as a spreadsheet export whose header row
//! names the record fields (`id,title,description,category,subCategory,type,
//! year,url,iconType,color`). Empty cells mean "absent". Rows with fewer cells
//! than the header are skipped, extra trailing cells are ignored.

use crate::catalog::{CatalogFile, CatalogMetadata, DEFAULT_CATALOG_VERSION, RawDocumentRecord};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::warn;

/// Parse authored CSV rows into raw records.
pub fn read_records<R: Read>(mut reader: R) -> Result<Vec<RawDocumentRecord>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("reading CSV input")?;
    parse_records(&text)
}

pub fn read_records_from_path(path: &Path) -> Result<Vec<RawDocumentRecord>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_records(file).with_context(|| format!("parsing {}", path.display()))
}

fn parse_records(text: &str) -> Result<Vec<RawDocumentRecord>> {
    let text = text.trim_start_matches('\u{FEFF}');
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers().context("reading CSV header row")?.clone();
    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        // Line 1 is the header.
        let line = idx + 2;
        let row = row.with_context(|| format!("reading CSV row {line}"))?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        if row.len() < headers.len() {
            warn!(
                line,
                cells = row.len(),
                expected = headers.len(),
                "skipping CSV row with missing cells"
            );
            continue;
        }
        let cells: csv::StringRecord = row.iter().take(headers.len()).collect();
        let record: RawDocumentRecord = cells
            .deserialize(Some(&headers))
            .with_context(|| format!("decoding CSV row {line}"))?;
        records.push(blank_cells_to_none(record));
    }
    Ok(records)
}

fn blank_cells_to_none(record: RawDocumentRecord) -> RawDocumentRecord {
    fn clean(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.trim().is_empty())
    }
    RawDocumentRecord {
        id: clean(record.id),
        title: clean(record.title),
        description: clean(record.description),
        category: clean(record.category),
        sub_category: clean(record.sub_category),
        doc_type: clean(record.doc_type),
        year: clean(record.year),
        url: clean(record.url),
        icon_type: clean(record.icon_type),
        color: clean(record.color),
    }
}

/// Wrap records in a catalog file stamped with generation metadata.
pub fn generate(records: Vec<RawDocumentRecord>, generated_at: DateTime<Utc>) -> CatalogFile {
    let metadata = CatalogMetadata {
        total_documents: records.len(),
        last_updated: Some(generated_at),
        version: DEFAULT_CATALOG_VERSION.to_string(),
    };
    CatalogFile {
        documents: records,
        metadata: Some(metadata),
    }
}
