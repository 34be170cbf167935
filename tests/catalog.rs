// Catalog loading guard rails: the bundled catalog, load-time rejection of
// malformed records, and agreement between the CSV source and its JSON.
mod support;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use medidocs::catalog::{csv_source, load_catalog_from_path};
use medidocs::{CategoryKey, DisplayConfig, DocumentCatalog, DocumentId, IconType};
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

use support::{catalog_path, csv_path};

fn write_catalog(value: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, value)?;
    file.flush()?;
    Ok(file)
}

fn load(value: &Value) -> Result<DocumentCatalog> {
    let file = write_catalog(value)?;
    DocumentCatalog::load(file.path(), &DisplayConfig::default())
}

#[test]
fn load_bundled_catalog_smoke() -> Result<()> {
    let catalog = DocumentCatalog::load(&catalog_path(), &DisplayConfig::default())?;
    assert!(!catalog.is_empty());
    let meta = catalog.metadata().expect("bundled catalog has metadata");
    assert_eq!(meta.total_documents, catalog.len());
    for record in catalog.records() {
        assert!(!record.id.as_str().is_empty());
        assert!(!record.title.is_empty());
        assert_ne!(CategoryKey::parse(&record.category), CategoryKey::All);
        assert!(!record.color.is_empty());
    }
    Ok(())
}

#[test]
fn bundled_csv_matches_bundled_json() -> Result<()> {
    let from_csv = csv_source::read_records_from_path(&csv_path())?;
    let from_json = load_catalog_from_path(&catalog_path())?;
    assert_eq!(from_csv, from_json.documents);
    Ok(())
}

#[test]
fn generated_catalog_carries_metadata() -> Result<()> {
    let records = csv_source::read_records_from_path(&csv_path())?;
    let count = records.len();
    let at = Utc.with_ymd_and_hms(2026, 10, 1, 12, 0, 0).unwrap();
    let file = csv_source::generate(records, at);
    let meta = file.metadata.clone().expect("metadata");
    assert_eq!(meta.total_documents, count);
    assert_eq!(meta.version, "1.0.0");
    assert_eq!(meta.last_updated, Some(at));

    let value = serde_json::to_value(&file)?;
    assert_eq!(value["metadata"]["totalDocuments"], json!(count));
    assert_eq!(value["metadata"]["lastUpdated"], json!("2026-10-01T12:00:00Z"));
    // Absent cells are omitted rather than written as empty strings.
    assert!(value["documents"][0].get("subCategory").is_none());

    DocumentCatalog::from_file(file, &DisplayConfig::default())?;
    Ok(())
}

#[test]
fn reserved_category_is_rejected() {
    let err = load(&json!([{"id": "1", "title": "t", "category": "tous"}])).unwrap_err();
    assert!(format!("{err:#}").contains("reserved category"), "{err:#}");
}

#[test]
fn missing_required_fields_are_rejected_with_position() {
    let err = load(&json!([
        {"id": "1", "title": "ok", "category": "c"},
        {"id": "2", "category": "c"}
    ]))
    .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("document #2"), "{message}");
    assert!(message.contains("'title'"), "{message}");

    assert!(load(&json!([{"title": "t", "category": "c"}])).is_err());
    assert!(load(&json!([{"id": "1", "title": "t", "category": "  "}])).is_err());
}

#[test]
fn metadata_total_must_match() {
    let err = load(&json!({
        "documents": [{"id": "1", "title": "t", "category": "c"}],
        "metadata": {"totalDocuments": 2, "version": "1.0.0"}
    }))
    .unwrap_err();
    assert!(format!("{err:#}").contains("totalDocuments"));
}

#[test]
fn unknown_metadata_version_is_rejected() {
    assert!(
        load(&json!({
            "documents": [],
            "metadata": {"totalDocuments": 0, "version": "9.9.9"}
        }))
        .is_err()
    );
}

#[test]
fn empty_catalog_loads() -> Result<()> {
    let catalog = load(&json!({"documents": []}))?;
    assert!(catalog.is_empty());
    let tabs = catalog.categories(&DisplayConfig::default());
    assert_eq!(tabs.len(), 1);
    assert_eq!(tabs[0].count, 0);
    Ok(())
}

#[test]
fn colors_are_inherited_within_a_category() -> Result<()> {
    let display = DisplayConfig::default();
    let catalog = load(&json!([
        {"id": "1", "title": "a", "category": "X"},
        {"id": "2", "title": "b", "category": "X", "color": "#123456"},
        {"id": "3", "title": "c", "category": "Y"}
    ]))?;
    let colors: Vec<&str> = catalog.records().iter().map(|r| r.color.as_str()).collect();
    assert_eq!(colors, ["#123456", "#123456", display.default_color.as_str()]);
    Ok(())
}

#[test]
fn find_returns_every_variant() -> Result<()> {
    let catalog = DocumentCatalog::load(&catalog_path(), &DisplayConfig::default())?;
    let variants = catalog.find(&DocumentId::from("1"));
    assert_eq!(variants.len(), 2);
    assert!(variants.iter().all(|r| r.icon_type == IconType::External));
    assert!(catalog.find(&DocumentId::from("absent")).is_empty());
    Ok(())
}
