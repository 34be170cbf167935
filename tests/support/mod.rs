#![allow(dead_code)]

use anyhow::{Context, Result};
use medidocs::{DocumentId, DocumentRecord, IconType};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn catalog_path() -> PathBuf {
    repo_root().join("catalogs/documents.json")
}

pub fn csv_path() -> PathBuf {
    repo_root().join("assets/documents.csv")
}

// Record builder for engine tests; only the fields a test cares about need
// to be spelled out.
pub struct Doc(DocumentRecord);

pub fn doc(id: &str, title: &str, category: &str) -> Doc {
    Doc(DocumentRecord {
        id: DocumentId(id.to_string()),
        title: title.to_string(),
        description: String::new(),
        category: category.to_string(),
        sub_category: None,
        doc_type: "PDF".to_string(),
        year: None,
        url: None,
        icon_type: IconType::Download,
        color: format!("#{}", category.len()),
    })
}

impl Doc {
    pub fn sub(mut self, sub_category: &str) -> Self {
        self.0.sub_category = Some(sub_category.to_string());
        self
    }

    pub fn year(mut self, year: &str) -> Self {
        self.0.year = Some(year.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.0.description = description.to_string();
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.0.color = color.to_string();
        self
    }

    pub fn external(mut self) -> Self {
        self.0.icon_type = IconType::External;
        self
    }

    pub fn build(self) -> DocumentRecord {
        self.0
    }
}

/// A small catalog with duplicates, sub-categories and ungrouped items.
///
/// PROTOCOLES: Stérilisation {2, 7}, Entretien {3, 3}, ungrouped {8}
/// GUIDES: ungrouped {1, 1}, Hygiène {4}
/// ARTICLES: ungrouped {5}
pub fn sample_records() -> Vec<DocumentRecord> {
    vec![
        doc("1", "Guide de prévention", "GUIDES").year("2023").build(),
        doc("2", "Fiche de stérilisation", "PROTOCOLES")
            .sub("Stérilisation")
            .description("Cycles autoclave")
            .build(),
        doc("3", "Traçabilité entretien", "PROTOCOLES").sub("Entretien").year("2023").build(),
        doc("1", "Guide de prévention", "GUIDES").year("2026").build(),
        doc("4", "Hygiène des mains", "GUIDES").sub("Hygiène").build(),
        doc("3", "Traçabilité entretien", "PROTOCOLES").sub("Entretien").year("2024").build(),
        doc("5", "Article sur les DASRI", "ARTICLES").external().build(),
        doc("7", "Contrôle des sachets", "PROTOCOLES")
            .sub("Stérilisation")
            .description("Indicateurs de passage")
            .build(),
        doc("8", "Bionettoyage", "PROTOCOLES").build(),
    ]
}

pub fn ids(records: &[DocumentRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to execute {:?}", cmd.get_program()))?;
    Ok(output)
}

pub fn medidocs(catalog: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_medidocs"));
    cmd.arg("--catalog").arg(catalog).env_remove("MEDIDOCS_CATALOG");
    cmd
}
