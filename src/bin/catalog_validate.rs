//! Validate a catalog file against the JSON schema and the load-time rules.
//!
//! Usage:
//!   catalog-validate --file catalogs/documents.json
//!   catalog-validate --schema schema/document_catalog.schema.json < documents.json

use anyhow::{Context, Result};
use clap::Parser;
use medidocs::catalog::parse_catalog_str;
use medidocs::taxonomy::list_categories;
use medidocs::{CatalogSchema, DocumentCatalog, init_tracing, load_config};
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog-validate")]
#[command(about = "Validate catalog JSON against the schema and load-time rules")]
struct Cli {
    /// Catalog file; reads stdin when omitted.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Schema file; the bundled schema is used when omitted.
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    let mut buf = String::new();
    if let Some(path) = file {
        File::open(path)
            .with_context(|| format!("opening input file {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading input file {}", path.display()))?;
    } else {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for catalog JSON")?;
    }
    Ok(buf)
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config();
    let input = read_input(cli.file.as_ref())?;

    let value: Value = serde_json::from_str(&input).context("parsing input JSON")?;
    let schema = match &cli.schema {
        Some(path) => CatalogSchema::load(path)?,
        None => CatalogSchema::embedded()?,
    };
    schema.validate(&value)?;

    let catalog = DocumentCatalog::from_file(parse_catalog_str(&input)?, &config.display)?;
    println!(
        "ok: {} documents in {} categories",
        catalog.len(),
        list_categories(catalog.records()).len()
    );
    Ok(())
}
