//! Generate the catalog JSON from the authored CSV.
//!
//! Usage:
//!   catalog-generate --input assets/documents.csv --output catalogs/documents.json
//!   catalog-generate --input assets/documents.csv > documents.json
//!
//! The generated file is validated with the same rules the app applies at
//! load time before anything is written.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use medidocs::catalog::csv_source;
use medidocs::{DocumentCatalog, init_tracing, load_config};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "catalog-generate")]
#[command(about = "Convert the authored documents CSV into catalog JSON")]
struct Cli {
    /// Authored CSV file.
    #[arg(long)]
    input: PathBuf,
    /// Destination JSON file; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
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

    let records = csv_source::read_records_from_path(&cli.input)?;
    let file = csv_source::generate(records, Utc::now());
    DocumentCatalog::from_file(file.clone(), &config.display)
        .with_context(|| format!("validating documents from {}", cli.input.display()))?;

    let rendered = serde_json::to_string_pretty(&file).context("serializing catalog")?;
    match &cli.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(path, rendered + "\n")
                .with_context(|| format!("writing {}", path.display()))?;
            info!(
                input = %cli.input.display(),
                output = %path.display(),
                documents = file.documents.len(),
                "catalog generated"
            );
            eprintln!(
                "catalog written to {} ({} documents)",
                path.display(),
                file.documents.len()
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
