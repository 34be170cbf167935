//! Browse and search the document catalog from the command line.
//!
//! Usage:
//!   medidocs categories
//!   medidocs browse --category "GUIDES OFFICIELS" --sub-category Hygiène
//!   medidocs search steril
//!   medidocs --json search steril --category PROTOCOLES
//!   medidocs open 12 --year 2024

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use medidocs::display::{category_icon, elements_label, empty_state};
use medidocs::{
    CatalogConfig, CategoryKey, DocumentCatalog, DocumentId, Entry, LocalAssets, Selection, Target,
    View, init_tracing, load_config, resolve_target,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "medidocs")]
#[command(about = "Browse and search the reference-document catalog")]
struct Cli {
    /// Catalog file (defaults to MEDIDOCS_CATALOG or catalogs/documents.json).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List category tabs, "Tous" first.
    Categories,
    /// Show the listing for a category, sub-category or group.
    Browse {
        #[arg(long, default_value = medidocs::ALL_CATEGORY)]
        category: String,
        #[arg(long)]
        sub_category: Option<String>,
        #[arg(long)]
        group: Option<String>,
        #[arg(long)]
        query: Option<String>,
    },
    /// Search titles, descriptions and categories.
    Search {
        query: String,
        #[arg(long, default_value = medidocs::ALL_CATEGORY)]
        category: String,
    },
    /// Print where a document opens or downloads from.
    Open {
        id: String,
        /// Pick a variant when several documents share the id.
        #[arg(long)]
        year: Option<String>,
    },
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
    let config = load_config().with_catalog_path(cli.catalog);
    let catalog = DocumentCatalog::load(&config.catalog_path, &config.display)?;

    match cli.command {
        Command::Categories => print_categories(&catalog, &config, cli.json),
        Command::Browse {
            category,
            sub_category,
            group,
            query,
        } => {
            let selection = Selection {
                category: CategoryKey::parse(&category),
                sub_category,
                group: group.map(DocumentId),
            };
            print_view(&catalog.view(&selection, query.as_deref()), cli.json)
        }
        Command::Search { query, category } => print_view(
            &catalog.search(Some(&query), &CategoryKey::parse(&category)),
            cli.json,
        ),
        Command::Open { id, year } => open_document(&catalog, &config, &id, year.as_deref(), cli.json),
    }
}

fn print_categories(catalog: &DocumentCatalog, config: &CatalogConfig, json: bool) -> Result<()> {
    let categories = catalog.categories(&config.display);
    if json {
        return print_json(&categories);
    }
    for category in &categories {
        println!(
            "[{}] {} ({} docs)",
            category_icon(&category.key, &config.display),
            category.name(),
            category.count
        );
    }
    Ok(())
}

fn print_view(view: &View, json: bool) -> Result<()> {
    if json {
        return print_json(view);
    }
    if let Some((title, hint)) = empty_state(view.status) {
        println!("{title}");
        println!("{hint}");
        return Ok(());
    }
    println!("{}", elements_label(view.element_count()));
    for entry in &view.entries {
        print_entry(entry);
    }
    Ok(())
}

fn print_entry(entry: &Entry) {
    match entry {
        Entry::SearchHeader(_) => {
            println!("== {} · {}", entry.title(), entry.description());
        }
        _ => {
            let action = entry.action_icon().unwrap_or("");
            println!(
                "  [{}] {} - {} ({}) {}",
                entry.icon(),
                entry.title(),
                entry.description(),
                entry.subtitle(),
                action
            );
        }
    }
}

fn open_document(
    catalog: &DocumentCatalog,
    config: &CatalogConfig,
    id: &str,
    year: Option<&str>,
    json: bool,
) -> Result<()> {
    let id = DocumentId(id.to_string());
    let variants = catalog.find(&id);
    if variants.is_empty() {
        bail!("no document with id {id}");
    }
    let record = match year {
        Some(year) => variants
            .iter()
            .find(|r| r.year.as_deref() == Some(year))
            .with_context(|| format!("document {id} has no variant for year {year}"))?,
        None => &variants[0],
    };

    let assets = LocalAssets::scan(&config.local_assets_dir)?;
    let target = resolve_target(record, &assets, config)?;
    if json {
        return print_json(&target);
    }
    match target {
        Target::Remote { url, action } => println!("{action:?}: {url}"),
        Target::Local { path, mime } => println!("Local: {} ({mime})", path.display()),
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{rendered}");
    Ok(())
}
