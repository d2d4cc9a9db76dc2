//! Command-line front-end for the energy catalog.
//!
//! Answers the same queries as the HTTP API without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # List all energy types
//! cargo run --bin catalog -- list
//!
//! # Show one record (case-insensitive)
//! cargo run --bin catalog -- show Solar
//!
//! # Compare two records
//! cargo run --bin catalog -- compare wind hydro
//!
//! # Print the HTTP API's JSON instead of formatted text
//! cargo run --bin catalog -- --json compare wind hydro
//!
//! # Check a dataset file before rebuilding
//! cargo run --bin catalog -- validate --file data/catalog.json
//! ```

use energy_catalog::api::dto::compare::CompareResponse;
use energy_catalog::api::dto::list::ListResponse;
use energy_catalog::application::services::EnergyService;
use energy_catalog::domain::entities::{ComparisonResult, EnergyRecord};
use energy_catalog::domain::repositories::CatalogRepository;
use energy_catalog::infrastructure::catalog::StaticCatalog;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Query the renewable energy catalog.
#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print JSON in the same shape as the HTTP API
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Catalog queries.
#[derive(Subcommand)]
enum Commands {
    /// List all energy types
    List,

    /// Show one energy type
    Show {
        /// Energy type (e.g., "solar")
        energy_type: String,
    },

    /// Compare the advantages of two energy types
    Compare {
        /// First energy type
        first: String,

        /// Second energy type
        second: String,
    },

    /// Validate the built-in dataset or a dataset file
    Validate {
        /// Dataset file to check instead of the built-in catalog
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    run(Cli::parse())
}

/// Executes one command. Catalog misses surface as errors, so the process
/// exits non-zero with the same message the HTTP API returns.
fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List => {
            let keys = builtin_service()?.list_all();
            if cli.json {
                print_json(&ListResponse {
                    available_sources: keys,
                })?;
            } else {
                print_list(&keys);
            }
        }
        Commands::Show { energy_type } => {
            let record = builtin_service()?.lookup(&energy_type)?;
            if cli.json {
                print_json(&record)?;
            } else {
                print_record(&energy_type.to_lowercase(), &record);
            }
        }
        Commands::Compare { first, second } => {
            let comparison = builtin_service()?.compare(&first, &second)?;
            if cli.json {
                print_json(&CompareResponse::from(comparison))?;
            } else {
                print_comparison(&comparison);
            }
        }
        Commands::Validate { file } => validate(file.as_deref())?,
    }

    Ok(())
}

fn builtin_service() -> Result<EnergyService<StaticCatalog>> {
    let catalog = StaticCatalog::builtin().context("Failed to load built-in catalog")?;
    Ok(EnergyService::new(Arc::new(catalog)))
}

/// Loads a dataset and reports whether it satisfies the catalog rules.
fn validate(file: Option<&Path>) -> Result<()> {
    let catalog = match file {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            StaticCatalog::from_json(&json)
                .with_context(|| format!("Invalid catalog in {}", path.display()))?
        }
        None => StaticCatalog::builtin().context("Invalid built-in catalog")?,
    };

    println!(
        "{} {} energy types",
        "✓ Catalog is valid:".green().bold(),
        catalog.len().to_string().bright_white()
    );

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_list(keys: &[String]) {
    println!("{}", "Available energy types".bright_blue().bold());
    println!();
    for key in keys {
        println!("  • {}", key.cyan());
    }
    println!();
}

fn print_record(key: &str, record: &EnergyRecord) {
    println!("{}", key.bright_blue().bold());
    println!("  Type:        {}", record.kind);
    println!("  Source:      {}", record.source.cyan());
    println!("  Description: {}", record.description);
    println!();

    println!("{}", "Advantages:".bright_white().bold());
    for advantage in &record.advantages {
        println!("  • {}", advantage);
    }
    println!();

    println!("{}", "Uses:".bright_white().bold());
    for (capability, applicable) in record.uses.iter() {
        let mark = if applicable {
            "yes".green()
        } else {
            "no".red()
        };
        println!("  {:<15} {}", capability, mark);
    }
    println!();
}

fn print_comparison(comparison: &ComparisonResult) {
    println!(
        "{} {} {}",
        comparison.first.bright_blue().bold(),
        "vs".dimmed(),
        comparison.second.bright_blue().bold()
    );
    println!();

    print_section("Common advantages", &comparison.common);
    print_section(
        &format!("Only {}", comparison.first),
        &comparison.unique_to_first,
    );
    print_section(
        &format!("Only {}", comparison.second),
        &comparison.unique_to_second,
    );
}

fn print_section(title: &str, items: &[String]) {
    println!("{}", format!("{title}:").bright_white().bold());
    if items.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for item in items {
        println!("  • {}", item);
    }
    println!();
}
