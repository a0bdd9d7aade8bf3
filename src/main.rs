//! Larder
//!
//! Costs the recipes in a pantry document and prints the report as JSON.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use larder::build_info::BuildInfo;
use larder::tools::costing::{cost_document, list_units};
use larder::tools::document::CostDocument;

#[derive(Debug, Parser)]
#[command(name = "larder", version, about = "Recipe cost and energy calculator")]
struct Cli {
    /// Costing document (ingredients and recipes)
    #[arg(long, env = "LARDER_DOCUMENT_PATH")]
    document: Option<PathBuf>,

    /// Only cost the recipe with this id
    #[arg(long)]
    recipe: Option<i64>,

    /// List the known units instead of costing
    #[arg(long)]
    units: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

/// Default document location: data/pantry.json under the project root
fn default_document_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(parent) = path.parent() {
            if let Some(grandparent) = parent.parent() {
                path = grandparent.to_path_buf();
            }
        }
    }

    path.push("data");
    path.push("pantry.json");
    path
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the JSON report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("larder=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    eprintln!("{}", BuildInfo::current().banner());

    if cli.units {
        println!("{}", to_json(&list_units(), cli.pretty)?);
        return Ok(());
    }

    let document_path = cli.document.unwrap_or_else(default_document_path);
    tracing::info!("Document path: {}", document_path.display());

    let document = CostDocument::load(&document_path)?;
    let report = cost_document(&document, cli.recipe);

    if let Some(id) = cli.recipe {
        if report.recipes.iter().all(|r| r.recipe_id() != id) {
            tracing::warn!("No recipe with id {} in {}", id, document_path.display());
        }
    }

    println!("{}", to_json(&report, cli.pretty)?);
    Ok(())
}
