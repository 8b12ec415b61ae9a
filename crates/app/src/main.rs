use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use services::{HttpSheetFetcher, SheetLoader};
use sheet_core::{CheatSheet, validate_text};

/// Validate, preview and index cheat-sheet documents
#[derive(Parser)]
#[command(name = "cheatsheet")]
#[command(about = "Cheat-sheet document toolbox", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a document's structure before publishing it
    Validate {
        /// Path to the JSON document; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// Validate a document and print its section outline
    Preview {
        /// Path to the JSON document
        file: PathBuf,
    },
    /// Generate manifest.json for a directory of documents
    Manifest {
        /// Directory containing the published *.json documents
        dir: PathBuf,
    },
    /// List the documents a server advertises in its manifest
    List {
        /// Base URL the documents are served from
        base_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();
    debug!("started with verbosity level {}", cli.verbose);

    match cli.command {
        Commands::Validate { file } => run_validate(file.as_deref()),
        Commands::Preview { file } => run_preview(&file),
        Commands::Manifest { dir } => run_manifest(&dir),
        Commands::List { base_url } => run_list(base_url).await,
    }
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => io::read_to_string(io::stdin()).context("reading stdin"),
    }
}

fn run_validate(file: Option<&Path>) -> anyhow::Result<()> {
    let input = read_input(file)?;
    let report = validate_text(&input);

    if !report.errors().is_empty() {
        println!("Errors ({}):", report.errors().len());
        for error in report.errors() {
            println!("  - {error}");
        }
    }
    if !report.warnings().is_empty() {
        println!("Warnings ({}):", report.warnings().len());
        for warning in report.warnings() {
            println!("  - {warning}");
        }
    }

    match report.data() {
        Some(sheet) => {
            println!("Valid & renderable");
            println!(
                "  {} section(s), {} card(s), {} quiz question(s)",
                sheet.section_count(),
                sheet.card_count(),
                sheet.quiz_count()
            );
            Ok(())
        }
        None => bail!("document cannot be rendered"),
    }
}

fn run_preview(file: &Path) -> anyhow::Result<()> {
    let input = read_input(Some(file))?;
    let report = validate_text(&input);
    let Some(sheet) = report.data() else {
        for error in report.errors() {
            println!("  - {error}");
        }
        bail!("document cannot be rendered");
    };

    print_outline(sheet);
    Ok(())
}

fn print_outline(sheet: &CheatSheet) {
    println!("Name: {}", sheet.name);
    if let Some(role) = &sheet.role {
        println!("Role: {role}");
    }
    if let Some(description) = &sheet.description {
        println!("Description: {description}");
    }
    println!("Sections:");
    for (index, section) in sheet.sections.iter().enumerate() {
        println!(
            "  {}. {} [{}] - {} card(s), {} quiz question(s)",
            index + 1,
            section.title,
            section.icon,
            section.cards.len(),
            section.quiz.len()
        );
    }
}

fn run_manifest(dir: &Path) -> anyhow::Result<()> {
    let manifest = services::write_manifest(dir)
        .with_context(|| format!("generating manifest in {}", dir.display()))?;

    println!("Manifest generated successfully");
    println!("Found {} cheatsheet(s):", manifest.cheatsheets.len());
    for entry in &manifest.cheatsheets {
        println!("  - {} ({}.json)", entry.display_name, entry.name);
    }
    Ok(())
}

async fn run_list(base_url: String) -> anyhow::Result<()> {
    let loader = SheetLoader::new(Arc::new(HttpSheetFetcher::new(base_url)));
    let manifest = loader
        .load_manifest()
        .await
        .context("fetching remote manifest")?;

    if manifest.cheatsheets.is_empty() {
        println!("No cheatsheets found");
        return Ok(());
    }
    for entry in &manifest.cheatsheets {
        println!("{}  ({})", entry.display_name, entry.name);
    }
    Ok(())
}
