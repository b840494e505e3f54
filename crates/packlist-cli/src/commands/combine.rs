//! Combine command - consolidate multiple documents into one workbook.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use packlist_core::batch::{SourceDocument, SourceKind, consolidate};
use packlist_core::models::config::{Brand, ConsolidationOptions, ContainerType};
use packlist_core::xlsx::write_consolidated;

/// Arguments for the combine command.
#[derive(Args)]
pub struct CombineArgs {
    /// Input files or glob patterns (.docx and .xlsx)
    #[arg(required = true)]
    input: Vec<String>,

    /// Output workbook
    #[arg(short, long, default_value = "datos_combinados.xlsx")]
    output: PathBuf,

    /// Dispatch transport number stamped on every row
    #[arg(long, default_value = "Numero de DT")]
    dt: String,

    /// Container type stamped on every row
    #[arg(long, value_enum, default_value = "40hc")]
    container_type: ContainerKind,

    /// Container identifier stamped on every row
    #[arg(long, default_value = "Contenedor por defecto")]
    container: String,

    /// Annexure layout to expect
    #[arg(long, value_enum, default_value = "maruti-suzuki")]
    brand: BrandArg,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum BrandArg {
    /// Maruti Suzuki invoice-cum-packing-list annexure
    MarutiSuzuki,
}

impl From<BrandArg> for Brand {
    fn from(value: BrandArg) -> Self {
        match value {
            BrandArg::MarutiSuzuki => Brand::MarutiSuzuki,
        }
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ContainerKind {
    /// 40-foot high cube
    #[value(name = "40hc")]
    HighCube40,

    /// 40-foot standard
    #[value(name = "4std")]
    Standard40,

    /// Type 3
    #[value(name = "tipo3")]
    Type3,

    /// Type 4
    #[value(name = "tipo4")]
    Type4,
}

impl From<ContainerKind> for ContainerType {
    fn from(value: ContainerKind) -> Self {
        match value {
            ContainerKind::HighCube40 => ContainerType::HighCube40,
            ContainerKind::Standard40 => ContainerType::Standard40,
            ContainerKind::Type3 => ContainerType::Type3,
            ContainerKind::Type4 => ContainerType::Type4,
        }
    }
}

pub fn run(args: CombineArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    // Expand glob patterns, keeping only supported document types
    let mut files: Vec<(PathBuf, SourceKind)> = Vec::new();
    for pattern in &args.input {
        for path in glob(pattern)?.filter_map(|entry| entry.ok()) {
            if let Some(kind) = source_kind(&path) {
                files.push((path, kind));
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No matching files found for: {}", args.input.join(" "));
    }

    println!(
        "{} Found {} files to consolidate",
        style("ℹ").blue(),
        files.len()
    );

    // Set up progress bar
    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    // Read files up front; an unreadable file is reported like a
    // processing failure and does not abort the batch.
    let mut documents = Vec::with_capacity(files.len());
    let mut failures: Vec<(String, String)> = Vec::new();

    for (path, kind) in &files {
        match fs::read(path) {
            Ok(data) => documents.push(SourceDocument {
                name: display_name(path),
                kind: *kind,
                data,
            }),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                failures.push((display_name(path), e.to_string()));
            }
        }
        overall_pb.inc(1);
    }

    let attempted = documents.len();
    let batch = consolidate(documents);
    overall_pb.finish_with_message("Complete");

    let successes = attempted - batch.failures.len();
    failures.extend(
        batch
            .failures
            .iter()
            .map(|failure| (failure.name.clone(), failure.error.to_string())),
    );

    if successes == 0 {
        println!();
        println!("{}", style("Failed documents:").red());
        for (name, error) in &failures {
            println!("  - {}: {}", name, error);
        }
        anyhow::bail!("No documents could be processed");
    }

    debug!("Consolidated {} records", batch.records.len());

    let options = ConsolidationOptions {
        brand: args.brand.into(),
        label: args.dt.clone(),
        container_type: args.container_type.into(),
        container_id: args.container.clone(),
    };

    let bytes = write_consolidated(&batch.records, &options)?;
    fs::write(&args.output, bytes)?;

    println!(
        "{} Output written to {}",
        style("✓").green(),
        args.output.display()
    );

    // Print summary
    println!();
    println!(
        "{} Consolidated {} records from {} documents in {:?}",
        style("✓").green(),
        batch.records.len(),
        successes,
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successes).green(),
        style(failures.len()).red()
    );

    if !failures.is_empty() {
        println!();
        println!("{}", style("Failed documents:").red());
        for (name, error) in &failures {
            println!("  - {}: {}", name, error);
        }
    }

    Ok(())
}

/// Map a path to the source kind its extension implies.
fn source_kind(path: &Path) -> Option<SourceKind> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "docx" => Some(SourceKind::Docx),
        "xlsx" => Some(SourceKind::Workbook),
        _ => None,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .unwrap_or_else(|| path.display().to_string())
}
