//! Process command - extract records from a single annexure document.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use packlist_core::annexure::{extract, normalize, normalize_basic};
use packlist_core::docx::read_paragraphs;
use packlist_core::models::record::{LineItem, OrderLine};
use packlist_core::xlsx::{write_line_items, write_order_lines};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (.docx)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: input with .xlsx extension, stdout for json/csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "xlsx")]
    format: OutputFormat,

    /// Produce the condensed four-column order line export
    #[arg(long)]
    basic: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Excel workbook
    Xlsx,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "docx" {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    info!("Processing file: {}", args.input.display());

    // Create progress bar
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Loading document...");
    pb.set_position(10);
    let data = fs::read(&args.input)?;

    pb.set_message("Reading paragraphs...");
    pb.set_position(30);
    let paragraphs = read_paragraphs(&data)?;
    debug!("Document has {} paragraphs", paragraphs.len());

    pb.set_message("Locating annexure...");
    pb.set_position(50);
    let text = extract(&paragraphs);
    if text.is_empty() {
        pb.finish_and_clear();
        anyhow::bail!("No annexure found in {}", args.input.display());
    }

    pb.set_message("Normalizing records...");
    pb.set_position(70);

    if args.basic {
        let lines = normalize_basic(&text)?;
        pb.set_position(100);
        pb.finish_with_message("Done");

        println!("{} {} order lines", style("ℹ").blue(), lines.len());
        write_order_output(&args, &lines)?;
    } else {
        let items = normalize(&text)?;
        pb.set_position(100);
        pb.finish_with_message("Done");

        println!("{} {} line items", style("ℹ").blue(), items.len());
        write_items_output(&args, &items)?;
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn write_items_output(args: &ProcessArgs, items: &[LineItem]) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Xlsx => {
            let bytes = write_line_items(items, &document_title(&args.input))?;
            write_workbook_output(args, bytes)
        }
        OutputFormat::Json => write_text_output(args, serde_json::to_string(items)?),
        OutputFormat::Csv => write_text_output(args, format_items_csv(items)?),
    }
}

fn write_order_output(args: &ProcessArgs, lines: &[OrderLine]) -> anyhow::Result<()> {
    match args.format {
        OutputFormat::Xlsx => {
            let bytes = write_order_lines(lines, &document_title(&args.input))?;
            write_workbook_output(args, bytes)
        }
        OutputFormat::Json => write_text_output(args, serde_json::to_string(lines)?),
        OutputFormat::Csv => write_text_output(args, format_orders_csv(lines)?),
    }
}

fn write_workbook_output(args: &ProcessArgs, bytes: Vec<u8>) -> anyhow::Result<()> {
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("xlsx"));

    fs::write(&output_path, bytes)?;
    println!(
        "{} Output written to {}",
        style("✓").green(),
        output_path.display()
    );
    Ok(())
}

fn write_text_output(args: &ProcessArgs, output: String) -> anyhow::Result<()> {
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }
    Ok(())
}

/// Title placed on the first row of workbook exports.
fn document_title(input: &Path) -> String {
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Packing List")
        .to_string()
}

fn format_items_csv(items: &[LineItem]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(LineItem::COLUMNS)?;

    for item in items {
        wtr.write_record([
            &item.order_number,
            &item.requested_material,
            &item.dispatched_material,
            &item.quantity.map(|d| d.to_string()).unwrap_or_default(),
            &item
                .invoiced_quantity
                .map(|d| d.to_string())
                .unwrap_or_default(),
            &item
                .invoiced_unit_value
                .map(|d| d.to_string())
                .unwrap_or_default(),
            &item.unit_of_measure,
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_orders_csv(lines: &[OrderLine]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(OrderLine::COLUMNS)?;

    for line in lines {
        wtr.write_record([
            &line.order_number,
            &line.requested_material,
            &line.quantity.map(|d| d.to_string()).unwrap_or_default(),
            &line.unit_rate.map(|d| d.to_string()).unwrap_or_default(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
