//! OpenAPI Schema Builder CLI
//!
//! Command-line interface for converting Postman collections into OpenAPI
//! 3.0 schema documents.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::*;
use openapi_schema_builder_parser::postman::{ConversionEvent, ConversionReport};
use openapi_schema_builder_parser::{ConvertOptions, PlaceholderMap, PostmanParser};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the skipped-request report
const SKIP_REPORT_FILE: &str = "skipped_endpoints.json";

#[derive(Parser)]
#[command(name = "openapi-schema-builder")]
#[command(version, about = "Convert Postman collections into OpenAPI 3.0 schemas", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    # Convert a collection, discovering the base URL\n  \
    openapi-schema-builder -i shop.postman_collection.json -o shop-openapi.json\n\n  \
    # Force the server URL and fill in path variables\n  \
    openapi-schema-builder \\\n    \
    -i shop.postman_collection.json \\\n    \
    -o shop-openapi.json \\\n    \
    --baseurl https://staging.shop.io \\\n    \
    --placeholders ':orderId=1001,{{lineId}}=7'")]
struct Cli {
    /// Input JSON file (Postman collection)
    #[arg(short, long)]
    input: PathBuf,

    /// Output OpenAPI JSON file
    #[arg(short, long)]
    output: PathBuf,

    /// Base URL used for the server entry and {{base_url}}/{{host}} variables
    #[arg(long = "baseurl", value_name = "BASE_URL")]
    base_url: Option<String>,

    /// Literal path substitutions as comma-separated key=value pairs
    #[arg(long, value_name = "KEY=VALUE,...")]
    placeholders: Option<PlaceholderMap>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    print_banner();

    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let cli = Cli::parse();
    convert_command(&cli, Path::new("."))
}

fn print_banner() {
    println!(
        "{}\n",
        format!(
            "OpenAPI Schema Builder v{} :: Postman collection -> OpenAPI 3.0",
            env!("CARGO_PKG_VERSION")
        )
        .cyan()
        .bold()
    );
}

/// Convert the input collection and write the document and skip report
///
/// The skip report is written into `report_dir`.
fn convert_command(cli: &Cli, report_dir: &Path) -> Result<()> {
    println!("{} Reading input: {}", "→".cyan(), cli.input.display());

    let options = ConvertOptions {
        base_url: cli.base_url.clone(),
        placeholders: cli.placeholders.clone().unwrap_or_default(),
    };

    if cli.verbose && !options.placeholders.is_empty() {
        println!("  Placeholders: {}", options.placeholders.len());
    }

    let parser = PostmanParser::from_file(&cli.input)
        .context("Failed to load input document")?
        .with_options(options);

    let conversion = parser
        .convert()
        .context("Failed to convert Postman collection")?;

    println!(
        "{} Using base URL: {}",
        "→".cyan(),
        conversion.base_url.yellow()
    );

    print_events(&conversion.report, cli.verbose);

    let skipped = conversion.report.skipped_names();
    if !skipped.is_empty() {
        let report_path = write_skip_report(report_dir, &skipped)?;
        println!(
            "\n{} {} endpoints were skipped. Details saved in '{}'.",
            "⚠".yellow(),
            skipped.len(),
            report_path.display()
        );
    }

    if cli.verbose {
        println!(
            "\n  Operations: {} across {} paths",
            conversion.document.operation_count(),
            conversion.document.paths.len()
        );
    }

    println!(
        "\n{} Total endpoints processed: {}",
        "✓".green(),
        conversion.report.processed_count()
    );
    println!(
        "{} Total endpoints skipped: {}",
        "⚠".yellow(),
        conversion.report.skipped_count()
    );

    let rendered = serde_json::to_string_pretty(&conversion.document)
        .context("Failed to serialize OpenAPI document")?;
    fs::write(&cli.output, rendered)
        .with_context(|| format!("Failed to write output file {}", cli.output.display()))?;

    println!(
        "\n{}",
        format!(
            "✓ OpenAPI schema has been successfully saved to {}.",
            cli.output.display()
        )
        .green()
        .bold()
    );

    Ok(())
}

fn print_events(report: &ConversionReport, verbose: bool) {
    for event in &report.events {
        match event {
            ConversionEvent::Processed(processed) => {
                if verbose {
                    println!(
                        "{} Processed {} {} ({})",
                        "✓".green(),
                        processed.method.to_uppercase(),
                        processed.path,
                        processed.name
                    );
                } else {
                    println!("{} Processed item with URL: {}", "✓".green(), processed.path);
                }
            }
            ConversionEvent::Skipped(skipped) => {
                println!(
                    "{} Skipping '{}': {}",
                    "⚠".yellow(),
                    skipped.name,
                    skipped.reason
                );
            }
            ConversionEvent::Warning(warning) => {
                println!("{} Warning: {}", "⚠".yellow(), warning);
            }
        }
    }
}

/// Write skipped request names as a pretty-printed JSON array
fn write_skip_report(dir: &Path, names: &[&str]) -> Result<PathBuf> {
    let path = dir.join(SKIP_REPORT_FILE);
    let rendered =
        serde_json::to_string_pretty(names).context("Failed to serialize skip report")?;
    fs::write(&path, rendered)
        .with_context(|| format!("Failed to write skip report {}", path.display()))?;
    Ok(path)
}
