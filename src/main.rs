//! Abeta Network - Entry point
//!
//! Builds the amyloid-beta reaction table and writes it for the simulator.
//!
//! CLI Usage:
//!   cargo run -- generate                         # Write Geerts_all_reactions.txt
//!   cargo run -- generate --format jsonl -o t.jsonl
//!   cargo run -- summary --json summary.json      # Per-rule record counts
//!   cargo run -- validate --input t.jsonl         # Check a previous export

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use abeta_network::{
    config::{BuilderConfig, ExportFormat},
    export,
    network::{build_reactions, expected_total, Rule},
    validation,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};

#[derive(Parser)]
#[command(name = "abeta-network", version, about = "Amyloid-beta reaction table builder")]
struct Cli {
    /// Builder configuration file (JSON); data/config/builder.json when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Include plasma monomer-antibody binding and its volume correction
    #[arg(long, global = true)]
    include_central_binding: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build, validate and write the reaction table
    Generate {
        /// Output file (defaults to the configured path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (defaults to the configured format)
        #[arg(short, long)]
        format: Option<ExportFormat>,

        /// Write even if validation fails
        #[arg(long)]
        skip_validation: bool,
    },
    /// Print record counts per generation rule
    Summary {
        /// Also write the summary as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Validate a freshly built table, or a JSON-lines export
    Validate {
        /// JSON-lines file written by `generate --format jsonl`
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn load_config(cli: &Cli) -> BuilderConfig {
    let mut config = match &cli.config {
        Some(path) => BuilderConfig::load_from(path),
        None => BuilderConfig::load_or_default(),
    };
    if cli.include_central_binding {
        config.include_central_antibody_binding = true;
    }
    config
}

fn run_generate(
    mut config: BuilderConfig,
    output: Option<PathBuf>,
    format: Option<ExportFormat>,
    skip_validation: bool,
) -> Result<()> {
    if let Some(format) = format {
        config.output = config.output.with_format(format);
    }
    if let Some(path) = output {
        config.output.path = path;
    }

    let table = build_reactions(&config);

    let report = validation::validate(&table);
    if report.is_ok() {
        log::info!("Validation passed for {} records", report.records_checked);
    } else if skip_validation {
        log::warn!(
            "Writing table despite {} validation error(s)",
            report.errors.len()
        );
    } else {
        report.into_result()?;
    }

    export::export_table(&table, &config.output)?;
    println!(
        "Wrote {} reactions to {}",
        table.len(),
        config.output.path.display()
    );
    Ok(())
}

fn run_summary(config: BuilderConfig, json: Option<PathBuf>) -> Result<()> {
    let table = build_reactions(&config);
    let counts = table.count_by_rule();

    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(vec!["Rule", "Records", "Expected"]);
    for rule in Rule::ALL {
        let Some(count) = counts.get(&rule) else {
            continue;
        };
        out.add_row(vec![
            rule.to_string(),
            count.to_string(),
            rule.expected_count().to_string(),
        ]);
    }
    println!("{}", out);
    println!(
        "{} record(s), {} expected",
        table.len(),
        expected_total(&config)
    );

    if let Some(path) = json {
        export::export_summary_json(&table, &config, &path)?;
    }
    Ok(())
}

fn run_validate(config: BuilderConfig, input: Option<PathBuf>) -> Result<()> {
    let table = match input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("cannot open {}", path.display()))?;
            export::read_jsonl(BufReader::new(file))
                .with_context(|| format!("cannot read {}", path.display()))?
        }
        None => build_reactions(&config),
    };

    let report = validation::validate(&table);
    for error in &report.errors {
        println!("✗ {}", error);
    }
    let checked = report.into_result()?;
    println!("✓ {} records valid", checked);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli);

    match cli.command {
        Commands::Generate {
            output,
            format,
            skip_validation,
        } => run_generate(config, output, format, skip_validation),
        Commands::Summary { json } => run_summary(config, json),
        Commands::Validate { input } => run_validate(config, input),
    }
}
