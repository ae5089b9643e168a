//! Export functionality for reaction tables.
//!
//! Provides the simulator text dump, JSON-lines and CSV renderings, and a
//! JSON summary.

mod csv_export;
mod json_export;
mod text_export;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{ExportFormat, OutputConfig};
use crate::network::ReactionTable;

pub use csv_export::{write_csv, ReactionRow};
pub use json_export::{export_summary_json, read_jsonl, write_jsonl, TableSummary};
pub use text_export::{format_record_line, write_text};

/// Create `path` for writing, creating its parent directory first
pub(crate) fn create_output_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create output directory {}", dir.display()))?;
    }
    File::create(path).with_context(|| format!("cannot create output file {}", path.display()))
}

/// Write `table` to `path` in `format`.
///
/// The parent directory is created if needed. Any failure to create or
/// write the file is returned unchanged, with the path as context.
pub fn export_table_to(table: &ReactionTable, path: &Path, format: ExportFormat) -> Result<()> {
    let file = create_output_file(path)?;
    let writer = BufWriter::new(file);

    let written: Result<()> = match format {
        ExportFormat::Text => write_text(table, writer).map_err(anyhow::Error::from),
        ExportFormat::Jsonl => write_jsonl(table, writer),
        ExportFormat::Csv => write_csv(table, writer),
    };
    written.with_context(|| format!("cannot write {}", path.display()))?;

    log::info!(
        "Exported {} reactions ({:?}): {}",
        table.len(),
        format,
        path.display()
    );
    Ok(())
}

/// Write `table` where `output` says
pub fn export_table(table: &ReactionTable, output: &OutputConfig) -> Result<()> {
    export_table_to(table, &output.path, output.format)
}
