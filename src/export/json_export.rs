//! JSON-lines records and JSON table summaries.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::BuilderConfig;
use crate::network::{ReactionRecord, ReactionTable, Rule};

/// Write one JSON object per record, newline-terminated
pub fn write_jsonl<W: Write>(table: &ReactionTable, mut writer: W) -> Result<()> {
    for record in table {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a table previously written by [`write_jsonl`].
///
/// Blank lines are skipped. Species identifiers are parsed strictly, so a
/// malformed identifier fails here with its line number.
pub fn read_jsonl<R: BufRead>(reader: R) -> Result<ReactionTable> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: ReactionRecord =
            serde_json::from_str(&line).with_context(|| format!("line {}", i + 1))?;
        records.push(record);
    }
    Ok(ReactionTable::from_records(records))
}

/// Summary of a generated table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSummary {
    /// Export timestamp
    pub exported_at: String,
    /// Crate version that built the table
    pub version: String,
    /// Total number of records
    pub total_records: usize,
    /// Records per generation rule
    pub records_per_rule: BTreeMap<Rule, usize>,
    /// Configuration used for the build
    pub config: BuilderConfig,
}

impl TableSummary {
    pub fn new(table: &ReactionTable, config: &BuilderConfig) -> Self {
        Self {
            exported_at: Local::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            total_records: table.len(),
            records_per_rule: table.count_by_rule(),
            config: config.clone(),
        }
    }
}

/// Write a summary of `table` to `path` as pretty JSON
pub fn export_summary_json(table: &ReactionTable, config: &BuilderConfig, path: &Path) -> Result<()> {
    let summary = TableSummary::new(table, config);

    let file = super::create_output_file(path)?;
    serde_json::to_writer_pretty(file, &summary)
        .with_context(|| format!("cannot write summary {}", path.display()))?;

    log::info!("JSON summary exported: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::build_reactions;

    #[test]
    fn test_jsonl_reads_back() {
        let table = build_reactions(&BuilderConfig::default());
        let mut out = Vec::new();
        write_jsonl(&table, &mut out).unwrap();
        let parsed = read_jsonl(out.as_slice()).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_read_rejects_bad_species() {
        let line = r#"{"rule":"o24_split","name":"x","reactants":["AB40_O30_ISF"],"products":[],"rate_type":"MA","rate_expression":"k"}"#;
        let err = read_jsonl(line.as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("line 1"));
    }

    #[test]
    fn test_summary_counts() {
        let config = BuilderConfig::default();
        let table = build_reactions(&config);
        let summary = TableSummary::new(&table, &config);
        assert_eq!(summary.total_records, 597);
        assert_eq!(summary.records_per_rule[&Rule::CompartmentFlow], 70);
        assert!(!summary.records_per_rule.contains_key(&Rule::CentralAntibodyBinding));
    }
}
