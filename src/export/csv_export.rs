//! CSV export of the reaction table.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::network::{ReactionRecord, ReactionTable, Rule, SpeciesList};

/// Flat row for CSV export
#[derive(Debug, Clone, Serialize)]
pub struct ReactionRow {
    /// Generation rule
    pub rule: Rule,
    /// Reaction category
    pub name: String,
    /// Bracketed reactant list, `[0]` for a source
    pub reactants: String,
    /// Bracketed product list, `[0]` for a sink
    pub products: String,
    /// Rate type code
    pub rate_type: &'static str,
    /// Rate expression, `[forward,backward]` for reversible reactions
    pub rate_expression: String,
}

impl From<&ReactionRecord> for ReactionRow {
    fn from(r: &ReactionRecord) -> Self {
        Self {
            rule: r.rule,
            name: r.name.clone(),
            reactants: SpeciesList(&r.reactants).to_string(),
            products: SpeciesList(&r.products).to_string(),
            rate_type: r.rate_type().code(),
            rate_expression: r.rate_expression().to_string(),
        }
    }
}

/// Write a header row and one row per record
pub fn write_csv<W: Write>(table: &ReactionTable, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in table {
        writer.serialize(ReactionRow::from(record))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuilderConfig;
    use crate::network::build_reactions;

    #[test]
    fn test_csv_header_and_rows() {
        let table = build_reactions(&BuilderConfig::default());
        let mut out = Vec::new();
        write_csv(&table, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("rule,name,reactants,products,rate_type,rate_expression")
        );
        assert_eq!(
            lines.next(),
            Some("monomer_addition,Monomer Addition and Dissociation,\"[AB40_O1_ISF, AB40_O1_ISF]\",[AB40_O2_ISF],RMA,\"[k_O1_O2_AB40_ISF,k_O2_O1_AB40_ISF]\"")
        );
        assert_eq!(text.lines().count(), 598);
    }
}
