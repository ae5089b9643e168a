//! Line-oriented text dump read by the simulator.
//!
//! Each line is a dictionary literal with the five record fields, in order:
//!
//! ```text
//! {'Reaction_name': 'O24 split', 'Reactants': '[AB42_O24_ISF]', 'Products': '[AB42_O12_ISF, AB42_O12_ISF]', 'Rate_type': 'MA', 'Rate_eqtn_prototype': 'k_O24_O12_AB42_ISF*k_O24_O23_AB42_ISF'}
//! ```

use std::io::{self, Write};

use crate::network::{ReactionRecord, ReactionTable, SpeciesList};

/// Quote `s` as a single-quoted string literal, switching to double quotes
/// when that avoids escaping.
fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

/// Render one record as a dump line, without the trailing newline
pub fn format_record_line(record: &ReactionRecord) -> String {
    format!(
        "{{'Reaction_name': {}, 'Reactants': {}, 'Products': {}, 'Rate_type': {}, 'Rate_eqtn_prototype': {}}}",
        quote(&record.name),
        quote(&SpeciesList(&record.reactants).to_string()),
        quote(&SpeciesList(&record.products).to_string()),
        quote(record.rate_type().code()),
        quote(&record.rate_expression().to_string()),
    )
}

/// Write one line per record, each terminated by `\n`
pub fn write_text<W: Write>(table: &ReactionTable, mut writer: W) -> io::Result<()> {
    for record in table {
        writeln!(writer, "{}", format_record_line(record))?;
    }
    writer.flush()
}
