//! Golden tests for the simulator text dump.
//!
//! `data/reference_reactions.txt` is the reaction file the simulator was
//! calibrated against. Tests verify that:
//! - Every line of the default dump equals the reference line once the
//!   reference is normalised
//! - Normalisation only touches species-list spacing and trailing spaces in
//!   reaction names; rate types and rate expressions are compared byte for byte
//! - Every generation rule is covered by the comparison

use std::collections::BTreeSet;

use abeta_network::{
    build_reactions,
    export::{format_record_line, write_text},
    BuilderConfig, Rule,
};

const REFERENCE: &str = include_str!("data/reference_reactions.txt");

const FIELDS: [&str; 5] = [
    "Reaction_name",
    "Reactants",
    "Products",
    "Rate_type",
    "Rate_eqtn_prototype",
];

/// Split a dump line into its five field values
fn fields(line: &str) -> [String; 5] {
    let body = line
        .strip_prefix("{'")
        .and_then(|l| l.strip_suffix("'}"))
        .unwrap_or_else(|| panic!("not a dump line: {}", line));
    let parts: Vec<&str> = body.split("', '").collect();
    assert_eq!(parts.len(), 5, "field count in {}", line);

    let mut values: [String; 5] = Default::default();
    for (i, part) in parts.iter().enumerate() {
        let (key, value) = part
            .split_once("': '")
            .unwrap_or_else(|| panic!("malformed field {:?} in {}", part, line));
        assert_eq!(key, FIELDS[i], "field order in {}", line);
        values[i] = value.to_string();
    }
    values
}

/// `[A,B]` and `[A, B]` both become `[A, B]`
fn normalise_list(list: &str) -> String {
    let inner = list
        .strip_prefix('[')
        .and_then(|l| l.strip_suffix(']'))
        .unwrap_or_else(|| panic!("not a species list: {}", list));
    let items: Vec<&str> = inner.split(',').map(str::trim).collect();
    format!("[{}]", items.join(", "))
}

/// Canonical form of a reference line: trailing spaces dropped from the
/// name, species lists re-joined with `", "`, everything else untouched.
fn normalise(line: &str) -> String {
    let [name, reactants, products, rate_type, expression] = fields(line);
    format!(
        "{{'Reaction_name': '{}', 'Reactants': '{}', 'Products': '{}', 'Rate_type': '{}', 'Rate_eqtn_prototype': '{}'}}",
        name.trim_end(),
        normalise_list(&reactants),
        normalise_list(&products),
        rate_type,
        expression
    )
}

fn default_dump() -> String {
    let table = build_reactions(&BuilderConfig::default());
    let mut out = Vec::new();
    write_text(&table, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_dump_matches_reference() {
    let dump = default_dump();
    let ours: Vec<&str> = dump.lines().collect();
    let reference: Vec<&str> = REFERENCE.lines().collect();
    assert_eq!(ours.len(), reference.len(), "line count");

    for (i, (got, want)) in ours.iter().zip(&reference).enumerate() {
        assert_eq!(*got, normalise(want), "line {} differs", i + 1);
    }
}

#[test]
fn test_rate_laws_compared_verbatim() {
    let dump = default_dump();
    for (i, (got, want)) in dump.lines().zip(REFERENCE.lines()).enumerate() {
        let got = fields(got);
        let want = fields(want);
        assert_eq!(got[3], want[3], "rate type on line {}", i + 1);
        assert_eq!(got[4], want[4], "rate expression on line {}", i + 1);
    }
}

#[test]
fn test_normalisation_scope() {
    let differing: Vec<&str> = REFERENCE
        .lines()
        .filter(|line| normalise(line) != *line)
        .collect();
    // binding, FcRn and plaque formation lists plus padded flow/barrier names
    assert_eq!(differing.len(), 202);

    let unpadded = REFERENCE
        .lines()
        .filter(|line| fields(line)[0].ends_with(' '))
        .count();
    assert_eq!(unpadded, 68);

    assert_eq!(
        normalise_list("[AB40_O1_ISF,Antibody_ISF]"),
        "[AB40_O1_ISF, Antibody_ISF]"
    );
    assert_eq!(normalise_list("[0]"), "[0]");
}

#[test]
fn test_reference_covers_every_default_rule() {
    let table = build_reactions(&BuilderConfig::default());
    let covered: BTreeSet<Rule> = table
        .iter()
        .zip(REFERENCE.lines())
        .filter(|(record, want)| format_record_line(record) == normalise(want))
        .map(|(record, _)| record.rule)
        .collect();
    for rule in Rule::ALL.iter().filter(|r| !r.is_opt_in()) {
        assert!(covered.contains(rule), "rule {} not pinned", rule);
    }
}
