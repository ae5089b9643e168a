//! Structural validation of a reaction table.
//!
//! Enumeration mistakes (a shifted range bound, a wrong compartment suffix)
//! do not fail at runtime, they silently change the simulated network. This
//! pass re-checks the properties every table must have and reports every
//! violation it finds.

use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::network::{
    AffinityTier, Compartment, Family, OligomerOrder, Peptide, RateExpression, ReactionTable, Rule,
    Species, SpeciesParseError,
};

/// One violated property
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("record {index}: reversible rate constant `{name}` is not a bare parameter name")]
    MalformedRateConstant { index: usize, name: String },
    #[error("record {index}: empty rate expression")]
    EmptyRateExpression { index: usize },
    #[error("record {index}: both sides of the reaction are the zero sentinel")]
    EmptyReaction { index: usize },
    #[error("record {index}: {source}")]
    MalformedSpecies {
        index: usize,
        #[source]
        source: SpeciesParseError,
    },
    #[error("record {index}: `{species}` does not render back to itself")]
    NonCanonicalSpecies { index: usize, species: String },
    #[error("record {index}: `{species}` is in a compartment that does not track its class")]
    WrongTrackingCompartment { index: usize, species: String },
    #[error("records {first} and {second} share reactants, products and rate type")]
    DuplicateReaction { first: usize, second: usize },
    #[error("{peptide} in {compartment}: order {order} is bound {count} times")]
    AffinityCoverage {
        peptide: Peptide,
        compartment: Compartment,
        order: u8,
        count: usize,
    },
    #[error("{peptide} in {compartment}: order {order} binds with `{found}`, expected `{expected}`")]
    AffinityTierMismatch {
        peptide: Peptide,
        compartment: Compartment,
        order: u8,
        found: String,
        expected: &'static str,
    },
    #[error("rule {rule} emitted {found} records, expected {expected}")]
    RuleCount {
        rule: Rule,
        found: usize,
        expected: usize,
    },
}

/// Raised when a report contains at least one error
#[derive(Debug, Error)]
#[error("reaction table failed validation with {} error(s)", .0.len())]
pub struct ValidationFailed(pub Vec<ValidationError>);

/// Outcome of a validation pass
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub records_checked: usize,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of records checked, or every error found
    pub fn into_result(self) -> Result<usize, ValidationFailed> {
        if self.errors.is_empty() {
            Ok(self.records_checked)
        } else {
            Err(ValidationFailed(self.errors))
        }
    }
}

/// Run every check against `table`
pub fn validate(table: &ReactionTable) -> ValidationReport {
    let mut errors = Vec::new();

    check_records(table, &mut errors);
    check_duplicates(table, &mut errors);
    check_affinity_tiers(table, &mut errors);
    check_rule_counts(table, &mut errors);

    for error in &errors {
        log::warn!("Validation: {}", error);
    }

    ValidationReport {
        records_checked: table.len(),
        errors,
    }
}

/// Bare parameter name: non-empty, identifier characters only
fn is_parameter_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn check_records(table: &ReactionTable, errors: &mut Vec<ValidationError>) {
    for (index, record) in table.iter().enumerate() {
        match record.rate_expression() {
            RateExpression::Pair(forward, backward) => {
                for name in [forward, backward] {
                    if !is_parameter_name(name) {
                        errors.push(ValidationError::MalformedRateConstant {
                            index,
                            name: name.to_string(),
                        });
                    }
                }
            }
            RateExpression::Single(expr) => {
                if expr.trim().is_empty() {
                    errors.push(ValidationError::EmptyRateExpression { index });
                }
            }
        }

        if record.reactants.is_empty() && record.products.is_empty() {
            errors.push(ValidationError::EmptyReaction { index });
        }

        for species in record.species() {
            check_species(index, species, errors);
        }
        for species in &record.products {
            if species.is_antibody_class()
                && matches!(species.compartment, Compartment::Central | Compartment::Peripheral)
            {
                errors.push(ValidationError::WrongTrackingCompartment {
                    index,
                    species: species.to_string(),
                });
            }
        }
    }
}

fn check_species(index: usize, species: &Species, errors: &mut Vec<ValidationError>) {
    let rendered = species.to_string();
    match rendered.parse::<Species>() {
        Ok(parsed) if parsed == *species => {}
        Ok(_) => errors.push(ValidationError::NonCanonicalSpecies {
            index,
            species: rendered.clone(),
        }),
        Err(source) => errors.push(ValidationError::MalformedSpecies { index, source }),
    }

    let free_abeta = matches!(species.family, Family::Abeta(_)) && !species.antibody_bound;
    if free_abeta && species.compartment.is_antibody_tracking() {
        errors.push(ValidationError::WrongTrackingCompartment {
            index,
            species: rendered,
        });
    }
}

fn check_duplicates(table: &ReactionTable, errors: &mut Vec<ValidationError>) {
    let mut seen = HashMap::new();
    for (index, record) in table.iter().enumerate() {
        if let Some(&first) = seen.get(&record.key()) {
            errors.push(ValidationError::DuplicateReaction {
                first,
                second: index,
            });
        } else {
            seen.insert(record.key(), index);
        }
    }
}

/// Orders 1..=25 bind exactly once per peptide in ISF and PVS, with the
/// constant of their tier.
fn check_affinity_tiers(table: &ReactionTable, errors: &mut Vec<ValidationError>) {
    let binding_rules = [
        Rule::MonomerAntibodyBinding,
        Rule::OligomerAntibodyBinding,
        Rule::ProtofibrilAntibodyBinding,
        Rule::PlaqueAntibodyBinding,
    ];
    let mut bound: BTreeMap<(Peptide, Compartment, OligomerOrder), Vec<String>> = BTreeMap::new();
    for record in table.iter().filter(|r| binding_rules.contains(&r.rule)) {
        let Some(target) = record.reactants.first() else {
            continue;
        };
        if let (Family::Abeta(peptide), Some(order)) = (target.family, target.order) {
            bound
                .entry((peptide, target.compartment, order))
                .or_default()
                .push(record.rate_expression().to_string());
        }
    }

    for peptide in Peptide::ALL {
        for compartment in crate::network::antibody::AGGREGATE_BINDING_COMPARTMENTS {
            for order in OligomerOrder::all() {
                let constants = bound
                    .get(&(peptide, compartment, order))
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                if constants.len() != 1 {
                    errors.push(ValidationError::AffinityCoverage {
                        peptide,
                        compartment,
                        order: order.get(),
                        count: constants.len(),
                    });
                    continue;
                }
                let expected = AffinityTier::for_order(order).rate_constant();
                if constants[0] != expected {
                    errors.push(ValidationError::AffinityTierMismatch {
                        peptide,
                        compartment,
                        order: order.get(),
                        found: constants[0].clone(),
                        expected,
                    });
                }
            }
        }
    }
}

/// Mandatory rules must emit their closed-form count; opt-in rules either
/// that count or nothing.
fn check_rule_counts(table: &ReactionTable, errors: &mut Vec<ValidationError>) {
    let counts = table.count_by_rule();
    for rule in Rule::ALL {
        let found = counts.get(&rule).copied().unwrap_or(0);
        let expected = rule.expected_count();
        if found != expected && !(rule.is_opt_in() && found == 0) {
            errors.push(ValidationError::RuleCount {
                rule,
                found,
                expected,
            });
        }
    }
}
