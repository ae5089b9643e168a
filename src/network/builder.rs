//! Reaction table assembly.
//!
//! The table is built in a single pass: each step appends the records of one
//! generation rule, in a fixed order. Nothing is mutated after the build.

use std::collections::BTreeMap;

use crate::config::BuilderConfig;

use super::reaction::{ReactionRecord, Rule};
use super::{aggregation, antibody, barrier, clearance, flow, peripheral, production};

/// Ordered, immutable collection of reaction records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReactionTable {
    records: Vec<ReactionRecord>,
}

impl ReactionTable {
    /// Wrap records produced elsewhere, e.g. read back from an export
    pub fn from_records(records: Vec<ReactionRecord>) -> Self {
        Self { records }
    }

    pub(crate) fn push(&mut self, record: ReactionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ReactionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReactionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records emitted by `rule`, in emission order
    pub fn of_rule(&self, rule: Rule) -> impl Iterator<Item = &ReactionRecord> {
        self.records.iter().filter(move |r| r.rule == rule)
    }

    /// Record count per rule; rules that emitted nothing are absent
    pub fn count_by_rule(&self) -> BTreeMap<Rule, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.rule).or_insert(0) += 1;
        }
        counts
    }

    pub fn into_records(self) -> Vec<ReactionRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a ReactionTable {
    type Item = &'a ReactionRecord;
    type IntoIter = std::slice::Iter<'a, ReactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// One generation step
struct Step {
    label: &'static str,
    emit: fn(&mut ReactionTable),
    /// Only run when central antibody binding is requested
    central_binding: bool,
}

const fn step(label: &'static str, emit: fn(&mut ReactionTable)) -> Step {
    Step {
        label,
        emit,
        central_binding: false,
    }
}

const STEPS: [Step; 33] = [
    step("monomer addition", aggregation::monomer_addition),
    step("plaque-driven monomer addition", aggregation::plaque_driven_addition),
    step("monomer antibody binding", antibody::monomer_binding),
    Step {
        label: "central antibody binding",
        emit: antibody::central_binding,
        central_binding: true,
    },
    step("oligomer antibody binding", antibody::oligomer_binding),
    step("protofibril antibody binding", antibody::protofibril_binding),
    step("plaque antibody binding", antibody::plaque_binding),
    step("plaque formation", aggregation::plaque_formation),
    step("microglial oligomer degradation", clearance::microglia_oligomer_degradation),
    step("microglial plaque degradation", clearance::microglia_plaque_degradation),
    step("microglial complex degradation", clearance::microglia_complex_degradation),
    step("O24 split", aggregation::o24_split),
    step("IDE degradation", clearance::ide_degradation),
    step("APP production", production::app_production),
    step("systemic Abeta production", production::systemic_production),
    step("APP to C99", production::app_to_c99),
    step("C99 degradation", production::c99_degradation),
    step("C99 to Abeta", production::c99_to_abeta),
    step("ISF to PVS aggregate flow", flow::isf_to_pvs_aggregates),
    step("PVS to central aggregate flow", flow::pvs_to_central_aggregates),
    step("PVS to central complex flow", flow::pvs_to_central_complexes),
    step("compartment flow", flow::compartment_flow),
    step("ISF to PVS monomer flow", flow::isf_to_pvs_monomer),
    step("barrier degradation", barrier::barrier_degradation),
    step("barrier uptake", barrier::barrier_uptake),
    step("FcRn return", barrier::fcrn_return),
    step("FcRn binding", barrier::fcrn_binding),
    step("central Abeta clearance", peripheral::central_abeta_clearance),
    step("central antibody clearance", peripheral::central_antibody_clearance),
    step("peripheral Abeta exchange", peripheral::peripheral_abeta_exchange),
    step("peripheral antibody exchange", peripheral::peripheral_antibody_exchange),
    step("subcutaneous absorption", peripheral::subcutaneous_absorption),
    step("subcutaneous clearance", peripheral::subcutaneous_clearance),
];

/// Enumerate the full reaction network
pub fn build_reactions(config: &BuilderConfig) -> ReactionTable {
    let mut table = ReactionTable::default();

    for step in &STEPS {
        if step.central_binding && !config.include_central_antibody_binding {
            log::debug!("Skipping {}", step.label);
            continue;
        }
        let before = table.len();
        (step.emit)(&mut table);
        log::debug!("{}: {} records", step.label, table.len() - before);
    }

    log::info!("Built reaction table with {} records", table.len());
    table
}

/// Total record count implied by the rule axes for `config`
pub fn expected_total(config: &BuilderConfig) -> usize {
    Rule::ALL
        .iter()
        .filter(|rule| config.include_central_antibody_binding || !rule.is_opt_in())
        .map(|rule| rule.expected_count())
        .sum()
}
