//! Abeta production.
//!
//! APP is synthesised at a constant rate in ISF, cleaved to C99, and C99 is
//! either degraded or cut into AB40 / AB42 monomer. Peripheral tissues
//! contribute a separate zero-order monomer source into plasma.

use super::builder::ReactionTable;
use super::reaction::{RateLaw, ReactionRecord, Rule};
use super::species::{Compartment, Family, Peptide, Species};

const BRAIN: Compartment = Compartment::Isf;

fn app() -> Species {
    Species::plain(Family::App, BRAIN)
}

fn c99() -> Species {
    Species::plain(Family::C99, BRAIN)
}

pub fn app_production(table: &mut ReactionTable) {
    table.push(ReactionRecord::new(
        Rule::AppProduction,
        "Production APP ISF",
        vec![],
        vec![app()],
        RateLaw::mass_action("k_APP_production"),
    ));
}

/// Zero-order monomer synthesis into the central plasma pool
pub fn systemic_production(table: &mut ReactionTable) {
    let central = Compartment::Central;
    for peptide in Peptide::ALL {
        table.push(ReactionRecord::new(
            Rule::SystemicAbetaProduction,
            "Systemic production Abeta",
            vec![],
            vec![Species::monomer(peptide, central)],
            RateLaw::mass_action(format!("{}_systemic_synthesis_rate/V_{}", peptide, central)),
        ));
    }
}

pub fn app_to_c99(table: &mut ReactionTable) {
    table.push(ReactionRecord::new(
        Rule::AppToC99,
        "APP to C99 ISF",
        vec![app()],
        vec![c99()],
        RateLaw::mass_action("k_C99"),
    ));
}

pub fn c99_degradation(table: &mut ReactionTable) {
    table.push(ReactionRecord::new(
        Rule::C99Degradation,
        "Degradation C99 ISF",
        vec![c99()],
        vec![],
        RateLaw::mass_action("v_C99"),
    ));
}

/// Gamma-secretase branching of C99 into the two isoforms
pub fn c99_to_abeta(table: &mut ReactionTable) {
    for peptide in Peptide::ALL {
        table.push(ReactionRecord::new(
            Rule::C99ToAbeta,
            "C99 to Abeta ISF",
            vec![c99()],
            vec![Species::monomer(peptide, BRAIN)],
            RateLaw::mass_action(format!("k_{}", peptide)),
        ));
    }
}
