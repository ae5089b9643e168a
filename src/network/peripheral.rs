//! Systemic pharmacokinetics.
//!
//! Free Abeta and antibody-class species each have a two-compartment
//! plasma/peripheral model with linear clearance from plasma. Antibody is
//! dosed into a subcutaneous depot and absorbed with first-order rate
//! `SubCut_ka`; the non-bioavailable fraction is lost at the depot.

use super::builder::ReactionTable;
use super::reaction::{RateLaw, ReactionRecord, Rule};
use super::species::{Compartment, Peptide, Species};
use super::transport::MobileSpecies;

pub fn central_abeta_clearance(table: &mut ReactionTable) {
    for peptide in Peptide::ALL {
        table.push(ReactionRecord::new(
            Rule::CentralAbetaClearance,
            "central clearance 1",
            vec![Species::monomer(peptide, Compartment::Central)],
            vec![],
            RateLaw::user_defined("AB_O1_CL"),
        ));
    }
}

pub fn central_antibody_clearance(table: &mut ReactionTable) {
    for species in MobileSpecies::ANTIBODY_CLASS {
        table.push(ReactionRecord::new(
            Rule::CentralAntibodyClearance,
            "centralAntibody clearance 1",
            vec![species.species(Compartment::CentralAntibody)],
            vec![],
            RateLaw::user_defined("Antibody_CL"),
        ));
    }
}

/// Distributional clearance between `central` and `peripheral`, both directions
pub fn peripheral_abeta_exchange(table: &mut ReactionTable) {
    let pairs = [
        (Compartment::Central, Compartment::Peripheral),
        (Compartment::Peripheral, Compartment::Central),
    ];
    for peptide in Peptide::ALL {
        for (src, dst) in pairs {
            table.push(ReactionRecord::new(
                Rule::PeripheralAbetaExchange,
                "central clearance 2",
                vec![Species::monomer(peptide, src)],
                vec![Species::monomer(peptide, dst)],
                RateLaw::user_defined("AB_O1_CLd2"),
            ));
        }
    }
}

/// Same exchange for the antibody-tracking pools
pub fn peripheral_antibody_exchange(table: &mut ReactionTable) {
    let pairs = [
        (Compartment::CentralAntibody, Compartment::PeripheralAntibody),
        (Compartment::PeripheralAntibody, Compartment::CentralAntibody),
    ];
    for species in MobileSpecies::ANTIBODY_CLASS {
        for (src, dst) in pairs {
            table.push(ReactionRecord::new(
                Rule::PeripheralAntibodyExchange,
                "central clearance 2",
                vec![species.species(src)],
                vec![species.species(dst)],
                RateLaw::user_defined("Antibody_CLd2"),
            ));
        }
    }
}

/// Bioavailable share of the depot absorbed into plasma
pub fn subcutaneous_absorption(table: &mut ReactionTable) {
    table.push(ReactionRecord::new(
        Rule::SubcutaneousAbsorption,
        "Subcutaneous compartment transport",
        vec![Species::antibody(Compartment::SubCut)],
        vec![Species::antibody(Compartment::CentralAntibody)],
        RateLaw::user_defined(format!(
            "SubCut_ka*V_{}*SubCut_bioavailability",
            Compartment::SubCut
        )),
    ));
}

/// Non-bioavailable share lost at the depot
pub fn subcutaneous_clearance(table: &mut ReactionTable) {
    table.push(ReactionRecord::new(
        Rule::SubcutaneousClearance,
        "Subcutaneous clearance",
        vec![Species::antibody(Compartment::SubCut)],
        vec![],
        RateLaw::mass_action("SubCut_ka*(1.0 - SubCut_bioavailability)"),
    ));
}
