//! Degradation of Abeta in the interstitial fluid.
//!
//! Microglia clear aggregates, plaque and antibody complexes. The microglial
//! population is a mixture of a high-activity and a low-activity fraction
//! (`Microglia_high_frac`). Free monomer is additionally degraded by
//! insulin-degrading enzyme with Hill kinetics.

use super::builder::ReactionTable;
use super::reaction::{RateLaw, ReactionRecord, Rule};
use super::species::{Compartment, OligomerOrder, Peptide, Species};

const COMPARTMENT: Compartment = Compartment::Isf;

/// Saturable microglial uptake of oligomers and protofibrils (n = 2..=24)
pub fn microglia_oligomer_degradation(table: &mut ReactionTable) {
    for peptide in Peptide::ALL {
        for n in OligomerOrder::range(2..=24) {
            let aggregate = Species::abeta(peptide, n, COMPARTMENT);
            let uptake = format!(
                "Microglia_Vmax_{p}/(Microglia_EC50_{p} + {s})",
                p = peptide,
                s = aggregate
            );
            table.push(ReactionRecord::new(
                Rule::MicrogliaOligomerDegradation,
                "Microglia Degradation Abeta",
                vec![aggregate],
                vec![],
                RateLaw::mass_action(format!(
                    "Microglia*(Hi_lo_ratio*Microglia_high_frac*{u} + (1.0 - Microglia_high_frac)*{u})",
                    u = uptake
                )),
            ));
        }
    }
}

/// First-order plaque clearance by the microglia mixture
pub fn microglia_plaque_degradation(table: &mut ReactionTable) {
    for peptide in Peptide::ALL {
        table.push(ReactionRecord::new(
            Rule::MicrogliaPlaqueDegradation,
            "Microglia Degradation Plaque",
            vec![Species::abeta(peptide, OligomerOrder::PLAQUE, COMPARTMENT)],
            vec![],
            RateLaw::mass_action(format!(
                "0.5*Microglia*(Microglia_high_frac*Microglia_high_rate_{p} + (1.0 - Microglia_high_frac)*Microglia_low_rate_{p})",
                p = peptide
            )),
        ));
    }
}

/// Fc-mediated clearance of every antibody-bound aggregate (n = 1..=25)
pub fn microglia_complex_degradation(table: &mut ReactionTable) {
    for peptide in Peptide::ALL {
        for n in OligomerOrder::all() {
            table.push(ReactionRecord::new(
                Rule::MicrogliaComplexDegradation,
                "Microglia Degradation Abeta-Antibody",
                vec![Species::abeta(peptide, n, COMPARTMENT).with_antibody()],
                vec![],
                RateLaw::mass_action(
                    "Microglia*(Microglia_high_frac*Microglia_high_rate_mAb + (1.0 - Microglia_high_frac)*Microglia_low_rate_mAb)",
                ),
            ));
        }
    }
}

/// IDE degradation of monomer, already expressed as concentration per time
pub fn ide_degradation(table: &mut ReactionTable) {
    for peptide in Peptide::ALL {
        let monomer = Species::monomer(peptide, COMPARTMENT);
        let hill = format!("{}_IDE_Hill_{}", peptide, COMPARTMENT);
        table.push(ReactionRecord::new(
            Rule::IdeDegradation,
            "IDE Degradation Monomer ISF",
            vec![monomer],
            vec![],
            RateLaw::CustomConcPerTime(format!(
                "IDE_conc_{c} * {p}_IDE_Kcat_{c} * (({m})^{h} / (({m})^{h} + {p}_IDE_IC50_{c}^{h}))",
                c = COMPARTMENT,
                p = peptide,
                m = monomer,
                h = hill
            )),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_microglia_oligomer_expression() {
        let mut table = ReactionTable::default();
        microglia_oligomer_degradation(&mut table);
        assert_eq!(table.len(), 46);
        assert_eq!(
            table.records()[0].rate_expression().to_string(),
            "Microglia*(Hi_lo_ratio*Microglia_high_frac*Microglia_Vmax_AB40/(Microglia_EC50_AB40 + AB40_O2_ISF) + (1.0 - Microglia_high_frac)*Microglia_Vmax_AB40/(Microglia_EC50_AB40 + AB40_O2_ISF))"
        );
    }

    #[test]
    fn test_ide_expression() {
        let mut table = ReactionTable::default();
        ide_degradation(&mut table);
        assert_eq!(
            table.records()[1].rate_expression().to_string(),
            "IDE_conc_ISF * AB42_IDE_Kcat_ISF * ((AB42_O1_ISF)^AB42_IDE_Hill_ISF / ((AB42_O1_ISF)^AB42_IDE_Hill_ISF + AB42_IDE_IC50_ISF^AB42_IDE_Hill_ISF))"
        );
    }

    #[test]
    fn test_complex_degradation_covers_all_orders() {
        let mut table = ReactionTable::default();
        microglia_complex_degradation(&mut table);
        assert_eq!(table.len(), 50);
        assert_eq!(table.records()[0].reactants[0].to_string(), "AB40_O1__Antibody_ISF");
        assert_eq!(table.records()[49].reactants[0].to_string(), "AB42_O25__Antibody_ISF");
    }
}
