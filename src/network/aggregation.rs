//! Abeta aggregation chemistry in the interstitial fluid.
//!
//! Aggregates grow one monomer at a time. Small oligomers additionally grow
//! by plaque-catalysed monomer addition, aggregates of order 13 to 18 can
//! nucleate directly into plaque, and the largest protofibril fragments.
//!
//! References:
//! - Geerts H et al. Alzheimer's Dement. 2023;19:3987-4001
//! - Garai K, Frieden C. PNAS. 2013;110:3321-3326

use super::builder::ReactionTable;
use super::reaction::{RateLaw, ReactionRecord, Rule};
use super::species::{Compartment, OligomerOrder, Peptide, Species};

/// Aggregation only happens in ISF
const COMPARTMENT: Compartment = Compartment::Isf;

/// Name of the association constant from `from` to `to` (or the reverse)
pub fn rate_constant(
    from: OligomerOrder,
    to: OligomerOrder,
    peptide: Peptide,
    comp: Compartment,
) -> String {
    format!("k_{}_{}_{}_{}", from, to, peptide, comp)
}

/// Reversible monomer addition `O1 + On <-> O(n+1)` for n = 1..=23
pub fn monomer_addition(table: &mut ReactionTable) {
    for peptide in Peptide::ALL {
        for n in OligomerOrder::range(1..=23) {
            let Some(next) = n.next() else { continue };
            table.push(ReactionRecord::new(
                Rule::MonomerAddition,
                "Monomer Addition and Dissociation",
                vec![
                    Species::monomer(peptide, COMPARTMENT),
                    Species::abeta(peptide, n, COMPARTMENT),
                ],
                vec![Species::abeta(peptide, next, COMPARTMENT)],
                RateLaw::reversible(
                    rate_constant(n, next, peptide, COMPARTMENT),
                    rate_constant(next, n, peptide, COMPARTMENT),
                ),
            ));
        }
    }
}

/// Plaque-driven monomer addition for n = 1..=16.
///
/// Forward only; the association constant is scaled by a saturable term in
/// the plaque concentration.
pub fn plaque_driven_addition(table: &mut ReactionTable) {
    for peptide in Peptide::ALL {
        let plaque = Species::abeta(peptide, OligomerOrder::PLAQUE, COMPARTMENT);
        for n in OligomerOrder::range(1..=16) {
            let Some(next) = n.next() else { continue };
            let expr = format!(
                "{k}*{p}_PDMA_Vmax_{c}*({plaque} / ({plaque} + {p}_PDMA_EC50_{c}))",
                k = rate_constant(n, next, peptide, COMPARTMENT),
                p = peptide,
                c = COMPARTMENT,
                plaque = plaque,
            );
            table.push(ReactionRecord::new(
                Rule::PlaqueDrivenMonomerAddition,
                "Plaque Driven Monomer Addition (PDMA)",
                vec![
                    Species::monomer(peptide, COMPARTMENT),
                    Species::abeta(peptide, n, COMPARTMENT),
                ],
                vec![Species::abeta(peptide, next, COMPARTMENT)],
                RateLaw::mass_action(expr),
            ));
        }
    }
}

/// Direct plaque nucleation `O1 + On -> O25` for n = 13..=18.
///
/// Uses the monomer-addition constant of the same step, scaled by the
/// baseline plaque fraction.
pub fn plaque_formation(table: &mut ReactionTable) {
    for peptide in Peptide::ALL {
        for n in OligomerOrder::range(13..=18) {
            let Some(next) = n.next() else { continue };
            table.push(ReactionRecord::new(
                Rule::PlaqueFormation,
                "Plaque Formation",
                vec![
                    Species::monomer(peptide, COMPARTMENT),
                    Species::abeta(peptide, n, COMPARTMENT),
                ],
                vec![Species::abeta(peptide, OligomerOrder::PLAQUE, COMPARTMENT)],
                RateLaw::mass_action(format!(
                    "Baseline_{}_O_P*{}",
                    peptide,
                    rate_constant(n, next, peptide, COMPARTMENT)
                )),
            ));
        }
    }
}

/// Symmetric fragmentation `O24 -> 2 O12`
pub fn o24_split(table: &mut ReactionTable) {
    let (Some(o24), Some(o23), Some(o12)) = (
        OligomerOrder::new(24),
        OligomerOrder::new(23),
        OligomerOrder::new(12),
    ) else {
        return;
    };
    for peptide in Peptide::ALL {
        let half = Species::abeta(peptide, o12, COMPARTMENT);
        table.push(ReactionRecord::new(
            Rule::O24Split,
            "O24 split",
            vec![Species::abeta(peptide, o24, COMPARTMENT)],
            vec![half, half],
            RateLaw::mass_action(format!(
                "{}*{}",
                rate_constant(o24, o12, peptide, COMPARTMENT),
                rate_constant(o24, o23, peptide, COMPARTMENT)
            )),
        ));
    }
}
