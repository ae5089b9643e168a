//! Bulk fluid flow between brain, CSF and plasma compartments.
//!
//! Aggregates only drain perivascularly (ISF to PVS to plasma). Monomer and
//! antibody species additionally follow the glymphatic and CSF loop
//! resolved by [`FlowRoute`].

use super::builder::ReactionTable;
use super::reaction::{RateLaw, ReactionRecord, Rule};
use super::species::{Compartment, OligomerOrder, Peptide, Species};
use super::transport::{FlowRoute, MobileSpecies, ReflectionClass};

/// Perivascular drainage of aggregates, n = 2..=24
pub fn isf_to_pvs_aggregates(table: &mut ReactionTable) {
    let (src, dst) = (Compartment::Isf, Compartment::Pvs);
    for peptide in Peptide::ALL {
        for n in OligomerOrder::range(2..=24) {
            let class = ReflectionClass::for_order(n);
            table.push(ReactionRecord::new(
                Rule::IsfToPvsOligomerFlow,
                "Flow ISF to PVS oligomer/proto",
                vec![Species::abeta(peptide, n, src)],
                vec![Species::abeta(peptide, n, dst)],
                RateLaw::user_defined(format!(
                    "(1.0 - sigma_{}_{}_{}) * Q_PVS",
                    src,
                    dst,
                    class.suffix()
                )),
            ));
        }
    }
}

/// Aggregates leaving PVS for plasma; plasma does not track aggregates so
/// they leave the system.
pub fn pvs_to_central_aggregates(table: &mut ReactionTable) {
    for peptide in Peptide::ALL {
        for n in OligomerOrder::range(2..=24) {
            table.push(ReactionRecord::new(
                Rule::PvsToCentralOligomerFlow,
                "Flow PVS to central oligomer/proto",
                vec![Species::abeta(peptide, n, Compartment::Pvs)],
                vec![],
                RateLaw::user_defined(format!(
                    "(1.0 - sigma_{}_{}_Abeta) * Q_PVS",
                    Compartment::Pvs,
                    Compartment::Central
                )),
            ));
        }
    }
}

/// Antibody-bound aggregates leaving PVS, same sink as the free ones
pub fn pvs_to_central_complexes(table: &mut ReactionTable) {
    for peptide in Peptide::ALL {
        for n in OligomerOrder::range(2..=24) {
            table.push(ReactionRecord::new(
                Rule::PvsToCentralComplexFlow,
                "Flow PVS to central oligomer/proto-Antibody",
                vec![Species::abeta(peptide, n, Compartment::Pvs).with_antibody()],
                vec![],
                RateLaw::user_defined(format!(
                    "(1.0 - sigma_{}_{}_Antibody) * Q_PVS",
                    Compartment::Pvs,
                    Compartment::CentralAntibody
                )),
            ));
        }
    }
}

/// Every mobile species along every [`FlowRoute`]
pub fn compartment_flow(table: &mut ReactionTable) {
    for species in MobileSpecies::ALL {
        for route in FlowRoute::ALL {
            let (rule, from, to) = route.resolve(species);
            table.push(ReactionRecord::new(
                Rule::CompartmentFlow,
                rule.reaction_name,
                vec![from],
                vec![to],
                RateLaw::UserDefined(rule.rate_expression),
            ));
        }
    }
}

/// Perivascular drainage of free monomer and free antibody
pub fn isf_to_pvs_monomer(table: &mut ReactionTable) {
    let (src, dst) = (Compartment::Isf, Compartment::Pvs);
    let species = [
        MobileSpecies::Monomer(Peptide::Ab40),
        MobileSpecies::Monomer(Peptide::Ab42),
        MobileSpecies::Antibody,
    ];
    for mobile in species {
        let sigma = match mobile {
            MobileSpecies::Antibody => "Antibody",
            _ => "O1",
        };
        table.push(ReactionRecord::new(
            Rule::IsfToPvsFlow,
            "Flow ISF to PVS",
            vec![mobile.species(src)],
            vec![mobile.species(dst)],
            RateLaw::user_defined(format!("(1.0 - sigma_{}_{}_{}) * Q_PVS", src, dst, sigma)),
        ));
    }
}
