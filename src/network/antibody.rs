//! Antibody binding to Abeta.
//!
//! Affinity depends on aggregation state, so each stage gets its own
//! association constant (`k0` to `k3`). Monomer binding happens in every
//! brain compartment; aggregates only exist, and are only bound, in ISF and
//! PVS.

use super::builder::ReactionTable;
use super::reaction::{RateLaw, ReactionRecord, Rule};
use super::species::{Compartment, OligomerOrder, Peptide, Species, Stage};

/// Compartments where free monomer meets antibody
pub const MONOMER_BINDING_COMPARTMENTS: [Compartment; 9] = [
    Compartment::Isf,
    Compartment::Pvs,
    Compartment::Bbb,
    Compartment::Bcsfb,
    Compartment::BrainPlasma,
    Compartment::Cm,
    Compartment::Lv,
    Compartment::Tfv,
    Compartment::Sas,
];

/// Compartments where aggregates meet antibody
pub const AGGREGATE_BINDING_COMPARTMENTS: [Compartment; 2] = [Compartment::Isf, Compartment::Pvs];

/// Binding affinity tier, one per aggregation stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffinityTier {
    Monomer,
    Oligomer,
    Protofibril,
    Plaque,
}

impl AffinityTier {
    pub fn for_order(order: OligomerOrder) -> Self {
        match order.stage() {
            Stage::Monomer => AffinityTier::Monomer,
            Stage::Oligomer => AffinityTier::Oligomer,
            Stage::Protofibril => AffinityTier::Protofibril,
            Stage::Plaque => AffinityTier::Plaque,
        }
    }

    pub fn rate_constant(self) -> &'static str {
        match self {
            AffinityTier::Monomer => "k0_Antibody",
            AffinityTier::Oligomer => "k1_Antibody",
            AffinityTier::Protofibril => "k2_Antibody",
            AffinityTier::Plaque => "k3_Antibody",
        }
    }

    pub fn reaction_name(self) -> &'static str {
        match self {
            AffinityTier::Monomer => "Monomer binding antibody",
            AffinityTier::Oligomer => "Oligomer binding antibody",
            AffinityTier::Protofibril => "Proto binding antibody",
            AffinityTier::Plaque => "Plaque binding antibody",
        }
    }

    fn rule(self) -> Rule {
        match self {
            AffinityTier::Monomer => Rule::MonomerAntibodyBinding,
            AffinityTier::Oligomer => Rule::OligomerAntibodyBinding,
            AffinityTier::Protofibril => Rule::ProtofibrilAntibodyBinding,
            AffinityTier::Plaque => Rule::PlaqueAntibodyBinding,
        }
    }

    /// Compartments in which this tier binds
    pub fn compartments(self) -> &'static [Compartment] {
        match self {
            AffinityTier::Monomer => &MONOMER_BINDING_COMPARTMENTS,
            _ => &AGGREGATE_BINDING_COMPARTMENTS,
        }
    }
}

fn binding_record(
    tier: AffinityTier,
    peptide: Peptide,
    order: OligomerOrder,
    comp: Compartment,
) -> ReactionRecord {
    let free = Species::abeta(peptide, order, comp);
    ReactionRecord::new(
        tier.rule(),
        tier.reaction_name(),
        vec![free, Species::antibody(comp)],
        vec![free.with_antibody()],
        RateLaw::mass_action(tier.rate_constant()),
    )
}

/// Emit every binding record of `tier`, peptide-major then order then compartment
fn emit_tier(table: &mut ReactionTable, tier: AffinityTier) {
    for peptide in Peptide::ALL {
        for order in OligomerOrder::all().filter(|o| AffinityTier::for_order(*o) == tier) {
            for &comp in tier.compartments() {
                table.push(binding_record(tier, peptide, order, comp));
            }
        }
    }
}

pub fn monomer_binding(table: &mut ReactionTable) {
    emit_tier(table, AffinityTier::Monomer);
}

pub fn oligomer_binding(table: &mut ReactionTable) {
    emit_tier(table, AffinityTier::Oligomer);
}

pub fn protofibril_binding(table: &mut ReactionTable) {
    emit_tier(table, AffinityTier::Protofibril);
}

pub fn plaque_binding(table: &mut ReactionTable) {
    emit_tier(table, AffinityTier::Plaque);
}

/// Monomer binding in plasma, where free Abeta lives in `central` and
/// antibody is tracked in `centralAntibody`.
///
/// The two pools may have different volumes, so the binding term is written
/// in concentrations and a second record adds back the monomer that the
/// volume mismatch would otherwise remove.
pub fn central_binding(table: &mut ReactionTable) {
    let central = Compartment::Central;
    let tracking = Compartment::CentralAntibody;
    let term = |peptide: Peptide| {
        format!(
            "k0_Antibody * ({}/V_{}) * ({}/V_{})",
            Species::monomer(peptide, central),
            central,
            Species::antibody(central),
            tracking
        )
    };

    for peptide in Peptide::ALL {
        table.push(ReactionRecord::new(
            Rule::CentralAntibodyBinding,
            "Monomer binding to antibody central",
            vec![Species::monomer(peptide, central), Species::antibody(central)],
            vec![Species::monomer(peptide, tracking).with_antibody()],
            RateLaw::Custom(format!("{} * V_{}", term(peptide), tracking)),
        ));
    }
    for peptide in Peptide::ALL {
        table.push(ReactionRecord::new(
            Rule::CentralAntibodyBindingCorrection,
            "Monomer binding to antibody corrected central",
            vec![],
            vec![Species::monomer(peptide, central)],
            RateLaw::Custom(format!(
                "{} * (V_{} - V_{})",
                term(peptide),
                tracking,
                central
            )),
        ));
    }
}
