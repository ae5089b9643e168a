//! Blood-brain and blood-CSF barrier handling.
//!
//! Monomer and antibody species are taken up into the barrier cell layers
//! by pinocytosis, where they are degraded unless antibody-class species are
//! rescued by the neonatal Fc receptor and released again.

use super::builder::ReactionTable;
use super::reaction::{RateLaw, ReactionRecord, Rule};
use super::species::{Compartment, Species};
use super::transport::{BarrierRoute, FcrnReturnRoute, MobileSpecies};

pub const BARRIERS: [Compartment; 2] = [Compartment::Bbb, Compartment::Bcsfb];

/// Lysosomal degradation inside the barrier layers
pub fn barrier_degradation(table: &mut ReactionTable) {
    for species in MobileSpecies::ALL {
        for barrier in BARRIERS {
            table.push(ReactionRecord::new(
                Rule::BarrierDegradation,
                format!("{} Abeta Monomer/Antibody degradation", barrier),
                vec![species.species(barrier)],
                vec![],
                RateLaw::mass_action("kdeg"),
            ));
        }
    }
}

/// Pinocytotic uptake from fluid into the barrier layers
pub fn barrier_uptake(table: &mut ReactionTable) {
    for species in MobileSpecies::ALL {
        for route in BarrierRoute::ALL {
            let (src, dst) = route.endpoints();
            table.push(ReactionRecord::new(
                Rule::BarrierUptake,
                format!("{} to {} Abeta Monomer/Antibody degradation", src, dst),
                vec![species.species(src)],
                vec![species.species(dst)],
                RateLaw::user_defined(route.rate_expression()),
            ));
        }
    }
}

/// Release of receptor-bound antibody species, freeing the receptor
pub fn fcrn_return(table: &mut ReactionTable) {
    for species in MobileSpecies::ANTIBODY_CLASS {
        for route in FcrnReturnRoute::ALL {
            let (barrier, dst) = route.endpoints();
            table.push(ReactionRecord::new(
                Rule::FcrnReturn,
                format!("{} to {} FCRn-mediated return", barrier, dst),
                vec![species.species(barrier).with_fcrn()],
                vec![species.species(dst), Species::fcrn(barrier)],
                RateLaw::user_defined(route.rate_expression()),
            ));
        }
    }
}

/// Reversible receptor binding inside the barrier layers
pub fn fcrn_binding(table: &mut ReactionTable) {
    for species in MobileSpecies::ANTIBODY_CLASS {
        for barrier in BARRIERS {
            let free = species.species(barrier);
            table.push(ReactionRecord::new(
                Rule::FcrnBinding,
                format!("{} Binding to FCRn", barrier),
                vec![free, Species::fcrn(barrier)],
                vec![free.with_fcrn()],
                RateLaw::reversible("kon_FCRn", "koff_FCRn"),
            ));
        }
    }
}
