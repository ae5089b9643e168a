//! Reaction network of the amyloid-beta aggregation / pharmacokinetic model.
//!
//! The network spans brain (ISF, PVS, ventricles, SAS), barrier (BBB,
//! BCSFB) and systemic (plasma, peripheral, subcutaneous) compartments and
//! covers:
//! - Aggregation from monomer (O1) through oligomers and protofibrils to plaque (O25)
//! - Antibody binding with stage-dependent affinity
//! - Microglial and IDE clearance
//! - APP processing and systemic production
//! - Glymphatic, perivascular and CSF flow
//! - FcRn-mediated barrier transcytosis
//! - Peripheral distribution and subcutaneous dosing
//!
//! Rate laws are symbolic and are resolved by the downstream simulator.
//!
//! References:
//! - Geerts H et al. Alzheimer's Dement. 2023;19:3987-4001
//! - Bloomingdale P et al. J Pharmacokinet Pharmacodyn. 2022;49:19-37

pub mod aggregation;
pub mod antibody;
pub mod barrier;
pub mod builder;
pub mod clearance;
pub mod flow;
pub mod peripheral;
pub mod production;
pub mod reaction;
pub mod species;
pub mod transport;

pub use antibody::AffinityTier;
pub use builder::{build_reactions, expected_total, ReactionTable};
pub use reaction::{RateExpression, RateLaw, RateType, ReactionRecord, Rule, SpeciesList};
pub use species::{Compartment, Family, OligomerOrder, Peptide, Species, SpeciesParseError, Stage};
pub use transport::{BarrierRoute, FcrnReturnRoute, FlowRoute, FlowRule, MobileSpecies, ReflectionClass};
