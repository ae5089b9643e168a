//! Abeta Network - reaction table builder for an amyloid-beta
//! aggregation / pharmacokinetic model
//!
//! This library enumerates every reaction of the multi-compartment model
//! (aggregation, antibody binding, clearance, production, transport, FcRn
//! recycling, peripheral PK and dosing), validates the result, and writes it
//! for the downstream simulator.

pub mod config;
pub mod export;
pub mod network;
pub mod validation;

pub use config::{BuilderConfig, ExportFormat, OutputConfig};
pub use network::{
    build_reactions, Compartment, OligomerOrder, Peptide, RateLaw, RateType, ReactionRecord,
    ReactionTable, Rule, Species,
};
pub use validation::{validate, ValidationError, ValidationReport};
