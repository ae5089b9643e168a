//! Reaction records and rate-law descriptors.
//!
//! A record pairs a left-hand and right-hand species list with a rate law.
//! Rate laws are symbolic: the expression strings reference parameter names
//! that the downstream simulator resolves against its own parameter table.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::species::Species;

/// How the downstream simulator interprets a rate expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RateType {
    /// Single rate constant times the reactant concentration product
    #[serde(rename = "MA")]
    MassAction,
    /// Forward/backward rate constant pair
    #[serde(rename = "RMA")]
    ReversibleMassAction,
    /// Arbitrary algebraic flow expression
    #[serde(rename = "UDF")]
    UserDefinedFunction,
    /// Arbitrary algebraic rate expression
    #[serde(rename = "custom")]
    CustomExpression,
    /// Expression already in concentration per time
    #[serde(rename = "custom_conc_per_time")]
    CustomConcPerTime,
}

impl RateType {
    /// Code used in the text dump
    pub fn code(self) -> &'static str {
        match self {
            RateType::MassAction => "MA",
            RateType::ReversibleMassAction => "RMA",
            RateType::UserDefinedFunction => "UDF",
            RateType::CustomExpression => "custom",
            RateType::CustomConcPerTime => "custom_conc_per_time",
        }
    }
}

impl fmt::Display for RateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Rate type together with its expression.
///
/// Keeping the two in one enum means a reversible record cannot exist
/// without both of its rate constant names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "rate_type", content = "rate_expression")]
pub enum RateLaw {
    #[serde(rename = "MA")]
    MassAction(String),
    #[serde(rename = "RMA")]
    ReversibleMassAction { forward: String, backward: String },
    #[serde(rename = "UDF")]
    UserDefined(String),
    #[serde(rename = "custom")]
    Custom(String),
    #[serde(rename = "custom_conc_per_time")]
    CustomConcPerTime(String),
}

impl RateLaw {
    pub fn mass_action(expr: impl Into<String>) -> Self {
        RateLaw::MassAction(expr.into())
    }

    pub fn reversible(forward: impl Into<String>, backward: impl Into<String>) -> Self {
        RateLaw::ReversibleMassAction {
            forward: forward.into(),
            backward: backward.into(),
        }
    }

    pub fn user_defined(expr: impl Into<String>) -> Self {
        RateLaw::UserDefined(expr.into())
    }

    pub fn rate_type(&self) -> RateType {
        match self {
            RateLaw::MassAction(_) => RateType::MassAction,
            RateLaw::ReversibleMassAction { .. } => RateType::ReversibleMassAction,
            RateLaw::UserDefined(_) => RateType::UserDefinedFunction,
            RateLaw::Custom(_) => RateType::CustomExpression,
            RateLaw::CustomConcPerTime(_) => RateType::CustomConcPerTime,
        }
    }

    pub fn expression(&self) -> RateExpression<'_> {
        match self {
            RateLaw::ReversibleMassAction { forward, backward } => {
                RateExpression::Pair(forward, backward)
            }
            RateLaw::MassAction(e)
            | RateLaw::UserDefined(e)
            | RateLaw::Custom(e)
            | RateLaw::CustomConcPerTime(e) => RateExpression::Single(e),
        }
    }
}

/// Borrowed view of a rate expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateExpression<'a> {
    Single(&'a str),
    /// (forward, backward)
    Pair(&'a str, &'a str),
}

impl fmt::Display for RateExpression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateExpression::Single(e) => f.write_str(e),
            RateExpression::Pair(fwd, bwd) => write!(f, "[{},{}]", fwd, bwd),
        }
    }
}

/// Generation rule that emitted a record.
///
/// Names are not unique across rules (both peripheral exchange rules are
/// called "central clearance 2"), so counts and lookups key on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    MonomerAddition,
    PlaqueDrivenMonomerAddition,
    MonomerAntibodyBinding,
    CentralAntibodyBinding,
    CentralAntibodyBindingCorrection,
    OligomerAntibodyBinding,
    ProtofibrilAntibodyBinding,
    PlaqueAntibodyBinding,
    PlaqueFormation,
    MicrogliaOligomerDegradation,
    MicrogliaPlaqueDegradation,
    MicrogliaComplexDegradation,
    O24Split,
    IdeDegradation,
    AppProduction,
    SystemicAbetaProduction,
    AppToC99,
    C99Degradation,
    C99ToAbeta,
    IsfToPvsOligomerFlow,
    PvsToCentralOligomerFlow,
    PvsToCentralComplexFlow,
    CompartmentFlow,
    IsfToPvsFlow,
    BarrierDegradation,
    BarrierUptake,
    FcrnReturn,
    FcrnBinding,
    CentralAbetaClearance,
    CentralAntibodyClearance,
    PeripheralAbetaExchange,
    PeripheralAntibodyExchange,
    SubcutaneousAbsorption,
    SubcutaneousClearance,
}

impl Rule {
    /// Every rule in emission order
    pub const ALL: [Rule; 34] = [
        Rule::MonomerAddition,
        Rule::PlaqueDrivenMonomerAddition,
        Rule::MonomerAntibodyBinding,
        Rule::CentralAntibodyBinding,
        Rule::CentralAntibodyBindingCorrection,
        Rule::OligomerAntibodyBinding,
        Rule::ProtofibrilAntibodyBinding,
        Rule::PlaqueAntibodyBinding,
        Rule::PlaqueFormation,
        Rule::MicrogliaOligomerDegradation,
        Rule::MicrogliaPlaqueDegradation,
        Rule::MicrogliaComplexDegradation,
        Rule::O24Split,
        Rule::IdeDegradation,
        Rule::AppProduction,
        Rule::SystemicAbetaProduction,
        Rule::AppToC99,
        Rule::C99Degradation,
        Rule::C99ToAbeta,
        Rule::IsfToPvsOligomerFlow,
        Rule::PvsToCentralOligomerFlow,
        Rule::PvsToCentralComplexFlow,
        Rule::CompartmentFlow,
        Rule::IsfToPvsFlow,
        Rule::BarrierDegradation,
        Rule::BarrierUptake,
        Rule::FcrnReturn,
        Rule::FcrnBinding,
        Rule::CentralAbetaClearance,
        Rule::CentralAntibodyClearance,
        Rule::PeripheralAbetaExchange,
        Rule::PeripheralAntibodyExchange,
        Rule::SubcutaneousAbsorption,
        Rule::SubcutaneousClearance,
    ];

    /// Whether the rule is emitted only on request
    pub fn is_opt_in(self) -> bool {
        matches!(
            self,
            Rule::CentralAntibodyBinding | Rule::CentralAntibodyBindingCorrection
        )
    }

    /// Number of records the rule emits, from the size of its axes
    pub fn expected_count(self) -> usize {
        const PEPTIDES: usize = 2;
        const MOBILE: usize = 5;
        const ANTIBODY_CLASS: usize = 3;
        match self {
            Rule::MonomerAddition => PEPTIDES * 23,
            Rule::PlaqueDrivenMonomerAddition => PEPTIDES * 16,
            Rule::MonomerAntibodyBinding => PEPTIDES * 9,
            Rule::CentralAntibodyBinding | Rule::CentralAntibodyBindingCorrection => PEPTIDES,
            Rule::OligomerAntibodyBinding => PEPTIDES * 16 * 2,
            Rule::ProtofibrilAntibodyBinding => PEPTIDES * 7 * 2,
            Rule::PlaqueAntibodyBinding => PEPTIDES * 2,
            Rule::PlaqueFormation => PEPTIDES * 6,
            Rule::MicrogliaOligomerDegradation => PEPTIDES * 23,
            Rule::MicrogliaPlaqueDegradation => PEPTIDES,
            Rule::MicrogliaComplexDegradation => PEPTIDES * 25,
            Rule::O24Split | Rule::IdeDegradation => PEPTIDES,
            Rule::AppProduction | Rule::AppToC99 | Rule::C99Degradation => 1,
            Rule::SystemicAbetaProduction | Rule::C99ToAbeta => PEPTIDES,
            Rule::IsfToPvsOligomerFlow
            | Rule::PvsToCentralOligomerFlow
            | Rule::PvsToCentralComplexFlow => PEPTIDES * 23,
            Rule::CompartmentFlow => MOBILE * 14,
            Rule::IsfToPvsFlow => PEPTIDES + 1,
            Rule::BarrierDegradation => MOBILE * 2,
            Rule::BarrierUptake => MOBILE * 5,
            Rule::FcrnReturn => ANTIBODY_CLASS * 5,
            Rule::FcrnBinding => ANTIBODY_CLASS * 2,
            Rule::CentralAbetaClearance => PEPTIDES,
            Rule::CentralAntibodyClearance => ANTIBODY_CLASS,
            Rule::PeripheralAbetaExchange => PEPTIDES * 2,
            Rule::PeripheralAntibodyExchange => ANTIBODY_CLASS * 2,
            Rule::SubcutaneousAbsorption | Rule::SubcutaneousClearance => 1,
        }
    }
}

impl Rule {
    /// Same name as in JSON and CSV exports
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::MonomerAddition => "monomer_addition",
            Rule::PlaqueDrivenMonomerAddition => "plaque_driven_monomer_addition",
            Rule::MonomerAntibodyBinding => "monomer_antibody_binding",
            Rule::CentralAntibodyBinding => "central_antibody_binding",
            Rule::CentralAntibodyBindingCorrection => "central_antibody_binding_correction",
            Rule::OligomerAntibodyBinding => "oligomer_antibody_binding",
            Rule::ProtofibrilAntibodyBinding => "protofibril_antibody_binding",
            Rule::PlaqueAntibodyBinding => "plaque_antibody_binding",
            Rule::PlaqueFormation => "plaque_formation",
            Rule::MicrogliaOligomerDegradation => "microglia_oligomer_degradation",
            Rule::MicrogliaPlaqueDegradation => "microglia_plaque_degradation",
            Rule::MicrogliaComplexDegradation => "microglia_complex_degradation",
            Rule::O24Split => "o24_split",
            Rule::IdeDegradation => "ide_degradation",
            Rule::AppProduction => "app_production",
            Rule::SystemicAbetaProduction => "systemic_abeta_production",
            Rule::AppToC99 => "app_to_c99",
            Rule::C99Degradation => "c99_degradation",
            Rule::C99ToAbeta => "c99_to_abeta",
            Rule::IsfToPvsOligomerFlow => "isf_to_pvs_oligomer_flow",
            Rule::PvsToCentralOligomerFlow => "pvs_to_central_oligomer_flow",
            Rule::PvsToCentralComplexFlow => "pvs_to_central_complex_flow",
            Rule::CompartmentFlow => "compartment_flow",
            Rule::IsfToPvsFlow => "isf_to_pvs_flow",
            Rule::BarrierDegradation => "barrier_degradation",
            Rule::BarrierUptake => "barrier_uptake",
            Rule::FcrnReturn => "fcrn_return",
            Rule::FcrnBinding => "fcrn_binding",
            Rule::CentralAbetaClearance => "central_abeta_clearance",
            Rule::CentralAntibodyClearance => "central_antibody_clearance",
            Rule::PeripheralAbetaExchange => "peripheral_abeta_exchange",
            Rule::PeripheralAntibodyExchange => "peripheral_antibody_exchange",
            Rule::SubcutaneousAbsorption => "subcutaneous_absorption",
            Rule::SubcutaneousClearance => "subcutaneous_clearance",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emitted reaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionRecord {
    pub rule: Rule,
    /// Human-readable category, shared by many records
    pub name: String,
    /// Empty means the zero sentinel (external source)
    pub reactants: Vec<Species>,
    /// Empty means the zero sentinel (sink)
    pub products: Vec<Species>,
    #[serde(flatten)]
    pub rate_law: RateLaw,
}

impl ReactionRecord {
    pub fn new(
        rule: Rule,
        name: impl Into<String>,
        reactants: Vec<Species>,
        products: Vec<Species>,
        rate_law: RateLaw,
    ) -> Self {
        Self {
            rule,
            name: name.into(),
            reactants,
            products,
            rate_law,
        }
    }

    pub fn rate_type(&self) -> RateType {
        self.rate_law.rate_type()
    }

    pub fn rate_expression(&self) -> RateExpression<'_> {
        self.rate_law.expression()
    }

    /// Every species on either side
    pub fn species(&self) -> impl Iterator<Item = &Species> {
        self.reactants.iter().chain(self.products.iter())
    }

    /// Multiset key used by downstream consumers
    pub fn key(&self) -> (Vec<Species>, Vec<Species>, RateType) {
        let mut reactants = self.reactants.clone();
        let mut products = self.products.clone();
        reactants.sort();
        products.sort();
        (reactants, products, self.rate_type())
    }
}

/// Bracketed rendering of one side of a reaction: `[A, B]`, or `[0]` when empty
pub struct SpeciesList<'a>(pub &'a [Species]);

impl fmt::Display for SpeciesList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("[0]");
        }
        f.write_str("[")?;
        for (i, species) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", species)?;
        }
        f.write_str("]")
    }
}
