//! Species identifiers for the amyloid-beta network.
//!
//! An identifier is built from three orthogonal axes: the species family,
//! the aggregation state (oligomer order plus any bound partners) and the
//! compartment the pool lives in:
//!
//! ```text
//! AB42_O7_ISF
//! AB40_O1__Antibody_PVS
//! AB40_O1__Antibody__FCRn_BBB
//! Antibody_centralAntibody
//! ```
//!
//! Compartment names never contain an underscore, so the last `_` always
//! separates the compartment from the rest of the key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Free monomer order
pub const MONOMER_ORDER: u8 = 1;
/// Largest soluble oligomer order (the protofibril range starts after it)
pub const MAX_OLIGOMER_ORDER: u8 = 17;
/// Largest protofibril order
pub const MAX_PROTOFIBRIL_ORDER: u8 = 24;
/// Order used to denote the plaque state
pub const PLAQUE_ORDER: u8 = 25;

/// Errors produced while parsing a species identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeciesParseError {
    #[error("species identifier `{0}` has no compartment suffix")]
    MissingCompartment(String),
    #[error("unknown compartment `{compartment}` in `{id}`")]
    UnknownCompartment { id: String, compartment: String },
    #[error("unknown species family `{family}` in `{id}`")]
    UnknownFamily { id: String, family: String },
    #[error("invalid oligomer state `{state}` in `{id}`")]
    InvalidState { id: String, state: String },
    #[error("oligomer order {order} in `{id}` is outside 1..=25")]
    OrderOutOfRange { id: String, order: u32 },
    #[error("binding partner `{partner}` is not allowed in `{id}`")]
    InvalidPartner { id: String, partner: String },
}

/// Abeta isoform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Peptide {
    Ab40,
    Ab42,
}

impl Peptide {
    /// Both isoforms in emission order
    pub const ALL: [Peptide; 2] = [Peptide::Ab40, Peptide::Ab42];

    pub fn as_str(self) -> &'static str {
        match self {
            Peptide::Ab40 => "AB40",
            Peptide::Ab42 => "AB42",
        }
    }
}

impl fmt::Display for Peptide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Species family (first identifier axis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Family {
    /// Amyloid-beta peptide, always carries an oligomer order
    Abeta(Peptide),
    /// Therapeutic monoclonal antibody
    Antibody,
    /// Amyloid precursor protein
    App,
    /// C-terminal fragment of APP, direct Abeta precursor
    C99,
    /// Neonatal Fc receptor
    Fcrn,
}

impl Family {
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Abeta(p) => p.as_str(),
            Family::Antibody => "Antibody",
            Family::App => "APP",
            Family::C99 => "C99",
            Family::Fcrn => "FCRn",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "AB40" => Some(Family::Abeta(Peptide::Ab40)),
            "AB42" => Some(Family::Abeta(Peptide::Ab42)),
            "Antibody" => Some(Family::Antibody),
            "APP" => Some(Family::App),
            "C99" => Some(Family::C99),
            "FCRn" => Some(Family::Fcrn),
            _ => None,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physiological compartment (third identifier axis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Compartment {
    /// Interstitial fluid
    Isf,
    /// Perivascular space
    Pvs,
    /// Blood-brain barrier endothelium
    Bbb,
    /// Blood-CSF barrier (choroid plexus)
    Bcsfb,
    /// Brain plasma
    BrainPlasma,
    /// Cisterna magna
    Cm,
    /// Lateral ventricles
    Lv,
    /// Third and fourth ventricles
    Tfv,
    /// Subarachnoid space
    Sas,
    /// Central plasma pool tracked for Abeta
    Central,
    /// Central plasma pool tracked for antibody-class species
    CentralAntibody,
    /// Peripheral tissue pool for Abeta
    Peripheral,
    /// Peripheral tissue pool for antibody-class species
    PeripheralAntibody,
    /// Subcutaneous dosing depot
    SubCut,
}

impl Compartment {
    pub const ALL: [Compartment; 14] = [
        Compartment::Isf,
        Compartment::Pvs,
        Compartment::Bbb,
        Compartment::Bcsfb,
        Compartment::BrainPlasma,
        Compartment::Cm,
        Compartment::Lv,
        Compartment::Tfv,
        Compartment::Sas,
        Compartment::Central,
        Compartment::CentralAntibody,
        Compartment::Peripheral,
        Compartment::PeripheralAntibody,
        Compartment::SubCut,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Compartment::Isf => "ISF",
            Compartment::Pvs => "PVS",
            Compartment::Bbb => "BBB",
            Compartment::Bcsfb => "BCSFB",
            Compartment::BrainPlasma => "BrainPlasma",
            Compartment::Cm => "CM",
            Compartment::Lv => "LV",
            Compartment::Tfv => "TFV",
            Compartment::Sas => "SAS",
            Compartment::Central => "central",
            Compartment::CentralAntibody => "centralAntibody",
            Compartment::Peripheral => "peripheral",
            Compartment::PeripheralAntibody => "peripheralAntibody",
            Compartment::SubCut => "SubCutComp",
        }
    }

    /// Whether this is one of the antibody-tracking plasma pools
    pub fn is_antibody_tracking(self) -> bool {
        matches!(self, Compartment::CentralAntibody | Compartment::PeripheralAntibody)
    }
}

impl fmt::Display for Compartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compartment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Compartment::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// Biological staging of an aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Monomer,
    Oligomer,
    Protofibril,
    Plaque,
}

/// Number of monomer units in an Abeta aggregate, `1..=25`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OligomerOrder(u8);

impl OligomerOrder {
    pub const MONOMER: OligomerOrder = OligomerOrder(MONOMER_ORDER);
    pub const PLAQUE: OligomerOrder = OligomerOrder(PLAQUE_ORDER);

    /// Returns `None` outside `1..=25`
    pub fn new(order: u8) -> Option<Self> {
        (MONOMER_ORDER..=PLAQUE_ORDER)
            .contains(&order)
            .then_some(Self(order))
    }

    /// Every order in `range`, which must lie within `1..=25`
    pub fn range(range: std::ops::RangeInclusive<u8>) -> impl Iterator<Item = OligomerOrder> {
        debug_assert!(*range.start() >= MONOMER_ORDER && *range.end() <= PLAQUE_ORDER);
        range.map(OligomerOrder)
    }

    /// All orders from monomer to plaque
    pub fn all() -> impl Iterator<Item = OligomerOrder> {
        Self::range(MONOMER_ORDER..=PLAQUE_ORDER)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The next larger aggregate; `None` from plaque
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    pub fn stage(self) -> Stage {
        match self.0 {
            MONOMER_ORDER => Stage::Monomer,
            n if n <= MAX_OLIGOMER_ORDER => Stage::Oligomer,
            n if n <= MAX_PROTOFIBRIL_ORDER => Stage::Protofibril,
            _ => Stage::Plaque,
        }
    }
}

impl fmt::Display for OligomerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "O{}", self.0)
    }
}

/// A fully qualified species pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Species {
    pub family: Family,
    /// Present exactly when the family is Abeta
    pub order: Option<OligomerOrder>,
    /// Abeta bound to antibody (`__Antibody`)
    pub antibody_bound: bool,
    /// Bound to the neonatal Fc receptor (`__FCRn`)
    pub fcrn_bound: bool,
    pub compartment: Compartment,
}

impl Species {
    /// Free Abeta aggregate of the given order
    pub fn abeta(peptide: Peptide, order: OligomerOrder, compartment: Compartment) -> Self {
        Self {
            family: Family::Abeta(peptide),
            order: Some(order),
            antibody_bound: false,
            fcrn_bound: false,
            compartment,
        }
    }

    /// Free Abeta monomer
    pub fn monomer(peptide: Peptide, compartment: Compartment) -> Self {
        Self::abeta(peptide, OligomerOrder::MONOMER, compartment)
    }

    /// A species family without oligomer state (antibody, APP, C99, FcRn)
    pub fn plain(family: Family, compartment: Compartment) -> Self {
        debug_assert!(!matches!(family, Family::Abeta(_)));
        Self {
            family,
            order: None,
            antibody_bound: false,
            fcrn_bound: false,
            compartment,
        }
    }

    pub fn antibody(compartment: Compartment) -> Self {
        Self::plain(Family::Antibody, compartment)
    }

    pub fn fcrn(compartment: Compartment) -> Self {
        Self::plain(Family::Fcrn, compartment)
    }

    /// The Abeta-antibody complex of this aggregate
    pub fn with_antibody(mut self) -> Self {
        debug_assert!(matches!(self.family, Family::Abeta(_)));
        self.antibody_bound = true;
        self
    }

    /// This species bound to FcRn
    pub fn with_fcrn(mut self) -> Self {
        self.fcrn_bound = true;
        self
    }

    /// Same species, different pool
    pub fn in_compartment(mut self, compartment: Compartment) -> Self {
        self.compartment = compartment;
        self
    }

    /// Antibody or an Abeta-antibody complex
    pub fn is_antibody_class(&self) -> bool {
        self.family == Family::Antibody || self.antibody_bound
    }

    fn write_key(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family.as_str())?;
        if let Some(order) = self.order {
            write!(f, "_{}", order)?;
        }
        if self.antibody_bound {
            f.write_str("__Antibody")?;
        }
        if self.fcrn_bound {
            f.write_str("__FCRn")?;
        }
        Ok(())
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_key(f)?;
        write!(f, "_{}", self.compartment)
    }
}

impl FromStr for Species {
    type Err = SpeciesParseError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let (key, comp) = id
            .rsplit_once('_')
            .ok_or_else(|| SpeciesParseError::MissingCompartment(id.to_string()))?;
        let compartment: Compartment =
            comp.parse()
                .map_err(|_| SpeciesParseError::UnknownCompartment {
                    id: id.to_string(),
                    compartment: comp.to_string(),
                })?;

        let mut parts = key.split("__");
        // split always yields at least one item
        let head = parts.next().unwrap_or_default();
        let (family_str, state) = match head.split_once('_') {
            Some((family, state)) => (family, Some(state)),
            None => (head, None),
        };
        let family = Family::parse(family_str).ok_or_else(|| SpeciesParseError::UnknownFamily {
            id: id.to_string(),
            family: family_str.to_string(),
        })?;

        let order = match (family, state) {
            (Family::Abeta(_), Some(state)) => Some(parse_order(id, state)?),
            (_, None) => None,
            (_, Some(state)) => {
                return Err(SpeciesParseError::InvalidState {
                    id: id.to_string(),
                    state: state.to_string(),
                })
            }
        };
        if matches!(family, Family::Abeta(_)) && order.is_none() {
            return Err(SpeciesParseError::InvalidState {
                id: id.to_string(),
                state: String::new(),
            });
        }

        let mut species = Species {
            family,
            order,
            antibody_bound: false,
            fcrn_bound: false,
            compartment,
        };
        for partner in parts {
            let allowed = match partner {
                "Antibody" => {
                    matches!(family, Family::Abeta(_)) && !species.antibody_bound && !species.fcrn_bound
                }
                "FCRn" => species.is_antibody_class() && !species.fcrn_bound,
                _ => false,
            };
            if !allowed {
                return Err(SpeciesParseError::InvalidPartner {
                    id: id.to_string(),
                    partner: partner.to_string(),
                });
            }
            match partner {
                "Antibody" => species.antibody_bound = true,
                _ => species.fcrn_bound = true,
            }
        }

        Ok(species)
    }
}

fn parse_order(id: &str, state: &str) -> Result<OligomerOrder, SpeciesParseError> {
    let invalid = || SpeciesParseError::InvalidState {
        id: id.to_string(),
        state: state.to_string(),
    };
    let digits = state.strip_prefix('O').ok_or_else(invalid)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let order: u32 = digits.parse().map_err(|_| invalid())?;
    u8::try_from(order)
        .ok()
        .and_then(OligomerOrder::new)
        .ok_or(SpeciesParseError::OrderOutOfRange {
            id: id.to_string(),
            order,
        })
}

impl Serialize for Species {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Species {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}
