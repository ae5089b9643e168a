//! Integration tests for the reaction table.
//!
//! Tests verify that:
//! - Every rule emits exactly the closed-form number of records
//! - Reversible records carry exactly two rate constant names
//! - Every identifier is well-formed and within orders 1..=25
//! - Antibody affinity tiers partition orders 1..=25
//! - Reference reactions are reproduced field for field

use std::collections::HashSet;

use abeta_network::{
    build_reactions,
    network::{
        AffinityTier, Compartment, Family, OligomerOrder, RateExpression, RateType, Rule, Species,
        SpeciesList,
    },
    validate, BuilderConfig, Peptide, ReactionRecord, ReactionTable,
};

fn default_table() -> ReactionTable {
    build_reactions(&BuilderConfig::default())
}

fn find<'a>(
    table: &'a ReactionTable,
    rule: Rule,
    pred: impl Fn(&ReactionRecord) -> bool,
) -> Vec<&'a ReactionRecord> {
    table.of_rule(rule).filter(|r| pred(*r)).collect()
}

// ============================================================================
// Counts
// ============================================================================

#[test]
fn test_monomer_addition_count() {
    // 2 species x 23 orders
    let table = default_table();
    assert_eq!(table.of_rule(Rule::MonomerAddition).count(), 46);
}

#[test]
fn test_every_rule_matches_closed_form() {
    let table = default_table();
    let counts = table.count_by_rule();
    for rule in Rule::ALL {
        let expected = if rule.is_opt_in() { 0 } else { rule.expected_count() };
        assert_eq!(
            counts.get(&rule).copied().unwrap_or(0),
            expected,
            "Rule {:?} count mismatch",
            rule
        );
    }
}

#[test]
fn test_total_is_fixed() {
    assert_eq!(default_table().len(), 597);

    let extended = build_reactions(&BuilderConfig {
        include_central_antibody_binding: true,
        ..Default::default()
    });
    assert_eq!(extended.len(), 601);
}

#[test]
fn test_build_is_deterministic() {
    assert_eq!(default_table(), default_table());
}

// ============================================================================
// Structural properties
// ============================================================================

#[test]
fn test_reversible_records_have_two_names() {
    let table = default_table();
    let mut reversible = 0;
    for record in &table {
        if record.rate_type() == RateType::ReversibleMassAction {
            reversible += 1;
            match record.rate_expression() {
                RateExpression::Pair(fwd, bwd) => {
                    assert!(!fwd.is_empty() && !bwd.is_empty());
                    assert!(!fwd.contains(',') && !bwd.contains(','));
                }
                RateExpression::Single(e) => panic!("RMA record with single expression {}", e),
            }
        }
    }
    // 46 monomer addition + 6 FcRn binding
    assert_eq!(reversible, 52);
}

#[test]
fn test_identifiers_well_formed() {
    let compartments: HashSet<&str> = Compartment::ALL.iter().map(|c| c.as_str()).collect();
    let table = default_table();
    for record in &table {
        for species in record.species() {
            let id = species.to_string();
            let parsed: Species = id.parse().unwrap_or_else(|e| panic!("{}: {}", id, e));
            assert_eq!(parsed, *species);

            let (_, comp) = id.rsplit_once('_').unwrap();
            assert!(compartments.contains(comp), "{} has unknown compartment", id);
        }
    }
}

#[test]
fn test_orders_within_range() {
    let table = default_table();
    for species in table.iter().flat_map(|r| r.species()) {
        if let Some(order) = species.order {
            assert!((1..=25).contains(&order.get()), "{}", species);
        }
        assert_eq!(species.order.is_some(), matches!(species.family, Family::Abeta(_)));
    }
}

#[test]
fn test_affinity_tiers_partition_orders() {
    let table = default_table();
    let binding = [
        Rule::MonomerAntibodyBinding,
        Rule::OligomerAntibodyBinding,
        Rule::ProtofibrilAntibodyBinding,
        Rule::PlaqueAntibodyBinding,
    ];
    for peptide in Peptide::ALL {
        for comp in [Compartment::Isf, Compartment::Pvs] {
            for order in OligomerOrder::all() {
                let target = Species::abeta(peptide, order, comp);
                let hits: Vec<&ReactionRecord> = table
                    .iter()
                    .filter(|r| binding.contains(&r.rule) && r.reactants[0] == target)
                    .collect();
                assert_eq!(hits.len(), 1, "{} bound {} times", target, hits.len());

                let expected = match order.get() {
                    1 => "k0_Antibody",
                    2..=17 => "k1_Antibody",
                    18..=24 => "k2_Antibody",
                    _ => "k3_Antibody",
                };
                assert_eq!(hits[0].rate_expression(), RateExpression::Single(expected));
                assert_eq!(AffinityTier::for_order(order).rate_constant(), expected);
            }
        }
    }
}

#[test]
fn test_validation_passes() {
    let report = validate(&default_table());
    assert!(report.is_ok(), "Validation errors: {:?}", report.errors);
}

// ============================================================================
// Reference reactions
// ============================================================================

#[test]
fn test_monomer_addition_reference_record() {
    let table = default_table();
    let record = &table.records()[0];

    assert_eq!(record.name, "Monomer Addition and Dissociation");
    assert_eq!(SpeciesList(&record.reactants).to_string(), "[AB40_O1_ISF, AB40_O1_ISF]");
    assert_eq!(SpeciesList(&record.products).to_string(), "[AB40_O2_ISF]");
    assert_eq!(record.rate_type().code(), "RMA");
    assert_eq!(
        record.rate_expression().to_string(),
        "[k_O1_O2_AB40_ISF,k_O2_O1_AB40_ISF]"
    );
}

#[test]
fn test_o24_split_reference_record() {
    let table = default_table();
    let hits = find(&table, Rule::O24Split, |r| {
        r.reactants[0].family == Family::Abeta(Peptide::Ab42)
    });
    assert_eq!(hits.len(), 1);
    assert_eq!(SpeciesList(&hits[0].reactants).to_string(), "[AB42_O24_ISF]");
    assert_eq!(
        SpeciesList(&hits[0].products).to_string(),
        "[AB42_O12_ISF, AB42_O12_ISF]"
    );
}

#[test]
fn test_subcutaneous_dose_is_conserved() {
    let table = default_table();
    let absorbed: Vec<_> = table.of_rule(Rule::SubcutaneousAbsorption).collect();
    let cleared: Vec<_> = table.of_rule(Rule::SubcutaneousClearance).collect();
    assert_eq!(absorbed.len(), 1);
    assert_eq!(cleared.len(), 1);

    assert_eq!(absorbed[0].reactants[0].to_string(), "Antibody_SubCutComp");
    assert_eq!(absorbed[0].products[0].to_string(), "Antibody_centralAntibody");
    assert!(cleared[0].products.is_empty());
    assert_eq!(cleared[0].reactants, absorbed[0].reactants);

    // F transported + (1 - F) cleared, both at the absorption rate
    let absorbed_expr = absorbed[0].rate_expression().to_string();
    let cleared_expr = cleared[0].rate_expression().to_string();
    assert_eq!(absorbed_expr, "SubCut_ka*V_SubCutComp*SubCut_bioavailability");
    assert_eq!(cleared_expr, "SubCut_ka*(1.0 - SubCut_bioavailability)");
}

#[test]
fn test_production_chain() {
    let table = default_table();
    let app = table.of_rule(Rule::AppProduction).next().unwrap();
    assert!(app.reactants.is_empty());
    assert_eq!(app.products[0].to_string(), "APP_ISF");

    let branches: Vec<String> = table
        .of_rule(Rule::C99ToAbeta)
        .map(|r| format!("{} {}", r.products[0], r.rate_expression()))
        .collect();
    assert_eq!(branches, vec!["AB40_O1_ISF k_AB40", "AB42_O1_ISF k_AB42"]);

    let systemic: Vec<String> = table
        .of_rule(Rule::SystemicAbetaProduction)
        .map(|r| r.rate_expression().to_string())
        .collect();
    assert_eq!(
        systemic,
        vec![
            "AB40_systemic_synthesis_rate/V_central",
            "AB42_systemic_synthesis_rate/V_central"
        ]
    );
}

#[test]
fn test_microglia_plaque_expression() {
    let table = default_table();
    let hits = find(&table, Rule::MicrogliaPlaqueDegradation, |_| true);
    assert_eq!(
        hits[0].rate_expression().to_string(),
        "0.5*Microglia*(Microglia_high_frac*Microglia_high_rate_AB40 + (1.0 - Microglia_high_frac)*Microglia_low_rate_AB40)"
    );
}

#[test]
fn test_rate_type_pairing() {
    let table = default_table();
    let ide = table.of_rule(Rule::IdeDegradation).next().unwrap();
    assert_eq!(ide.rate_type(), RateType::CustomConcPerTime);
    for record in table.of_rule(Rule::CompartmentFlow) {
        assert_eq!(record.rate_type(), RateType::UserDefinedFunction);
    }
    for record in table.of_rule(Rule::BarrierDegradation) {
        assert_eq!(record.rate_type(), RateType::MassAction);
        assert_eq!(record.rate_expression().to_string(), "kdeg");
    }
}
