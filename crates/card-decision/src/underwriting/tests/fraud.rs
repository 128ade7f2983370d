use super::common::*;
use crate::underwriting::domain::{CardApplication, Decision};
use crate::underwriting::evaluation::DecisionReason;
use crate::underwriting::fraud::{from_fn, FraudEscalationEngine, FraudLookup};

fn smith() -> CardApplication {
    CardApplication {
        surname: Some("Smith".to_string()),
        gross_annual_income: 8_000_000,
        ..CardApplication::default()
    }
}

/// Overrides only the internal step.
struct AlwaysRiskyCheck;

impl FraudLookup for AlwaysRiskyCheck {
    fn check(&self, _application: &CardApplication) -> bool {
        true
    }
}

/// Overrides only the full predicate.
struct AlwaysRiskyPredicate;

impl FraudLookup for AlwaysRiskyPredicate {
    fn is_risk(&self, _application: &CardApplication) -> bool {
        true
    }
}

#[test]
fn stock_lookup_flags_the_placeholder_surname() {
    let engine: FraudEscalationEngine = FraudEscalationEngine::default();

    assert_eq!(
        engine.evaluate_by_composed_check(&smith()),
        Decision::ReferredToHumanFraudRisk
    );
    assert_eq!(
        engine.evaluate_by_extensible_point(&smith()),
        Decision::ReferredToHumanFraudRisk
    );
}

#[test]
fn stock_lookup_refers_other_surnames_normally() {
    let engine: FraudEscalationEngine = FraudEscalationEngine::default();
    let jones = application(8_000_000, 40);

    let assessment = engine.assess_by_extensible_point(&jones);

    assert_eq!(assessment.decision, Decision::ReferredToHuman);
    assert_eq!(assessment.reason, DecisionReason::NoFraudRisk);
    assert_eq!(
        engine.evaluate_by_composed_check(&jones),
        Decision::ReferredToHuman
    );
    assert_eq!(
        engine.evaluate_by_composed_check(&CardApplication::default()),
        Decision::ReferredToHuman
    );
}

#[test]
fn overriding_the_internal_step_drives_the_composed_entry_point() {
    let engine = FraudEscalationEngine::new(AlwaysRiskyCheck);
    let jones = application(50_000, 40);

    assert_eq!(
        engine.evaluate_by_composed_check(&jones),
        Decision::ReferredToHumanFraudRisk
    );
    assert_eq!(
        engine.evaluate_by_extensible_point(&jones),
        Decision::ReferredToHuman
    );
}

#[test]
fn overriding_the_predicate_drives_the_extensible_entry_point() {
    let engine = FraudEscalationEngine::new(AlwaysRiskyPredicate);
    let jones = application(50_000, 40);

    assert_eq!(
        engine.evaluate_by_extensible_point(&jones),
        Decision::ReferredToHumanFraudRisk
    );
    assert_eq!(
        engine.evaluate_by_composed_check(&jones),
        Decision::ReferredToHuman
    );
}

#[test]
fn composed_predicate_answers_both_entry_points_identically() {
    let engine = FraudEscalationEngine::new(from_fn(|application: &CardApplication| {
        application.gross_annual_income > 1_000_000
    }));

    for candidate in [smith(), application(40_000, 30), application(2_000_000, 30)] {
        assert_eq!(
            engine.evaluate_by_composed_check(&candidate),
            engine.evaluate_by_extensible_point(&candidate)
        );
    }
    assert_eq!(
        engine.evaluate_by_composed_check(&smith()),
        Decision::ReferredToHumanFraudRisk
    );
    assert!(engine.lookup().is_risk(&application(2_000_000, 30)));
}
