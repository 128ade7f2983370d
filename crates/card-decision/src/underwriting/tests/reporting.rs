use super::common::*;
use crate::underwriting::domain::Decision;
use crate::underwriting::evaluation::{DecisionReason, ReportingCardEvaluator};
use crate::underwriting::validator::ValidationReport;

#[test]
fn accepts_high_income_without_a_report() {
    let reporter = ScriptedReporter::new(ValidationReport::invalid("unused"));
    let engine = ReportingCardEvaluator::new(reporter.clone());

    assert_eq!(
        engine.evaluate(&application(100_000, 19)),
        Decision::AutoAccepted
    );
    assert_eq!(reporter.calls(), 0);
}

#[test]
fn consumes_the_reported_verdict() {
    let engine = ReportingCardEvaluator::new(ScriptedReporter::new(ValidationReport::valid()));

    assert_eq!(
        engine.evaluate(&application(19_999, 42)),
        Decision::AutoDeclined
    );
    assert_eq!(
        engine.evaluate(&application(0, 19)),
        Decision::ReferredToHuman
    );
    assert_eq!(
        engine.evaluate(&application(45_000, 42)),
        Decision::ReferredToHuman
    );
}

#[test]
fn invalid_report_refers_to_a_human() {
    let reporter = ScriptedReporter::new(ValidationReport::invalid("unknown member"));
    let engine = ReportingCardEvaluator::new(reporter.clone());

    let assessment = engine.assess(&application(19_999, 42));

    assert_eq!(assessment.decision, Decision::ReferredToHuman);
    assert_eq!(assessment.reason, DecisionReason::FlyerNumberRejected);
    assert_eq!(reporter.calls(), 1);
}
