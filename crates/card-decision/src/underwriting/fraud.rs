use tracing::info;

use super::domain::{CardApplication, Decision};
use super::evaluation::{Assessment, DecisionReason};

/// Surname the placeholder fraud model treats as high risk.
pub const FLAGGED_SURNAME: &str = "Smith";

/// Fraud risk predicate over an application.
///
/// `check` is the replaceable internal step, `is_risk` the full predicate.
/// Implementors may override either; both default to the surname stub.
pub trait FraudLookup: Send + Sync {
    fn check(&self, application: &CardApplication) -> bool {
        surname_is_flagged(application)
    }

    fn is_risk(&self, application: &CardApplication) -> bool {
        surname_is_flagged(application)
    }
}

fn surname_is_flagged(application: &CardApplication) -> bool {
    application.surname.as_deref() == Some(FLAGGED_SURNAME)
}

/// Stock lookup using the surname stub for both entry points.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurnameFraudLookup;

impl FraudLookup for SurnameFraudLookup {}

/// Lookup backed by a closure, answering both entry points.
#[derive(Clone)]
pub struct FnFraudLookup<F> {
    predicate: F,
}

/// Wrap a predicate so it can stand in for the stock fraud lookup.
pub fn from_fn<F>(predicate: F) -> FnFraudLookup<F>
where
    F: Fn(&CardApplication) -> bool + Send + Sync,
{
    FnFraudLookup { predicate }
}

impl<F> FraudLookup for FnFraudLookup<F>
where
    F: Fn(&CardApplication) -> bool + Send + Sync,
{
    fn check(&self, application: &CardApplication) -> bool {
        (self.predicate)(application)
    }

    fn is_risk(&self, application: &CardApplication) -> bool {
        (self.predicate)(application)
    }
}

/// Referral rules that single out applications carrying fraud risk.
pub struct FraudEscalationEngine<L = SurnameFraudLookup> {
    lookup: L,
}

impl Default for FraudEscalationEngine {
    fn default() -> Self {
        Self::new(SurnameFraudLookup)
    }
}

impl<L: FraudLookup> FraudEscalationEngine<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn evaluate_by_composed_check(&self, application: &CardApplication) -> Decision {
        self.assess_by_composed_check(application).decision
    }

    pub fn evaluate_by_extensible_point(&self, application: &CardApplication) -> Decision {
        self.assess_by_extensible_point(application).decision
    }

    pub fn assess_by_composed_check(&self, application: &CardApplication) -> Assessment {
        escalate(self.lookup.check(application))
    }

    pub fn assess_by_extensible_point(&self, application: &CardApplication) -> Assessment {
        escalate(self.lookup.is_risk(application))
    }
}

fn escalate(flagged: bool) -> Assessment {
    if flagged {
        info!("fraud risk flagged; escalating referral");
        Assessment::new(
            Decision::ReferredToHumanFraudRisk,
            DecisionReason::FraudRiskFlagged,
        )
    } else {
        Assessment::referred(DecisionReason::NoFraudRisk)
    }
}
