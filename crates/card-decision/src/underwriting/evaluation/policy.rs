use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::super::domain::{CardApplication, Decision};
use super::super::validator::ValidationFault;
use super::config::DecisionThresholds;

/// Rule that produced a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionReason {
    HighIncome,
    LicenseExpired,
    FlyerNumberRejected,
    ValidationFault { message: String },
    UnderAutoReferralAge,
    LowIncome,
    ManualReviewBand,
    FraudRiskFlagged,
    NoFraudRisk,
}

impl DecisionReason {
    pub fn summary(&self) -> String {
        match self {
            DecisionReason::HighIncome => "income meets the auto-accept threshold".to_string(),
            DecisionReason::LicenseExpired => {
                "validation service license expired; flyer number not checked".to_string()
            }
            DecisionReason::FlyerNumberRejected => {
                "frequent flyer number failed validation".to_string()
            }
            DecisionReason::ValidationFault { message } => {
                format!("frequent flyer validation unavailable: {message}")
            }
            DecisionReason::UnderAutoReferralAge => {
                "applicant below the automatic decision age".to_string()
            }
            DecisionReason::LowIncome => "income below the decline threshold".to_string(),
            DecisionReason::ManualReviewBand => {
                "income between decline and accept thresholds".to_string()
            }
            DecisionReason::FraudRiskFlagged => "fraud lookup flagged the applicant".to_string(),
            DecisionReason::NoFraudRisk => "no fraud risk flagged".to_string(),
        }
    }
}

/// Decision together with the rule that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub decision: Decision,
    pub reason: DecisionReason,
}

impl Assessment {
    pub(crate) fn new(decision: Decision, reason: DecisionReason) -> Self {
        Self { decision, reason }
    }

    pub(crate) fn referred(reason: DecisionReason) -> Self {
        Self::new(Decision::ReferredToHuman, reason)
    }

    pub fn summary(&self) -> String {
        format!("{}: {}", self.decision.label(), self.reason.summary())
    }
}

/// Outcome of the validator step as seen by the rule chain.
pub(crate) enum FlyerScreening {
    Valid,
    Rejected,
    Faulted(ValidationFault),
    LicenseExpired,
}

impl From<Result<bool, ValidationFault>> for FlyerScreening {
    fn from(verdict: Result<bool, ValidationFault>) -> Self {
        match verdict {
            Ok(true) => FlyerScreening::Valid,
            Ok(false) => FlyerScreening::Rejected,
            Err(fault) => FlyerScreening::Faulted(fault),
        }
    }
}

/// Ordered rule chain, first match wins. `screen` runs only when the
/// high-income rule does not apply.
pub(crate) fn assess_with<F>(
    application: &CardApplication,
    thresholds: &DecisionThresholds,
    screen: F,
) -> Assessment
where
    F: FnOnce(&CardApplication) -> FlyerScreening,
{
    let assessment = apply_rules(application, thresholds, screen);
    debug!(
        decision = assessment.decision.label(),
        reason = ?assessment.reason,
        age = application.age,
        income = application.gross_annual_income,
        "application assessed"
    );
    assessment
}

fn apply_rules<F>(
    application: &CardApplication,
    thresholds: &DecisionThresholds,
    screen: F,
) -> Assessment
where
    F: FnOnce(&CardApplication) -> FlyerScreening,
{
    if application.gross_annual_income >= thresholds.high_income {
        return Assessment::new(Decision::AutoAccepted, DecisionReason::HighIncome);
    }

    match screen(application) {
        FlyerScreening::Valid => {}
        FlyerScreening::Rejected => {
            return Assessment::referred(DecisionReason::FlyerNumberRejected);
        }
        FlyerScreening::LicenseExpired => {
            return Assessment::referred(DecisionReason::LicenseExpired);
        }
        FlyerScreening::Faulted(fault) => {
            warn!(error = %fault, "frequent flyer validation faulted; referring application");
            return Assessment::referred(DecisionReason::ValidationFault {
                message: fault.message().to_string(),
            });
        }
    }

    if application.age <= thresholds.auto_referral_max_age {
        return Assessment::referred(DecisionReason::UnderAutoReferralAge);
    }

    if application.gross_annual_income < thresholds.low_income {
        return Assessment::new(Decision::AutoDeclined, DecisionReason::LowIncome);
    }

    Assessment::referred(DecisionReason::ManualReviewBand)
}
