mod config;
mod counting;
mod licensed;
mod policy;
mod reporting;

pub use config::{
    DecisionThresholds, AUTO_REFERRAL_MAX_AGE, DETAILED_VALIDATION_MIN_AGE, HIGH_INCOME_THRESHOLD,
    LOW_INCOME_THRESHOLD,
};
pub use counting::CountingCardEvaluator;
pub use licensed::LicensedCardEvaluator;
pub use policy::{Assessment, DecisionReason};
pub use reporting::ReportingCardEvaluator;

use std::sync::Arc;

use super::domain::{CardApplication, Decision};
use super::validator::FrequentFlyerValidator;
use policy::{assess_with, FlyerScreening};

/// Evaluator consulting a plain frequent-flyer validator.
///
/// Validator faults never reach the caller; they refer the application to a human.
pub struct CardEvaluator<V: ?Sized> {
    validator: Arc<V>,
    thresholds: DecisionThresholds,
}

impl<V: FrequentFlyerValidator + ?Sized> CardEvaluator<V> {
    pub fn new(validator: Arc<V>) -> Self {
        Self::with_thresholds(validator, DecisionThresholds::default())
    }

    pub fn with_thresholds(validator: Arc<V>, thresholds: DecisionThresholds) -> Self {
        Self {
            validator,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> &DecisionThresholds {
        &self.thresholds
    }

    pub fn evaluate(&self, application: &CardApplication) -> Decision {
        self.assess(application).decision
    }

    pub fn assess(&self, application: &CardApplication) -> Assessment {
        assess_with(application, &self.thresholds, |application| {
            FlyerScreening::from(self.validator.is_valid(&application.frequent_flyer_number))
        })
    }
}
