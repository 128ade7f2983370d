use std::sync::Arc;

use super::super::domain::{CardApplication, Decision};
use super::super::validator::{CountingValidator, FrequentFlyerValidator};
use super::config::DecisionThresholds;
use super::policy::{assess_with, Assessment, FlyerScreening};

/// Evaluator that keeps a running tally of validity checks it caused.
///
/// The tally counts every check that executed, whatever its verdict. High-income
/// applications never reach the validator and leave it untouched.
pub struct CountingCardEvaluator<V: ?Sized> {
    validator: CountingValidator<V>,
    thresholds: DecisionThresholds,
}

impl<V: FrequentFlyerValidator + ?Sized> CountingCardEvaluator<V> {
    pub fn new(validator: Arc<V>) -> Self {
        Self::with_thresholds(validator, DecisionThresholds::default())
    }

    pub fn with_thresholds(validator: Arc<V>, thresholds: DecisionThresholds) -> Self {
        Self {
            validator: CountingValidator::new(validator),
            thresholds,
        }
    }

    /// Validity checks performed since construction.
    pub fn count(&self) -> u64 {
        self.validator.performed()
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
