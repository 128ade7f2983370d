use std::sync::Arc;

use super::super::domain::{CardApplication, Decision, ValidationMode};
use super::super::validator::LicensedValidator;
use super::config::DecisionThresholds;
use super::policy::{assess_with, Assessment, FlyerScreening};

/// Evaluator that refuses to trust a validator whose license has expired.
///
/// For every application below the high-income threshold it re-reads the
/// validator's license, then writes the validation mode onto the validator,
/// then runs the flyer check, in that order.
pub struct LicensedCardEvaluator<V: ?Sized> {
    validator: Arc<V>,
    thresholds: DecisionThresholds,
}

impl<V: LicensedValidator + ?Sized> LicensedCardEvaluator<V> {
    pub fn new(validator: Arc<V>) -> Self {
        Self::with_thresholds(validator, DecisionThresholds::default())
    }

    pub fn with_thresholds(validator: Arc<V>, thresholds: DecisionThresholds) -> Self {
        Self {
            validator,
            thresholds,
        }
    }

    pub fn evaluate(&self, application: &CardApplication) -> Decision {
        self.assess(application).decision
    }

    pub fn assess(&self, application: &CardApplication) -> Assessment {
        assess_with(application, &self.thresholds, |application| {
            if self.validator.license().is_expired() {
                return FlyerScreening::LicenseExpired;
            }

            self.validator
                .set_validation_mode(self.validation_mode_for(application));

            FlyerScreening::from(self.validator.is_valid(&application.frequent_flyer_number))
        })
    }

    fn validation_mode_for(&self, application: &CardApplication) -> ValidationMode {
        if application.age >= self.thresholds.detailed_validation_min_age {
            ValidationMode::Detailed
        } else {
            ValidationMode::Quick
        }
    }
}
