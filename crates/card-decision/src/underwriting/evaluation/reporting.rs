use std::sync::Arc;

use super::super::domain::{CardApplication, Decision};
use super::super::validator::ReportingValidator;
use super::config::DecisionThresholds;
use super::policy::{assess_with, Assessment, FlyerScreening};

/// Evaluator consuming validators that return a full `ValidationReport`.
pub struct ReportingCardEvaluator<V: ?Sized> {
    validator: Arc<V>,
    thresholds: DecisionThresholds,
}

impl<V: ReportingValidator + ?Sized> ReportingCardEvaluator<V> {
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
            let report = self.validator.check(&application.frequent_flyer_number);
            if let Some(diagnostic) = &report.diagnostic {
                tracing::debug!(%diagnostic, valid = report.valid, "validator diagnostic");
            }

            if report.valid {
                FlyerScreening::Valid
            } else {
                FlyerScreening::Rejected
            }
        })
    }
}
