//! Credit-card application underwriting: the ordered decision rules, the frequent-flyer
//! validator contracts they consume, and the fraud escalation rules.

pub mod domain;
pub mod evaluation;
pub mod fraud;
pub mod intake;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{
    CardApplication, Decision, LicenseContract, LicenseData, ServiceInformation, ValidationMode,
    EXPIRED_LICENSE_KEY,
};
pub use evaluation::{
    Assessment, CardEvaluator, CountingCardEvaluator, DecisionReason, DecisionThresholds,
    LicensedCardEvaluator, ReportingCardEvaluator,
};
pub use fraud::{from_fn, FnFraudLookup, FraudEscalationEngine, FraudLookup, SurnameFraudLookup};
pub use intake::{load_applications, parse_applications, IntakeError};
pub use validator::{
    CountingValidator, FrequentFlyerValidator, LicensedValidator, ReportingValidator,
    StaticValidator, ValidationFault, ValidationReport,
};
