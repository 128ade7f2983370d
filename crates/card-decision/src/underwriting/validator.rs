use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use super::domain::{LicenseContract, ValidationMode};
use crate::config::ValidatorConfig;

/// Fault raised by a validation service while checking a frequent-flyer number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("frequent flyer validation failed: {message}")]
pub struct ValidationFault {
    message: String,
}

impl ValidationFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// External service answering whether a frequent-flyer number is valid.
pub trait FrequentFlyerValidator: Send + Sync {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<bool, ValidationFault>;
}

/// Verdict returned by a [`ReportingValidator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            valid: true,
            diagnostic: None,
        }
    }

    pub fn invalid(diagnostic: impl Into<String>) -> Self {
        Self {
            valid: false,
            diagnostic: Some(diagnostic.into()),
        }
    }
}

/// Validator that hands back a full report instead of a bare flag. Checks are total.
pub trait ReportingValidator: Send + Sync {
    fn check(&self, frequent_flyer_number: &str) -> ValidationReport;
}

/// Validator running under a license and accepting a lookup depth hint.
pub trait LicensedValidator: FrequentFlyerValidator {
    /// Current license, read fresh on every call.
    fn license(&self) -> LicenseContract;

    /// Must be applied before the next `is_valid` call to take effect.
    fn set_validation_mode(&self, mode: ValidationMode);
}

/// Decorator tallying every executed validity check on the wrapped validator.
pub struct CountingValidator<V: ?Sized> {
    performed: AtomicU64,
    inner: Arc<V>,
}

impl<V: FrequentFlyerValidator + ?Sized> CountingValidator<V> {
    pub fn new(inner: Arc<V>) -> Self {
        Self {
            performed: AtomicU64::new(0),
            inner,
        }
    }

    pub fn performed(&self) -> u64 {
        self.performed.load(Ordering::Relaxed)
    }

    pub fn inner(&self) -> &Arc<V> {
        &self.inner
    }
}

impl<V: FrequentFlyerValidator + ?Sized> FrequentFlyerValidator for CountingValidator<V> {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<bool, ValidationFault> {
        let verdict = self.inner.is_valid(frequent_flyer_number);
        self.performed.fetch_add(1, Ordering::Relaxed);
        verdict
    }
}

/// Fixed-verdict validator used where no real validation service is wired in.
#[derive(Debug)]
pub struct StaticValidator {
    accepts: bool,
    license_key: String,
    mode: Mutex<ValidationMode>,
}

impl StaticValidator {
    pub fn new(accepts: bool, license_key: impl Into<String>) -> Self {
        Self {
            accepts,
            license_key: license_key.into(),
            mode: Mutex::new(ValidationMode::default()),
        }
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self::new(config.accepts, config.license_key.clone())
    }

    pub fn validation_mode(&self) -> ValidationMode {
        *self.mode.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FrequentFlyerValidator for StaticValidator {
    fn is_valid(&self, _frequent_flyer_number: &str) -> Result<bool, ValidationFault> {
        Ok(self.accepts)
    }
}

impl ReportingValidator for StaticValidator {
    fn check(&self, frequent_flyer_number: &str) -> ValidationReport {
        if self.accepts {
            ValidationReport::valid()
        } else {
            ValidationReport::invalid(format!(
                "frequent flyer number '{frequent_flyer_number}' rejected"
            ))
        }
    }
}

impl LicensedValidator for StaticValidator {
    fn license(&self) -> LicenseContract {
        LicenseContract::Flat(self.license_key.clone())
    }

    fn set_validation_mode(&self, mode: ValidationMode) {
        *self.mode.lock().unwrap_or_else(PoisonError::into_inner) = mode;
    }
}
