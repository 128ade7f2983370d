use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::underwriting::domain::{
    CardApplication, LicenseContract, LicenseData, ServiceInformation, ValidationMode,
};
use crate::underwriting::validator::{
    FrequentFlyerValidator, LicensedValidator, ReportingValidator, ValidationFault,
    ValidationReport,
};

pub(super) fn application(gross_annual_income: u64, age: u32) -> CardApplication {
    CardApplication {
        surname: Some("Jones".to_string()),
        age,
        gross_annual_income,
        frequent_flyer_number: "FF-1234".to_string(),
    }
}

pub(super) fn chained_license(key: &str) -> LicenseContract {
    LicenseContract::Chained(ServiceInformation::new(LicenseData::new(key)))
}

/// Validator double with a scripted verdict and a swappable license.
pub(super) struct ScriptedValidator {
    verdict: Mutex<Result<bool, ValidationFault>>,
    license: Mutex<LicenseContract>,
    mode: Mutex<Option<ValidationMode>>,
    checked: Mutex<Vec<String>>,
    license_reads: AtomicUsize,
}

impl ScriptedValidator {
    fn with_verdict(verdict: Result<bool, ValidationFault>) -> Arc<Self> {
        Arc::new(Self {
            verdict: Mutex::new(verdict),
            license: Mutex::new(LicenseContract::Flat("VALID".to_string())),
            mode: Mutex::new(None),
            checked: Mutex::new(Vec::new()),
            license_reads: AtomicUsize::new(0),
        })
    }

    pub(super) fn accepting() -> Arc<Self> {
        Self::with_verdict(Ok(true))
    }

    pub(super) fn rejecting() -> Arc<Self> {
        Self::with_verdict(Ok(false))
    }

    pub(super) fn faulting(message: &str) -> Arc<Self> {
        Self::with_verdict(Err(ValidationFault::new(message)))
    }

    pub(super) fn set_verdict(&self, verdict: Result<bool, ValidationFault>) {
        *self.verdict.lock().expect("verdict lock") = verdict;
    }

    pub(super) fn set_license(&self, license: LicenseContract) {
        *self.license.lock().expect("license lock") = license;
    }

    pub(super) fn mode(&self) -> Option<ValidationMode> {
        *self.mode.lock().expect("mode lock")
    }

    pub(super) fn checked_numbers(&self) -> Vec<String> {
        self.checked.lock().expect("checked lock").clone()
    }

    pub(super) fn check_count(&self) -> usize {
        self.checked.lock().expect("checked lock").len()
    }

    pub(super) fn license_reads(&self) -> usize {
        self.license_reads.load(Ordering::SeqCst)
    }
}

impl FrequentFlyerValidator for ScriptedValidator {
    fn is_valid(&self, frequent_flyer_number: &str) -> Result<bool, ValidationFault> {
        self.checked
            .lock()
            .expect("checked lock")
            .push(frequent_flyer_number.to_string());
        self.verdict.lock().expect("verdict lock").clone()
    }
}

impl LicensedValidator for ScriptedValidator {
    fn license(&self) -> LicenseContract {
        self.license_reads.fetch_add(1, Ordering::SeqCst);
        self.license.lock().expect("license lock").clone()
    }

    fn set_validation_mode(&self, mode: ValidationMode) {
        *self.mode.lock().expect("mode lock") = Some(mode);
    }
}

/// Reporting validator double that records how often it was asked.
pub(super) struct ScriptedReporter {
    report: ValidationReport,
    calls: AtomicUsize,
}

impl ScriptedReporter {
    pub(super) fn new(report: ValidationReport) -> Arc<Self> {
        Arc::new(Self {
            report,
            calls: AtomicUsize::new(0),
        })
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReportingValidator for ScriptedReporter {
    fn check(&self, _frequent_flyer_number: &str) -> ValidationReport {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.report.clone()
    }
}
