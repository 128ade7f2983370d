use serde::{Deserialize, Serialize};

/// License key value signalling that the validation service must not be trusted.
pub const EXPIRED_LICENSE_KEY: &str = "EXPIRED";

/// Applicant data submitted with a credit-card application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardApplication {
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub age: u32,
    pub gross_annual_income: u64,
    #[serde(default)]
    pub frequent_flyer_number: String,
}

/// Final disposition of an evaluated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    AutoAccepted,
    AutoDeclined,
    ReferredToHuman,
    ReferredToHumanFraudRisk,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::AutoAccepted => "auto_accepted",
            Decision::AutoDeclined => "auto_declined",
            Decision::ReferredToHuman => "referred_to_human",
            Decision::ReferredToHumanFraudRisk => "referred_to_human_fraud_risk",
        }
    }

    pub const fn is_referral(self) -> bool {
        matches!(
            self,
            Decision::ReferredToHuman | Decision::ReferredToHumanFraudRisk
        )
    }
}

/// Depth of the lookup a validator performs, chosen from the applicant's age.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMode {
    #[default]
    Quick,
    Detailed,
}

/// Innermost link of the license chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseData {
    license_key: String,
}

impl LicenseData {
    pub fn new(license_key: impl Into<String>) -> Self {
        Self {
            license_key: license_key.into(),
        }
    }

    pub fn license_key(&self) -> &str {
        &self.license_key
    }
}

/// Service metadata published by a validator; owns the license it runs under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInformation {
    license: LicenseData,
}

impl ServiceInformation {
    pub fn new(license: LicenseData) -> Self {
        Self { license }
    }

    pub fn license(&self) -> &LicenseData {
        &self.license
    }
}

/// The two shapes in which a validator can expose its license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseContract {
    /// A single key property on the validator itself.
    Flat(String),
    /// A key reached through `service_information.license.license_key`.
    Chained(ServiceInformation),
}

impl LicenseContract {
    pub fn license_key(&self) -> &str {
        match self {
            LicenseContract::Flat(key) => key,
            LicenseContract::Chained(info) => info.license().license_key(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.license_key() == EXPIRED_LICENSE_KEY
    }
}
