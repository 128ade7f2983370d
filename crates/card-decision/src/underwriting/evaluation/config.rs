use serde::{Deserialize, Serialize};

pub const HIGH_INCOME_THRESHOLD: u64 = 100_000;
pub const LOW_INCOME_THRESHOLD: u64 = 20_000;
pub const AUTO_REFERRAL_MAX_AGE: u32 = 20;
pub const DETAILED_VALIDATION_MIN_AGE: u32 = 30;

/// Income and age cut-offs applied by the rule chain.
///
/// Income at or above `high_income` is accepted outright; income strictly below
/// `low_income` is declined once the flyer check passes. Applicants aged
/// `auto_referral_max_age` or younger always go to a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionThresholds {
    pub high_income: u64,
    pub low_income: u64,
    pub auto_referral_max_age: u32,
    pub detailed_validation_min_age: u32,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            high_income: HIGH_INCOME_THRESHOLD,
            low_income: LOW_INCOME_THRESHOLD,
            auto_referral_max_age: AUTO_REFERRAL_MAX_AGE,
            detailed_validation_min_age: DETAILED_VALIDATION_MIN_AGE,
        }
    }
}
