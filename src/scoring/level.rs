//! Readiness level tiers.

use serde::{Deserialize, Serialize};

/// Qualitative readiness tier derived from the percentage score.
///
/// Boundaries are closed at the lower end: exactly 80.0 is `Excellent`,
/// exactly 60.0 is `Good`, exactly 40.0 is `Fair`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReadinessLevel {
    /// 80-100
    Excellent,
    /// 60-79
    Good,
    /// 40-59
    Fair,
    /// Below 40
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

impl ReadinessLevel {
    /// Lower bound of the `Excellent` tier
    pub const EXCELLENT_THRESHOLD: f64 = 80.0;
    /// Lower bound of the `Good` tier
    pub const GOOD_THRESHOLD: f64 = 60.0;
    /// Lower bound of the `Fair` tier
    pub const FAIR_THRESHOLD: f64 = 40.0;

    /// Create level from a percentage score
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= Self::EXCELLENT_THRESHOLD {
            Self::Excellent
        } else if percentage >= Self::GOOD_THRESHOLD {
            Self::Good
        } else if percentage >= Self::FAIR_THRESHOLD {
            Self::Fair
        } else {
            Self::NeedsWork
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsWork => "Needs Work",
        }
    }
}

impl std::fmt::Display for ReadinessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
