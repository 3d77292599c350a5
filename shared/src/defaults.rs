//! Fallback values used when a generation request leaves something out
//!
//! All fallbacks live in this one table so the backend configuration can
//! override them in a single place.

use crate::profile::ActivityLevel;
use serde::{Deserialize, Serialize};

/// Days per week that produce their own frequency label
pub const SUPPORTED_DAYS_PER_WEEK: &[u32] = &[3, 4, 5, 6];

/// Planner fallback values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDefaults {
    /// Plan length when `durationWeeks` is not supplied
    pub default_duration_weeks: u32,
    /// Frequency used when `daysPerWeek` is missing or unsupported
    pub default_days_per_week: u32,
    /// TDEE multiplier for a missing or unknown activity level
    pub default_activity_multiplier: f64,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            default_duration_weeks: 4,
            default_days_per_week: 3,
            default_activity_multiplier: 1.55,
        }
    }
}

impl PlanDefaults {
    pub fn duration_weeks(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.default_duration_weeks)
    }

    /// Frequency label, e.g. `"4 times/week"`
    pub fn frequency_label(&self, days_per_week: Option<u32>) -> String {
        let days = days_per_week
            .filter(|d| SUPPORTED_DAYS_PER_WEEK.contains(d))
            .unwrap_or(self.default_days_per_week);
        format!("{} times/week", days)
    }

    pub fn activity_multiplier(&self, level: Option<ActivityLevel>) -> f64 {
        level
            .map(|l| l.multiplier())
            .unwrap_or(self.default_activity_multiplier)
    }
}
