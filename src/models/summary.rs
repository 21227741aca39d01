//! Work-summary records from the remote aggregation endpoint.

use serde::{Deserialize, Serialize};

/// Pre-aggregated per-agent work summary for one day.
///
/// The endpoint computes these server-side; this app only renders them.
/// All fields are defaulted so a partially filled record still displays.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkSummary {
    pub agent: String,
    pub ldap: String,
    pub shift_type: String,
    pub start_time: String,
    pub first_in_office_log: String,
    pub last_log_time: String,
    pub minutes_since_last_log: i64,
    pub last_log_description: String,
    pub last_in_office_log: String,
    pub total_work_hours: f64,
    pub total_work_hours_within_shift: f64,
    pub total_work_hours_in_office: f64,
    pub workday_status: String,
}

impl WorkSummary {
    /// Whether the agent's workday is currently marked active.
    pub fn is_active(&self) -> bool {
        self.workday_status == "Active"
    }
}
