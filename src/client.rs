//! HTTP client for the remote work-summary endpoint.

use crate::error::{AppError, Result};
use crate::models::summary::WorkSummary;
use chrono::{DateTime, Local};
use reqwest::Client;
use std::time::Duration;

/// Client for the consolidated work-summary endpoint.
///
/// The endpoint returns a JSON array of pre-aggregated per-agent records
/// for a given `as_of` timestamp. Its internal computation is opaque to
/// this app.
pub struct SummaryClient {
    client: Client,
    base_url: String,
}

impl SummaryClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The endpoint URL without query parameters
    /// * `timeout_secs` - Request timeout in seconds
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch work summaries as of the given local time (now when `None`).
    pub async fn fetch_summary(&self, as_of: Option<DateTime<Local>>) -> Result<Vec<WorkSummary>> {
        if self.base_url.is_empty() {
            return Err(AppError::config("Summary endpoint URL is not configured"));
        }

        let as_of = format_as_of(as_of.unwrap_or_else(Local::now));

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("as_of", as_of.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::api(format!(
                "Summary endpoint responded with status {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_summary_records(&body)
    }
}

/// Format an `as_of` timestamp the way the endpoint expects:
/// `YYYY-MM-DD HH:MM:SS`, local time, no zone suffix.
pub fn format_as_of(ts: DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Parse the endpoint's JSON array, skipping malformed records.
///
/// A record that fails to deserialize is logged and dropped rather than
/// failing the whole response; a body that is not a JSON array is an
/// error.
fn parse_summary_records(body: &str) -> Result<Vec<WorkSummary>> {
    let values: Vec<serde_json::Value> = serde_json::from_str(body)
        .map_err(|e| AppError::parse(format!("Summary response is not a JSON array: {e}")))?;

    let mut records = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<WorkSummary>(value) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("Skipping malformed summary record: {e}");
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_as_of() {
        let ts = Local.with_ymd_and_hms(2024, 3, 1, 9, 5, 7).unwrap();
        assert_eq!(format_as_of(ts), "2024-03-01 09:05:07");
    }

    #[test]
    fn test_parse_full_record() {
        let body = r#"[{
            "agent": "Alice Adams",
            "ldap": "alice",
            "shiftType": "Day",
            "startTime": "08:00",
            "firstInOfficeLog": "08:12",
            "lastLogTime": "16:45",
            "minutesSinceLastLog": 12,
            "lastLogDescription": "Work",
            "lastInOfficeLog": "16:30",
            "totalWorkHours": 8.2,
            "totalWorkHoursWithinShift": 7.9,
            "totalWorkHoursInOffice": 6.5,
            "workdayStatus": "Active"
        }]"#;

        let records = parse_summary_records(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].agent, "Alice Adams");
        assert_eq!(records[0].ldap, "alice");
        assert_eq!(records[0].minutes_since_last_log, 12);
        assert!(records[0].is_active());
    }

    #[test]
    fn test_parse_partial_record_uses_defaults() {
        let body = r#"[{"ldap": "bob", "workdayStatus": "Inactive"}]"#;

        let records = parse_summary_records(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ldap, "bob");
        assert_eq!(records[0].agent, "");
        assert_eq!(records[0].total_work_hours, 0.0);
        assert!(!records[0].is_active());
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let body = r#"[
            {"ldap": "alice", "totalWorkHours": 7.5},
            {"ldap": "bob", "totalWorkHours": "not a number"},
            {"ldap": "carol", "totalWorkHours": 6.0}
        ]"#;

        let records = parse_summary_records(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ldap, "alice");
        assert_eq!(records[1].ldap, "carol");
    }

    #[test]
    fn test_non_array_body_is_error() {
        assert!(parse_summary_records(r#"{"error": "nope"}"#).is_err());
        assert!(parse_summary_records("not json").is_err());
    }

    #[test]
    fn test_empty_array() {
        let records = parse_summary_records("[]").unwrap();
        assert!(records.is_empty());
    }
}
