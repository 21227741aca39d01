//! Late-arrival aggregation.
//!
//! Given one calendar day of attendance logs and the agent roster, finds
//! each agent's first log of the day, classifies it against the cutoff
//! time, and returns the late entries sorted latest-first.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime, Timelike};
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::entities::{agents, attendance_logs};

/// Display name used when a log's agent key is absent from the roster.
pub const UNKNOWN_AGENT: &str = "Unknown Agent";

/// Earliest log of the day for one agent.
#[derive(Debug, Clone)]
pub struct FirstLogin {
    pub time: DateTimeWithTimeZone,
    pub event: attendance_logs::Model,
}

/// One late-login row: an agent whose first log of the day came after
/// the cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct LateLoginEntry {
    pub ldap: String,
    pub display_name: String,
    pub login_time: DateTimeWithTimeZone,
    pub hours_late: f64,
}

impl LateLoginEntry {
    /// Lateness in whole minutes for display.
    pub fn minutes_late(&self) -> i64 {
        (self.hours_late * 60.0).round() as i64
    }

    /// Severity tier for display styling.
    pub fn severity(&self) -> LateSeverity {
        LateSeverity::for_hours(self.hours_late)
    }
}

/// Display severity tier for a late login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LateSeverity {
    /// Under 30 minutes late.
    Low,
    /// 30 to 60 minutes late.
    Medium,
    /// An hour or more late.
    High,
}

impl LateSeverity {
    pub fn for_hours(hours_late: f64) -> Self {
        if hours_late < 0.5 {
            Self::Low
        } else if hours_late < 1.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Strip the domain part from a logged agent key.
///
/// Logs carry `user@domain`; the roster keys agents by the bare username.
fn bare_ldap(ldap: &str) -> &str {
    ldap.split('@').next().unwrap_or(ldap)
}

/// Extract the earliest log per agent within the given day.
///
/// Minimum selection is an explicit fold over a map keyed by bare ldap,
/// so the result does not depend on the input ordering. Events outside
/// the day are skipped.
pub fn first_logins(events: &[attendance_logs::Model], day: NaiveDate) -> HashMap<String, FirstLogin> {
    let mut firsts: HashMap<String, FirstLogin> = HashMap::new();

    for event in events {
        if event.logged_at.date_naive() != day {
            continue;
        }

        let key = bare_ldap(&event.ldap);
        match firsts.get_mut(key) {
            Some(first) if event.logged_at < first.time => {
                first.time = event.logged_at;
                first.event = event.clone();
            }
            Some(_) => {}
            None => {
                firsts.insert(
                    key.to_string(),
                    FirstLogin {
                        time: event.logged_at,
                        event: event.clone(),
                    },
                );
            }
        }
    }

    firsts
}

/// Compute the late logins for one day.
///
/// An agent is late when the first log's time of day is strictly after
/// the cutoff, compared at (hour, minute) granularity: a first log at
/// exactly the cutoff minute is on time. The lateness magnitude is
/// `(hour - cutoff_hour) + minute / 60`, taking the fractional part
/// from the login minute rather than from elapsed time since the
/// cutoff.
///
/// Agents missing from the roster get the [`UNKNOWN_AGENT`] name rather
/// than an error. The result is sorted descending by login time and is
/// empty when no agent is late.
pub fn late_logins(
    events: &[attendance_logs::Model],
    agents: &[agents::Model],
    day: NaiveDate,
    cutoff: NaiveTime,
) -> Vec<LateLoginEntry> {
    let names: HashMap<&str, &str> = agents
        .iter()
        .map(|a| (a.ldap.as_str(), a.display_name.as_str()))
        .collect();

    let mut entries: Vec<LateLoginEntry> = Vec::new();

    for (ldap, first) in first_logins(events, day) {
        let login = first.time.time();
        let (hour, minute) = (login.hour(), login.minute());

        let is_late =
            hour > cutoff.hour() || (hour == cutoff.hour() && minute > cutoff.minute());
        if !is_late {
            continue;
        }

        let hours_late = (hour - cutoff.hour()) as f64 + minute as f64 / 60.0;

        let display_name = names
            .get(ldap.as_str())
            .map(|name| (*name).to_string())
            .unwrap_or_else(|| UNKNOWN_AGENT.to_string());

        entries.push(LateLoginEntry {
            ldap,
            display_name,
            login_time: first.time,
            hours_late,
        });
    }

    entries.sort_by(|a, b| b.login_time.cmp(&a.login_time));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn event(id: i64, ldap: &str, ts: &str) -> attendance_logs::Model {
        attendance_logs::Model {
            id,
            ldap: ldap.to_string(),
            logged_at: DateTime::parse_from_rfc3339(ts).unwrap(),
            url_type: "Work".to_string(),
            in_office: None,
            is_active: true,
        }
    }

    fn agent(id: i32, ldap: &str, name: &str) -> agents::Model {
        agents::Model {
            id,
            ldap: ldap.to_string(),
            display_name: name.to_string(),
            team: None,
            shift: None,
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn cutoff() -> NaiveTime {
        NaiveTime::from_hms_opt(10, 0, 0).unwrap()
    }

    #[test]
    fn first_login_is_minimum_regardless_of_order() {
        // Deliberately not ascending.
        let events = vec![
            event(1, "a@google.com", "2024-03-01T10:20:00+00:00"),
            event(2, "a@google.com", "2024-03-01T09:58:00+00:00"),
            event(3, "a@google.com", "2024-03-01T12:00:00+00:00"),
        ];

        let firsts = first_logins(&events, day());
        assert_eq!(firsts.len(), 1);
        assert_eq!(
            firsts["a"].time,
            DateTime::parse_from_rfc3339("2024-03-01T09:58:00+00:00").unwrap()
        );
    }

    #[test]
    fn events_outside_day_window_are_ignored() {
        let events = vec![
            event(1, "a@google.com", "2024-02-29T11:30:00+00:00"),
            event(2, "a@google.com", "2024-03-02T00:00:01+00:00"),
        ];

        assert!(first_logins(&events, day()).is_empty());
        assert!(late_logins(&events, &[agent(1, "a", "Alice")], day(), cutoff()).is_empty());
    }

    #[test]
    fn exactly_at_cutoff_is_not_late() {
        let events = vec![event(1, "a@google.com", "2024-03-01T10:00:00+00:00")];
        let late = late_logins(&events, &[agent(1, "a", "Alice")], day(), cutoff());
        assert!(late.is_empty());
    }

    #[test]
    fn within_cutoff_minute_is_not_late() {
        // Comparison is (hour, minute): 10:00:59 is still minute 0.
        let events = vec![event(1, "a@google.com", "2024-03-01T10:00:59+00:00")];
        let late = late_logins(&events, &[agent(1, "a", "Alice")], day(), cutoff());
        assert!(late.is_empty());
    }

    #[test]
    fn first_late_minute_is_late() {
        let events = vec![event(1, "a@google.com", "2024-03-01T10:01:00+00:00")];
        let late = late_logins(&events, &[agent(1, "a", "Alice")], day(), cutoff());
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].minutes_late(), 1);
    }

    #[test]
    fn worked_example_single_late_agent() {
        // a: 09:58 then 10:20 (on time); b: 11:05 (late).
        let events = vec![
            event(1, "a@google.com", "2024-03-01T09:58:00+00:00"),
            event(2, "a@google.com", "2024-03-01T10:20:00+00:00"),
            event(3, "b@google.com", "2024-03-01T11:05:00+00:00"),
        ];
        let roster = vec![agent(1, "a", "Alice"), agent(2, "b", "Bob")];

        let late = late_logins(&events, &roster, day(), cutoff());
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].ldap, "b");
        assert_eq!(late[0].display_name, "Bob");
        assert!((late[0].hours_late - (1.0 + 5.0 / 60.0)).abs() < 1e-9);
        assert_eq!(late[0].minutes_late(), 65);
    }

    #[test]
    fn lateness_formula_generalizes_past_one_hour() {
        // 12:30 with a 10:00 cutoff: (12 - 10) + 30/60 = 2.5h = 150 min.
        let events = vec![event(1, "a@google.com", "2024-03-01T12:30:00+00:00")];
        let late = late_logins(&events, &[agent(1, "a", "Alice")], day(), cutoff());
        assert_eq!(late.len(), 1);
        assert!((late[0].hours_late - 2.5).abs() < 1e-9);
        assert_eq!(late[0].minutes_late(), 150);
    }

    #[test]
    fn output_sorted_descending_by_login_time() {
        let events = vec![
            event(1, "a@google.com", "2024-03-01T10:15:00+00:00"),
            event(2, "b@google.com", "2024-03-01T12:45:00+00:00"),
            event(3, "c@google.com", "2024-03-01T11:30:00+00:00"),
        ];
        let roster = vec![
            agent(1, "a", "Alice"),
            agent(2, "b", "Bob"),
            agent(3, "c", "Carol"),
        ];

        let late = late_logins(&events, &roster, day(), cutoff());
        assert_eq!(late.len(), 3);
        for pair in late.windows(2) {
            assert!(pair[0].login_time >= pair[1].login_time);
        }
        assert_eq!(late[0].ldap, "b");
        assert_eq!(late[2].ldap, "a");
    }

    #[test]
    fn agents_without_events_produce_no_entry() {
        let events = vec![event(1, "a@google.com", "2024-03-01T11:00:00+00:00")];
        let roster = vec![agent(1, "a", "Alice"), agent(2, "b", "Bob")];

        let late = late_logins(&events, &roster, day(), cutoff());
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].ldap, "a");
    }

    #[test]
    fn unknown_agent_gets_sentinel_name() {
        let events = vec![event(1, "ghost@google.com", "2024-03-01T11:00:00+00:00")];
        let late = late_logins(&events, &[], day(), cutoff());
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].display_name, UNKNOWN_AGENT);
    }

    #[test]
    fn empty_events_yield_empty_output() {
        let late = late_logins(&[], &[agent(1, "a", "Alice")], day(), cutoff());
        assert!(late.is_empty());
    }

    #[test]
    fn aggregation_is_idempotent() {
        let events = vec![
            event(1, "a@google.com", "2024-03-01T10:40:00+00:00"),
            event(2, "b@google.com", "2024-03-01T13:10:00+00:00"),
        ];
        let roster = vec![agent(1, "a", "Alice"), agent(2, "b", "Bob")];

        let first = late_logins(&events, &roster, day(), cutoff());
        let second = late_logins(&events, &roster, day(), cutoff());
        assert_eq!(first, second);
    }

    #[test]
    fn severity_tiers() {
        assert_eq!(LateSeverity::for_hours(29.0 / 60.0), LateSeverity::Low);
        assert_eq!(LateSeverity::for_hours(0.5), LateSeverity::Medium);
        assert_eq!(LateSeverity::for_hours(59.0 / 60.0), LateSeverity::Medium);
        assert_eq!(LateSeverity::for_hours(1.0), LateSeverity::High);
        assert_eq!(LateSeverity::for_hours(2.5), LateSeverity::High);
    }

    #[test]
    fn nonzero_cutoff_minute() {
        let half_past = NaiveTime::from_hms_opt(9, 30, 0).unwrap();

        // 09:30 exactly: on time. 09:31: late, with the magnitude taken
        // from the raw login minute.
        let on_time = vec![event(1, "a@google.com", "2024-03-01T09:30:00+00:00")];
        assert!(late_logins(&on_time, &[], day(), half_past).is_empty());

        let late_events = vec![event(1, "a@google.com", "2024-03-01T09:31:00+00:00")];
        let late = late_logins(&late_events, &[], day(), half_past);
        assert_eq!(late.len(), 1);
        assert!((late[0].hours_late - 31.0 / 60.0).abs() < 1e-9);
    }
}
