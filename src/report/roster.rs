//! Roster breakdowns for the dashboard panel.

use std::collections::BTreeMap;

use crate::entities::agents;

/// Group label used when an agent has no team or shift assigned.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Count agents per team.
pub fn team_breakdown(agents: &[agents::Model]) -> BTreeMap<String, usize> {
    breakdown(agents, |a| a.team.as_deref())
}

/// Count agents per shift.
pub fn shift_breakdown(agents: &[agents::Model]) -> BTreeMap<String, usize> {
    breakdown(agents, |a| a.shift.as_deref())
}

fn breakdown<F>(agents: &[agents::Model], group: F) -> BTreeMap<String, usize>
where
    F: Fn(&agents::Model) -> Option<&str>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for agent in agents {
        let key = group(agent).unwrap_or(UNKNOWN_GROUP).to_string();
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Share of the total as a percentage, 0.0 when the total is zero.
pub fn percent_of_total(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: i32, team: Option<&str>, shift: Option<&str>) -> agents::Model {
        agents::Model {
            id,
            ldap: format!("agent{id}"),
            display_name: format!("Agent {id}"),
            team: team.map(String::from),
            shift: shift.map(String::from),
        }
    }

    #[test]
    fn counts_agents_per_team() {
        let roster = vec![
            agent(1, Some("Billing"), Some("Day")),
            agent(2, Some("Billing"), Some("Night")),
            agent(3, Some("Support"), Some("Day")),
        ];

        let teams = team_breakdown(&roster);
        assert_eq!(teams["Billing"], 2);
        assert_eq!(teams["Support"], 1);

        let shifts = shift_breakdown(&roster);
        assert_eq!(shifts["Day"], 2);
        assert_eq!(shifts["Night"], 1);
    }

    #[test]
    fn missing_group_falls_back_to_unknown() {
        let roster = vec![agent(1, None, None), agent(2, Some("Billing"), None)];

        let teams = team_breakdown(&roster);
        assert_eq!(teams[UNKNOWN_GROUP], 1);

        let shifts = shift_breakdown(&roster);
        assert_eq!(shifts[UNKNOWN_GROUP], 2);
    }

    #[test]
    fn percent_handles_zero_total() {
        assert_eq!(percent_of_total(3, 0), 0.0);
        assert!((percent_of_total(1, 3) - 33.333_333_333_333_336).abs() < 1e-9);
        assert_eq!(percent_of_total(2, 4), 50.0);
    }
}
