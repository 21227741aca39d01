//! Derived metrics and ordering for monthly attendance targets.

use crate::entities::attendance_targets;

/// Resolve an English month name to its 1-based index.
pub fn month_index(name: &str) -> Option<u32> {
    let index = match name {
        "January" => 1,
        "February" => 2,
        "March" => 3,
        "April" => 4,
        "May" => 5,
        "June" => 6,
        "July" => 7,
        "August" => 8,
        "September" => 9,
        "October" => 10,
        "November" => 11,
        "December" => 12,
        _ => return None,
    };
    Some(index)
}

/// Sort targets newest-first: year descending, then month descending.
///
/// Unrecognized month names sort last within their year.
pub fn sort_newest_first(targets: &mut [attendance_targets::Model]) {
    targets.sort_by(|a, b| {
        b.year
            .cmp(&a.year)
            .then_with(|| month_index(&b.month).unwrap_or(0).cmp(&month_index(&a.month).unwrap_or(0)))
    });
}

/// Daily hours target: adjusted hours spread over adjusted work days.
///
/// None when the month has no adjusted work days.
pub fn daily_hours_target(target: &attendance_targets::Model) -> Option<f64> {
    if target.adjusted_days_to_work == 0 {
        return None;
    }
    Some(target.adjusted_hours_to_work / target.adjusted_days_to_work as f64)
}

/// Share of the month's days that are work days, as a percentage.
pub fn work_days_percent(target: &attendance_targets::Model) -> Option<f64> {
    if target.days_in_month == 0 {
        return None;
    }
    Some(target.days_to_work as f64 / target.days_in_month as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(month: &str, year: i32) -> attendance_targets::Model {
        attendance_targets::Model {
            id: 0,
            month: month.to_string(),
            year,
            month_year: format!("{month} {year}"),
            days_in_month: 31,
            days_to_work: 22,
            adjusted_days_to_work: 21,
            hours_in_month: 744.0,
            hours_to_work: 176.0,
            adjusted_hours_to_work: 168.0,
        }
    }

    #[test]
    fn month_names_resolve() {
        assert_eq!(month_index("January"), Some(1));
        assert_eq!(month_index("December"), Some(12));
        assert_eq!(month_index("Octember"), None);
    }

    #[test]
    fn sorts_year_then_month_descending() {
        let mut targets = vec![
            target("March", 2024),
            target("December", 2023),
            target("May", 2024),
            target("January", 2024),
        ];

        sort_newest_first(&mut targets);

        let order: Vec<&str> = targets.iter().map(|t| t.month_year.as_str()).collect();
        assert_eq!(order, vec!["May 2024", "March 2024", "January 2024", "December 2023"]);
    }

    #[test]
    fn daily_target_divides_adjusted_hours() {
        let t = target("March", 2024);
        assert!((daily_hours_target(&t).unwrap() - 8.0).abs() < 1e-9);
    }

    #[test]
    fn daily_target_guards_zero_days() {
        let mut t = target("March", 2024);
        t.adjusted_days_to_work = 0;
        assert_eq!(daily_hours_target(&t), None);
    }

    #[test]
    fn work_days_percent_of_month() {
        let t = target("March", 2024);
        assert!((work_days_percent(&t).unwrap() - (22.0 / 31.0 * 100.0)).abs() < 1e-9);

        let mut zero = target("March", 2024);
        zero.days_in_month = 0;
        assert_eq!(work_days_percent(&zero), None);
    }
}
