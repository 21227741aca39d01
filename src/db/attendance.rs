//! Attendance log repository (read-only).

use crate::entities::{attendance_logs, prelude::*};
use chrono::{DateTime, Local, LocalResult, NaiveDate, TimeZone};
use sea_orm::*;

/// Resolve a naive local datetime to a zoned one.
///
/// Ambiguous times (DST fold) take the earlier instant; times inside a
/// DST gap fall back to the UTC reading so the query bound still exists.
fn local_bound(naive: chrono::NaiveDateTime) -> DateTime<Local> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earlier, _) => earlier,
        LocalResult::None => Local.from_utc_datetime(&naive),
    }
}

/// Get all attendance logs for one local calendar day, ordered ascending
/// by log time.
///
/// The window is inclusive on both ends: [00:00:00.000, 23:59:59.999].
pub async fn list_for_day(
    db: &DatabaseConnection,
    day: NaiveDate,
) -> Result<Vec<attendance_logs::Model>, DbErr> {
    let start = local_bound(day.and_hms_milli_opt(0, 0, 0, 0).unwrap());
    let end = local_bound(day.and_hms_milli_opt(23, 59, 59, 999).unwrap());

    AttendanceLogs::find()
        .filter(attendance_logs::Column::LoggedAt.between(start, end))
        .order_by_asc(attendance_logs::Column::LoggedAt)
        .all(db)
        .await
}

/// Get the most recent attendance logs for one agent, newest first.
///
/// Logs store the full `user@domain` key, so the match is on the bare
/// ldap followed by `@`.
pub async fn list_recent_for_agent(
    db: &DatabaseConnection,
    ldap: &str,
    limit: u64,
) -> Result<Vec<attendance_logs::Model>, DbErr> {
    AttendanceLogs::find()
        .filter(attendance_logs::Column::Ldap.starts_with(format!("{ldap}@")))
        .order_by_desc(attendance_logs::Column::LoggedAt)
        .limit(limit)
        .all(db)
        .await
}
