//! Attendance target repository.

use crate::entities::{attendance_targets, prelude::*};
use sea_orm::*;

/// List all monthly targets.
///
/// Display ordering (year desc, month desc) is applied client-side by
/// `report::targets::sort_newest_first`, since month names do not sort
/// chronologically in SQL.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<attendance_targets::Model>, DbErr> {
    AttendanceTargets::find().all(db).await
}
