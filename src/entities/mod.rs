//! SeaORM entities for the attendance data store (read-only).

pub mod agents;
pub mod attendance_logs;
pub mod attendance_targets;

pub mod prelude {
    pub use super::agents::Entity as Agents;
    pub use super::attendance_logs::Entity as AttendanceLogs;
    pub use super::attendance_targets::Entity as AttendanceTargets;
}
