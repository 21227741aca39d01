//! Client-side report computations over fetched data.
//!
//! Everything here is a pure function of its inputs; the panels re-run
//! these on demand when filters change.

pub mod late_logins;
pub mod roster;
pub mod targets;

pub use late_logins::{LateLoginEntry, LateSeverity, late_logins};
