//! Data transfer and view models.

pub mod summary;

pub use summary::WorkSummary;
