//! GUI panels and application state.

pub mod agent_view_panel;
pub mod app;
pub mod components;
pub mod dashboard;
pub mod late_logins_panel;
pub mod summary_panel;
pub mod targets_panel;

pub use app::App;
