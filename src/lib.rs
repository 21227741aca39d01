pub mod client;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod report;
pub mod ui;

pub use error::{AppError, Result};
