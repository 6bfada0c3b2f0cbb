//! Inventory Ledger
//!
//! REST JSON server for an office IT equipment inventory: equipment records,
//! an employee roster, the equipment type catalog, and a per-serial-number
//! assignment history from which transfers between employees are derived.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
