//! GearGuard maintenance management client
//!
//! Typed access to the GearGuard REST API and a session store that keeps
//! equipment, maintenance requests, and teams in sync with the server.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod views;

pub use crate::api::{ApiClient, Backend};
pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};
pub use crate::store::MaintenanceStore;
