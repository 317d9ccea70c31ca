//! Bounce Kingdom Party Rental Management Server
//!
//! A Rust REST API server backing the Bounce Kingdom admin dashboard and
//! storefront: product inventory, customer bookings, usage reports and an
//! activity log.

use std::sync::Arc;
use std::time::Instant;

pub mod api;
pub mod config;
pub mod error;
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
    /// Process start, for the health endpoint's uptime field
    pub started_at: Instant,
    /// Port actually bound (may differ from config when fallback kicked in)
    pub port: u16,
}
