//! Smart Tour server
//!
//! Tourism analytics (trend estimation, growth rates, insights and
//! predictions), a day-by-day itinerary builder, a points-of-interest
//! catalogue and a keyword-driven multilingual chat assistant, served as a
//! REST JSON API.

use std::sync::Arc;

pub mod analytics;
pub mod api;
pub mod chatbot;
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
}
