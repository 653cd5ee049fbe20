//! Libris Library Circulation Server
//!
//! A REST backend for loans, reservations, reviews and favorites over an
//! externally managed library schema. Requests name books by title and
//! members by name; the server resolves those to keys and delegates every
//! write to a stored procedure.

use std::sync::Arc;

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
    pub services: Arc<services::Services>,
}

impl AppState {
    pub fn new(services: services::Services) -> Self {
        Self {
            services: Arc::new(services),
        }
    }
}
