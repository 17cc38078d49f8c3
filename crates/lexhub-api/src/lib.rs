//! # lexhub-api
//!
//! HTTP API layer for LexHub using Axum: application state, routes,
//! request/response DTOs, handlers, and the `AppError` → HTTP mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
