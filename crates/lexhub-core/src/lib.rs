//! # lexhub-core
//!
//! Core crate for LexHub. Contains configuration schemas, the storage
//! trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other LexHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
