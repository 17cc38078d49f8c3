//! # lexhub-entity
//!
//! Domain entity models for LexHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod account;
pub mod caso;
pub mod cliente;
pub mod documento;
pub mod empleado;
