//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod casos;
pub mod clientes;
pub mod documentos;
pub mod empleados;
pub mod health;
pub mod roles;
pub mod usuarios;
