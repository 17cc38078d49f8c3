//! Legal case domain entities.

pub mod asignacion;
pub mod model;

pub use asignacion::{AsignacionCaso, CreateAsignacion};
pub use model::{Caso, CreateCaso};
