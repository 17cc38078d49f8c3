//! Document domain entities.

pub mod model;

pub use model::{CreateDocumento, Documento, UpdateDocumento};
