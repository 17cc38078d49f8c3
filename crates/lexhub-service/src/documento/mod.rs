//! Document orchestration.

pub mod service;

pub use service::{DocumentoService, UploadDocumento};
