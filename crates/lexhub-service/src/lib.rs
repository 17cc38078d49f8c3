//! # lexhub-service
//!
//! Orchestration services for operations that span more than one table or
//! touch the object store: client creation with portal-account
//! provisioning, and document upload/removal.

pub mod cliente;
pub mod documento;

pub use cliente::ClienteService;
pub use documento::DocumentoService;
