//! # lexhub-storage
//!
//! Object-storage providers for LexHub document blobs. The
//! [`ObjectStorage`](lexhub_core::traits::storage::ObjectStorage) trait
//! lives in `lexhub-core`; this crate holds the concrete providers.

pub mod local;

pub use local::LocalStorage;
