//! # lexhub-auth
//!
//! Credential verification and brute-force protection for LexHub.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing behind the [`CredentialVerifier`]
//!   capability trait
//! - `directory` — the [`AccountDirectory`] store trait the authenticator
//!   reads accounts through
//! - `login` — the [`Authenticator`]: credential resolution, lockout policy,
//!   and attempt bookkeeping
//!
//! The authenticator never computes hashes itself and never touches the
//! account table except through [`AccountDirectory`]; both capabilities are
//! constructor-injected so the lockout logic is testable in isolation.

pub mod directory;
pub mod login;
pub mod password;

pub use directory::AccountDirectory;
pub use login::Authenticator;
pub use password::{Argon2Hasher, CredentialVerifier};
