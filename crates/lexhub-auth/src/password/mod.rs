//! Password hashing behind a swappable capability trait.

pub mod hasher;

pub use hasher::Argon2Hasher;

use lexhub_core::result::AppResult;

/// Opaque password hashing and verification capability.
///
/// The authenticator only ever calls through this trait, so the concrete
/// algorithm (Argon2id here) is swappable without touching lockout logic.
pub trait CredentialVerifier: Send + Sync + std::fmt::Debug + 'static {
    /// Hash a plaintext password.
    fn hash(&self, password: &str) -> AppResult<String>;

    /// Verify a plaintext password against a stored hash.
    ///
    /// Returns `Ok(true)` if the password matches, `Ok(false)` if not.
    /// An `Err` means the verification itself failed and must never be
    /// attributed to the user's credentials.
    fn verify(&self, password: &str, hash: &str) -> AppResult<bool>;
}
