//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use lexhub_core::error::AppError;
use lexhub_core::result::AppResult;

use super::CredentialVerifier;

/// Handles password hashing and verification using Argon2id.
#[derive(Debug, Clone)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialVerifier for Argon2Hasher {
    /// Hashes a plaintext password using Argon2id with a random salt.
    fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored Argon2id hash.
    fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hasher = Argon2Hasher::new();
        let hash = hasher.hash("s3creto").unwrap();

        assert!(hasher.verify("s3creto", &hash).unwrap());
        assert!(!hasher.verify("otra-cosa", &hash).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_an_error_not_a_mismatch() {
        let hasher = Argon2Hasher::new();
        assert!(hasher.verify("s3creto", "not-a-phc-string").is_err());
    }
}
