//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and lockout policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Maximum failed login attempts before lockout.
    #[serde(default = "default_max_failed")]
    pub max_failed_attempts: i32,
    /// Account lockout duration in minutes.
    #[serde(default = "default_lockout")]
    pub lockout_duration_minutes: i64,
    /// Minimum password length for newly created accounts.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            max_failed_attempts: default_max_failed(),
            lockout_duration_minutes: default_lockout(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_max_failed() -> i32 {
    5
}

fn default_lockout() -> i64 {
    15
}

fn default_password_min() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lockout_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.max_failed_attempts, 5);
        assert_eq!(config.lockout_duration_minutes, 15);
    }
}
