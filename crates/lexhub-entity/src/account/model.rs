//! Account entity model.
//!
//! An account is a system login identity; it is distinct from the Cliente
//! and Empleado business entities it may optionally link to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::role::Role;

/// A registered account in the LexHub system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Opaque password hash. Never serialized into responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Full display name.
    pub nombre_completo: Option<String>,
    /// Contact phone number.
    pub telefono: Option<String>,
    /// Avatar image reference.
    pub avatar_url: Option<String>,
    /// Whether the account may log in at all.
    pub activo: bool,
    /// Whether the account email has been verified.
    pub verificado: bool,
    /// Consecutive failed login attempts. NULL is treated as zero.
    pub intentos_fallidos: Option<i32>,
    /// Account locked until this time, if a lockout is in effect.
    pub bloqueado_hasta: Option<DateTime<Utc>>,
    /// Last successful login time.
    pub ultimo_acceso: Option<DateTime<Utc>>,
    /// Attached role (by id).
    pub rol_id: i32,
    /// Linked client, for portal accounts.
    pub cliente_id: Option<i64>,
    /// Linked employee, for staff accounts.
    pub empleado_id: Option<i64>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// The stored failed-attempt counter, treating NULL as zero.
    pub fn failed_attempts(&self) -> i32 {
        self.intentos_fallidos.unwrap_or(0)
    }

    /// Check whether a lockout is in effect at the given instant.
    ///
    /// A lockout exists only while `bloqueado_hasta` is strictly in the
    /// future; an elapsed timestamp expires by this comparison alone.
    pub fn is_locked_at(&self, now: DateTime<Utc>) -> bool {
        matches!(self.bloqueado_hasta, Some(until) if until > now)
    }
}

/// An account joined with its role, as returned by authentication and
/// account lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountWithRole {
    /// The account row.
    #[serde(flatten)]
    pub account: Account,
    /// The nested role.
    pub rol: Role,
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Desired username (unique).
    pub username: String,
    /// Email address (unique).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Full display name.
    pub nombre_completo: Option<String>,
    /// Contact phone number.
    pub telefono: Option<String>,
    /// Avatar image reference.
    pub avatar_url: Option<String>,
    /// Active flag; defaults to true at the API layer.
    pub activo: bool,
    /// Verified flag; new accounts start unverified.
    pub verificado: bool,
    /// Assigned role id.
    pub rol_id: i32,
    /// Linked client.
    pub cliente_id: Option<i64>,
    /// Linked employee.
    pub empleado_id: Option<i64>,
}

/// Partial update for an existing account. Only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAccount {
    /// New username.
    pub username: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New password hash (already hashed by the caller).
    pub password_hash: Option<String>,
    /// New full name.
    pub nombre_completo: Option<String>,
    /// New phone number.
    pub telefono: Option<String>,
    /// New avatar reference.
    pub avatar_url: Option<String>,
    /// New role id.
    pub rol_id: Option<i32>,
    /// New active flag.
    pub activo: Option<bool>,
    /// New verified flag.
    pub verificado: Option<bool>,
    /// New linked client.
    pub cliente_id: Option<i64>,
    /// New linked employee.
    pub empleado_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn account(bloqueado_hasta: Option<DateTime<Utc>>) -> Account {
        let now = Utc::now();
        Account {
            id: 1,
            username: "jdoe".into(),
            email: "jdoe@example.com".into(),
            password_hash: "$argon2id$stub".into(),
            nombre_completo: None,
            telefono: None,
            avatar_url: None,
            activo: true,
            verificado: false,
            intentos_fallidos: None,
            bloqueado_hasta,
            ultimo_acceso: None,
            rol_id: 1,
            cliente_id: None,
            empleado_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_null_attempts_count_as_zero() {
        assert_eq!(account(None).failed_attempts(), 0);
    }

    #[test]
    fn test_lockout_expires_by_clock_comparison() {
        let now = Utc::now();
        let locked = account(Some(now + Duration::minutes(10)));
        assert!(locked.is_locked_at(now));
        assert!(!locked.is_locked_at(now + Duration::minutes(10)));
        assert!(!locked.is_locked_at(now + Duration::minutes(11)));

        let expired = account(Some(now - Duration::seconds(1)));
        assert!(!expired.is_locked_at(now));
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_value(account(None)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("username").is_some());
    }
}
