//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lexhub_entity::account::{Account, AccountWithRole, Role};

/// Standard response wrapper: `{ "data": … }` for reads,
/// `{ "message": …, "data": … }` for writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Success message, present on mutating operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a plain data response.
    pub fn ok(data: T) -> Self {
        Self {
            message: None,
            data,
        }
    }

    /// Creates a response with a success message.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            data,
        }
    }
}

/// The role as nested in the login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRol {
    /// Role id.
    pub id: i32,
    /// Role name.
    pub nombre: String,
    /// Permission map.
    pub permisos: Option<serde_json::Value>,
}

/// The sanitized account returned by a successful login. The password
/// hash is never present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    /// Account id.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Full name.
    pub nombre_completo: Option<String>,
    /// Verified flag.
    pub verificado: bool,
    /// Nested role.
    pub rol: LoginRol,
}

impl From<AccountWithRole> for LoginData {
    fn from(value: AccountWithRole) -> Self {
        Self {
            id: value.account.id,
            username: value.account.username,
            email: value.account.email,
            nombre_completo: value.account.nombre_completo,
            verificado: value.account.verificado,
            rol: LoginRol {
                id: value.rol.id,
                nombre: value.rol.nombre,
                permisos: value.rol.permisos,
            },
        }
    }
}

/// Account summary for the administration endpoints, with the nested
/// role. Never includes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioResponse {
    /// Account id.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Full name.
    pub nombre_completo: Option<String>,
    /// Phone number.
    pub telefono: Option<String>,
    /// Avatar reference.
    pub avatar_url: Option<String>,
    /// Last successful login.
    pub ultimo_acceso: Option<DateTime<Utc>>,
    /// Active flag.
    pub activo: bool,
    /// Verified flag.
    pub verificado: bool,
    /// Linked client.
    pub cliente_id: Option<i64>,
    /// Linked employee.
    pub empleado_id: Option<i64>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
    /// Nested role, when resolvable.
    pub rol: Option<Role>,
}

impl UsuarioResponse {
    /// Builds the summary from an account row and its (optional) role.
    pub fn from_account(account: Account, rol: Option<Role>) -> Self {
        Self {
            id: account.id,
            username: account.username,
            email: account.email,
            nombre_completo: account.nombre_completo,
            telefono: account.telefono,
            avatar_url: account.avatar_url,
            ultimo_acceso: account.ultimo_acceso,
            activo: account.activo,
            verificado: account.verificado,
            cliente_id: account.cliente_id,
            empleado_id: account.empleado_id,
            created_at: account.created_at,
            updated_at: account.updated_at,
            rol,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_omitted_when_absent() {
        let json = serde_json::to_value(ApiResponse::ok(1)).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["data"], 1);

        let json = serde_json::to_value(ApiResponse::with_message("listo", 1)).unwrap();
        assert_eq!(json["message"], "listo");
    }
}
