//! Role reference data and the closed role-name set.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// A role row as stored in the `roles` table.
///
/// Roles are reference data: looked up by id when attached to an account
/// and exposed nested in API responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: i32,
    /// Role name, e.g. "administrador".
    pub nombre: String,
    /// Optional human-readable description.
    pub descripcion: Option<String>,
    /// Optional permission map (free-form JSON).
    pub permisos: Option<serde_json::Value>,
    /// Whether the role can be assigned.
    pub activo: bool,
}

/// The known role names.
///
/// The set is closed for routing purposes but the `roles` table itself is
/// extensible; unknown names simply never match a routing class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    /// Full system administrator.
    Administrador,
    /// Law-firm staff member.
    Empleado,
    /// Portal-only client.
    Cliente,
}

impl RoleName {
    /// Check whether this role uses the internal dashboard.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Administrador | Self::Empleado)
    }

    /// Return the role name as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrador => "administrador",
            Self::Empleado => "empleado",
            Self::Cliente => "cliente",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = lexhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "administrador" => Ok(Self::Administrador),
            "empleado" => Ok(Self::Empleado),
            "cliente" => Ok(Self::Cliente),
            _ => Err(lexhub_core::AppError::validation(format!(
                "Invalid role name: '{s}'. Expected one of: administrador, empleado, cliente"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "administrador".parse::<RoleName>().unwrap(),
            RoleName::Administrador
        );
        assert_eq!("CLIENTE".parse::<RoleName>().unwrap(), RoleName::Cliente);
        assert!("supervisor".parse::<RoleName>().is_err());
    }

    #[test]
    fn test_staff_split() {
        assert!(RoleName::Administrador.is_staff());
        assert!(RoleName::Empleado.is_staff());
        assert!(!RoleName::Cliente.is_staff());
    }
}
