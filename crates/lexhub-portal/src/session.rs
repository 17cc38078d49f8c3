//! The client-held session: the authenticated account minus credential
//! fields, plus its role.

use serde::{Deserialize, Serialize};

/// The role as carried in the session, mirroring the login payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRol {
    /// Role id.
    pub id: i32,
    /// Role name.
    pub nombre: String,
    /// Permission map.
    #[serde(default)]
    pub permisos: Option<serde_json::Value>,
}

/// The authenticated account as held by the client. Deserialized directly
/// from the login endpoint's `data` payload; there is no credential field
/// to strip because the server never sends one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalSession {
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
    pub rol: SessionRol,
}
