//! Client entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client of the firm (person or company).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cliente {
    /// Unique client identifier.
    pub id: i64,
    /// Client name.
    pub nombre: String,
    /// Client type: "empresa" or "persona".
    pub tipo_cliente: String,
    /// National identification number. Doubles as the initial portal
    /// password when an account is auto-provisioned.
    pub cedula: String,
    /// Contact email. Doubles as the portal account username.
    pub email: String,
    /// Contact phone.
    pub telefono: Option<String>,
    /// Street address.
    pub direccion: Option<String>,
    /// City.
    pub ciudad: Option<String>,
    /// State or province.
    pub estado: Option<String>,
    /// Postal code.
    pub codigo_postal: Option<String>,
    /// Country.
    pub pais: String,
    /// Contact person, for company clients.
    pub persona_contacto: Option<String>,
    /// Contact person's position.
    pub cargo_contacto: Option<String>,
    /// Free-form notes.
    pub notas: Option<String>,
    /// Whether the client is active.
    pub activo: bool,
    /// When the client was created.
    pub created_at: DateTime<Utc>,
    /// When the client was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new client. Name, email, and cédula are
/// mandatory; the cascade in `ClienteService` uses the latter two to
/// provision the portal account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCliente {
    pub nombre: String,
    /// Defaults to "empresa" when absent.
    pub tipo_cliente: Option<String>,
    pub cedula: String,
    pub email: String,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub estado: Option<String>,
    pub codigo_postal: Option<String>,
    /// Defaults to "Ecuador" when absent.
    pub pais: Option<String>,
    pub persona_contacto: Option<String>,
    pub cargo_contacto: Option<String>,
    pub notas: Option<String>,
    /// Defaults to true when absent.
    pub activo: Option<bool>,
}

/// Partial update for an existing client. Only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCliente {
    pub nombre: Option<String>,
    pub tipo_cliente: Option<String>,
    pub cedula: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub estado: Option<String>,
    pub codigo_postal: Option<String>,
    pub pais: Option<String>,
    pub persona_contacto: Option<String>,
    pub cargo_contacto: Option<String>,
    pub notas: Option<String>,
    pub activo: Option<bool>,
}
