//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body. Exactly one of `username`/`email` must be supplied
/// along with `password`; the handler enforces this with explicit 400s so
/// a missing field is not a deserialization error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username, when logging in by username.
    pub username: Option<String>,
    /// Email, when logging in by email.
    pub email: Option<String>,
    /// Plaintext password.
    pub password: Option<String>,
}

/// Create account request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUsuarioRequest {
    /// Username (unique).
    #[validate(length(min = 3, max = 100, message = "El nombre de usuario debe tener entre 3 y 100 caracteres"))]
    pub username: String,
    /// Email (unique).
    #[validate(email(message = "El correo electrónico no es válido"))]
    pub email: String,
    /// Initial password. The minimum length comes from configuration and
    /// is checked in the handler.
    pub password: String,
    /// Role assignment.
    pub rol_id: i32,
    /// Full name.
    pub nombre_completo: Option<String>,
    /// Phone number.
    pub telefono: Option<String>,
    /// Avatar reference.
    pub avatar_url: Option<String>,
    /// Active flag; defaults to true.
    pub activo: Option<bool>,
    /// Linked client.
    pub cliente_id: Option<i64>,
    /// Linked employee.
    pub empleado_id: Option<i64>,
}

/// Update account request. Only supplied fields change; a supplied
/// password is re-hashed before storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUsuarioRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub nombre_completo: Option<String>,
    pub telefono: Option<String>,
    pub avatar_url: Option<String>,
    pub rol_id: Option<i32>,
    pub activo: Option<bool>,
    pub verificado: Option<bool>,
    pub cliente_id: Option<i64>,
    pub empleado_id: Option<i64>,
}

/// Create case request. The mandatory fields are checked in the handler
/// so the response is a Spanish 400, not a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCasoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub client_name: Option<String>,
    pub contact_person: Option<String>,
    pub client_email: Option<String>,
    pub client_phone: Option<String>,
    pub practice_area: Option<String>,
    pub case_type: Option<String>,
    pub opponent: Option<String>,
    pub opponent_lawyer: Option<String>,
    pub file_number: Option<String>,
    pub court: Option<String>,
    pub jurisdiction: Option<String>,
    pub judge: Option<String>,
    pub status: Option<String>,
    pub next_hearing: Option<chrono::DateTime<chrono::Utc>>,
    pub amount: Option<f64>,
    pub fees: Option<String>,
    pub responsible_lawyer: Option<String>,
    pub assistants: Option<String>,
    pub strategy: Option<String>,
    pub risks: Option<String>,
}

/// Create client request. Mandatory fields checked in the handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateClienteRequest {
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

/// Create employee request. The name is checked in the handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEmpleadoRequest {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub rol: Option<String>,
    pub especialidad: Option<String>,
    pub avatar_url: Option<String>,
    pub direccion: Option<String>,
    pub fecha_ingreso: Option<chrono::NaiveDate>,
    pub salario: Option<f64>,
    pub numero_empleado: Option<String>,
    pub activo: Option<bool>,
    pub notas: Option<String>,
}

/// Assign an employee to a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAsignacionRequest {
    /// The employee to assign.
    pub empleado_id: Option<i64>,
    /// Role in the case.
    pub rol_en_caso: Option<String>,
    /// Assignment notes.
    pub notas: Option<String>,
}

/// Query parameters for the client list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClienteListQuery {
    /// Exact email filter.
    pub email: Option<String>,
}

/// Query parameters for the document list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentoListQuery {
    /// Restrict to a case.
    pub caso_id: Option<i64>,
    /// Restrict to a client.
    pub cliente_id: Option<i64>,
}

/// Query parameters for a single document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentoGetQuery {
    /// When true, respond with the blob content instead of metadata.
    #[serde(default)]
    pub download: bool,
}

/// Query parameters for unassigning an employee.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnassignQuery {
    /// The employee to remove from the case.
    pub empleado_id: Option<i64>,
}
