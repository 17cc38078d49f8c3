//! Employee entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A member of the firm's staff.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Empleado {
    /// Unique employee identifier.
    pub id: i64,
    /// Employee name.
    pub nombre: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub telefono: Option<String>,
    /// Position, e.g. "Abogado", "Asistente".
    pub rol: String,
    /// Legal specialty.
    pub especialidad: Option<String>,
    /// Avatar image reference.
    pub avatar_url: Option<String>,
    /// Street address.
    pub direccion: Option<String>,
    /// Hire date.
    pub fecha_ingreso: NaiveDate,
    /// Monthly salary.
    pub salario: Option<f64>,
    /// Internal employee number.
    pub numero_empleado: Option<String>,
    /// Whether the employee is active.
    pub activo: bool,
    /// Free-form notes.
    pub notas: Option<String>,
    /// When the employee was created.
    pub created_at: DateTime<Utc>,
    /// When the employee was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new employee. Only the name is mandatory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEmpleado {
    pub nombre: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    /// Defaults to "Abogado" when absent.
    pub rol: Option<String>,
    pub especialidad: Option<String>,
    pub avatar_url: Option<String>,
    pub direccion: Option<String>,
    /// Defaults to today when absent.
    pub fecha_ingreso: Option<NaiveDate>,
    pub salario: Option<f64>,
    pub numero_empleado: Option<String>,
    /// Defaults to true when absent.
    pub activo: Option<bool>,
    pub notas: Option<String>,
}

/// Partial update for an existing employee. Only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmpleado {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub rol: Option<String>,
    pub especialidad: Option<String>,
    pub avatar_url: Option<String>,
    pub direccion: Option<String>,
    pub fecha_ingreso: Option<NaiveDate>,
    pub salario: Option<f64>,
    pub numero_empleado: Option<String>,
    pub activo: Option<bool>,
    pub notas: Option<String>,
}
