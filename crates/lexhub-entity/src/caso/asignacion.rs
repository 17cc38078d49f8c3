//! Case-employee assignment entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An employee assigned to a case. The (caso_id, empleado_id) pair is
/// unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AsignacionCaso {
    /// Unique assignment identifier.
    pub id: i64,
    /// The case.
    pub caso_id: i64,
    /// The assigned employee.
    pub empleado_id: i64,
    /// Role the employee plays in this case.
    pub rol_en_caso: String,
    /// Assignment notes.
    pub notas: Option<String>,
    /// When the assignment was made.
    pub fecha_asignacion: DateTime<Utc>,
    /// Row creation time.
    pub created_at: DateTime<Utc>,
}

/// Data required to assign an employee to a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAsignacion {
    /// The employee to assign.
    pub empleado_id: i64,
    /// Role in the case; defaults to "Asignado" when absent.
    pub rol_en_caso: Option<String>,
    /// Assignment notes.
    pub notas: Option<String>,
}
