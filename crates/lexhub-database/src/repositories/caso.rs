//! Case repository implementation, including case-employee assignments.

use sqlx::PgPool;

use lexhub_core::error::{AppError, ErrorKind};
use lexhub_core::result::AppResult;
use lexhub_entity::caso::{AsignacionCaso, Caso, CreateAsignacion, CreateCaso};
use lexhub_entity::empleado::Empleado;

/// Repository for case CRUD and team assignments.
#[derive(Debug, Clone)]
pub struct CasoRepository {
    pool: PgPool,
}

impl CasoRepository {
    /// Create a new case repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all cases, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Caso>> {
        sqlx::query_as::<_, Caso>("SELECT * FROM casos ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list cases", e))
    }

    /// Create a new case. Status defaults to "inicio" and the start date
    /// is stamped at insert time.
    pub async fn create(&self, data: &CreateCaso) -> AppResult<Caso> {
        sqlx::query_as::<_, Caso>(
            "INSERT INTO casos (title, description, client_name, contact_person, client_email, \
                                client_phone, practice_area, case_type, opponent, opponent_lawyer, \
                                file_number, court, jurisdiction, judge, status, next_hearing, \
                                amount, fees, responsible_lawyer, assistants, strategy, risks, \
                                start_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, \
                     COALESCE($15, 'inicio'), $16, $17, $18, $19, $20, $21, $22, NOW()) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.client_name)
        .bind(&data.contact_person)
        .bind(&data.client_email)
        .bind(&data.client_phone)
        .bind(&data.practice_area)
        .bind(&data.case_type)
        .bind(&data.opponent)
        .bind(&data.opponent_lawyer)
        .bind(&data.file_number)
        .bind(&data.court)
        .bind(&data.jurisdiction)
        .bind(&data.judge)
        .bind(&data.status)
        .bind(data.next_hearing)
        .bind(data.amount)
        .bind(&data.fees)
        .bind(&data.responsible_lawyer)
        .bind(&data.assistants)
        .bind(&data.strategy)
        .bind(&data.risks)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create case", e))
    }

    /// List a case's assignments.
    pub async fn find_asignaciones(&self, caso_id: i64) -> AppResult<Vec<AsignacionCaso>> {
        sqlx::query_as::<_, AsignacionCaso>(
            "SELECT * FROM empleados_casos WHERE caso_id = $1 ORDER BY fecha_asignacion ASC",
        )
        .bind(caso_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list case assignments", e)
        })
    }

    /// Fetch the employees referenced by a set of assignments.
    pub async fn find_empleados_asignados(&self, caso_id: i64) -> AppResult<Vec<Empleado>> {
        sqlx::query_as::<_, Empleado>(
            "SELECT e.* FROM empleados e \
             JOIN empleados_casos ec ON ec.empleado_id = e.id \
             WHERE ec.caso_id = $1 \
             ORDER BY ec.fecha_asignacion ASC",
        )
        .bind(caso_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list assigned employees", e)
        })
    }

    /// Assign an employee to a case. The (caso_id, empleado_id) pair is
    /// unique; a repeat assignment maps to a conflict.
    pub async fn create_asignacion(
        &self,
        caso_id: i64,
        data: &CreateAsignacion,
    ) -> AppResult<AsignacionCaso> {
        sqlx::query_as::<_, AsignacionCaso>(
            "INSERT INTO empleados_casos (caso_id, empleado_id, rol_en_caso, notas, fecha_asignacion) \
             VALUES ($1, $2, COALESCE($3, 'Asignado'), $4, NOW()) \
             RETURNING *",
        )
        .bind(caso_id)
        .bind(data.empleado_id)
        .bind(&data.rol_en_caso)
        .bind(&data.notas)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("empleados_casos_caso_id_empleado_id_key") =>
            {
                AppError::conflict("Este empleado ya está asignado a este caso")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to assign employee", e),
        })
    }

    /// Remove an employee from a case.
    pub async fn delete_asignacion(&self, caso_id: i64, empleado_id: i64) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM empleados_casos WHERE caso_id = $1 AND empleado_id = $2")
                .bind(caso_id)
                .bind(empleado_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to unassign employee", e)
                })?;

        Ok(result.rows_affected() > 0)
    }
}
