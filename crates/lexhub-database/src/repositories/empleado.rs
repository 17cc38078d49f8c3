//! Employee repository implementation.

use sqlx::PgPool;

use lexhub_core::error::{AppError, ErrorKind};
use lexhub_core::result::AppResult;
use lexhub_entity::empleado::{CreateEmpleado, Empleado, UpdateEmpleado};

/// Repository for employee CRUD and query operations.
#[derive(Debug, Clone)]
pub struct EmpleadoRepository {
    pool: PgPool,
}

impl EmpleadoRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an employee by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Empleado>> {
        sqlx::query_as::<_, Empleado>("SELECT * FROM empleados WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find employee", e))
    }

    /// List all employees ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Empleado>> {
        sqlx::query_as::<_, Empleado>("SELECT * FROM empleados ORDER BY nombre ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employees", e))
    }

    /// Create a new employee. Position defaults to "Abogado" and the hire
    /// date defaults to today.
    pub async fn create(&self, data: &CreateEmpleado) -> AppResult<Empleado> {
        sqlx::query_as::<_, Empleado>(
            "INSERT INTO empleados (nombre, email, telefono, rol, especialidad, avatar_url, \
                                    direccion, fecha_ingreso, salario, numero_empleado, activo, \
                                    notas) \
             VALUES ($1, $2, $3, COALESCE($4, 'Abogado'), $5, $6, $7, \
                     COALESCE($8, CURRENT_DATE), $9, $10, COALESCE($11, TRUE), $12) \
             RETURNING *",
        )
        .bind(&data.nombre)
        .bind(&data.email)
        .bind(&data.telefono)
        .bind(&data.rol)
        .bind(&data.especialidad)
        .bind(&data.avatar_url)
        .bind(&data.direccion)
        .bind(data.fecha_ingreso)
        .bind(data.salario)
        .bind(&data.numero_empleado)
        .bind(data.activo)
        .bind(&data.notas)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create employee", e))
    }

    /// Update an employee's fields. Only supplied values change.
    pub async fn update(&self, id: i64, data: &UpdateEmpleado) -> AppResult<Empleado> {
        sqlx::query_as::<_, Empleado>(
            "UPDATE empleados SET nombre = COALESCE($2, nombre), \
                                  email = COALESCE($3, email), \
                                  telefono = COALESCE($4, telefono), \
                                  rol = COALESCE($5, rol), \
                                  especialidad = COALESCE($6, especialidad), \
                                  avatar_url = COALESCE($7, avatar_url), \
                                  direccion = COALESCE($8, direccion), \
                                  fecha_ingreso = COALESCE($9, fecha_ingreso), \
                                  salario = COALESCE($10, salario), \
                                  numero_empleado = COALESCE($11, numero_empleado), \
                                  activo = COALESCE($12, activo), \
                                  notas = COALESCE($13, notas), \
                                  updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.nombre)
        .bind(&data.email)
        .bind(&data.telefono)
        .bind(&data.rol)
        .bind(&data.especialidad)
        .bind(&data.avatar_url)
        .bind(&data.direccion)
        .bind(data.fecha_ingreso)
        .bind(data.salario)
        .bind(&data.numero_empleado)
        .bind(data.activo)
        .bind(&data.notas)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update employee", e))?
        .ok_or_else(|| AppError::not_found("Empleado no encontrado"))
    }

    /// Delete an employee by id.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM empleados WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete employee", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
