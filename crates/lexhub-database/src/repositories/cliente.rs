//! Client repository implementation.

use sqlx::PgPool;

use lexhub_core::error::{AppError, ErrorKind};
use lexhub_core::result::AppResult;
use lexhub_entity::cliente::{Cliente, CreateCliente, UpdateCliente};

/// Repository for client CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    /// Create a new client repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a client by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Cliente>> {
        sqlx::query_as::<_, Cliente>("SELECT * FROM clientes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find client", e))
    }

    /// List all clients, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Cliente>> {
        sqlx::query_as::<_, Cliente>("SELECT * FROM clientes ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list clients", e))
    }

    /// List clients matching an exact email.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Vec<Cliente>> {
        sqlx::query_as::<_, Cliente>(
            "SELECT * FROM clientes WHERE email = $1 ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list clients by email", e)
        })
    }

    /// Create a new client.
    pub async fn create(&self, data: &CreateCliente) -> AppResult<Cliente> {
        sqlx::query_as::<_, Cliente>(
            "INSERT INTO clientes (nombre, tipo_cliente, cedula, email, telefono, direccion, \
                                   ciudad, estado, codigo_postal, pais, persona_contacto, \
                                   cargo_contacto, notas, activo) \
             VALUES ($1, COALESCE($2, 'empresa'), $3, $4, $5, $6, $7, $8, $9, \
                     COALESCE($10, 'Ecuador'), $11, $12, $13, COALESCE($14, TRUE)) \
             RETURNING *",
        )
        .bind(&data.nombre)
        .bind(&data.tipo_cliente)
        .bind(&data.cedula)
        .bind(&data.email)
        .bind(&data.telefono)
        .bind(&data.direccion)
        .bind(&data.ciudad)
        .bind(&data.estado)
        .bind(&data.codigo_postal)
        .bind(&data.pais)
        .bind(&data.persona_contacto)
        .bind(&data.cargo_contacto)
        .bind(&data.notas)
        .bind(data.activo)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create client", e))
    }

    /// Update a client's fields. Only supplied values change.
    pub async fn update(&self, id: i64, data: &UpdateCliente) -> AppResult<Cliente> {
        sqlx::query_as::<_, Cliente>(
            "UPDATE clientes SET nombre = COALESCE($2, nombre), \
                                 tipo_cliente = COALESCE($3, tipo_cliente), \
                                 cedula = COALESCE($4, cedula), \
                                 email = COALESCE($5, email), \
                                 telefono = COALESCE($6, telefono), \
                                 direccion = COALESCE($7, direccion), \
                                 ciudad = COALESCE($8, ciudad), \
                                 estado = COALESCE($9, estado), \
                                 codigo_postal = COALESCE($10, codigo_postal), \
                                 pais = COALESCE($11, pais), \
                                 persona_contacto = COALESCE($12, persona_contacto), \
                                 cargo_contacto = COALESCE($13, cargo_contacto), \
                                 notas = COALESCE($14, notas), \
                                 activo = COALESCE($15, activo), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.nombre)
        .bind(&data.tipo_cliente)
        .bind(&data.cedula)
        .bind(&data.email)
        .bind(&data.telefono)
        .bind(&data.direccion)
        .bind(&data.ciudad)
        .bind(&data.estado)
        .bind(&data.codigo_postal)
        .bind(&data.pais)
        .bind(&data.persona_contacto)
        .bind(&data.cargo_contacto)
        .bind(&data.notas)
        .bind(data.activo)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update client", e))?
        .ok_or_else(|| AppError::not_found("Cliente no encontrado"))
    }

    /// Delete a client by id.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete client", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
