//! Document metadata repository implementation.

use sqlx::PgPool;

use lexhub_core::error::{AppError, ErrorKind};
use lexhub_core::result::AppResult;
use lexhub_entity::documento::{CreateDocumento, Documento, UpdateDocumento};

/// Filters for listing documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentoFilter {
    /// Restrict to a case.
    pub caso_id: Option<i64>,
    /// Restrict to a client.
    pub cliente_id: Option<i64>,
}

/// Repository for document metadata.
#[derive(Debug, Clone)]
pub struct DocumentoRepository {
    pool: PgPool,
}

impl DocumentoRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a document by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Documento>> {
        sqlx::query_as::<_, Documento>("SELECT * FROM documentos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))
    }

    /// List documents, newest first, optionally filtered by case and/or
    /// client.
    pub async fn find_filtered(&self, filter: &DocumentoFilter) -> AppResult<Vec<Documento>> {
        sqlx::query_as::<_, Documento>(
            "SELECT * FROM documentos \
             WHERE ($1::BIGINT IS NULL OR caso_id = $1) \
               AND ($2::BIGINT IS NULL OR cliente_id = $2) \
             ORDER BY created_at DESC",
        )
        .bind(filter.caso_id)
        .bind(filter.cliente_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))
    }

    /// Insert metadata for an uploaded document.
    pub async fn create(&self, data: &CreateDocumento) -> AppResult<Documento> {
        sqlx::query_as::<_, Documento>(
            "INSERT INTO documentos (nombre, nombre_archivo, tipo_documento, mime_type, \
                                     tamano_bytes, storage_path, descripcion, caso_id, \
                                     cliente_id, subido_por, es_confidencial, fecha_documento) \
             VALUES ($1, $2, COALESCE($3, 'general'), $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(&data.nombre)
        .bind(&data.nombre_archivo)
        .bind(&data.tipo_documento)
        .bind(&data.mime_type)
        .bind(data.tamano_bytes)
        .bind(&data.storage_path)
        .bind(&data.descripcion)
        .bind(data.caso_id)
        .bind(data.cliente_id)
        .bind(data.subido_por)
        .bind(data.es_confidencial)
        .bind(data.fecha_documento)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create document", e))
    }

    /// Update document metadata. The storage path is immutable.
    pub async fn update(&self, id: i64, data: &UpdateDocumento) -> AppResult<Documento> {
        sqlx::query_as::<_, Documento>(
            "UPDATE documentos SET nombre = COALESCE($2, nombre), \
                                   tipo_documento = COALESCE($3, tipo_documento), \
                                   descripcion = COALESCE($4, descripcion), \
                                   caso_id = COALESCE($5, caso_id), \
                                   cliente_id = COALESCE($6, cliente_id), \
                                   es_confidencial = COALESCE($7, es_confidencial), \
                                   fecha_documento = COALESCE($8, fecha_documento), \
                                   updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.nombre)
        .bind(&data.tipo_documento)
        .bind(&data.descripcion)
        .bind(data.caso_id)
        .bind(data.cliente_id)
        .bind(data.es_confidencial)
        .bind(data.fecha_documento)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update document", e))?
        .ok_or_else(|| AppError::not_found("Documento no encontrado"))
    }

    /// Delete a document row by id.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documentos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete document", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
