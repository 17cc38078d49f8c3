//! Document upload and removal against the object store.

use std::sync::Arc;

use bytes::Bytes;
use chrono::{NaiveDate, Utc};
use tracing::{error, info};

use lexhub_core::result::AppResult;
use lexhub_core::traits::storage::ObjectStorage;
use lexhub_database::repositories::documento::DocumentoRepository;
use lexhub_entity::documento::{CreateDocumento, Documento};

/// Parameters for a document upload.
#[derive(Debug, Clone)]
pub struct UploadDocumento {
    /// Display name.
    pub nombre: String,
    /// Original file name as uploaded.
    pub nombre_archivo: String,
    /// Document category.
    pub tipo_documento: Option<String>,
    /// MIME type reported by the upload.
    pub mime_type: Option<String>,
    /// Free-form description.
    pub descripcion: Option<String>,
    /// Linked case.
    pub caso_id: Option<i64>,
    /// Linked client.
    pub cliente_id: Option<i64>,
    /// Uploading account.
    pub subido_por: Option<i64>,
    /// Confidentiality flag.
    pub es_confidencial: bool,
    /// Date of the document itself.
    pub fecha_documento: Option<NaiveDate>,
    /// Blob content.
    pub data: Bytes,
}

/// Uploads, serves, and removes documents: the blob goes to the object
/// store, the metadata row to the database.
#[derive(Debug, Clone)]
pub struct DocumentoService {
    /// Document metadata repository.
    documento_repo: Arc<DocumentoRepository>,
    /// Blob storage provider.
    storage: Arc<dyn ObjectStorage>,
}

impl DocumentoService {
    /// Creates a new document service.
    pub fn new(documento_repo: Arc<DocumentoRepository>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self {
            documento_repo,
            storage,
        }
    }

    /// Uploads a document: write the blob, then insert the metadata row.
    /// If the insert fails the blob is removed again.
    pub async fn upload(&self, params: UploadDocumento) -> AppResult<Documento> {
        let storage_path = build_storage_path(
            params.caso_id,
            &params.nombre,
            &params.nombre_archivo,
            Utc::now().timestamp(),
        );

        self.storage
            .write(&storage_path, params.data.clone())
            .await?;

        let create = CreateDocumento {
            nombre: params.nombre,
            nombre_archivo: params.nombre_archivo,
            tipo_documento: params.tipo_documento,
            mime_type: params.mime_type,
            tamano_bytes: params.data.len() as i64,
            storage_path: storage_path.clone(),
            descripcion: params.descripcion,
            caso_id: params.caso_id,
            cliente_id: params.cliente_id,
            subido_por: params.subido_por,
            es_confidencial: params.es_confidencial,
            fecha_documento: params.fecha_documento,
        };

        match self.documento_repo.create(&create).await {
            Ok(documento) => {
                info!(
                    documento_id = documento.id,
                    path = %storage_path,
                    "Document uploaded"
                );
                Ok(documento)
            }
            Err(e) => {
                // Orphaned blobs are worse than a failed upload; best-effort
                // cleanup before surfacing the insert error.
                if let Err(cleanup) = self.storage.delete(&storage_path).await {
                    error!(path = %storage_path, error = %cleanup, "Failed to clean up blob after insert error");
                }
                Err(e)
            }
        }
    }

    /// Fetches a document row together with its blob content.
    pub async fn download(&self, id: i64) -> AppResult<(Documento, Bytes)> {
        let documento = self
            .documento_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| lexhub_core::AppError::not_found("Documento no encontrado"))?;

        let data = self.storage.read_bytes(&documento.storage_path).await?;
        Ok((documento, data))
    }

    /// Deletes a document: the metadata row first, then the blob. Blob
    /// removal errors are logged but not surfaced; the row is gone.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let documento = self
            .documento_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| lexhub_core::AppError::not_found("Documento no encontrado"))?;

        self.documento_repo.delete(id).await?;

        if let Err(e) = self.storage.delete(&documento.storage_path).await {
            error!(
                documento_id = id,
                path = %documento.storage_path,
                error = %e,
                "Failed to delete blob for removed document"
            );
        }

        info!(documento_id = id, "Document deleted");
        Ok(())
    }
}

/// Builds the storage key: `{caso|general}/{timestamp}_{name}.{ext}` with
/// the display name lowercased and reduced to `[a-z0-9_]`.
fn build_storage_path(caso_id: Option<i64>, nombre: &str, nombre_archivo: &str, ts: i64) -> String {
    let prefix = caso_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "general".to_string());

    let sanitized: String = nombre
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    match nombre_archivo.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("{prefix}/{ts}_{sanitized}.{ext}"),
        _ => format!("{prefix}/{ts}_{sanitized}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_path_shape() {
        assert_eq!(
            build_storage_path(Some(42), "Contrato Marco", "scan.PDF", 1719849600),
            "42/1719849600_contrato_marco.PDF"
        );
        assert_eq!(
            build_storage_path(None, "Acta #1", "acta", 5),
            "general/5_acta__1"
        );
    }
}
