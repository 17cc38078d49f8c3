//! Document metadata entity model.
//!
//! Rows describe blobs held by the object-storage provider; `storage_path`
//! is the provider key and is immutable after upload.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Metadata for an uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Documento {
    /// Unique document identifier.
    pub id: i64,
    /// Display name.
    pub nombre: String,
    /// Original uploaded file name.
    pub nombre_archivo: String,
    /// Document category, e.g. "contrato", "demanda", "general".
    pub tipo_documento: String,
    /// MIME type as reported by the upload.
    pub mime_type: Option<String>,
    /// Blob size in bytes.
    pub tamano_bytes: i64,
    /// Object-storage key. Immutable after upload.
    pub storage_path: String,
    /// Free-form description.
    pub descripcion: Option<String>,
    /// Linked case.
    pub caso_id: Option<i64>,
    /// Linked client.
    pub cliente_id: Option<i64>,
    /// Uploading account.
    pub subido_por: Option<i64>,
    /// Whether the document is confidential.
    pub es_confidencial: bool,
    /// Date of the document itself (not the upload).
    pub fecha_documento: Option<NaiveDate>,
    /// When the document was uploaded.
    pub created_at: DateTime<Utc>,
    /// When the metadata was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Metadata for a new document, produced by the upload service after the
/// blob write succeeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumento {
    pub nombre: String,
    pub nombre_archivo: String,
    /// Defaults to "general" when absent.
    pub tipo_documento: Option<String>,
    pub mime_type: Option<String>,
    pub tamano_bytes: i64,
    pub storage_path: String,
    pub descripcion: Option<String>,
    pub caso_id: Option<i64>,
    pub cliente_id: Option<i64>,
    pub subido_por: Option<i64>,
    pub es_confidencial: bool,
    pub fecha_documento: Option<NaiveDate>,
}

/// Partial metadata update. The storage path and size are deliberately
/// not updatable; replacing content means a new upload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocumento {
    pub nombre: Option<String>,
    pub tipo_documento: Option<String>,
    pub descripcion: Option<String>,
    pub caso_id: Option<i64>,
    pub cliente_id: Option<i64>,
    pub es_confidencial: Option<bool>,
    pub fecha_documento: Option<NaiveDate>,
}
