//! Document handlers: metadata CRUD plus multipart upload and download.

use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use chrono::NaiveDate;

use lexhub_core::error::AppError;
use lexhub_database::repositories::documento::DocumentoFilter;
use lexhub_entity::documento::{Documento, UpdateDocumento};
use lexhub_service::documento::UploadDocumento;

use crate::dto::request::{DocumentoGetQuery, DocumentoListQuery};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/documentos — optionally filtered by case and/or client.
pub async fn list_documentos(
    State(state): State<AppState>,
    Query(query): Query<DocumentoListQuery>,
) -> Result<Json<ApiResponse<Vec<Documento>>>, ApiError> {
    let documentos = state
        .documento_repo
        .find_filtered(&DocumentoFilter {
            caso_id: query.caso_id,
            cliente_id: query.cliente_id,
        })
        .await?;

    Ok(Json(ApiResponse::ok(documentos)))
}

/// POST /api/documentos — multipart upload.
///
/// Fields: `file` (required), `nombre` (required), `tipo_documento`,
/// `descripcion`, `caso_id`, `cliente_id`, `subido_por`,
/// `es_confidencial`, `fecha_documento`.
pub async fn upload_documento(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<Documento>>), ApiError> {
    let mut nombre: Option<String> = None;
    let mut tipo_documento: Option<String> = None;
    let mut descripcion: Option<String> = None;
    let mut caso_id: Option<i64> = None;
    let mut cliente_id: Option<i64> = None;
    let mut subido_por: Option<i64> = None;
    let mut es_confidencial = false;
    let mut fecha_documento: Option<NaiveDate> = None;
    let mut nombre_archivo: Option<String> = None;
    let mut mime_type: Option<String> = None;
    let mut data: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                nombre_archivo = field.file_name().map(String::from);
                mime_type = field.content_type().map(String::from);
                data = Some(field.bytes().await.map_err(|e| {
                    AppError::validation(format!("Error al leer el archivo: {e}"))
                })?);
            }
            "nombre" => nombre = Some(read_text(field).await?),
            "tipo_documento" => tipo_documento = Some(read_text(field).await?),
            "descripcion" => descripcion = Some(read_text(field).await?),
            "caso_id" => caso_id = Some(parse_id(&read_text(field).await?, "caso_id")?),
            "cliente_id" => cliente_id = Some(parse_id(&read_text(field).await?, "cliente_id")?),
            "subido_por" => subido_por = Some(parse_id(&read_text(field).await?, "subido_por")?),
            "es_confidencial" => es_confidencial = read_text(field).await? == "true",
            "fecha_documento" => {
                let text = read_text(field).await?;
                fecha_documento = Some(text.parse().map_err(|_| {
                    AppError::validation("fecha_documento debe tener formato AAAA-MM-DD")
                })?);
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| AppError::validation("No se proporcionó ningún archivo"))?;
    let nombre =
        nombre.ok_or_else(|| AppError::validation("El nombre del documento es obligatorio"))?;
    let nombre_archivo = nombre_archivo.unwrap_or_else(|| nombre.clone());

    let documento = state
        .documento_service
        .upload(UploadDocumento {
            nombre,
            nombre_archivo,
            tipo_documento,
            mime_type,
            descripcion,
            caso_id,
            cliente_id,
            subido_por,
            es_confidencial,
            fecha_documento,
            data,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Documento subido exitosamente",
            documento,
        )),
    ))
}

/// GET /api/documentos/{id} — metadata, or the blob itself with
/// `?download=true`.
pub async fn get_documento(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<DocumentoGetQuery>,
) -> Result<Response, ApiError> {
    if query.download {
        let (documento, data) = state.documento_service.download(id).await?;

        let content_type = documento
            .mime_type
            .as_deref()
            .unwrap_or("application/octet-stream");

        let response = Response::builder()
            .header(header::CONTENT_TYPE, content_type)
            .header(
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", documento.nombre_archivo),
            )
            .body(Body::from(data))
            .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

        return Ok(response);
    }

    let documento = state
        .documento_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Documento no encontrado"))?;

    Ok(Json(ApiResponse::ok(documento)).into_response())
}

/// PUT /api/documentos/{id} — metadata only; the blob is immutable.
pub async fn update_documento(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateDocumento>,
) -> Result<Json<ApiResponse<Documento>>, ApiError> {
    let documento = state.documento_repo.update(id, &req).await?;

    Ok(Json(ApiResponse::with_message(
        "Documento actualizado exitosamente",
        documento,
    )))
}

/// DELETE /api/documentos/{id} — removes the row, then the blob.
pub async fn delete_documento(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.documento_service.delete(id).await?;

    Ok(Json(ApiResponse::with_message(
        "Documento eliminado exitosamente",
        (),
    )))
}

/// Reads a multipart text field.
async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Error al leer el campo: {e}")).into())
}

/// Parses a numeric id field.
fn parse_id(text: &str, field: &str) -> Result<i64, ApiError> {
    text.parse()
        .map_err(|_| AppError::validation(format!("{field} debe ser numérico")).into())
}
