//! Client handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use lexhub_core::error::AppError;
use lexhub_entity::cliente::{Cliente, CreateCliente, UpdateCliente};
use lexhub_service::cliente::ClienteCreado;

use crate::dto::request::{ClienteListQuery, CreateClienteRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/clientes — optionally filtered by exact email.
pub async fn list_clientes(
    State(state): State<AppState>,
    Query(query): Query<ClienteListQuery>,
) -> Result<Json<ApiResponse<Vec<Cliente>>>, ApiError> {
    let clientes = match query.email.as_deref().filter(|e| !e.is_empty()) {
        Some(email) => state.cliente_repo.find_by_email(email).await?,
        None => state.cliente_repo.find_all().await?,
    };

    Ok(Json(ApiResponse::ok(clientes)))
}

/// POST /api/clientes — create the client and provision its portal
/// account (username = email, initial password = cédula).
pub async fn create_cliente(
    State(state): State<AppState>,
    Json(req): Json<CreateClienteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ClienteCreado>>), ApiError> {
    let nombre = req
        .nombre
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("El nombre del cliente es obligatorio"))?;
    let email = req
        .email
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("El correo electrónico es obligatorio"))?;
    let cedula = req
        .cedula
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("La cédula es obligatoria"))?;

    let resultado = state
        .cliente_service
        .create_cliente(&CreateCliente {
            nombre,
            email,
            cedula,
            tipo_cliente: req.tipo_cliente,
            telefono: req.telefono,
            direccion: req.direccion,
            ciudad: req.ciudad,
            estado: req.estado,
            codigo_postal: req.codigo_postal,
            pais: req.pais,
            persona_contacto: req.persona_contacto,
            cargo_contacto: req.cargo_contacto,
            notas: req.notas,
            activo: req.activo,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Cliente creado exitosamente",
            resultado,
        )),
    ))
}

/// GET /api/clientes/{id}
pub async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Cliente>>, ApiError> {
    let cliente = state
        .cliente_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Cliente no encontrado"))?;

    Ok(Json(ApiResponse::ok(cliente)))
}

/// PUT /api/clientes/{id}
pub async fn update_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCliente>,
) -> Result<Json<ApiResponse<Cliente>>, ApiError> {
    let cliente = state.cliente_repo.update(id, &req).await?;

    Ok(Json(ApiResponse::with_message(
        "Cliente actualizado exitosamente",
        cliente,
    )))
}

/// DELETE /api/clientes/{id}
pub async fn delete_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.cliente_repo.delete(id).await? {
        return Err(AppError::not_found("Cliente no encontrado").into());
    }

    Ok(Json(ApiResponse::with_message(
        "Cliente eliminado exitosamente",
        (),
    )))
}
