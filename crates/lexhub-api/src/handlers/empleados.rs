//! Employee handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use lexhub_core::error::AppError;
use lexhub_entity::empleado::{CreateEmpleado, Empleado, UpdateEmpleado};

use crate::dto::request::CreateEmpleadoRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/empleados
pub async fn list_empleados(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Empleado>>>, ApiError> {
    let empleados = state.empleado_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(empleados)))
}

/// POST /api/empleados
pub async fn create_empleado(
    State(state): State<AppState>,
    Json(req): Json<CreateEmpleadoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Empleado>>), ApiError> {
    let nombre = req
        .nombre
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("El nombre del empleado es obligatorio"))?;

    let empleado = state
        .empleado_repo
        .create(&CreateEmpleado {
            nombre,
            email: req.email,
            telefono: req.telefono,
            rol: req.rol,
            especialidad: req.especialidad,
            avatar_url: req.avatar_url,
            direccion: req.direccion,
            fecha_ingreso: req.fecha_ingreso,
            salario: req.salario,
            numero_empleado: req.numero_empleado,
            activo: req.activo,
            notas: req.notas,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Empleado creado exitosamente",
            empleado,
        )),
    ))
}

/// GET /api/empleados/{id}
pub async fn get_empleado(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Empleado>>, ApiError> {
    let empleado = state
        .empleado_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Empleado no encontrado"))?;

    Ok(Json(ApiResponse::ok(empleado)))
}

/// PUT /api/empleados/{id}
pub async fn update_empleado(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEmpleado>,
) -> Result<Json<ApiResponse<Empleado>>, ApiError> {
    let empleado = state.empleado_repo.update(id, &req).await?;

    Ok(Json(ApiResponse::with_message(
        "Empleado actualizado exitosamente",
        empleado,
    )))
}

/// DELETE /api/empleados/{id}
pub async fn delete_empleado(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.empleado_repo.delete(id).await? {
        return Err(AppError::not_found("Empleado no encontrado").into());
    }

    Ok(Json(ApiResponse::with_message(
        "Empleado eliminado exitosamente",
        (),
    )))
}
