//! Account administration handlers.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use lexhub_core::error::AppError;
use lexhub_entity::account::model::{CreateAccount, UpdateAccount};

use crate::dto::request::{CreateUsuarioRequest, UpdateUsuarioRequest};
use crate::dto::response::{ApiResponse, UsuarioResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/usuarios
pub async fn list_usuarios(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UsuarioResponse>>>, ApiError> {
    let accounts = state.account_repo.find_all().await?;
    let roles: HashMap<i32, _> = state
        .role_repo
        .find_all()
        .await?
        .into_iter()
        .map(|r| (r.id, r))
        .collect();

    let usuarios = accounts
        .into_iter()
        .map(|a| {
            let rol = roles.get(&a.rol_id).cloned();
            UsuarioResponse::from_account(a, rol)
        })
        .collect();

    Ok(Json(ApiResponse::ok(usuarios)))
}

/// POST /api/usuarios
pub async fn create_usuario(
    State(state): State<AppState>,
    Json(req): Json<CreateUsuarioRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UsuarioResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let min_len = state.config.auth.password_min_length;
    if req.password.chars().count() < min_len {
        return Err(AppError::validation(format!(
            "La contraseña debe tener al menos {min_len} caracteres"
        ))
        .into());
    }

    let rol = state
        .role_repo
        .find_by_id(req.rol_id)
        .await?
        .ok_or_else(|| AppError::validation("El rol indicado no existe"))?;

    let password_hash = state.hasher.hash(&req.password)?;

    let account = state
        .account_repo
        .create(&CreateAccount {
            username: req.username,
            email: req.email,
            password_hash,
            nombre_completo: req.nombre_completo,
            telefono: req.telefono,
            avatar_url: req.avatar_url,
            activo: req.activo.unwrap_or(true),
            verificado: false,
            rol_id: rol.id,
            cliente_id: req.cliente_id,
            empleado_id: req.empleado_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Usuario creado exitosamente",
            UsuarioResponse::from_account(account, Some(rol)),
        )),
    ))
}

/// GET /api/usuarios/{id}
pub async fn get_usuario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UsuarioResponse>>, ApiError> {
    let account = state
        .account_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Usuario no encontrado"))?;

    let rol = state.role_repo.find_by_id(account.rol_id).await?;

    Ok(Json(ApiResponse::ok(UsuarioResponse::from_account(
        account, rol,
    ))))
}

/// PUT /api/usuarios/{id}
pub async fn update_usuario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUsuarioRequest>,
) -> Result<Json<ApiResponse<UsuarioResponse>>, ApiError> {
    // A new plaintext password is hashed here; the repository only ever
    // sees hashes.
    let password_hash = match req.password.as_deref().filter(|p| !p.is_empty()) {
        Some(password) => Some(state.hasher.hash(password)?),
        None => None,
    };

    let account = state
        .account_repo
        .update(
            id,
            &UpdateAccount {
                username: req.username,
                email: req.email,
                password_hash,
                nombre_completo: req.nombre_completo,
                telefono: req.telefono,
                avatar_url: req.avatar_url,
                rol_id: req.rol_id,
                activo: req.activo,
                verificado: req.verificado,
                cliente_id: req.cliente_id,
                empleado_id: req.empleado_id,
            },
        )
        .await?;

    let rol = state.role_repo.find_by_id(account.rol_id).await?;

    Ok(Json(ApiResponse::with_message(
        "Usuario actualizado exitosamente",
        UsuarioResponse::from_account(account, rol),
    )))
}

/// DELETE /api/usuarios/{id}
pub async fn delete_usuario(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    if !state.account_repo.delete(id).await? {
        return Err(AppError::not_found("Usuario no encontrado").into());
    }

    Ok(Json(ApiResponse::with_message(
        "Usuario eliminado exitosamente",
        (),
    )))
}
