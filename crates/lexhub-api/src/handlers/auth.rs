//! Auth handlers — login.

use axum::Json;
use axum::extract::State;

use lexhub_auth::login::LoginIdentifier;
use lexhub_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginData};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/login
///
/// Validates the payload, delegates to the authenticator, and returns the
/// sanitized account with its nested role. The password hash never leaves
/// the server.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginData>>, ApiError> {
    // Field validation happens before any store access.
    let username = req.username.as_deref().filter(|s| !s.is_empty());
    let email = req.email.as_deref().filter(|s| !s.is_empty());

    let identifier = match (username, email) {
        (Some(username), _) => LoginIdentifier::Username(username),
        (None, Some(email)) => LoginIdentifier::Email(email),
        (None, None) => {
            return Err(AppError::validation(
                "Se requiere el nombre de usuario o el correo electrónico",
            )
            .into());
        }
    };

    let password = req
        .password
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::validation("La contraseña es obligatoria"))?;

    let result = state.authenticator.authenticate(identifier, password).await?;

    Ok(Json(ApiResponse::with_message(
        "Inicio de sesión exitoso",
        LoginData::from(result),
    )))
}
