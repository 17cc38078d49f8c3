//! Role reference-data handlers.

use axum::Json;
use axum::extract::State;

use lexhub_entity::account::Role;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/roles — active roles ordered by id.
pub async fn list_roles(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Role>>>, ApiError> {
    let roles = state.role_repo.find_active().await?;
    Ok(Json(ApiResponse::ok(roles)))
}
