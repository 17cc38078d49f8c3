//! Case handlers, including the case team (employee assignments).

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Serialize;

use lexhub_core::error::AppError;
use lexhub_entity::caso::{Caso, CreateAsignacion, CreateCaso};
use lexhub_entity::empleado::Empleado;

use crate::dto::request::{CreateAsignacionRequest, CreateCasoRequest, UnassignQuery};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// A case team member: the assignment joined with the employee.
#[derive(Debug, Clone, Serialize)]
pub struct CaseTeamMember {
    /// Assignment id.
    pub id: i64,
    /// Role in this case.
    pub rol_en_caso: String,
    /// When the assignment was made.
    pub fecha_asignacion: DateTime<Utc>,
    /// Assignment notes.
    pub notas: Option<String>,
    /// The assigned employee.
    pub empleado: Empleado,
}

/// GET /api/casos
pub async fn list_casos(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Caso>>>, ApiError> {
    let casos = state.caso_repo.find_all().await?;
    Ok(Json(ApiResponse::ok(casos)))
}

/// POST /api/casos
pub async fn create_caso(
    State(state): State<AppState>,
    Json(req): Json<CreateCasoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Caso>>), ApiError> {
    let (title, client_name) = match (
        req.title.filter(|s| !s.is_empty()),
        req.client_name.filter(|s| !s.is_empty()),
    ) {
        (Some(title), Some(client_name)) => (title, client_name),
        _ => {
            return Err(
                AppError::validation("El título y nombre del cliente son obligatorios").into(),
            );
        }
    };

    let caso = state
        .caso_repo
        .create(&CreateCaso {
            title,
            client_name,
            description: req.description,
            contact_person: req.contact_person,
            client_email: req.client_email,
            client_phone: req.client_phone,
            practice_area: req.practice_area,
            case_type: req.case_type,
            opponent: req.opponent,
            opponent_lawyer: req.opponent_lawyer,
            file_number: req.file_number,
            court: req.court,
            jurisdiction: req.jurisdiction,
            judge: req.judge,
            status: req.status,
            next_hearing: req.next_hearing,
            amount: req.amount,
            fees: req.fees,
            responsible_lawyer: req.responsible_lawyer,
            assistants: req.assistants,
            strategy: req.strategy,
            risks: req.risks,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Caso creado exitosamente", caso)),
    ))
}

/// GET /api/casos/{id}/empleados — the case team.
pub async fn list_empleados_del_caso(
    State(state): State<AppState>,
    Path(caso_id): Path<i64>,
) -> Result<Json<ApiResponse<Vec<CaseTeamMember>>>, ApiError> {
    let asignaciones = state.caso_repo.find_asignaciones(caso_id).await?;
    let empleados = state.caso_repo.find_empleados_asignados(caso_id).await?;

    let team = asignaciones
        .into_iter()
        .filter_map(|asignacion| {
            empleados
                .iter()
                .find(|e| e.id == asignacion.empleado_id)
                .cloned()
                .map(|empleado| CaseTeamMember {
                    id: asignacion.id,
                    rol_en_caso: asignacion.rol_en_caso,
                    fecha_asignacion: asignacion.fecha_asignacion,
                    notas: asignacion.notas,
                    empleado,
                })
        })
        .collect();

    Ok(Json(ApiResponse::ok(team)))
}

/// POST /api/casos/{id}/empleados — assign an employee.
pub async fn asignar_empleado(
    State(state): State<AppState>,
    Path(caso_id): Path<i64>,
    Json(req): Json<CreateAsignacionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<lexhub_entity::caso::AsignacionCaso>>), ApiError> {
    let empleado_id = req
        .empleado_id
        .ok_or_else(|| AppError::validation("El ID del empleado es obligatorio"))?;

    let asignacion = state
        .caso_repo
        .create_asignacion(
            caso_id,
            &CreateAsignacion {
                empleado_id,
                rol_en_caso: req.rol_en_caso,
                notas: req.notas,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Empleado asignado exitosamente",
            asignacion,
        )),
    ))
}

/// DELETE /api/casos/{id}/empleados?empleado_id= — unassign an employee.
pub async fn desasignar_empleado(
    State(state): State<AppState>,
    Path(caso_id): Path<i64>,
    Query(query): Query<UnassignQuery>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let empleado_id = query
        .empleado_id
        .ok_or_else(|| AppError::validation("El ID del empleado es obligatorio"))?;

    if !state
        .caso_repo
        .delete_asignacion(caso_id, empleado_id)
        .await?
    {
        return Err(AppError::not_found("Asignación no encontrada").into());
    }

    Ok(Json(ApiResponse::with_message(
        "Empleado desasignado exitosamente",
        (),
    )))
}
