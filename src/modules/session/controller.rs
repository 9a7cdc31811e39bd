use axum::{Json, extract::State, http::StatusCode};
use emekdep_core::AppError;
use tracing::instrument;

use crate::middleware::session::CurrentSession;
use crate::modules::session::model::{LoginDto, SessionResponse, SwitchRoleDto};
use crate::modules::session::service::SessionService;
use crate::state::AppState;
use crate::validation::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/session",
    request_body = LoginDto,
    responses(
        (status = 201, description = "Session created", body = SessionResponse),
        (status = 400, description = "Malformed request body"),
        (status = 422, description = "Invalid input")
    ),
    tag = "Session"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let session = SessionService::login(&state.sessions, dto).await;

    Ok((StatusCode::CREATED, Json(SessionResponse::from(&session))))
}

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse),
        (status = 401, description = "Missing or unknown session")
    ),
    tag = "Session",
    security(("session_auth" = []))
)]
#[instrument(skip(session))]
pub async fn get_session(
    CurrentSession(session): CurrentSession,
) -> Result<Json<SessionResponse>, AppError> {
    Ok(Json(SessionResponse::from(&session)))
}

#[utoipa::path(
    put,
    path = "/api/session/role",
    request_body = SwitchRoleDto,
    responses(
        (status = 200, description = "Role switched", body = SessionResponse),
        (status = 401, description = "Missing or unknown session"),
        (status = 422, description = "Invalid input")
    ),
    tag = "Session",
    security(("session_auth" = []))
)]
#[instrument(skip(state, current, dto))]
pub async fn switch_role(
    State(state): State<AppState>,
    current: CurrentSession,
    ValidatedJson(dto): ValidatedJson<SwitchRoleDto>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = SessionService::switch_role(&state.sessions, current.id(), dto).await?;

    Ok(Json(SessionResponse::from(&session)))
}

#[utoipa::path(
    delete,
    path = "/api/session",
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "Missing or unknown session")
    ),
    tag = "Session",
    security(("session_auth" = []))
)]
#[instrument(skip(state, current))]
pub async fn logout(
    State(state): State<AppState>,
    current: CurrentSession,
) -> Result<StatusCode, AppError> {
    SessionService::logout(&state.sessions, current.id()).await?;

    Ok(StatusCode::NO_CONTENT)
}
