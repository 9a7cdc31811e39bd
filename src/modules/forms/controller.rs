use axum::{Json, extract::State};
use emekdep_core::AppError;
use emekdep_core::acl::Action;
use emekdep_core::subjects;
use emekdep_models::{
    ClassroomForm, ClassroomResponse, ReportFormResponse, TimetableResponse, UserForm,
    UserResponse,
};
use tracing::instrument;

use crate::middleware::session::CurrentSession;
use crate::validation::JsonBody;
use crate::modules::forms::model::{ReportFormView, TimetableFormResponse};
use crate::modules::forms::service::FormService;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/api/forms/classroom",
    request_body = ClassroomResponse,
    responses(
        (status = 200, description = "Classroom form", body = ClassroomForm),
        (status = 401, description = "Missing or unknown session"),
        (status = 403, description = "Forbidden - requires read on admin_classrooms")
    ),
    tag = "Forms",
    security(("session_auth" = []))
)]
#[instrument(skip(session, response))]
pub async fn classroom_form(
    session: CurrentSession,
    JsonBody(response): JsonBody<ClassroomResponse>,
) -> Result<Json<ClassroomForm>, AppError> {
    session.require(Action::Read, subjects::ADMIN_CLASSROOMS)?;

    Ok(Json(ClassroomForm::from(response)))
}

#[utoipa::path(
    post,
    path = "/api/forms/timetable",
    request_body = TimetableResponse,
    responses(
        (status = 200, description = "Timetable form and lesson grid", body = TimetableFormResponse),
        (status = 401, description = "Missing or unknown session"),
        (status = 403, description = "Forbidden - requires read on timetable")
    ),
    tag = "Forms",
    security(("session_auth" = []))
)]
#[instrument(skip(state, session, response))]
pub async fn timetable_form(
    State(state): State<AppState>,
    session: CurrentSession,
    JsonBody(response): JsonBody<TimetableResponse>,
) -> Result<Json<TimetableFormResponse>, AppError> {
    session.require(Action::Read, subjects::TIMETABLE)?;

    Ok(Json(FormService::timetable(
        response,
        state.shift_defaults.max_lessons_per_day,
    )))
}

#[utoipa::path(
    post,
    path = "/api/forms/user",
    request_body = UserResponse,
    responses(
        (status = 200, description = "User form", body = UserForm),
        (status = 401, description = "Missing or unknown session"),
        (status = 403, description = "Forbidden - requires read on users")
    ),
    tag = "Forms",
    security(("session_auth" = []))
)]
#[instrument(skip(session, response))]
pub async fn user_form(
    session: CurrentSession,
    JsonBody(response): JsonBody<UserResponse>,
) -> Result<Json<UserForm>, AppError> {
    session.require(Action::Read, subjects::USERS)?;

    Ok(Json(UserForm::from(response)))
}

#[utoipa::path(
    post,
    path = "/api/forms/report",
    request_body = ReportFormResponse,
    responses(
        (status = 200, description = "Report form with flattened answers and progress", body = ReportFormView),
        (status = 401, description = "Missing or unknown session"),
        (status = 403, description = "Forbidden - requires read on reports")
    ),
    tag = "Forms",
    security(("session_auth" = []))
)]
#[instrument(skip(session, response))]
pub async fn report_form(
    session: CurrentSession,
    JsonBody(response): JsonBody<ReportFormResponse>,
) -> Result<Json<ReportFormView>, AppError> {
    session.require(Action::Read, subjects::REPORTS)?;

    Ok(Json(FormService::report(response)))
}
