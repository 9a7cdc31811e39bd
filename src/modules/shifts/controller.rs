use axum::{Json, extract::State};
use emekdep_core::AppError;
use tracing::instrument;

use crate::modules::shifts::model::{GenerateShiftDto, ShiftResponse};
use crate::modules::shifts::service::ShiftService;
use crate::state::AppState;
use crate::validation::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/shifts/generate",
    request_body = GenerateShiftDto,
    responses(
        (status = 200, description = "Lesson-major slot grid", body = ShiftResponse),
        (status = 400, description = "Unparseable start time"),
        (status = 422, description = "Invalid input")
    ),
    tag = "Shifts"
)]
#[instrument(skip(state, dto))]
pub async fn generate_shift(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<GenerateShiftDto>,
) -> Result<Json<ShiftResponse>, AppError> {
    let response = ShiftService::generate(&dto, &state.shift_defaults)?;

    Ok(Json(response))
}
