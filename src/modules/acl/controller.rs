use axum::Json;
use emekdep_core::AppError;
use tracing::instrument;

use crate::modules::acl::model::{AbilityRequestDto, AbilityResponse, CheckAbilityDto, CheckAbilityResponse};
use crate::modules::acl::service::AclService;
use crate::validation::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/acl/abilities",
    request_body = AbilityRequestDto,
    responses(
        (status = 200, description = "Resolved ability", body = AbilityResponse),
        (status = 422, description = "Invalid input")
    ),
    tag = "ACL"
)]
#[instrument(skip(dto))]
pub async fn resolve_ability(
    ValidatedJson(dto): ValidatedJson<AbilityRequestDto>,
) -> Result<Json<AbilityResponse>, AppError> {
    Ok(Json(AclService::describe(&dto)))
}

#[utoipa::path(
    post,
    path = "/api/acl/check",
    request_body = CheckAbilityDto,
    responses(
        (status = 200, description = "Whether the action is allowed", body = CheckAbilityResponse),
        (status = 422, description = "Invalid input")
    ),
    tag = "ACL"
)]
#[instrument(skip(dto))]
pub async fn check_ability(
    ValidatedJson(dto): ValidatedJson<CheckAbilityDto>,
) -> Result<Json<CheckAbilityResponse>, AppError> {
    Ok(Json(AclService::check(&dto)))
}
