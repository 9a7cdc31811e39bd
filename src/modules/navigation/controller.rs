use axum::{Json, extract::Query};
use emekdep_core::AppError;
use emekdep_core::navigation::{NavItem, can_view_path, navigation_for};
use tracing::{debug, instrument};

use crate::middleware::session::CurrentSession;
use crate::modules::breadcrumbs::model::PathQuery;
use crate::modules::navigation::model::PageGuardResponse;

#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Navigation visible to the session", body = Vec<NavItem>),
        (status = 401, description = "Missing or unknown session")
    ),
    tag = "Navigation",
    security(("session_auth" = []))
)]
#[instrument(skip(session), fields(session_id = %session.id))]
pub async fn get_navigation(
    CurrentSession(session): CurrentSession,
) -> Result<Json<Vec<NavItem>>, AppError> {
    Ok(Json(navigation_for(&session.ability)))
}

#[utoipa::path(
    get,
    path = "/api/navigation/guard",
    params(PathQuery),
    responses(
        (status = 200, description = "Whether the session may open the page", body = PageGuardResponse),
        (status = 401, description = "Missing or unknown session")
    ),
    tag = "Navigation",
    security(("session_auth" = []))
)]
#[instrument(skip(session), fields(session_id = %session.id))]
pub async fn guard_page(
    CurrentSession(session): CurrentSession,
    Query(query): Query<PathQuery>,
) -> Result<Json<PageGuardResponse>, AppError> {
    let allowed = can_view_path(&session.ability, &query.path);
    debug!(path = %query.path, allowed, "Page guard evaluated");

    Ok(Json(PageGuardResponse {
        path: query.path,
        allowed,
    }))
}
