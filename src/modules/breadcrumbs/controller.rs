use axum::{Json, extract::Query};
use emekdep_core::AppError;
use emekdep_core::breadcrumbs::{breadcrumbs, page_title};
use tracing::instrument;

use crate::modules::breadcrumbs::model::{BreadcrumbsResponse, PathQuery};

#[utoipa::path(
    get,
    path = "/api/breadcrumbs",
    params(PathQuery),
    responses(
        (status = 200, description = "Breadcrumb trail and page title", body = BreadcrumbsResponse),
        (status = 400, description = "Missing path")
    ),
    tag = "Breadcrumbs"
)]
#[instrument]
pub async fn get_breadcrumbs(
    Query(query): Query<PathQuery>,
) -> Result<Json<BreadcrumbsResponse>, AppError> {
    Ok(Json(BreadcrumbsResponse {
        title: page_title(&query.path),
        crumbs: breadcrumbs(&query.path),
        path: query.path,
    }))
}
