use emekdep_core::breadcrumbs::Crumb;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct PathQuery {
    /// Dashboard path, e.g. `/admin/schools/12`
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BreadcrumbsResponse {
    pub path: String,
    pub title: String,
    pub crumbs: Vec<Crumb>,
}
