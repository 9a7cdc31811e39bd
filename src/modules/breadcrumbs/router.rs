use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_breadcrumbs;

pub fn init_breadcrumbs_router() -> Router<AppState> {
    Router::new().route("/", get(get_breadcrumbs))
}
