use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_navigation, guard_page};

pub fn init_navigation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_navigation))
        .route("/guard", get(guard_page))
}
