use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{check_ability, resolve_ability};

pub fn init_acl_router() -> Router<AppState> {
    Router::new()
        .route("/abilities", post(resolve_ability))
        .route("/check", post(check_ability))
}
