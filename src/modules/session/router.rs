use axum::{
    Router,
    routing::{post, put},
};

use crate::state::AppState;

use super::controller::{get_session, login, logout, switch_role};

pub fn init_session_router() -> Router<AppState> {
    Router::new()
        .route("/", post(login).get(get_session).delete(logout))
        .route("/role", put(switch_role))
}
