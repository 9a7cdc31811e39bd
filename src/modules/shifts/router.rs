use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::generate_shift;

pub fn init_shifts_router() -> Router<AppState> {
    Router::new().route("/generate", post(generate_shift))
}
