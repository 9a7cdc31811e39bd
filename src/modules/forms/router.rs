use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{classroom_form, report_form, timetable_form, user_form};

pub fn init_forms_router() -> Router<AppState> {
    Router::new()
        .route("/classroom", post(classroom_form))
        .route("/timetable", post(timetable_form))
        .route("/user", post(user_form))
        .route("/report", post(report_form))
}
