use emekdep_core::shift::DAYS_PER_WEEK;
use emekdep_models::{ReportForm, TimetableCell, TimetableForm};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TimetableFormResponse {
    pub form: TimetableForm,
    /// One row per lesson number, one cell per day (`null` when free)
    #[schema(value_type = Vec<Vec<Option<TimetableCell>>>)]
    pub grid: Vec<[Option<TimetableCell>; DAYS_PER_WEEK]>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReportFormView {
    pub form: ReportForm,
    pub question_count: usize,
    /// Questions with a non-blank answer
    pub answered_count: usize,
}
