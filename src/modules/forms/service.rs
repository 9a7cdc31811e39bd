use emekdep_models::{ReportForm, ReportFormResponse, TimetableForm, TimetableResponse, timetable_grid};
use tracing::instrument;

use crate::modules::forms::model::{ReportFormView, TimetableFormResponse};

pub struct FormService;

impl FormService {
    /// Flattens a timetable and lays it out on a grid tall enough for both
    /// the shift's lesson count and the highest lesson number present.
    #[instrument(skip(response), fields(classroom_id = response.classroom.id))]
    pub fn timetable(response: TimetableResponse, max_lessons_per_day: usize) -> TimetableFormResponse {
        let form = TimetableForm::from(response);
        let rows = form
            .cells
            .iter()
            .map(|cell| usize::from(cell.lesson_number))
            .max()
            .unwrap_or(0)
            .max(max_lessons_per_day);

        let grid = timetable_grid(&form.cells, rows);
        TimetableFormResponse { form, grid }
    }

    /// Flattens a report questionnaire and counts its progress.
    #[instrument(skip(response), fields(report_id = response.id))]
    pub fn report(response: ReportFormResponse) -> ReportFormView {
        let question_count = response.question_count();
        let form = ReportForm::from(response);

        ReportFormView {
            answered_count: form.answered_count(),
            question_count,
            form,
        }
    }
}
