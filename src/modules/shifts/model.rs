use emekdep_core::shift::{DAYS_PER_WEEK, LessonRow};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const DAY_NAMES: [&str; DAYS_PER_WEEK] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn validate_days(days: &[usize]) -> Result<(), ValidationError> {
    if days.iter().any(|&day| day >= DAYS_PER_WEEK) {
        return Err(ValidationError::new("days_indexes")
            .with_message("Day indexes must be between 0 and 5".into()));
    }
    Ok(())
}

/// Shift parameters. Omitted fields fall back to the configured defaults.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct GenerateShiftDto {
    /// First lesson start, `H:MM`
    #[schema(example = "8:00")]
    pub start_time: Option<String>,
    #[validate(range(min = 1, max = 240, message = "Lesson duration must be between 1 and 240 minutes"))]
    pub lesson_duration: Option<i64>,
    #[validate(range(max = 20, message = "At most 20 lessons per day"))]
    pub max_lessons_per_day: Option<usize>,
    #[validate(range(min = 0, max = 120, message = "Short break must be between 0 and 120 minutes"))]
    pub short_break_duration: Option<i64>,
    #[validate(range(min = 0, max = 240, message = "Long break must be between 0 and 240 minutes"))]
    pub long_break_duration: Option<i64>,
    pub big_break_index: Option<usize>,
    /// Days to fill, 0 = Monday .. 5 = Saturday
    #[serde(default)]
    #[validate(custom(function = "validate_days"))]
    pub days_indexes: Vec<usize>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShiftResponse {
    pub day_names: Vec<String>,
    /// One row per lesson position, six `[start, end]` or `[]` cells per row
    #[schema(value_type = Vec<Vec<Vec<String>>>)]
    pub lessons: Vec<LessonRow>,
}
