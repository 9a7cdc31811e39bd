use emekdep_config::ShiftDefaults;
use emekdep_core::AppError;
use emekdep_core::shift::{ShiftConfig, generate_shift, parse_time};
use tracing::{debug, instrument};

use crate::modules::shifts::model::{DAY_NAMES, GenerateShiftDto, ShiftResponse};

pub struct ShiftService;

impl ShiftService {
    /// Merges the request with `defaults` into a generator configuration.
    pub fn build_config(
        dto: &GenerateShiftDto,
        defaults: &ShiftDefaults,
    ) -> Result<ShiftConfig, AppError> {
        let start_time = dto.start_time.as_deref().unwrap_or(&defaults.start_time);

        Ok(ShiftConfig {
            start_time: parse_time(start_time).map_err(AppError::bad_request)?,
            lesson_duration: dto.lesson_duration.unwrap_or(defaults.lesson_duration),
            max_lessons_per_day: dto.max_lessons_per_day.unwrap_or(defaults.max_lessons_per_day),
            short_break_duration: dto
                .short_break_duration
                .unwrap_or(defaults.short_break_duration),
            long_break_duration: dto
                .long_break_duration
                .unwrap_or(defaults.long_break_duration),
            big_break_index: dto.big_break_index.unwrap_or(defaults.big_break_index),
        })
    }

    #[instrument(skip(dto, defaults))]
    pub fn generate(
        dto: &GenerateShiftDto,
        defaults: &ShiftDefaults,
    ) -> Result<ShiftResponse, AppError> {
        let config = Self::build_config(dto, defaults)?;
        let lessons = generate_shift(&config, &dto.days_indexes);

        debug!(
            lessons = lessons.len(),
            days = dto.days_indexes.len(),
            "Shift generated"
        );

        Ok(ShiftResponse {
            day_names: DAY_NAMES.iter().map(|d| d.to_string()).collect(),
            lessons,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use emekdep_core::shift::Slot;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let defaults = ShiftDefaults::default();
        let config = ShiftService::build_config(&GenerateShiftDto::default(), &defaults).unwrap();
        assert_eq!(config.lesson_duration, defaults.lesson_duration);
        assert_eq!(config.max_lessons_per_day, defaults.max_lessons_per_day);
        assert_eq!(config.big_break_index, defaults.big_break_index);
    }

    #[test]
    fn test_invalid_start_time_is_bad_request() {
        let dto = GenerateShiftDto {
            start_time: Some("noon".to_string()),
            ..Default::default()
        };
        let err = ShiftService::build_config(&dto, &ShiftDefaults::default()).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generate_matches_reference_schedule() {
        let dto = GenerateShiftDto {
            start_time: Some("08:00".to_string()),
            lesson_duration: Some(45),
            max_lessons_per_day: Some(3),
            short_break_duration: Some(10),
            long_break_duration: Some(20),
            big_break_index: Some(2),
            days_indexes: vec![0],
        };
        let response = ShiftService::generate(&dto, &ShiftDefaults::default()).unwrap();
        assert_eq!(response.day_names.len(), 6);
        assert_eq!(response.lessons[2][0].labels(), Some(("10:00", "10:45")));
        assert_eq!(response.lessons[2][1], Slot::Empty);
    }
}
