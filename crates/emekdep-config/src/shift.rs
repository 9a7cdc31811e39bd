use crate::env_or;

/// Shift parameters applied when a request or CLI invocation leaves them out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftDefaults {
    /// First lesson start, `H:MM`
    pub start_time: String,
    /// Minutes per lesson
    pub lesson_duration: i64,
    /// Lesson slots per day
    pub max_lessons_per_day: usize,
    /// Minutes between ordinary lessons
    pub short_break_duration: i64,
    /// Minutes of the big break
    pub long_break_duration: i64,
    /// Lesson position followed by the big break
    pub big_break_index: usize,
}

impl Default for ShiftDefaults {
    fn default() -> Self {
        Self {
            start_time: "8:00".to_string(),
            lesson_duration: 45,
            max_lessons_per_day: 6,
            short_break_duration: 10,
            long_break_duration: 20,
            big_break_index: 3,
        }
    }
}

impl ShiftDefaults {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            start_time: env_or("SHIFT_START_TIME", defaults.start_time),
            lesson_duration: env_or("SHIFT_LESSON_DURATION", defaults.lesson_duration),
            max_lessons_per_day: env_or("SHIFT_MAX_LESSONS", defaults.max_lessons_per_day),
            short_break_duration: env_or("SHIFT_SHORT_BREAK", defaults.short_break_duration),
            long_break_duration: env_or("SHIFT_LONG_BREAK", defaults.long_break_duration),
            big_break_index: env_or("SHIFT_BIG_BREAK_INDEX", defaults.big_break_index),
        }
    }
}
