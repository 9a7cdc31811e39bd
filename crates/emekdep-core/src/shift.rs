//! Weekly lesson slot generation.
//!
//! A shift describes when lessons happen during a school week. Given a start
//! time, lesson length and break lengths, [`generate_shift`] produces the
//! start/end labels of every lesson for the selected days. The week always
//! has [`DAYS_PER_WEEK`] day rows (Monday to Saturday).
//!
//! The generated table is returned lesson-major: one row per lesson
//! position, each row holding one [`Slot`] per day. Days that were not
//! selected hold [`Slot::Empty`] at every position.
//!
//! No validation is performed on the configuration. Zero lessons yield an
//! empty grid, a `big_break_index` outside `1..max_lessons_per_day` simply
//! never triggers, and times wrap around midnight.

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Monday to Saturday.
pub const DAYS_PER_WEEK: usize = 6;

/// Day-major table: one row of lesson slots per day.
pub type DayTable = [Vec<Slot>; DAYS_PER_WEEK];

/// Lesson-major table: one row of day slots per lesson position.
pub type LessonRow = [Slot; DAYS_PER_WEEK];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("Invalid time '{0}', expected H:MM")]
    Format(String),
    #[error("Time '{0}' is out of range")]
    OutOfRange(String),
}

/// Parses `H:MM`, `HH:MM` or `HH:MM:SS`.
pub fn parse_time(value: &str) -> Result<NaiveTime, TimeParseError> {
    let trimmed = value.trim();
    let mut parts = trimmed.split(':');

    let mut next_number = || -> Result<Option<u32>, TimeParseError> {
        match parts.next() {
            None => Ok(None),
            Some(part) if !part.is_empty() && part.len() <= 2 => part
                .parse::<u32>()
                .map(Some)
                .map_err(|_| TimeParseError::Format(value.to_string())),
            Some(_) => Err(TimeParseError::Format(value.to_string())),
        }
    };

    let hour = next_number()?.ok_or_else(|| TimeParseError::Format(value.to_string()))?;
    let minute = next_number()?.ok_or_else(|| TimeParseError::Format(value.to_string()))?;
    let second = next_number()?.unwrap_or(0);

    if parts.next().is_some() {
        return Err(TimeParseError::Format(value.to_string()));
    }

    NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| TimeParseError::OutOfRange(value.to_string()))
}

/// Formats as `H:MM`: hours unpadded, minutes padded to two digits.
pub fn format_time(time: NaiveTime) -> String {
    format!("{}:{:02}", time.hour(), time.minute())
}

/// One lesson window, or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Slot {
    #[default]
    Empty,
    Lesson { start: String, end: String },
}

impl Slot {
    pub fn lesson(start: NaiveTime, end: NaiveTime) -> Self {
        Slot::Lesson {
            start: format_time(start),
            end: format_time(end),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn labels(&self) -> Option<(&str, &str)> {
        match self {
            Slot::Empty => None,
            Slot::Lesson { start, end } => Some((start, end)),
        }
    }
}

// Serialized as `[]` or `["8:00", "8:45"]`.
impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Slot::Empty => serializer.collect_seq(std::iter::empty::<&str>()),
            Slot::Lesson { start, end } => serializer.collect_seq([start, end]),
        }
    }
}

impl<'de> Deserialize<'de> for Slot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let labels: Vec<String> = Vec::deserialize(deserializer)?;
        let len = labels.len();
        let mut labels = labels.into_iter();
        match (labels.next(), labels.next(), len) {
            (None, None, 0) => Ok(Slot::Empty),
            (Some(start), Some(end), 2) => Ok(Slot::Lesson { start, end }),
            _ => Err(de::Error::invalid_length(len, &"an empty array or [start, end]")),
        }
    }
}

/// Shift parameters. Durations are minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftConfig {
    pub start_time: NaiveTime,
    pub lesson_duration: i64,
    pub max_lessons_per_day: usize,
    pub short_break_duration: i64,
    pub long_break_duration: i64,
    /// 1-based lesson position after which the long break replaces the short one.
    pub big_break_index: usize,
}

fn minutes(value: i64) -> TimeDelta {
    TimeDelta::try_minutes(value).unwrap_or_else(TimeDelta::zero)
}

fn add_minutes(time: NaiveTime, value: i64) -> NaiveTime {
    time.overflowing_add_signed(minutes(value)).0
}

/// Lesson windows of a single day.
pub fn generate_day(config: &ShiftConfig) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(config.max_lessons_per_day);
    if config.max_lessons_per_day == 0 {
        return slots;
    }

    let mut start = config.start_time;
    let mut end = add_minutes(start, config.lesson_duration);
    slots.push(Slot::lesson(start, end));

    for index in 1..config.max_lessons_per_day {
        let pause = if index == config.big_break_index {
            config.long_break_duration
        } else {
            config.short_break_duration
        };
        start = add_minutes(end, pause);
        end = add_minutes(start, config.lesson_duration);
        slots.push(Slot::lesson(start, end));
    }

    slots
}

/// Day-major table with the selected days filled. Indexes outside
/// `0..DAYS_PER_WEEK` are ignored.
pub fn generate_day_table(config: &ShiftConfig, days_indexes: &[usize]) -> DayTable {
    let mut table: DayTable = Default::default();
    let day = generate_day(config);

    for &index in days_indexes {
        if let Some(row) = table.get_mut(index) {
            *row = day.clone();
        }
    }

    table
}

/// Re-indexes a day-major table into `lessons` rows of day slots.
pub fn transpose(table: &DayTable, lessons: usize) -> Vec<LessonRow> {
    (0..lessons)
        .map(|lesson| {
            std::array::from_fn(|day| table[day].get(lesson).cloned().unwrap_or_default())
        })
        .collect()
}

/// Inverse of [`transpose`]. Empty cells are dropped, so unselected days
/// come back as empty rows.
pub fn untranspose(rows: &[LessonRow]) -> DayTable {
    std::array::from_fn(|day| {
        rows.iter()
            .map(|row| row[day].clone())
            .filter(|slot| !slot.is_empty())
            .collect()
    })
}

/// Generates the lesson-major grid for the selected days.
pub fn generate_shift(config: &ShiftConfig, days_indexes: &[usize]) -> Vec<LessonRow> {
    let table = generate_day_table(config, days_indexes);
    transpose(&table, config.max_lessons_per_day)
}
