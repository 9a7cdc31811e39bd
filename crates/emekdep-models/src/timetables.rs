//! Timetable responses, forms and lesson grids.
//!
//! Lessons arrive as a flat list with nested subject and teacher objects.
//! The timetable editor works on a lesson-major grid shaped like the shift
//! grid: one row per lesson number, one column per day.

use emekdep_core::shift::DAYS_PER_WEEK;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::refs::{Id, NamedRef, PersonRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LessonResponse {
    pub id: Id,
    /// 0 = Monday .. 5 = Saturday
    pub day: u8,
    /// 1-based position within the day
    pub lesson_number: u8,
    #[serde(default)]
    pub subject: Option<NamedRef>,
    #[serde(default)]
    pub teacher: Option<PersonRef>,
    #[serde(default)]
    pub cabinet: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimetableResponse {
    pub classroom: NamedRef,
    #[serde(default)]
    pub shift: Option<NamedRef>,
    #[serde(default)]
    pub lessons: Vec<LessonResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimetableCell {
    pub day: u8,
    pub lesson_number: u8,
    pub subject_id: Option<Id>,
    pub teacher_id: Option<Id>,
    pub cabinet: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TimetableForm {
    pub classroom_id: Id,
    pub shift_id: Option<Id>,
    pub cells: Vec<TimetableCell>,
}

impl From<LessonResponse> for TimetableCell {
    fn from(lesson: LessonResponse) -> Self {
        Self {
            day: lesson.day,
            lesson_number: lesson.lesson_number,
            subject_id: lesson.subject.map(|s| s.id),
            teacher_id: lesson.teacher.map(|t| t.id),
            cabinet: lesson.cabinet.filter(|c| !c.trim().is_empty()),
        }
    }
}

impl From<TimetableResponse> for TimetableForm {
    fn from(response: TimetableResponse) -> Self {
        let mut cells: Vec<TimetableCell> =
            response.lessons.into_iter().map(TimetableCell::from).collect();
        cells.sort_by_key(|cell| (cell.day, cell.lesson_number));

        Self {
            classroom_id: response.classroom.id,
            shift_id: response.shift.map(|s| s.id),
            cells,
        }
    }
}

/// Lesson-major grid of `max_lessons` rows. Cells on a day outside the week
/// or a lesson number outside `1..=max_lessons` are left out; a later cell
/// for the same position replaces an earlier one.
pub fn timetable_grid(
    cells: &[TimetableCell],
    max_lessons: usize,
) -> Vec<[Option<TimetableCell>; DAYS_PER_WEEK]> {
    let mut grid: Vec<[Option<TimetableCell>; DAYS_PER_WEEK]> =
        (0..max_lessons).map(|_| Default::default()).collect();

    for cell in cells {
        let day = usize::from(cell.day);
        let Some(row) = usize::from(cell.lesson_number)
            .checked_sub(1)
            .and_then(|index| grid.get_mut(index))
        else {
            continue;
        };
        if let Some(slot) = row.get_mut(day) {
            *slot = Some(cell.clone());
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: Id, day: u8, lesson_number: u8, subject: Option<Id>) -> LessonResponse {
        LessonResponse {
            id,
            day,
            lesson_number,
            subject: subject.map(|id| NamedRef {
                id,
                name: format!("Subject {id}"),
            }),
            teacher: None,
            cabinet: Some("  ".to_string()),
        }
    }

    #[test]
    fn test_form_sorts_cells_by_day_then_lesson() {
        let response = TimetableResponse {
            classroom: NamedRef { id: 9, name: "9A".to_string() },
            shift: Some(NamedRef { id: 2, name: "Afternoon".to_string() }),
            lessons: vec![lesson(1, 1, 2, Some(5)), lesson(2, 0, 3, None), lesson(3, 1, 1, Some(6))],
        };

        let form = TimetableForm::from(response);
        assert_eq!(form.classroom_id, 9);
        assert_eq!(form.shift_id, Some(2));
        let order: Vec<(u8, u8)> = form.cells.iter().map(|c| (c.day, c.lesson_number)).collect();
        assert_eq!(order, vec![(0, 3), (1, 1), (1, 2)]);
        assert!(form.cells.iter().all(|c| c.cabinet.is_none()));
    }

    #[test]
    fn test_grid_places_cells_and_skips_out_of_range() {
        let cells: Vec<TimetableCell> = vec![
            lesson(1, 0, 1, Some(5)),
            lesson(2, 5, 2, Some(6)),
            lesson(3, 6, 1, Some(7)),
            lesson(4, 2, 0, Some(8)),
            lesson(5, 2, 4, Some(9)),
        ]
        .into_iter()
        .map(TimetableCell::from)
        .collect();

        let grid = timetable_grid(&cells, 3);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0][0].as_ref().and_then(|c| c.subject_id), Some(5));
        assert_eq!(grid[1][5].as_ref().and_then(|c| c.subject_id), Some(6));
        let filled = grid.iter().flatten().filter(|c| c.is_some()).count();
        assert_eq!(filled, 2);
    }
}
