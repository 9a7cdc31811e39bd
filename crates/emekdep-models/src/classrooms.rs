//! Classroom responses and forms.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::refs::{Id, NamedRef, PersonRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassroomResponse {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub grade: Option<u8>,
    #[serde(default)]
    pub letter: Option<String>,
    #[serde(default)]
    pub school: Option<NamedRef>,
    #[serde(default)]
    pub shift: Option<NamedRef>,
    #[serde(default)]
    pub language: Option<NamedRef>,
    #[serde(default)]
    pub teacher: Option<PersonRef>,
    #[serde(default)]
    pub students_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ClassroomForm {
    pub id: Id,
    pub name: String,
    pub grade: Option<u8>,
    pub letter: Option<String>,
    pub school_id: Option<Id>,
    pub shift_id: Option<Id>,
    pub language_id: Option<Id>,
    pub teacher_id: Option<Id>,
    /// Read-only, e.g. `"9A"`
    pub label: String,
    /// Read-only homeroom teacher name, last name first
    pub teacher_name: Option<String>,
}

impl From<ClassroomResponse> for ClassroomForm {
    fn from(response: ClassroomResponse) -> Self {
        let label = response.label();
        let teacher_name = response.teacher.as_ref().map(PersonRef::full_name);

        Self {
            id: response.id,
            name: response.name,
            grade: response.grade,
            letter: response.letter,
            school_id: response.school.map(|s| s.id),
            shift_id: response.shift.map(|s| s.id),
            language_id: response.language.map(|l| l.id),
            teacher_id: response.teacher.map(|t| t.id),
            label,
            teacher_name,
        }
    }
}

impl ClassroomResponse {
    /// `"9A"` style label, falling back to the stored name.
    pub fn label(&self) -> String {
        match (self.grade, self.letter.as_deref()) {
            (Some(grade), Some(letter)) => format!("{grade}{letter}"),
            _ => self.name.clone(),
        }
    }
}
