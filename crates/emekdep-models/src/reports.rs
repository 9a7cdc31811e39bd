//! Report form responses.
//!
//! Report forms are questionnaires schools fill in each period. The API nests
//! answers inside questions inside sections; the editor keeps a flat map of
//! answers keyed by question id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::refs::{Id, NamedRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportPeriod {
    pub year: i32,
    /// 1..=4
    pub quarter: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportQuestion {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportSection {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<ReportQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportFormResponse {
    pub id: Id,
    #[serde(default)]
    pub school: Option<NamedRef>,
    pub period: ReportPeriod,
    #[serde(default)]
    pub sections: Vec<ReportSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReportForm {
    pub id: Id,
    pub school_id: Option<Id>,
    pub year: i32,
    pub quarter: u8,
    /// Unanswered questions map to an empty string.
    pub answers: BTreeMap<Id, String>,
}

impl ReportFormResponse {
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }
}

impl ReportForm {
    pub fn answered_count(&self) -> usize {
        self.answers.values().filter(|a| !a.trim().is_empty()).count()
    }
}

impl From<ReportFormResponse> for ReportForm {
    fn from(response: ReportFormResponse) -> Self {
        let answers = response
            .sections
            .into_iter()
            .flat_map(|section| section.questions)
            .map(|question| (question.id, question.answer.unwrap_or_default()))
            .collect();

        Self {
            id: response.id,
            school_id: response.school.map(|s| s.id),
            year: response.period.year,
            quarter: response.period.quarter,
            answers,
        }
    }
}
