//! User responses and forms.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::refs::{Id, NamedRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleRef {
    pub id: Id,
    /// Role slug, e.g. `"teacher"`
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub roles: Vec<RoleRef>,
    #[serde(default)]
    pub school: Option<NamedRef>,
    #[serde(default)]
    pub classroom: Option<NamedRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserForm {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    /// Read-only, last name first
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`, empty when unknown
    pub birth_date: String,
    pub roles: Vec<String>,
    pub school_id: Option<Id>,
    pub classroom_id: Option<Id>,
}

impl UserResponse {
    pub fn full_name(&self) -> String {
        [
            Some(self.last_name.as_str()),
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl From<UserResponse> for UserForm {
    fn from(response: UserResponse) -> Self {
        let full_name = response.full_name();

        Self {
            id: response.id,
            first_name: response.first_name,
            last_name: response.last_name,
            middle_name: response.middle_name.unwrap_or_default(),
            full_name,
            email: response.email.unwrap_or_default(),
            phone: response.phone.unwrap_or_default(),
            birth_date: response
                .birth_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            roles: response.roles.into_iter().map(|r| r.name).collect(),
            school_id: response.school.map(|s| s.id),
            classroom_id: response.classroom.map(|c| c.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_form_from_nested_response() {
        let json = r#"{
            "id": 31,
            "first_name": "Timur",
            "last_name": "Akhmetov",
            "email": "timur@example.com",
            "birth_date": "2009-03-07",
            "roles": [{"id": 7, "name": "student"}],
            "school": {"id": 3, "name": "School No. 12"},
            "classroom": {"id": 14, "name": "9A"}
        }"#;
        let response: UserResponse = serde_json::from_str(json).unwrap();
        let form = UserForm::from(response);
        assert_eq!(form.full_name, "Akhmetov Timur");
        assert_eq!(form.birth_date, "2009-03-07");
        assert_eq!(form.roles, vec!["student"]);
        assert_eq!(form.school_id, Some(3));
        assert_eq!(form.classroom_id, Some(14));
        assert_eq!(form.phone, "");
    }

    #[test]
    fn test_minimal_user() {
        let response: UserResponse =
            serde_json::from_str(r#"{"id": 1, "first_name": "A", "last_name": "B"}"#).unwrap();
        let form = UserForm::from(response);
        assert!(form.roles.is_empty());
        assert_eq!(form.birth_date, "");
        assert_eq!(form.school_id, None);
    }
}
