use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifiers are the API's integer primary keys.
pub type Id = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NamedRef {
    pub id: Id,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PersonRef {
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
}

impl PersonRef {
    pub fn full_name(&self) -> String {
        match self.middle_name.as_deref().filter(|m| !m.is_empty()) {
            Some(middle) => format!("{} {} {}", self.last_name, self.first_name, middle),
            None => format!("{} {}", self.last_name, self.first_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_orders_last_name_first() {
        let person = PersonRef {
            id: 1,
            first_name: "Aruzhan".to_string(),
            last_name: "Sadykova".to_string(),
            middle_name: None,
        };
        assert_eq!(person.full_name(), "Sadykova Aruzhan");

        let person = PersonRef {
            middle_name: Some("Nurlanovna".to_string()),
            ..person
        };
        assert_eq!(person.full_name(), "Sadykova Aruzhan Nurlanovna");
    }
}
