//! Breadcrumb trails and page titles from static path tables.
//!
//! Patterns are `/`-separated; a segment starting with `:` matches any single
//! segment. When several patterns match, the one with the most literal
//! segments wins, so `/users/new` beats `/users/:id`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::navigation::normalize;

pub const APP_NAME: &str = "eMekdep";

pub const PAGE_TITLES: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/admin/organizations", "Organizations"),
    ("/admin/organizations/:id", "Organization"),
    ("/admin/schools", "Schools"),
    ("/admin/schools/new", "New school"),
    ("/admin/schools/:id", "School"),
    ("/admin/schools/:id/edit", "Edit school"),
    ("/admin/classrooms", "Classrooms"),
    ("/admin/classrooms/new", "New classroom"),
    ("/admin/classrooms/:id", "Classroom"),
    ("/admin/classrooms/:id/edit", "Edit classroom"),
    ("/users", "Users"),
    ("/users/new", "New user"),
    ("/users/:id", "User"),
    ("/users/:id/edit", "Edit user"),
    ("/subjects", "Subjects"),
    ("/shifts", "Shifts"),
    ("/shifts/new", "New shift"),
    ("/shifts/:id", "Shift"),
    ("/timetable", "Timetable"),
    ("/timetable/:classroom", "Classroom timetable"),
    ("/payments", "Payments"),
    ("/reports", "Reports"),
    ("/reports/:id", "Report form"),
    ("/notifications", "Notifications"),
    ("/rating", "Rating"),
    ("/settings", "Settings"),
    ("/profile", "Profile"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Crumb {
    pub title: String,
    pub path: String,
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Number of literal segments when `pattern` matches `path`.
fn match_score(pattern: &str, path: &[&str]) -> Option<usize> {
    let pattern = segments(pattern);
    if pattern.len() != path.len() {
        return None;
    }

    let mut literals = 0;
    for (expected, actual) in pattern.iter().zip(path) {
        if expected.starts_with(':') {
            continue;
        }
        if expected != actual {
            return None;
        }
        literals += 1;
    }
    Some(literals)
}

fn title_for(path: &[&str]) -> Option<&'static str> {
    PAGE_TITLES
        .iter()
        .filter_map(|(pattern, title)| match_score(pattern, path).map(|score| (score, *title)))
        .max_by_key(|(score, _)| *score)
        .map(|(_, title)| title)
}

/// One crumb per titled prefix of `path`, root first.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let normalized = normalize(path);
    let parts = segments(&normalized);

    (0..=parts.len())
        .filter_map(|depth| {
            let prefix = &parts[..depth];
            title_for(prefix).map(|title| Crumb {
                title: title.to_string(),
                path: format!("/{}", prefix.join("/")),
            })
        })
        .collect()
}

/// `"<title> | eMekdep"` for known paths, the bare application name otherwise.
pub fn page_title(path: &str) -> String {
    let normalized = normalize(path);
    match title_for(&segments(&normalized)) {
        Some(title) => format!("{title} | {APP_NAME}"),
        None => APP_NAME.to_string(),
    }
}
