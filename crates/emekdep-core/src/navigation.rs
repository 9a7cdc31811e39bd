//! Permission-gated navigation.
//!
//! The sidebar is a static tree of [`NavEntry`] values. Each entry names the
//! ACL subject and action that make it visible. Groups carry no subject of
//! their own and are shown while at least one child is visible.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::acl::{Ability, Action};
use crate::subjects;

#[derive(Debug, Clone, Copy)]
pub struct NavEntry {
    pub title: &'static str,
    pub path: Option<&'static str>,
    pub icon: &'static str,
    pub subject: Option<&'static str>,
    pub action: Action,
    pub children: &'static [NavEntry],
}

const fn page(title: &'static str, path: &'static str, icon: &'static str, subject: &'static str) -> NavEntry {
    NavEntry {
        title,
        path: Some(path),
        icon,
        subject: Some(subject),
        action: Action::Read,
        children: &[],
    }
}

const fn group(title: &'static str, icon: &'static str, children: &'static [NavEntry]) -> NavEntry {
    NavEntry {
        title,
        path: None,
        icon,
        subject: None,
        action: Action::Read,
        children,
    }
}

pub const NAVIGATION: &[NavEntry] = &[
    page("Dashboard", "/", "home", subjects::DASHBOARD),
    group(
        "Administration",
        "shield",
        &[
            page("Organizations", "/admin/organizations", "building", subjects::ADMIN_ORGANIZATIONS),
            page("Schools", "/admin/schools", "school", subjects::ADMIN_SCHOOLS),
            page("Classrooms", "/admin/classrooms", "door", subjects::ADMIN_CLASSROOMS),
        ],
    ),
    group(
        "Education",
        "book",
        &[
            page("Users", "/users", "users", subjects::USERS),
            page("Subjects", "/subjects", "book-open", subjects::SUBJECTS),
            page("Shifts", "/shifts", "clock", subjects::SHIFTS),
            page("Timetable", "/timetable", "calendar", subjects::TIMETABLE),
        ],
    ),
    page("Payments", "/payments", "wallet", subjects::PAYMENTS),
    page("Reports", "/reports", "file-text", subjects::REPORTS),
    page("Notifications", "/notifications", "bell", subjects::NOTIFICATIONS),
    page("Rating", "/rating", "star", subjects::RATING),
    page("Settings", "/settings", "settings", subjects::SETTINGS),
    NavEntry {
        action: Action::Write,
        ..page("Profile", "/profile", "user", subjects::PROFILE)
    },
];

/// A visible navigation item, as sent to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavItem {
    pub title: String,
    pub path: Option<String>,
    pub icon: String,
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schema(no_recursion)]
    pub children: Vec<NavItem>,
}

impl NavEntry {
    fn is_allowed(&self, ability: &Ability) -> bool {
        self.subject
            .is_none_or(|subject| ability.can(self.action, subject))
    }

    fn visible(&self, ability: &Ability) -> Option<NavItem> {
        if !self.is_allowed(ability) {
            return None;
        }

        let children: Vec<NavItem> = self
            .children
            .iter()
            .filter_map(|child| child.visible(ability))
            .collect();

        if !self.children.is_empty() && children.is_empty() {
            return None;
        }

        Some(NavItem {
            title: self.title.to_string(),
            path: self.path.map(str::to_string),
            icon: self.icon.to_string(),
            subject: self.subject.map(str::to_string),
            children,
        })
    }
}

/// The navigation tree filtered down to what `ability` may open.
pub fn navigation_for(ability: &Ability) -> Vec<NavItem> {
    NAVIGATION
        .iter()
        .filter_map(|entry| entry.visible(ability))
        .collect()
}

fn flatten(entries: &'static [NavEntry]) -> Vec<&'static NavEntry> {
    entries
        .iter()
        .flat_map(|entry| std::iter::once(entry).chain(flatten(entry.children)))
        .collect()
}

fn owns(entry_path: &str, path: &str) -> bool {
    if entry_path == "/" {
        return path == "/";
    }
    path == entry_path
        || path
            .strip_prefix(entry_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Page guard: a path is viewable when the entry owning its longest prefix
/// is allowed. Paths no entry owns are public.
pub fn can_view_path(ability: &Ability, path: &str) -> bool {
    let path = normalize(path);

    flatten(NAVIGATION)
        .into_iter()
        .filter_map(|entry| entry.path.map(|entry_path| (entry_path, entry)))
        .filter(|(entry_path, _)| owns(entry_path, &path))
        .max_by_key(|(entry_path, _)| entry_path.len())
        .is_none_or(|(_, entry)| entry.is_allowed(ability))
}

pub(crate) fn normalize(path: &str) -> String {
    let trimmed = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acl::{Role, build_ability};

    fn titles(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|item| item.title.as_str()).collect()
    }

    #[test]
    fn test_minimal_ability_sees_always_granted_items() {
        let ability = build_ability(&Role::Student, Vec::<String>::new(), Vec::<String>::new());
        let nav = navigation_for(&ability);
        assert_eq!(titles(&nav), vec!["Dashboard", "Rating", "Profile"]);
    }

    #[test]
    fn test_group_shown_with_visible_children_only() {
        let ability = build_ability(&Role::Admin, ["admin_schools"], Vec::<String>::new());
        let nav = navigation_for(&ability);
        let admin = nav.iter().find(|item| item.title == "Administration").unwrap();
        assert_eq!(titles(&admin.children), vec!["Schools"]);
        assert!(nav.iter().all(|item| item.title != "Education"));
    }

    #[test]
    fn test_teacher_navigation_hides_denied_subjects() {
        let ability = build_ability(
            &Role::Teacher,
            ["admin_schools", "admin_classrooms", "timetable"],
            Vec::<String>::new(),
        );
        let nav = navigation_for(&ability);
        assert!(nav.iter().all(|item| item.title != "Administration"));
        let education = nav.iter().find(|item| item.title == "Education").unwrap();
        assert_eq!(titles(&education.children), vec!["Timetable"]);
    }

    #[test]
    fn test_no_item_without_readable_subject() {
        let ability = build_ability(&Role::Operator, ["users", "payments"], ["users"]);
        fn check(items: &[NavItem], ability: &Ability) {
            for item in items {
                if let Some(subject) = &item.subject
                    && subject != subjects::PROFILE
                {
                    assert!(ability.can(Action::Read, subject), "{subject}");
                }
                check(&item.children, ability);
            }
        }
        check(&navigation_for(&ability), &ability);
    }

    #[test]
    fn test_page_guard() {
        let ability = build_ability(&Role::Principal, ["admin_schools", "users"], Vec::<String>::new());
        assert!(can_view_path(&ability, "/"));
        assert!(can_view_path(&ability, "/users/42/edit"));
        assert!(!can_view_path(&ability, "/admin/schools"));
        assert!(!can_view_path(&ability, "/admin/schools/7/"));
        assert!(!can_view_path(&ability, "/payments"));
        assert!(can_view_path(&ability, "/profile"));
        assert!(can_view_path(&ability, "/login"));
    }

    #[test]
    fn test_prefix_needs_segment_boundary() {
        let ability = build_ability(&Role::Admin, ["users"], Vec::<String>::new());
        assert!(can_view_path(&ability, "/users"));
        // "/usersettings" is not under "/users"
        assert!(can_view_path(&ability, "/usersettings"));
        assert!(!can_view_path(&ability, "/settings"));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("/users/"), "/users");
        assert_eq!(normalize("users//42?tab=info"), "/users/42");
    }
}
