//! Role based ability resolution.
//!
//! An [`Ability`] is built once per session from the user's role and the two
//! subject lists returned by the API at login (readable and writable). Every
//! role receives write on [`PROFILE`] and read on [`DASHBOARD`] and
//! [`RATING`]. Some roles never see certain administrative subjects even when
//! the API lists them; those exclusions live in [`ROLE_DENYLIST`].
//!
//! # Example
//!
//! ```ignore
//! use emekdep_core::acl::{Action, Role, build_ability};
//!
//! let ability = build_ability(&Role::Principal, ["admin_schools", "users"], ["users"]);
//!
//! assert!(ability.can(Action::Read, "users"));
//! assert!(!ability.can(Action::Read, "admin_schools"));
//! assert!(ability.can(Action::Write, "profile"));
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::subjects::{ADMIN_CLASSROOMS, ADMIN_SCHOOLS, DASHBOARD, PROFILE, RATING};

/// What a rule allows on its subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Write,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Write => "write",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Action::Read),
            "write" => Ok(Action::Write),
            other => Err(format!("Unknown action: {other}")),
        }
    }
}

/// Dashboard roles. Roles the dashboard does not know about are kept
/// verbatim in [`Role::Other`] and resolve without exclusions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Organization,
    Principal,
    Operator,
    Teacher,
    Parent,
    Student,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Organization => "organization",
            Role::Principal => "principal",
            Role::Operator => "operator",
            Role::Teacher => "teacher",
            Role::Parent => "parent",
            Role::Student => "student",
            Role::Other(name) => name,
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "admin" => Role::Admin,
            "organization" => Role::Organization,
            "principal" => Role::Principal,
            "operator" => Role::Operator,
            "teacher" => Role::Teacher,
            "parent" => Role::Parent,
            "student" => Role::Student,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Readable subjects each role is denied regardless of what the API grants.
pub const ROLE_DENYLIST: &[(&str, &[&str])] = &[
    ("principal", &[ADMIN_SCHOOLS]),
    ("teacher", &[ADMIN_SCHOOLS, ADMIN_CLASSROOMS]),
];

/// Subjects removed from the readable set for `role`.
pub fn denied_subjects(role: &Role) -> &'static [&'static str] {
    ROLE_DENYLIST
        .iter()
        .find(|(name, _)| *name == role.as_str())
        .map(|(_, denied)| *denied)
        .unwrap_or(&[])
}

/// A single grant: `action` on every subject in `subjects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Rule {
    pub action: Action,
    pub subjects: BTreeSet<String>,
}

/// The resolved capabilities of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    rules: Vec<Rule>,
}

impl Ability {
    pub fn builder() -> AbilityBuilder {
        AbilityBuilder::default()
    }

    /// Membership test against the accumulated rules. Unknown subjects are denied.
    pub fn can(&self, action: Action, subject: &str) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.action == action && rule.subjects.contains(subject))
    }

    pub fn cannot(&self, action: Action, subject: &str) -> bool {
        !self.can(action, subject)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Every subject granted for `action`, across all rules.
    pub fn subjects(&self, action: Action) -> BTreeSet<&str> {
        self.rules
            .iter()
            .filter(|rule| rule.action == action)
            .flat_map(|rule| rule.subjects.iter().map(String::as_str))
            .collect()
    }

    pub fn readable(&self) -> BTreeSet<&str> {
        self.subjects(Action::Read)
    }

    pub fn writable(&self) -> BTreeSet<&str> {
        self.subjects(Action::Write)
    }
}

#[derive(Debug, Default)]
pub struct AbilityBuilder {
    rules: Vec<Rule>,
}

impl AbilityBuilder {
    pub fn can<I, S>(mut self, action: Action, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.push(Rule {
            action,
            subjects: subjects.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn build(self) -> Ability {
        Ability { rules: self.rules }
    }
}

/// Builds the ability of a session from the API's permission lists.
pub fn build_ability<R, W, S, T>(role: &Role, readable: R, writable: W) -> Ability
where
    R: IntoIterator<Item = S>,
    W: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let denied = denied_subjects(role);

    let readable: Vec<String> = readable
        .into_iter()
        .map(|subject| subject.as_ref().to_string())
        .filter(|subject| !denied.contains(&subject.as_str()))
        .collect();
    let writable: Vec<String> = writable
        .into_iter()
        .map(|subject| subject.as_ref().to_string())
        .collect();

    Ability::builder()
        .can(Action::Write, [PROFILE])
        .can(Action::Read, [DASHBOARD, RATING])
        .can(Action::Read, readable)
        .can(Action::Write, writable)
        .build()
}
