use chrono::{DateTime, Utc};
use emekdep_core::acl::{Ability, Role};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// The signed-in user as reported by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SessionUser {
    pub id: Option<i64>,
    pub full_name: String,
    pub school_id: Option<i64>,
}

/// Application context of one login. Rebuilt on role switch, dropped on logout.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub user: SessionUser,
    pub role: Role,
    pub ability: Ability,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginDto {
    pub user_id: Option<i64>,
    #[validate(length(min = 1, max = 200, message = "Full name must be between 1 and 200 characters"))]
    pub full_name: String,
    pub school_id: Option<i64>,
    #[validate(length(min = 1, max = 50, message = "Role must be between 1 and 50 characters"))]
    pub role: String,
    /// Subjects the API lets this role read
    #[serde(default)]
    pub readable: Vec<String>,
    /// Subjects the API lets this role write
    #[serde(default)]
    pub writable: Vec<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SwitchRoleDto {
    #[validate(length(min = 1, max = 50, message = "Role must be between 1 and 50 characters"))]
    pub role: String,
    #[serde(default)]
    pub readable: Vec<String>,
    #[serde(default)]
    pub writable: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub id: Uuid,
    pub user: SessionUser,
    pub role: String,
    /// Resolved readable subjects, including the always-granted ones
    pub readable: Vec<String>,
    /// Resolved writable subjects, including the always-granted ones
    pub writable: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            user: session.user.clone(),
            role: session.role.to_string(),
            readable: session.ability.readable().into_iter().map(str::to_string).collect(),
            writable: session.ability.writable().into_iter().map(str::to_string).collect(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}
