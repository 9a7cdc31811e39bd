use emekdep_core::acl::{Action, Rule};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AbilityRequestDto {
    #[validate(length(min = 1, max = 50, message = "Role must be between 1 and 50 characters"))]
    pub role: String,
    #[serde(default)]
    pub readable: Vec<String>,
    #[serde(default)]
    pub writable: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AbilityResponse {
    pub role: String,
    pub readable: Vec<String>,
    pub writable: Vec<String>,
    /// Subjects removed from `readable` for this role
    pub denied: Vec<String>,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CheckAbilityDto {
    #[validate(nested)]
    #[serde(flatten)]
    pub ability: AbilityRequestDto,
    pub action: Action,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckAbilityResponse {
    pub action: Action,
    pub subject: String,
    pub allowed: bool,
}
