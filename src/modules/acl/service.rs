use emekdep_core::acl::{Ability, Role, build_ability, denied_subjects};
use tracing::{debug, instrument};

use crate::modules::acl::model::{AbilityRequestDto, AbilityResponse, CheckAbilityDto, CheckAbilityResponse};

pub struct AclService;

impl AclService {
    #[instrument(skip(dto), fields(role = %dto.role))]
    pub fn resolve(dto: &AbilityRequestDto) -> (Role, Ability) {
        let role = Role::from(dto.role.as_str());
        let ability = build_ability(&role, &dto.readable, &dto.writable);
        debug!(rules = ability.rules().len(), "Ability resolved");
        (role, ability)
    }

    pub fn describe(dto: &AbilityRequestDto) -> AbilityResponse {
        let (role, ability) = Self::resolve(dto);

        AbilityResponse {
            role: role.to_string(),
            readable: ability.readable().into_iter().map(str::to_string).collect(),
            writable: ability.writable().into_iter().map(str::to_string).collect(),
            denied: denied_subjects(&role).iter().map(|s| s.to_string()).collect(),
            rules: ability.rules().to_vec(),
        }
    }

    pub fn check(dto: &CheckAbilityDto) -> CheckAbilityResponse {
        let (_, ability) = Self::resolve(&dto.ability);

        CheckAbilityResponse {
            action: dto.action,
            subject: dto.subject.clone(),
            allowed: ability.can(dto.action, &dto.subject),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emekdep_core::acl::Action;

    fn request(role: &str, readable: &[&str]) -> AbilityRequestDto {
        AbilityRequestDto {
            role: role.to_string(),
            readable: readable.iter().map(|s| s.to_string()).collect(),
            writable: vec![],
        }
    }

    #[test]
    fn test_describe_reports_denied_subjects() {
        let response = AclService::describe(&request("principal", &["admin_schools", "users"]));
        assert_eq!(response.role, "principal");
        assert_eq!(response.denied, vec!["admin_schools"]);
        assert_eq!(response.readable, vec!["dashboard", "rating", "users"]);
        assert_eq!(response.writable, vec!["profile"]);
    }

    #[test]
    fn test_check() {
        let dto = CheckAbilityDto {
            ability: request("teacher", &["admin_classrooms"]),
            action: Action::Read,
            subject: "admin_classrooms".to_string(),
        };
        assert!(!AclService::check(&dto).allowed);
    }
}
