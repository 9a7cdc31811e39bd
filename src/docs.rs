use emekdep_core::acl::{Action, Rule};
use emekdep_core::breadcrumbs::Crumb;
use emekdep_core::navigation::NavItem;
use emekdep_models::classrooms::{ClassroomForm, ClassroomResponse};
use emekdep_models::refs::{NamedRef, PersonRef};
use emekdep_models::reports::{
    ReportForm, ReportFormResponse, ReportPeriod, ReportQuestion, ReportSection,
};
use emekdep_models::timetables::{LessonResponse, TimetableCell, TimetableForm, TimetableResponse};
use emekdep_models::users::{RoleRef, UserForm, UserResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::acl::model::{
    AbilityRequestDto, AbilityResponse, CheckAbilityDto, CheckAbilityResponse,
};
use crate::modules::breadcrumbs::model::BreadcrumbsResponse;
use crate::modules::forms::model::{ReportFormView, TimetableFormResponse};
use crate::modules::navigation::model::PageGuardResponse;
use crate::modules::session::model::{LoginDto, SessionResponse, SessionUser, SwitchRoleDto};
use crate::modules::shifts::model::{GenerateShiftDto, ShiftResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::acl::controller::resolve_ability,
        crate::modules::acl::controller::check_ability,
        crate::modules::breadcrumbs::controller::get_breadcrumbs,
        crate::modules::forms::controller::classroom_form,
        crate::modules::forms::controller::timetable_form,
        crate::modules::forms::controller::user_form,
        crate::modules::forms::controller::report_form,
        crate::modules::navigation::controller::get_navigation,
        crate::modules::navigation::controller::guard_page,
        crate::modules::session::controller::login,
        crate::modules::session::controller::get_session,
        crate::modules::session::controller::switch_role,
        crate::modules::session::controller::logout,
        crate::modules::shifts::controller::generate_shift,
    ),
    components(
        schemas(
            Action,
            Rule,
            AbilityRequestDto,
            AbilityResponse,
            CheckAbilityDto,
            CheckAbilityResponse,
            Crumb,
            BreadcrumbsResponse,
            NavItem,
            PageGuardResponse,
            LoginDto,
            SwitchRoleDto,
            SessionUser,
            SessionResponse,
            GenerateShiftDto,
            ShiftResponse,
            NamedRef,
            PersonRef,
            ClassroomResponse,
            ClassroomForm,
            LessonResponse,
            TimetableResponse,
            TimetableCell,
            TimetableForm,
            TimetableFormResponse,
            RoleRef,
            UserResponse,
            UserForm,
            ReportPeriod,
            ReportQuestion,
            ReportSection,
            ReportFormResponse,
            ReportForm,
            ReportFormView,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "ACL", description = "Ability resolution"),
        (name = "Breadcrumbs", description = "Breadcrumb trails and page titles"),
        (name = "Forms", description = "Form transforms of API responses"),
        (name = "Navigation", description = "Permission-gated navigation and page guards"),
        (name = "Session", description = "Login, role switch and logout"),
        (name = "Shifts", description = "Weekly lesson slot generation")
    ),
    info(
        title = "eMekdep Dashboard API",
        version = "0.1.0",
        description = "Access rules, navigation, shift grids and form transforms for the eMekdep school management dashboard.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("UUID")
                        .build(),
                ),
            )
        }
    }
}
