pub mod acl;
pub mod breadcrumbs;
pub mod forms;
pub mod navigation;
pub mod session;
pub mod shifts;
