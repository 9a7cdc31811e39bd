//! ACL subject constants for the eMekdep dashboard.
//!
//! Subjects name the protected pages and resources of the dashboard. Using
//! these constants instead of string literals keeps navigation, page guards
//! and role denylists consistent.
//!
//! # Example
//!
//! ```ignore
//! use emekdep_core::subjects;
//!
//! if ability.can(Action::Read, subjects::ADMIN_SCHOOLS) {
//!     // Show schools page
//! }
//! ```

// =============================================================================
// Always granted
// =============================================================================

/// Home dashboard, readable by every role
pub const DASHBOARD: &str = "dashboard";
/// School rating page, readable by every role
pub const RATING: &str = "rating";
/// Own profile, writable by every role
pub const PROFILE: &str = "profile";

// =============================================================================
// Administration
// =============================================================================

/// Schools administration
pub const ADMIN_SCHOOLS: &str = "admin_schools";
/// Classrooms administration
pub const ADMIN_CLASSROOMS: &str = "admin_classrooms";
/// Organizations administration
pub const ADMIN_ORGANIZATIONS: &str = "admin_organizations";

// =============================================================================
// School operations
// =============================================================================

/// Users (teachers, parents, students, staff)
pub const USERS: &str = "users";
/// Academic subjects
pub const SUBJECTS: &str = "subjects";
/// Weekly lesson shifts
pub const SHIFTS: &str = "shifts";
/// Classroom timetables
pub const TIMETABLE: &str = "timetable";
/// Payments
pub const PAYMENTS: &str = "payments";
/// Report forms
pub const REPORTS: &str = "reports";
/// Notifications
pub const NOTIFICATIONS: &str = "notifications";
/// Application settings
pub const SETTINGS: &str = "settings";
