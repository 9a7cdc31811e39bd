//! # eMekdep Models
//!
//! API response models and the form shapes the dashboard edits.
//!
//! The remote API returns entities with their relations nested. Forms work on
//! flat identifiers instead, so every module here pairs a `*Response` type
//! with a `*Form` type and a conversion between them.
//!
//! # Modules
//!
//! - [`classrooms`]: Classroom responses and forms
//! - [`refs`]: Nested references shared by every response
//! - [`reports`]: Report form responses and answer maps
//! - [`timetables`]: Timetable responses, forms and lesson grids
//! - [`users`]: User responses and forms
//!
//! # Example
//!
//! ```ignore
//! use emekdep_models::classrooms::{ClassroomForm, ClassroomResponse};
//!
//! let response: ClassroomResponse = serde_json::from_str(body)?;
//! let form = ClassroomForm::from(response);
//! ```

pub mod classrooms;
pub mod refs;
pub mod reports;
pub mod timetables;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use classrooms::{ClassroomForm, ClassroomResponse};
pub use refs::{NamedRef, PersonRef};
pub use reports::{ReportForm, ReportFormResponse};
pub use timetables::{TimetableCell, TimetableForm, TimetableResponse, timetable_grid};
pub use users::{UserForm, UserResponse};
