//! # eMekdep Core
//!
//! Core types, access rules and pure helpers for the eMekdep dashboard.
//!
//! This crate provides the foundational logic used throughout the application:
//!
//! - [`acl`]: Role based ability resolution (`can(action, subject)`)
//! - [`breadcrumbs`]: Static path tables for breadcrumb trails and page titles
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`navigation`]: Permission-gated navigation tree and page guards
//! - [`subjects`]: ACL subject constants
//! - [`shift`]: Weekly lesson slot generation
//!
//! # Example
//!
//! ```ignore
//! use emekdep_core::acl::{Action, Role, build_ability};
//! use emekdep_core::shift::{ShiftConfig, generate_shift, parse_time};
//!
//! let ability = build_ability(&Role::Teacher, ["admin_schools", "timetable"], ["timetable"]);
//! assert!(!ability.can(Action::Read, "admin_schools"));
//!
//! let config = ShiftConfig {
//!     start_time: parse_time("8:00")?,
//!     lesson_duration: 45,
//!     max_lessons_per_day: 6,
//!     short_break_duration: 10,
//!     long_break_duration: 20,
//!     big_break_index: 3,
//! };
//! let grid = generate_shift(&config, &[0, 1, 2, 3, 4]);
//! ```

pub mod acl;
pub mod breadcrumbs;
pub mod errors;
pub mod navigation;
pub mod shift;
pub mod subjects;

// Re-export commonly used types at crate root
pub use acl::{Ability, Action, Role, build_ability};
pub use errors::AppError;
pub use shift::{ShiftConfig, Slot, generate_shift};
