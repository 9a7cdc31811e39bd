//! # eMekdep
//!
//! Backend-for-frontend service of the eMekdep school management dashboard.
//!
//! ## Overview
//!
//! The dashboard serves seven roles (admin, organization, principal,
//! operator, teacher, parent, student). Persistence, grading and payments live
//! in the remote eMekdep REST API; this service owns the rules the dashboard
//! applies on top of that API:
//!
//! - **Abilities**: what a role may read and write, resolved from the API's
//!   permission lists
//! - **Navigation**: the sidebar filtered by the session's ability, plus page guards
//! - **Breadcrumbs**: trails and page titles from static path tables
//! - **Shifts**: weekly lesson slot grids from shift parameters
//! - **Forms**: nested API responses flattened into editable form shapes
//! - **Sessions**: the per-login application context holding user and ability
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Session extractor
//! ├── modules/          # Feature modules
//! │   ├── acl/          # Ability resolution
//! │   ├── breadcrumbs/  # Breadcrumbs and titles
//! │   ├── forms/        # Form transforms
//! │   ├── navigation/   # Navigation tree and page guard
//! │   ├── session/      # Login, role switch, logout
//! │   └── shifts/       # Shift grid generation
//! ├── docs.rs           # OpenAPI documentation
//! ├── router.rs         # Main application router
//! ├── state.rs          # Shared application state
//! └── validation.rs     # Validated JSON extractor
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: Business logic
//! - `model.rs`: Request and response DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Sessions
//!
//! `POST /api/session` creates a session from the role and permission lists
//! the API returned at login and answers with a session id. Send it back as
//! `Authorization: Bearer <session id>` to endpoints that need the current
//! ability. `PUT /api/session/role` rebuilds the ability after a role switch
//! and `DELETE /api/session` logs out.
//!
//! ## Quick Start
//!
//! ```bash
//! SERVER_PORT=3000
//! ALLOWED_ORIGINS=http://localhost:5173
//! LOG_LEVEL=debug
//! cargo run --bin emekdep
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validation;

// Re-export workspace crates for convenience
pub use emekdep_config;
pub use emekdep_core;
pub use emekdep_models;
