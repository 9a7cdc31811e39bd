//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`session`]: Session extractor resolving the bearer session id
//!
//! # Session Flow
//!
//! 1. Client logs in through `POST /api/session` and receives a session id
//! 2. Client sends `Authorization: Bearer <session id>` on later requests
//! 3. `CurrentSession` looks the id up in the session store
//! 4. Handler executes with the session's user, role and ability
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::session::CurrentSession;
//!
//! async fn navigation(CurrentSession(session): CurrentSession) -> impl IntoResponse {
//!     Json(navigation_for(&session.ability))
//! }
//! ```

pub mod session;
