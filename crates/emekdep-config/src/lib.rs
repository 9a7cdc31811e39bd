//! # eMekdep Config
//!
//! Configuration types for the eMekdep service and CLI.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listen address of the HTTP service
//! - [`session`]: Session lifetime
//! - [`shift`]: Default shift parameters used when a request omits them
//!
//! # Example
//!
//! ```ignore
//! use emekdep_config::{CorsConfig, ServerConfig, SessionConfig, ShiftDefaults};
//!
//! // Load all configs from environment
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let session_config = SessionConfig::from_env();
//! let shift_defaults = ShiftDefaults::from_env();
//! ```

pub mod cors;
pub mod server;
pub mod session;
pub mod shift;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;
pub use shift::ShiftDefaults;

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
