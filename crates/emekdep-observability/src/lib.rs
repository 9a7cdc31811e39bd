//! eMekdep Observability Module
//!
//! Provides console logging and HTTP request logging for the eMekdep service
//! and CLI.
//!
//! # Configuration
//!
//! - `LOG_LEVEL`: level for eMekdep crates (default: `info`)
//! - `LOG_FORMAT`: `compact` (default) or `json`
//! - `RUST_LOG`: overrides the whole filter when set
//!
//! # Examples
//!
//! ```ignore
//! use emekdep_observability::init_logging;
//!
//! #[tokio::main]
//! async fn main() {
//!     init_logging();
//!     // ... application code ...
//! }
//! ```

pub mod logging;

pub use logging::{LogFormat, init_logging, logging_middleware};
