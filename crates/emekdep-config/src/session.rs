use std::time::Duration;

use crate::env_or;

/// Lifetime of dashboard sessions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Seconds a session stays valid after its last change, `SESSION_TTL_SECS`
    pub ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { ttl_secs: 8 * 60 * 60 }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl_secs: env_or("SESSION_TTL_SECS", defaults.ttl_secs),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}
