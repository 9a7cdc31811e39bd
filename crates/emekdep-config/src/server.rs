use crate::env_or;

/// Listen address of the HTTP service
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Interface to bind, `SERVER_HOST`
    pub host: String,
    /// Port to bind, `SERVER_PORT`
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("SERVER_HOST", defaults.host),
            port: env_or("SERVER_PORT", defaults.port),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
