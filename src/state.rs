use emekdep_config::{CorsConfig, SessionConfig, ShiftDefaults};

use crate::modules::session::store::SessionStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub sessions: SessionStore,
    pub cors_config: CorsConfig,
    pub shift_defaults: ShiftDefaults,
}

pub fn init_app_state() -> AppState {
    AppState {
        sessions: SessionStore::new(SessionConfig::from_env().ttl()),
        cors_config: CorsConfig::from_env(),
        shift_defaults: ShiftDefaults::from_env(),
    }
}
