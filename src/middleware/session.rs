use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use emekdep_core::AppError;
use emekdep_core::acl::Action;
use uuid::Uuid;

use crate::modules::session::model::Session;
use crate::state::AppState;

/// Extractor that resolves the bearer session id to the live session.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl CurrentSession {
    pub fn id(&self) -> Uuid {
        self.0.id
    }

    pub fn can(&self, action: Action, subject: &str) -> bool {
        self.0.ability.can(action, subject)
    }

    /// Fails with `403` unless the session may perform `action` on `subject`.
    pub fn require(&self, action: Action, subject: &str) -> Result<(), AppError> {
        if self.can(action, subject) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Access denied. Missing {} permission on {}",
                action, subject
            )))
        }
    }
}

/// Parses `Authorization: Bearer <uuid>`.
pub fn bearer_session_id(parts: &Parts) -> Result<Uuid, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))?;

    Uuid::parse_str(token.trim()).map_err(|_| AppError::unauthorized("Invalid session id"))
}

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = bearer_session_id(parts)?;

        let session = state
            .sessions
            .get(id)
            .await
            .ok_or_else(|| AppError::unauthorized("Session expired or not found"))?;

        Ok(CurrentSession(session))
    }
}
