use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use emekdep_config::SessionConfig;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::model::Session;

/// Live sessions keyed by id, shared by every request. A session untouched
/// for longer than the TTL counts as absent and is dropped on the next
/// lookup or insert.
#[derive(Clone, Debug)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: TimeDelta,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionConfig::default().ttl())
    }
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::default(),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
        }
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(session.updated_at) >= self.ttl
    }

    pub async fn insert(&self, session: Session) {
        let now = Utc::now();
        let mut sessions = self.inner.write().await;

        let before = sessions.len();
        sessions.retain(|_, existing| !self.is_expired(existing, now));
        let pruned = before - sessions.len();
        if pruned > 0 {
            debug!(pruned, "Expired sessions pruned");
        }

        sessions.insert(session.id, session);
    }

    pub async fn get(&self, id: Uuid) -> Option<Session> {
        let now = Utc::now();
        {
            let sessions = self.inner.read().await;
            match sessions.get(&id) {
                None => return None,
                Some(session) if !self.is_expired(session, now) => return Some(session.clone()),
                Some(_) => {}
            }
        }

        self.inner.write().await.remove(&id);
        debug!(session_id = %id, "Expired session dropped");
        None
    }

    /// Applies `update` to the live session in place and returns the new value.
    pub async fn update<F>(&self, id: Uuid, update: F) -> Option<Session>
    where
        F: FnOnce(&mut Session),
    {
        let now = Utc::now();
        let mut sessions = self.inner.write().await;

        if sessions
            .get(&id)
            .is_some_and(|session| self.is_expired(session, now))
        {
            sessions.remove(&id);
            return None;
        }

        let session = sessions.get_mut(&id)?;
        update(session);
        Some(session.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Option<Session> {
        self.inner.write().await.remove(&id)
    }

    /// Stored entries, including expired ones not yet pruned.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
