use chrono::Utc;
use emekdep_core::AppError;
use emekdep_core::acl::{Role, build_ability};
use tracing::{info, instrument};
use uuid::Uuid;

use super::model::{LoginDto, Session, SessionUser, SwitchRoleDto};
use super::store::SessionStore;

pub struct SessionService;

impl SessionService {
    #[instrument(skip(store, dto), fields(role = %dto.role))]
    pub async fn login(store: &SessionStore, dto: LoginDto) -> Session {
        let role = Role::from(dto.role);
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4(),
            user: SessionUser {
                id: dto.user_id,
                full_name: dto.full_name,
                school_id: dto.school_id,
            },
            ability: build_ability(&role, &dto.readable, &dto.writable),
            role,
            created_at: now,
            updated_at: now,
        };

        store.insert(session.clone()).await;
        info!(session_id = %session.id, "Session created");

        session
    }

    #[instrument(skip(store, dto), fields(role = %dto.role))]
    pub async fn switch_role(
        store: &SessionStore,
        id: Uuid,
        dto: SwitchRoleDto,
    ) -> Result<Session, AppError> {
        let role = Role::from(dto.role);
        let ability = build_ability(&role, &dto.readable, &dto.writable);

        let session = store
            .update(id, |session| {
                session.role = role;
                session.ability = ability;
                session.updated_at = Utc::now();
            })
            .await
            .ok_or_else(|| AppError::unauthorized("Session expired or not found"))?;

        info!(session_id = %session.id, "Session role switched");
        Ok(session)
    }

    #[instrument(skip(store))]
    pub async fn logout(store: &SessionStore, id: Uuid) -> Result<(), AppError> {
        store
            .remove(id)
            .await
            .ok_or_else(|| AppError::unauthorized("Session expired or not found"))?;

        info!(session_id = %id, "Session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use emekdep_core::acl::Action;
    use std::time::Duration;

    fn login_dto(role: &str, readable: &[&str]) -> LoginDto {
        LoginDto {
            user_id: Some(12),
            full_name: "Saule Bekova".to_string(),
            school_id: Some(3),
            role: role.to_string(),
            readable: readable.iter().map(|s| s.to_string()).collect(),
            writable: vec![],
        }
    }

    #[tokio::test]
    async fn test_login_builds_ability() {
        let store = SessionStore::default();
        let session =
            SessionService::login(&store, login_dto("teacher", &["admin_schools", "timetable"])).await;

        assert_eq!(session.role, Role::Teacher);
        assert!(session.ability.can(Action::Read, "timetable"));
        assert!(!session.ability.can(Action::Read, "admin_schools"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_switch_role_rebuilds_ability() {
        let store = SessionStore::default();
        let session = SessionService::login(&store, login_dto("teacher", &["admin_schools"])).await;

        let switched = SessionService::switch_role(
            &store,
            session.id,
            SwitchRoleDto {
                role: "admin".to_string(),
                readable: vec!["admin_schools".to_string()],
                writable: vec!["admin_schools".to_string()],
            },
        )
        .await
        .unwrap();

        assert_eq!(switched.id, session.id);
        assert_eq!(switched.role, Role::Admin);
        assert!(switched.ability.can(Action::Read, "admin_schools"));
        assert!(switched.ability.can(Action::Write, "admin_schools"));
        assert_eq!(switched.user, session.user);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let store = SessionStore::default();
        let session = SessionService::login(&store, login_dto("parent", &[])).await;

        SessionService::logout(&store, session.id).await.unwrap();

        assert!(store.is_empty().await);
        assert!(store.get(session.id).await.is_none());

        let err = SessionService::logout(&store, session.id).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_session_switch_fails() {
        let store = SessionStore::default();
        let result = SessionService::switch_role(
            &store,
            Uuid::new_v4(),
            SwitchRoleDto {
                role: "admin".to_string(),
                readable: vec![],
                writable: vec![],
            },
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_expired_session_is_rejected_and_removed() {
        let store = SessionStore::new(Duration::ZERO);
        let session = SessionService::login(&store, login_dto("teacher", &["timetable"])).await;
        assert_eq!(store.len().await, 1);

        assert!(store.get(session.id).await.is_none());
        assert!(store.is_empty().await);

        let err = SessionService::logout(&store, session.id).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_expired_session_cannot_switch_role() {
        let store = SessionStore::new(Duration::ZERO);
        let session = SessionService::login(&store, login_dto("teacher", &[])).await;

        let dto = SwitchRoleDto {
            role: "admin".to_string(),
            readable: vec![],
            writable: vec![],
        };
        let err = SessionService::switch_role(&store, session.id, dto).await.unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_insert_prunes_expired_sessions() {
        let store = SessionStore::new(Duration::ZERO);
        for _ in 0..100 {
            SessionService::login(&store, login_dto("student", &[])).await;
        }
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_live_session_survives_ttl_check() {
        let store = SessionStore::new(Duration::from_secs(3600));
        let first = SessionService::login(&store, login_dto("parent", &[])).await;
        SessionService::login(&store, login_dto("parent", &[])).await;

        assert_eq!(store.len().await, 2);
        assert_eq!(store.get(first.id).await.map(|s| s.id), Some(first.id));
    }
}
