use leptos::prelude::*;

use garage_client::api::auth;
use garage_client::{Api, ApiError, SessionStore};
use garage_types::{
    CustomerCredentials, Session, StaffCredentials, UserInfo, UserRole, WorkerCredentials,
};

/// Reactive mirror of the persisted session. Signal and storage are kept
/// in step: every mutation writes through to local storage.
#[derive(Clone, Copy)]
pub struct AuthStore {
    session: RwSignal<Session>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::default()),
        }
    }

    fn persistent() -> SessionStore {
        SessionStore::browser()
    }

    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.with(|s| s.is_logged_in())
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.with(|s| s.role)
    }

    pub fn user_info(&self) -> Option<UserInfo> {
        self.session.with(|s| s.user_info.clone())
    }

    /// Restores the session from storage at startup. Only a complete
    /// triple is restored; anything partial stays logged out.
    pub fn check_auth(&self) {
        let stored = Self::persistent().load();
        if stored.token.is_some() && stored.user_info.is_some() && stored.role.is_some() {
            self.session.set(stored);
        }
    }

    pub fn set_auth(&self, token: &str, info: UserInfo, role: UserRole) {
        Self::persistent().persist(token, &info, role);
        self.session.set(Session {
            token: Some(token.to_string()),
            user_info: Some(info),
            role: Some(role),
        });
    }

    pub fn logout(&self) {
        Self::persistent().clear();
        self.session.set(Session::default());
    }

    pub fn update_user_info(&self, info: UserInfo) {
        Self::persistent().update_user_info(&info);
        self.session.update(|s| s.user_info = Some(info));
    }

    pub async fn login_user(
        &self,
        api: &Api,
        credentials: &CustomerCredentials,
    ) -> Result<(), ApiError> {
        let response = auth::login_user(api, credentials).await?;
        let info = response
            .user_info
            .map(UserInfo::Customer)
            .ok_or(ApiError::Decode)?;
        self.set_auth(&response.access_token, info, UserRole::User);
        Ok(())
    }

    pub async fn login_admin(
        &self,
        api: &Api,
        credentials: &StaffCredentials,
    ) -> Result<(), ApiError> {
        let response = auth::login_admin(api, credentials).await?;
        let info = response
            .admin_info
            .map(UserInfo::Admin)
            .ok_or(ApiError::Decode)?;
        self.set_auth(&response.access_token, info, UserRole::Admin);
        Ok(())
    }

    pub async fn login_worker(
        &self,
        api: &Api,
        credentials: &WorkerCredentials,
    ) -> Result<(), ApiError> {
        let response = auth::login_worker(api, credentials).await?;
        let info = response
            .worker_info
            .map(UserInfo::Worker)
            .ok_or(ApiError::Decode)?;
        self.set_auth(&response.access_token, info, UserRole::Worker);
        Ok(())
    }
}
