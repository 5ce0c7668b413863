// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Session service wiring
//!
//! A [`PortalContext`] owns one credential store, one navigator and one
//! transport, and hands out the guard, client and login service built on
//! them. Nothing in the crate reaches for process-wide state; everything
//! that needs a session gets it from here.

use crate::auth::{Credentials, LoginError, LoginService};
use crate::client::{AuthenticatedClient, HttpTransport, Transport};
use crate::config::PortalConfig;
use crate::error::PortalError;
use crate::guard::{RouteGuard, UnauthorizedHandler};
use crate::navigation::{HistoryNavigator, Navigator};
use crate::session::{CredentialStore, Role, Session, SessionProvider};
use std::sync::Arc;

/// Injected session service for one portal client
#[derive(Clone)]
pub struct PortalContext {
    config: PortalConfig,
    sessions: Arc<dyn SessionProvider>,
    navigator: Arc<dyn Navigator>,
    transport: Arc<dyn Transport>,
    client: AuthenticatedClient,
    login: LoginService,
}

impl PortalContext {
    /// Build a context talking HTTP to `config.api_base_url`
    pub fn open(config: PortalConfig) -> Result<Self, PortalError> {
        config.validate()?;

        let transport: Arc<dyn Transport> = Arc::new(HttpTransport::new(
            &config.api_base_url,
            config.request_timeout,
        )?);
        let sessions: Arc<dyn SessionProvider> = Arc::new(CredentialStore::open(
            config.store_dir.as_deref(),
            |role| config.scope_for(role),
        )?);
        let navigator: Arc<dyn Navigator> = Arc::new(HistoryNavigator::new());

        log::debug!("Portal context ready for {}", config.api_base_url);
        Ok(Self::with_parts(config, sessions, navigator, transport))
    }

    /// Build a context from existing parts
    pub fn with_parts(
        config: PortalConfig,
        sessions: Arc<dyn SessionProvider>,
        navigator: Arc<dyn Navigator>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let handler = UnauthorizedHandler::new(sessions.clone(), navigator.clone());
        let client = AuthenticatedClient::new(transport.clone(), sessions.clone(), handler);
        let login = LoginService::new(transport.clone(), sessions.clone(), navigator.clone());

        Self {
            config,
            sessions,
            navigator,
            transport,
            client,
            login,
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn sessions(&self) -> &Arc<dyn SessionProvider> {
        &self.sessions
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    pub fn client(&self) -> &AuthenticatedClient {
        &self.client
    }

    /// Fresh guard for a protected page of `role`
    pub fn guard(&self, role: Role) -> RouteGuard {
        RouteGuard::new(role, self.sessions.clone(), self.navigator.clone())
    }

    pub fn unauthorized_handler(&self) -> UnauthorizedHandler {
        UnauthorizedHandler::new(self.sessions.clone(), self.navigator.clone())
    }

    pub fn session(&self, role: Role) -> Option<Session> {
        self.sessions.load(role)
    }

    pub async fn login(&self, role: Role, credentials: &Credentials) -> Result<Session, LoginError> {
        self.login.login(role, credentials).await
    }

    pub fn logout(&self, role: Role) {
        self.login.logout(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ScriptedTransport, StatusCode};
    use crate::session::StorageScope;
    use serde_json::json;

    fn scripted_context() -> (PortalContext, Arc<ScriptedTransport>, Arc<HistoryNavigator>) {
        let transport = Arc::new(ScriptedTransport::new());
        let navigator = Arc::new(HistoryNavigator::new());
        let context = PortalContext::with_parts(
            PortalConfig::default(),
            Arc::new(CredentialStore::in_memory()),
            navigator.clone(),
            transport.clone(),
        );
        (context, transport, navigator)
    }

    #[test]
    fn test_open_without_store_dir() {
        let config = PortalConfig::default().with_scope(Role::Faculty, StorageScope::Persistent);
        let context = PortalContext::open(config).unwrap();
        assert!(context.session(Role::Faculty).is_none());
        assert_eq!(context.config().api_base_url, "http://localhost:5000");
    }

    #[test]
    fn test_open_rejects_bad_url() {
        let config = PortalConfig::default().with_api_base_url("not a url");
        assert!(matches!(
            PortalContext::open(config),
            Err(PortalError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_login_then_guard() {
        let (context, transport, navigator) = scripted_context();
        transport.respond(
            StatusCode::OK,
            json!({"token": "t-1", "user": {"name": "Priya"}}),
        );

        let mut guard = context.guard(Role::Student);
        context
            .login(Role::Student, &Credentials::new("priya@college.test", "pw"))
            .await
            .unwrap();

        assert!(guard.check().is_authorized());
        assert_eq!(
            navigator.current_route().as_deref(),
            Some("/student/dashboard")
        );

        context.logout(Role::Student);
        assert!(!context.guard(Role::Student).check().is_authorized());
    }
}
