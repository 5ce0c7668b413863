// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Central reaction to rejected credentials

use crate::navigation::{NavigationMode, Navigator};
use crate::session::{BearerToken, Role, SessionProvider};
use std::sync::Arc;

/// Clears a role's session and sends the user to that role's login page
///
/// Safe to call any number of times, from any number of failing requests:
/// clearing an absent session does nothing and the navigator ignores a move
/// to the route it is already on.
#[derive(Clone)]
pub struct UnauthorizedHandler {
    sessions: Arc<dyn SessionProvider>,
    navigator: Arc<dyn Navigator>,
}

impl UnauthorizedHandler {
    pub fn new(sessions: Arc<dyn SessionProvider>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            sessions,
            navigator,
        }
    }

    /// Returns whether this call performed the redirect
    pub fn handle(&self, role: Role) -> bool {
        self.sessions.clear(role);
        self.redirect(role)
    }

    /// React to a rejection of `token`
    ///
    /// The session is only cleared, and the user only redirected, while the
    /// role still holds that token. A response for a request sent before a
    /// re-login leaves the new session in place.
    pub fn handle_for(&self, role: Role, token: &BearerToken) -> bool {
        if !self.sessions.clear_if_token(role, token) && self.sessions.is_authenticated(role) {
            log::debug!("Ignoring rejection of a superseded {} token", role);
            return false;
        }
        self.redirect(role)
    }

    fn redirect(&self, role: Role) -> bool {
        let navigated = self
            .navigator
            .navigate(role.login_route(), NavigationMode::Replace);
        if navigated {
            log::info!(
                "{} session rejected; redirected to {}",
                role,
                role.login_route()
            );
        }
        navigated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::HistoryNavigator;
    use crate::session::{CredentialStore, UserRecord};
    use serde_json::json;

    #[test]
    fn test_handle_clears_and_redirects_once() {
        let store = Arc::new(CredentialStore::in_memory());
        let nav = Arc::new(HistoryNavigator::starting_at("/employer/dashboard"));
        store
            .save(Role::Employer, "abc", &UserRecord::new(json!({})))
            .unwrap();

        let handler = UnauthorizedHandler::new(store.clone(), nav.clone());
        assert!(handler.handle(Role::Employer));
        assert!(!handler.handle(Role::Employer));

        assert!(store.load(Role::Employer).is_none());
        assert_eq!(nav.visits("/employer/login"), 1);
    }

    #[test]
    fn test_handle_leaves_other_roles() {
        let store = Arc::new(CredentialStore::in_memory());
        let nav = Arc::new(HistoryNavigator::new());
        let user = UserRecord::new(json!({}));
        store.save(Role::Student, "s", &user).unwrap();
        store.save(Role::Faculty, "f", &user).unwrap();

        UnauthorizedHandler::new(store.clone(), nav).handle(Role::Student);

        assert!(store.load(Role::Student).is_none());
        assert!(store.load(Role::Faculty).is_some());
    }

    #[test]
    fn test_handle_for_superseded_token_keeps_session() {
        let store = Arc::new(CredentialStore::in_memory());
        let nav = Arc::new(HistoryNavigator::starting_at("/student/dashboard"));
        let user = UserRecord::new(json!({}));
        store.save(Role::Student, "new", &user).unwrap();

        let handler = UnauthorizedHandler::new(store.clone(), nav.clone());
        assert!(!handler.handle_for(Role::Student, &BearerToken::new("old")));

        assert_eq!(store.load(Role::Student).unwrap().token.as_str(), "new");
        assert!(nav.events().is_empty());

        assert!(handler.handle_for(Role::Student, &BearerToken::new("new")));
        assert!(store.load(Role::Student).is_none());
        assert_eq!(nav.visits("/student/login"), 1);
    }
}
