// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Session provider abstraction
//!
//! Guards, handlers and the request wrapper receive an
//! `Arc<dyn SessionProvider>` instead of reaching for shared global state.
//! Tests substitute their own provider; applications build one
//! [`CredentialStore`](super::CredentialStore) and pass it around.

use super::models::{BearerToken, Session, UserRecord};
use super::role::Role;
use crate::storage::StorageResult;

/// Role-namespaced session storage
pub trait SessionProvider: Send + Sync {
    /// Store the session for `role`, replacing any previous one
    ///
    /// # Returns
    /// * `Ok(())` - All entries written
    /// * `Err(e)` - The storage area rejected the write
    fn save(&self, role: Role, token: &str, user_record: &UserRecord) -> StorageResult<()>;

    /// Read the session for `role`
    ///
    /// Absence is `None`, never an error. Unreadable storage also yields
    /// `None`, which sends the caller back to login.
    fn load(&self, role: Role) -> Option<Session>;

    /// Remove the session for `role`. Clearing an absent session is a no-op.
    fn clear(&self, role: Role);

    /// Remove the session for `role` only if it still holds `token`
    ///
    /// Returns whether anything was removed. A session saved by a later login
    /// is left alone.
    fn clear_if_token(&self, role: Role, token: &BearerToken) -> bool {
        match self.load(role) {
            Some(session) if session.token == *token => {
                self.clear(role);
                true
            }
            _ => false,
        }
    }

    /// Whether a session exists for `role`
    fn is_authenticated(&self, role: Role) -> bool {
        self.load(role).is_some()
    }

    /// Roles that currently hold a session
    fn active_roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| self.is_authenticated(*role))
            .collect()
    }

    /// Remove every role's session
    fn clear_all(&self) {
        for role in Role::ALL {
            self.clear(role);
        }
    }
}
