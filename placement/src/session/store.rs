// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Credential store
//!
//! Each role owns three entries in its storage area:
//!
//! ```text
//! <namespace>:token   bearer token
//! <namespace>:user    user record as JSON
//! <namespace>:role    role marker, the only place a role is read from
//! ```

use super::models::{BearerToken, Session, UserRecord};
use super::provider::SessionProvider;
use super::role::Role;
use super::scope::StorageScope;
use crate::storage::{open_storage_area, MemoryStorage, StorageArea, StorageError, StorageResult};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";
const ROLE_KEY: &str = "role";

fn entry_key(role: Role, entry: &str) -> String {
    format!("{}:{}", role.namespace(), entry)
}

/// Role-namespaced credential store over one or two storage areas
pub struct CredentialStore {
    areas: HashMap<Role, Arc<dyn StorageArea>>,
    /// Serialises writers so a compare-and-clear cannot interleave with a save
    writes: Mutex<()>,
}

impl CredentialStore {
    /// All roles in a single process-lifetime area
    pub fn in_memory() -> Self {
        let area: Arc<dyn StorageArea> = Arc::new(MemoryStorage::new());
        Self::with_area(area)
    }

    /// All roles in the given area
    pub fn with_area(area: Arc<dyn StorageArea>) -> Self {
        let areas = Role::ALL.into_iter().map(|role| (role, area.clone())).collect();
        Self {
            areas,
            writes: Mutex::new(()),
        }
    }

    /// Route each role to the session or persistent area according to `scopes`
    pub fn new(
        session_area: Arc<dyn StorageArea>,
        persistent_area: Arc<dyn StorageArea>,
        scopes: impl Fn(Role) -> StorageScope,
    ) -> Self {
        let areas = Role::ALL
            .into_iter()
            .map(|role| {
                let area = match scopes(role) {
                    StorageScope::Session => session_area.clone(),
                    StorageScope::Persistent => persistent_area.clone(),
                };
                (role, area)
            })
            .collect();
        Self {
            areas,
            writes: Mutex::new(()),
        }
    }

    /// Open the areas a set of scopes needs
    ///
    /// The persistent area is only opened when some role asks for it. Without
    /// a directory those roles fall back to session storage.
    pub fn open(
        store_dir: Option<&Path>,
        scopes: impl Fn(Role) -> StorageScope,
    ) -> StorageResult<Self> {
        let session_area = open_storage_area(StorageScope::Session.storage_type(), None)?;
        let wants_persistent = Role::ALL.into_iter().any(|role| scopes(role).is_persistent());

        let persistent_area = match (wants_persistent, store_dir) {
            (false, _) => session_area.clone(),
            (true, Some(dir)) => {
                std::fs::create_dir_all(dir)?;
                log::debug!("Opening persistent credential area at {}", dir.display());
                open_storage_area(StorageScope::Persistent.storage_type(), Some(dir))?
            }
            (true, None) => {
                log::warn!(
                    "Persistent credential storage requested without a store directory; \
                     using session storage instead"
                );
                session_area.clone()
            }
        };

        Ok(Self::new(session_area, persistent_area, scopes))
    }

    fn area(&self, role: Role) -> &Arc<dyn StorageArea> {
        // Every constructor fills all roles
        &self.areas[&role]
    }

    fn try_load(&self, role: Role) -> StorageResult<Option<Session>> {
        let area = self.area(role);

        let marker = match area.get_item(&entry_key(role, ROLE_KEY))? {
            Some(marker) => marker,
            None => return Ok(None),
        };
        if marker != role.as_str() {
            log::warn!(
                "Credential entries under '{}' carry role marker '{}'; ignoring them",
                role.namespace(),
                marker
            );
            return Ok(None);
        }

        let token = match area.get_item(&entry_key(role, TOKEN_KEY))? {
            Some(token) if !token.trim().is_empty() => token,
            _ => return Ok(None),
        };
        let user = match area.get_item(&entry_key(role, USER_KEY))? {
            Some(user) => user,
            None => return Ok(None),
        };
        let user_record: UserRecord = serde_json::from_str(&user)?;

        Ok(Some(Session::new(role, token, user_record)))
    }

    fn remove_entries(&self, role: Role) {
        let keys = [
            entry_key(role, TOKEN_KEY),
            entry_key(role, USER_KEY),
            entry_key(role, ROLE_KEY),
        ];
        let keys: Vec<&str> = keys.iter().map(String::as_str).collect();

        let area = self.area(role);
        if let Err(e) = area.remove_items(&keys).and_then(|_| area.flush()) {
            log::warn!("Failed to clear {} session: {}", role, e);
            return;
        }
        log::debug!("Cleared {} session", role);
    }
}

impl SessionProvider for CredentialStore {
    fn save(&self, role: Role, token: &str, user_record: &UserRecord) -> StorageResult<()> {
        if token.trim().is_empty() {
            return Err(StorageError::SerializationError(
                "refusing to store an empty token".to_string(),
            ));
        }

        let user = serde_json::to_string(user_record)?;
        let token_key = entry_key(role, TOKEN_KEY);
        let user_key = entry_key(role, USER_KEY);
        let role_key = entry_key(role, ROLE_KEY);

        let _writes = self.writes.lock();
        let area = self.area(role);
        area.set_items(&[
            (token_key.as_str(), token),
            (user_key.as_str(), user.as_str()),
            (role_key.as_str(), role.as_str()),
        ])?;
        area.flush()?;

        log::debug!("Saved {} session ({} storage)", role, area.storage_type());
        Ok(())
    }

    fn load(&self, role: Role) -> Option<Session> {
        match self.try_load(role) {
            Ok(session) => session,
            Err(e) => {
                log::warn!("Could not read {} session, treating as absent: {}", role, e);
                None
            }
        }
    }

    fn clear(&self, role: Role) {
        let _writes = self.writes.lock();
        self.remove_entries(role);
    }

    fn clear_if_token(&self, role: Role, token: &BearerToken) -> bool {
        let _writes = self.writes.lock();
        match self.load(role) {
            Some(session) if session.token == *token => {
                self.remove_entries(role);
                true
            }
            Some(_) => {
                log::debug!("{} session was replaced; keeping the newer one", role);
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageType;
    use serde_json::json;

    struct BrokenArea;

    impl StorageArea for BrokenArea {
        fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Unavailable("storage disabled".to_string()))
        }
        fn set_item(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("storage disabled".to_string()))
        }
        fn remove_item(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("storage disabled".to_string()))
        }
        fn keys_with_prefix(&self, _prefix: &str) -> StorageResult<Vec<String>> {
            Ok(Vec::new())
        }
        fn storage_type(&self) -> StorageType {
            StorageType::Memory
        }
    }

    #[test]
    fn test_save_then_load() {
        let store = CredentialStore::in_memory();
        let user = UserRecord::new(json!({"name": "Priya"}));
        store.save(Role::Student, "s-token", &user).unwrap();

        let session = store.load(Role::Student).unwrap();
        assert_eq!(session.role, Role::Student);
        assert_eq!(session.token.as_str(), "s-token");
        assert_eq!(session.user_record, user);
    }

    #[test]
    fn test_entries_are_namespaced() {
        let area = Arc::new(MemoryStorage::new());
        let store = CredentialStore::with_area(area.clone());
        store
            .save(Role::Faculty, "f-token", &UserRecord::new(json!({})))
            .unwrap();

        assert_eq!(
            area.keys_with_prefix("faculty:").unwrap(),
            vec!["faculty:role", "faculty:token", "faculty:user"]
        );
        assert_eq!(area.get_item("faculty:role").unwrap().as_deref(), Some("faculty"));
    }

    #[test]
    fn test_mismatched_role_marker_is_absent() {
        let area = Arc::new(MemoryStorage::new());
        let store = CredentialStore::with_area(area.clone());
        store
            .save(Role::Admin, "a-token", &UserRecord::new(json!({})))
            .unwrap();
        area.set_item("admin:role", "student").unwrap();

        assert!(store.load(Role::Admin).is_none());
    }

    #[test]
    fn test_corrupt_user_blob_is_absent() {
        let area = Arc::new(MemoryStorage::new());
        let store = CredentialStore::with_area(area.clone());
        store
            .save(Role::Student, "s-token", &UserRecord::new(json!({})))
            .unwrap();
        area.set_item("student:user", "{not json").unwrap();

        assert!(store.load(Role::Student).is_none());
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let store = CredentialStore::in_memory();
        let result = store.save(Role::Student, "  ", &UserRecord::new(json!({})));
        assert!(result.is_err());
        assert!(store.load(Role::Student).is_none());
    }

    #[test]
    fn test_unavailable_storage_degrades_to_absent() {
        let store = CredentialStore::with_area(Arc::new(BrokenArea));
        assert!(store.load(Role::Employer).is_none());
        assert!(store
            .save(Role::Employer, "t", &UserRecord::new(json!({})))
            .is_err());
        // Clearing must not panic either
        store.clear(Role::Employer);
    }

    #[test]
    fn test_scopes_route_roles_to_areas() {
        let session_area = Arc::new(MemoryStorage::new());
        let persistent_area = Arc::new(MemoryStorage::new());
        let store = CredentialStore::new(session_area.clone(), persistent_area.clone(), |role| {
            if role == Role::Student {
                StorageScope::Persistent
            } else {
                StorageScope::Session
            }
        });

        let user = UserRecord::new(json!({}));
        store.save(Role::Student, "s", &user).unwrap();
        store.save(Role::Admin, "a", &user).unwrap();

        assert_eq!(persistent_area.keys_with_prefix("student:").unwrap().len(), 3);
        assert!(persistent_area.keys_with_prefix("admin:").unwrap().is_empty());
        assert_eq!(session_area.keys_with_prefix("admin:").unwrap().len(), 3);
    }

    #[test]
    fn test_open_without_directory_falls_back_to_memory() {
        let store = CredentialStore::open(None, |_| StorageScope::Persistent).unwrap();
        store
            .save(Role::Employer, "e", &UserRecord::new(json!({})))
            .unwrap();
        assert!(store.load(Role::Employer).is_some());
    }

    #[test]
    fn test_active_roles_and_clear_all() {
        let store = CredentialStore::in_memory();
        let user = UserRecord::new(json!({}));
        store.save(Role::Employer, "e", &user).unwrap();
        store.save(Role::Admin, "a", &user).unwrap();

        assert_eq!(store.active_roles(), vec![Role::Employer, Role::Admin]);
        store.clear_all();
        assert!(store.active_roles().is_empty());
    }

    #[test]
    fn test_clear_if_token_keeps_newer_session() {
        let store = CredentialStore::in_memory();
        let user = UserRecord::new(json!({}));
        store.save(Role::Student, "old", &user).unwrap();
        store.save(Role::Student, "new", &user).unwrap();

        assert!(!store.clear_if_token(Role::Student, &BearerToken::new("old")));
        assert_eq!(store.load(Role::Student).unwrap().token.as_str(), "new");

        assert!(store.clear_if_token(Role::Student, &BearerToken::new("new")));
        assert!(store.load(Role::Student).is_none());
        assert!(!store.clear_if_token(Role::Student, &BearerToken::new("new")));
    }
}
