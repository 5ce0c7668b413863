// Credential storage scopes across process restarts.

#![cfg(feature = "sled-backend")]

use placement::config::PortalConfig;
use placement::{CredentialStore, PortalContext, Role, SessionProvider, StorageScope, UserRecord};
use serde_json::json;
use tempfile::TempDir;

fn scopes(role: Role) -> StorageScope {
    role.default_scope()
}

#[test]
fn test_persistent_roles_survive_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let store = CredentialStore::open(Some(dir.path()), scopes).unwrap();
        store
            .save(Role::Student, "s-1", &UserRecord::new(json!({"name": "Priya"})))
            .unwrap();
        store
            .save(Role::Admin, "a-1", &UserRecord::new(json!({"name": "Root"})))
            .unwrap();
    }

    let reopened = CredentialStore::open(Some(dir.path()), scopes).unwrap();
    let student = reopened.load(Role::Student).unwrap();
    assert_eq!(student.token.as_str(), "s-1");
    // Admin lives in session storage and ends with the process
    assert!(reopened.load(Role::Admin).is_none());
}

#[test]
fn test_logout_is_persisted() {
    let dir = TempDir::new().unwrap();

    {
        let store = CredentialStore::open(Some(dir.path()), scopes).unwrap();
        store
            .save(Role::Employer, "e-1", &UserRecord::new(json!({"companyName": "Acme"})))
            .unwrap();
        store.clear(Role::Employer);
    }

    let reopened = CredentialStore::open(Some(dir.path()), scopes).unwrap();
    assert!(reopened.load(Role::Employer).is_none());
}

#[test]
fn test_scope_override_through_config() {
    let dir = TempDir::new().unwrap();
    let config = PortalConfig::default()
        .with_store_dir(dir.path().join("credentials"))
        .with_scope(Role::Student, StorageScope::Session);

    {
        let context = PortalContext::open(config.clone()).unwrap();
        context
            .sessions()
            .save(Role::Student, "s-1", &UserRecord::new(json!({"name": "Priya"})))
            .unwrap();
        context
            .sessions()
            .save(Role::Employer, "e-1", &UserRecord::new(json!({"companyName": "Acme"})))
            .unwrap();
    }

    let context = PortalContext::open(config).unwrap();
    assert!(context.session(Role::Student).is_none());
    assert!(context.session(Role::Employer).is_some());
}
