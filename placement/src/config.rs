// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Client configuration
//!
//! Environment variables:
//!
//! | Variable                    | Meaning                              |
//! |-----------------------------|--------------------------------------|
//! | `PLACEMENT_API_URL`         | Backend base URL                     |
//! | `PLACEMENT_STORE_DIR`       | Directory for persistent credentials |
//! | `PLACEMENT_TIMEOUT_SECS`    | Per-request timeout                  |
//! | `PLACEMENT_<ROLE>_SCOPE`    | `session` or `persistent` per role   |

use crate::session::{Role, StorageScope};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const API_URL_VAR: &str = "PLACEMENT_API_URL";
pub const STORE_DIR_VAR: &str = "PLACEMENT_STORE_DIR";
pub const TIMEOUT_VAR: &str = "PLACEMENT_TIMEOUT_SECS";

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// Portal client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Backend base URL; endpoint paths are joined onto it
    pub api_base_url: String,

    /// Directory for persistent credentials. Without one, persistent roles
    /// fall back to session storage.
    pub store_dir: Option<PathBuf>,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// Storage scope overrides; roles not listed use their default
    pub role_scopes: BTreeMap<Role, StorageScope>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            store_dir: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            role_scopes: BTreeMap::new(),
        }
    }
}

/// Name of the scope override variable for `role`
pub fn scope_var(role: Role) -> String {
    format!("PLACEMENT_{}_SCOPE", role.namespace().to_uppercase())
}

impl PortalConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_VAR) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(dir) = lookup(STORE_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            config.store_dir = Some(PathBuf::from(dir.trim()));
        }
        if let Some(secs) = lookup(TIMEOUT_VAR) {
            let parsed: u64 = secs.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: TIMEOUT_VAR.to_string(),
                    value: secs.clone(),
                    reason: e.to_string(),
                }
            })?;
            if parsed == 0 {
                return Err(ConfigError::InvalidValue {
                    key: TIMEOUT_VAR.to_string(),
                    value: secs,
                    reason: "timeout must be at least one second".to_string(),
                });
            }
            config.request_timeout = Duration::from_secs(parsed);
        }
        for role in Role::ALL {
            let key = scope_var(role);
            if let Some(raw) = lookup(&key) {
                let scope = raw.parse::<StorageScope>().map_err(|reason| {
                    ConfigError::InvalidValue {
                        key: key.clone(),
                        value: raw.clone(),
                        reason,
                    }
                })?;
                config.role_scopes.insert(role, scope);
            }
        }

        config.validate()?;
        log::debug!("Loaded portal configuration: {:?}", config);
        Ok(config)
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_store_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store_dir = Some(dir.into());
        self
    }

    pub fn with_scope(mut self, role: Role, scope: StorageScope) -> Self {
        self.role_scopes.insert(role, scope);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Effective storage scope for `role`
    pub fn scope_for(&self, role: Role) -> StorageScope {
        self.role_scopes
            .get(&role)
            .copied()
            .unwrap_or_else(|| role.default_scope())
    }

    /// Check that the base URL is absolute http(s)
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: API_URL_VAR.to_string(),
            value: self.api_base_url.clone(),
            reason,
        };
        let url = url::Url::parse(&self.api_base_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PortalConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, PortalConfig::default());
        assert_eq!(config.scope_for(Role::Student), StorageScope::Persistent);
        assert_eq!(config.scope_for(Role::Admin), StorageScope::Session);
    }

    #[test]
    fn test_overrides() {
        let config = PortalConfig::from_lookup(lookup_from(&[
            (API_URL_VAR, "https://placements.college.test"),
            (STORE_DIR_VAR, "/tmp/placement"),
            (TIMEOUT_VAR, "5"),
            ("PLACEMENT_ADMIN_SCOPE", "persistent"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://placements.college.test");
        assert_eq!(config.store_dir, Some(PathBuf::from("/tmp/placement")));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.scope_for(Role::Admin), StorageScope::Persistent);
    }

    #[test]
    fn test_invalid_scope() {
        let err = PortalConfig::from_lookup(lookup_from(&[("PLACEMENT_FACULTY_SCOPE", "cookie")]))
            .unwrap_err();
        let ConfigError::InvalidValue { key, .. } = err;
        assert_eq!(key, "PLACEMENT_FACULTY_SCOPE");
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(PortalConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, "soon")])).is_err());
        assert!(PortalConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, "0")])).is_err());
    }

    #[test]
    fn test_invalid_url() {
        assert!(PortalConfig::from_lookup(lookup_from(&[(API_URL_VAR, "localhost")])).is_err());
        assert!(PortalConfig::from_lookup(lookup_from(&[(API_URL_VAR, "ftp://x")])).is_err());
    }

    #[test]
    fn test_scope_var_name() {
        assert_eq!(scope_var(Role::Employer), "PLACEMENT_EMPLOYER_SCOPE");
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env() {
        std::env::set_var(API_URL_VAR, "http://127.0.0.1:8080");
        std::env::set_var(scope_var(Role::Student), "session");
        let config = PortalConfig::from_env();
        std::env::remove_var(API_URL_VAR);
        std::env::remove_var(scope_var(Role::Student));

        let config = config.unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
        assert_eq!(config.scope_for(Role::Student), StorageScope::Session);
    }
}
