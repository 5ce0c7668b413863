// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Session models
//!
//! A session is the token + user record pair that proves an authenticated
//! role. The user record's shape depends on the role and is opaque here.

use super::role::Role;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Opaque bearer credential
///
/// `Debug` never prints the secret, so sessions can be logged safely.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BearerToken(***)")
    }
}

impl From<&str> for BearerToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for BearerToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Role-specific user record
///
/// Stored exactly as the backend returned it. Typed views are obtained with
/// [`UserRecord::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(serde_json::Value);

impl UserRecord {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// Top-level field of the record
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.0.get(field)
    }

    /// Deserialize into a role-specific profile type
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }

    /// Best-effort human readable name for prompts and listings
    pub fn display_name(&self) -> Option<&str> {
        ["name", "fullName", "companyName", "username", "email"]
            .iter()
            .find_map(|field| self.0.get(*field).and_then(|v| v.as_str()))
    }
}

impl From<serde_json::Value> for UserRecord {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// An authenticated role
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub role: Role,
    pub token: BearerToken,
    pub user_record: UserRecord,
}

impl Session {
    pub fn new(role: Role, token: impl Into<BearerToken>, user_record: UserRecord) -> Self {
        Self {
            role,
            token: token.into(),
            user_record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_debug_is_redacted() {
        let token = BearerToken::new("abc123");
        assert_eq!(format!("{:?}", token), "BearerToken(***)");
        assert_eq!(token.header_value(), "Bearer abc123");
    }

    #[test]
    fn test_session_debug_hides_token() {
        let session = Session::new(Role::Employer, "abc123", json!({"companyName": "Acme"}).into());
        assert!(!format!("{:?}", session).contains("abc123"));
    }

    #[test]
    fn test_user_record_parse() {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Company {
            company_name: String,
        }

        let record = UserRecord::new(json!({"companyName": "Acme", "extra": 1}));
        let company: Company = record.parse().unwrap();
        assert_eq!(company.company_name, "Acme");
        assert_eq!(record.display_name(), Some("Acme"));
    }

    #[test]
    fn test_display_name_missing() {
        let record = UserRecord::new(json!({"id": 7}));
        assert_eq!(record.display_name(), None);
    }
}
