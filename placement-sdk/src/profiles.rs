// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Typed views of the user record each role's login returns
//!
//! The session layer keeps the record as opaque JSON. These views read the
//! fields the dashboards use and keep everything else in `extra`.

use crate::error::{Error, Result};
use placement::{Role, Session};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A typed user record for one role
pub trait Profile: DeserializeOwned {
    const ROLE: Role;

    /// Read the profile out of `session`, which must belong to [`Self::ROLE`]
    fn from_session(session: &Session) -> Result<Self> {
        if session.role != Self::ROLE {
            return Err(Error::Validation(format!(
                "a {} session has no {} profile",
                session.role,
                Self::ROLE
            )));
        }
        Ok(session.user_record.parse()?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub roll_number: Option<String>,
    #[serde(default)]
    pub cgpa: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile for StudentProfile {
    const ROLE: Role = Role::Student;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfile {
    pub company_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile for EmployerProfile {
    const ROLE: Role = Role::Employer;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyProfile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile for FacultyProfile {
    const ROLE: Role = Role::Faculty;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile for AdminProfile {
    const ROLE: Role = Role::Admin;
}

#[cfg(test)]
mod tests {
    use super::*;
    use placement::UserRecord;
    use serde_json::json;

    #[test]
    fn test_employer_profile_keeps_unknown_fields() {
        let session = Session::new(
            Role::Employer,
            "abc123",
            UserRecord::new(json!({"companyName": "Acme", "industry": "Logistics"})),
        );
        let profile = EmployerProfile::from_session(&session).unwrap();

        assert_eq!(profile.company_name, "Acme");
        assert_eq!(profile.extra.get("industry"), Some(&json!("Logistics")));
    }

    #[test]
    fn test_profile_role_must_match() {
        let session = Session::new(
            Role::Student,
            "s-1",
            UserRecord::new(json!({"name": "Priya"})),
        );
        assert!(StudentProfile::from_session(&session).is_ok());
        assert!(matches!(
            AdminProfile::from_session(&session),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_missing_required_field() {
        let session = Session::new(Role::Faculty, "f-1", UserRecord::new(json!({"email": "x"})));
        assert!(matches!(
            FacultyProfile::from_session(&session),
            Err(Error::Serialization(_))
        ));
    }
}
