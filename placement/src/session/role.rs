// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Portal roles and their routing/storage table

use super::scope::StorageScope;
use serde::{Deserialize, Serialize};

/// A portal role
///
/// Every role has its own login page, dashboard, storage namespace and login
/// endpoint. All of them come from [`RoleProfile`], so adding a role means
/// adding one enum variant and one table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Employer,
    Faculty,
    Admin,
}

/// Static description of a role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleProfile {
    pub role: Role,
    /// Prefix of every storage key owned by the role
    pub namespace: &'static str,
    pub login_route: &'static str,
    pub dashboard_route: &'static str,
    /// Backend endpoint that exchanges credentials for a token
    pub login_endpoint: &'static str,
    /// Scope used unless configuration overrides it
    pub default_scope: StorageScope,
}

// Indexed by `Role as usize`; keep in declaration order.
const ROLE_PROFILES: [RoleProfile; 4] = [
    RoleProfile {
        role: Role::Student,
        namespace: "student",
        login_route: "/student/login",
        dashboard_route: "/student/dashboard",
        login_endpoint: "/api/student/login",
        default_scope: StorageScope::Persistent,
    },
    RoleProfile {
        role: Role::Employer,
        namespace: "employer",
        login_route: "/employer/login",
        dashboard_route: "/employer/dashboard",
        login_endpoint: "/api/employer/login",
        default_scope: StorageScope::Persistent,
    },
    RoleProfile {
        role: Role::Faculty,
        namespace: "faculty",
        login_route: "/faculty/login",
        dashboard_route: "/faculty/dashboard",
        login_endpoint: "/api/faculty/login",
        default_scope: StorageScope::Session,
    },
    RoleProfile {
        role: Role::Admin,
        namespace: "admin",
        login_route: "/admin/login",
        dashboard_route: "/admin/dashboard",
        login_endpoint: "/api/admin/login",
        default_scope: StorageScope::Session,
    },
];

impl Role {
    pub const ALL: [Role; 4] = [Role::Student, Role::Employer, Role::Faculty, Role::Admin];

    pub fn profile(self) -> &'static RoleProfile {
        &ROLE_PROFILES[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.profile().namespace
    }

    pub fn namespace(self) -> &'static str {
        self.profile().namespace
    }

    pub fn login_route(self) -> &'static str {
        self.profile().login_route
    }

    pub fn dashboard_route(self) -> &'static str {
        self.profile().dashboard_route
    }

    pub fn login_endpoint(self) -> &'static str {
        self.profile().login_endpoint
    }

    pub fn default_scope(self) -> StorageScope {
        self.profile().default_scope
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.namespace() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown role: {}. Valid options: student, employer, faculty, admin",
                    s
                )
            })
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_enum_order() {
        for role in Role::ALL {
            assert_eq!(role.profile().role, role);
        }
    }

    #[test]
    fn test_routes() {
        assert_eq!(Role::Employer.login_route(), "/employer/login");
        assert_eq!(Role::Student.dashboard_route(), "/student/dashboard");
        assert_eq!(Role::Admin.login_endpoint(), "/api/admin/login");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Faculty".parse::<Role>(), Ok(Role::Faculty));
        assert_eq!(" ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert!("recruiter".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Employer).unwrap(), "\"employer\"");
        let role: Role = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn test_namespaces_are_distinct() {
        let mut namespaces: Vec<_> = Role::ALL.iter().map(|r| r.namespace()).collect();
        namespaces.sort();
        namespaces.dedup();
        assert_eq!(namespaces.len(), Role::ALL.len());
    }
}
