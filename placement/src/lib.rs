// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Placement - role-based session and authorization layer for the placement portal
//!
//! Four roles (student, employer, faculty, admin) sign in to the same backend
//! and each keeps its own session. This crate owns everything between a login
//! form and an authenticated backend call:
//!
//! - **Credential store**: per-role token and user record, namespaced so one
//!   role's logout never touches another role's session
//! - **Authenticated client**: attaches the role's bearer token, refuses to
//!   send without one and turns 401/403 into a single logout-and-redirect
//! - **Route guard**: decides once per page activation whether a protected
//!   page may render, replacing the history entry when it may not
//! - **Page helpers**: stale-result suppression and optimistic updates with
//!   rollback
//!
//! # Usage
//!
//! ```no_run
//! use placement::{Credentials, PortalConfig, PortalContext, Role};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let portal = PortalContext::open(PortalConfig::from_env()?)?;
//! portal
//!     .login(Role::Employer, &Credentials::new("hr@acme.test", "secret"))
//!     .await?;
//!
//! let mut guard = portal.guard(Role::Employer);
//! if let Some(session) = guard.check().into_session() {
//!     let jobs: serde_json::Value = portal
//!         .client()
//!         .get_json(session.role, "/api/employer/jobs")
//!         .await?;
//!     println!("{}", jobs);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod page;
pub mod session;
pub mod storage;

pub use auth::{Credentials, LoginError, LoginService};
pub use client::{
    ApiError, ApiRequest, ApiResponse, AuthenticatedClient, FilePart, HttpTransport, Method,
    RequestBody, ScriptedTransport, StatusCode, Transport, TransportError,
};
pub use config::{ConfigError, PortalConfig};
pub use context::PortalContext;
pub use error::PortalError;
pub use guard::{GuardOutcome, GuardState, RouteGuard, UnauthorizedHandler};
pub use navigation::{HistoryNavigator, NavigationEvent, NavigationMode, Navigator};
pub use page::{OptimisticUpdate, PageScope};
pub use session::{
    BearerToken, CredentialStore, Role, RoleProfile, Session, SessionProvider, StorageScope,
    UserRecord,
};
pub use storage::{StorageError, StorageResult};

/// Placement version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placement crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
