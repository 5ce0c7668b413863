// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Route guard for protected pages
//!
//! ```text
//! Unchecked --(no session)--> Redirecting   (terminal, navigation away)
//! Unchecked --(session)-----> Authorized    (terminal for this activation)
//! ```

use crate::navigation::{NavigationMode, Navigator};
use crate::session::{Role, Session, SessionProvider};
use std::sync::Arc;

/// Guard lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Unchecked,
    Authorized,
    Redirecting,
}

/// Result of checking a guard
#[derive(Debug, Clone, PartialEq)]
pub enum GuardOutcome {
    /// Render the page with this session
    Authorized(Session),
    /// Do not render; the navigator is moving to the login route
    Redirecting { login_route: &'static str },
}

impl GuardOutcome {
    pub fn is_authorized(&self) -> bool {
        matches!(self, GuardOutcome::Authorized(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            GuardOutcome::Authorized(session) => Some(session),
            GuardOutcome::Redirecting { .. } => None,
        }
    }

    pub fn into_session(self) -> Option<Session> {
        match self {
            GuardOutcome::Authorized(session) => Some(session),
            GuardOutcome::Redirecting { .. } => None,
        }
    }
}

/// One activation of a protected page
///
/// The token's freshness is not checked here. The server is the source of
/// truth, and a stale token surfaces on the first API call.
pub struct RouteGuard {
    role: Role,
    sessions: Arc<dyn SessionProvider>,
    navigator: Arc<dyn Navigator>,
    outcome: Option<GuardOutcome>,
}

impl RouteGuard {
    pub fn new(role: Role, sessions: Arc<dyn SessionProvider>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            role,
            sessions,
            navigator,
            outcome: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn state(&self) -> GuardState {
        match &self.outcome {
            None => GuardState::Unchecked,
            Some(GuardOutcome::Authorized(_)) => GuardState::Authorized,
            Some(GuardOutcome::Redirecting { .. }) => GuardState::Redirecting,
        }
    }

    /// Run the check once; later calls return the settled outcome
    pub fn check(&mut self) -> GuardOutcome {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        let outcome = match self.sessions.load(self.role) {
            Some(session) => GuardOutcome::Authorized(session),
            None => {
                let login_route = self.role.login_route();
                log::debug!("No {} session; redirecting to {}", self.role, login_route);
                self.navigator.navigate(login_route, NavigationMode::Replace);
                GuardOutcome::Redirecting { login_route }
            }
        };
        self.outcome = Some(outcome.clone());
        outcome
    }
}
