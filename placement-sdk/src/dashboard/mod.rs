// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Role dashboards
//!
//! A dashboard can only be built from an authorized guard outcome for its
//! own role, so holding one means the page passed its guard. Every call goes
//! through the authenticated client and is tied to the dashboard's page
//! scope: after [`DashboardPage::leave`] late responses surface as
//! [`Error::Stale`] instead of data.

mod admin;
mod employer;
mod faculty;
mod student;

pub use admin::AdminDashboard;
pub use employer::EmployerDashboard;
pub use faculty::FacultyDashboard;
pub use student::{StudentDashboard, StudentOverview};

use crate::error::{Error, Result};
use placement::{ApiRequest, AuthenticatedClient, GuardOutcome, PageScope, Role, Session};
use serde::de::DeserializeOwned;

/// State shared by every dashboard: the session it was authorized with and
/// the page it renders
#[derive(Clone)]
pub struct DashboardPage {
    client: AuthenticatedClient,
    session: Session,
    scope: PageScope,
}

impl DashboardPage {
    fn authorize(role: Role, client: AuthenticatedClient, outcome: GuardOutcome) -> Result<Self> {
        let session = match outcome.into_session() {
            Some(session) if session.role == role => session,
            _ => return Err(Error::NotAuthorized { role }),
        };
        log::debug!("Opened {} dashboard", role);
        Ok(Self {
            client,
            session,
            scope: PageScope::mount(role.dashboard_route()),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn role(&self) -> Role {
        self.session.role
    }

    pub fn scope(&self) -> &PageScope {
        &self.scope
    }

    /// Leave the page; in-flight calls finish but their results are dropped
    pub fn leave(&self) {
        self.scope.unmount();
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let result = self
            .scope
            .run(self.client.send_json(self.session.role, request))
            .await;
        match result {
            Some(decoded) => Ok(decoded?),
            None => Err(self.stale()),
        }
    }

    async fn execute(&self, request: ApiRequest) -> Result<()> {
        let result = self
            .scope
            .run(self.client.send(self.session.role, request))
            .await;
        match result {
            Some(response) => response.map(|_| ()).map_err(Error::from),
            None => Err(self.stale()),
        }
    }

    fn stale(&self) -> Error {
        Error::Stale {
            route: self.scope.route().to_string(),
        }
    }
}
