// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Main entry point for dashboard access

use crate::dashboard::{AdminDashboard, EmployerDashboard, FacultyDashboard, StudentDashboard};
use crate::error::{Error, Result};
use placement::{Credentials, GuardOutcome, PortalConfig, PortalContext, Role, Session};

/// A portal client
///
/// Wraps one [`PortalContext`]. Opening a dashboard runs that role's route
/// guard first; without a session the guard redirects to the role's login
/// page and the call fails with [`Error::NotAuthorized`].
///
/// # Examples
///
/// ```no_run
/// use placement_sdk::{Portal, Role};
///
/// # async fn run() -> Result<(), placement_sdk::Error> {
/// let portal = Portal::from_env()?;
/// portal.login(Role::Student, "priya@college.test", "secret").await?;
///
/// let student = portal.student()?;
/// for job in student.jobs().await? {
///     println!("{}", job.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Portal {
    context: PortalContext,
}

impl Portal {
    pub fn open(config: PortalConfig) -> Result<Self> {
        Ok(Self {
            context: PortalContext::open(config)?,
        })
    }

    /// Open with configuration read from `PLACEMENT_*` variables
    pub fn from_env() -> Result<Self> {
        let config = PortalConfig::from_env().map_err(placement::PortalError::from)?;
        Self::open(config)
    }

    pub fn with_context(context: PortalContext) -> Self {
        Self { context }
    }

    /// Underlying session service
    pub fn context(&self) -> &PortalContext {
        &self.context
    }

    pub async fn login(&self, role: Role, email: &str, password: &str) -> Result<Session> {
        let credentials = Credentials::new(email, password);
        Ok(self.context.login(role, &credentials).await?)
    }

    pub fn logout(&self, role: Role) {
        self.context.logout(role)
    }

    pub fn student(&self) -> Result<StudentDashboard> {
        StudentDashboard::new(self.context.client().clone(), self.guard(Role::Student)?)
    }

    pub fn employer(&self) -> Result<EmployerDashboard> {
        EmployerDashboard::new(self.context.client().clone(), self.guard(Role::Employer)?)
    }

    pub fn faculty(&self) -> Result<FacultyDashboard> {
        FacultyDashboard::new(self.context.client().clone(), self.guard(Role::Faculty)?)
    }

    pub fn admin(&self) -> Result<AdminDashboard> {
        AdminDashboard::new(self.context.client().clone(), self.guard(Role::Admin)?)
    }

    fn guard(&self, role: Role) -> Result<GuardOutcome> {
        let outcome = self.context.guard(role).check();
        if outcome.is_authorized() {
            Ok(outcome)
        } else {
            Err(Error::NotAuthorized { role })
        }
    }
}
