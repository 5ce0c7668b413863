// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0

use super::DashboardPage;
use crate::endpoints;
use crate::error::Result;
use crate::models::{PlacementAnalytics, UserSummary};
use crate::profiles::{AdminProfile, Profile};
use placement::{ApiRequest, AuthenticatedClient, GuardOutcome, Role};
use serde_json::json;

/// Admin dashboard
#[derive(Clone)]
pub struct AdminDashboard {
    page: DashboardPage,
}

impl AdminDashboard {
    pub fn new(client: AuthenticatedClient, outcome: GuardOutcome) -> Result<Self> {
        Ok(Self {
            page: DashboardPage::authorize(Role::Admin, client, outcome)?,
        })
    }

    pub fn page(&self) -> &DashboardPage {
        &self.page
    }

    pub fn profile(&self) -> Result<AdminProfile> {
        AdminProfile::from_session(self.page.session())
    }

    /// All accounts, or only those of `role`
    pub async fn users(&self, role: Option<Role>) -> Result<Vec<UserSummary>> {
        let mut request = ApiRequest::get(endpoints::ADMIN_USERS);
        if let Some(role) = role {
            request = request.query("role", role.as_str());
        }
        self.page.fetch(request).await
    }

    pub async fn activate_user(&self, user_id: &str) -> Result<UserSummary> {
        self.set_user_active(user_id, true).await
    }

    pub async fn deactivate_user(&self, user_id: &str) -> Result<UserSummary> {
        self.set_user_active(user_id, false).await
    }

    async fn set_user_active(&self, user_id: &str, active: bool) -> Result<UserSummary> {
        let request = ApiRequest::patch(endpoints::admin_user_status(user_id)?)
            .json(json!({ "active": active }));
        self.page.fetch(request).await
    }

    pub async fn analytics(&self) -> Result<PlacementAnalytics> {
        self.page
            .fetch(ApiRequest::get(endpoints::ADMIN_ANALYTICS))
            .await
    }
}
