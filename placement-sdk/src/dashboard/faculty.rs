// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0

use super::DashboardPage;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Approval, ApprovalDecision};
use crate::profiles::{FacultyProfile, Profile};
use placement::{ApiRequest, AuthenticatedClient, GuardOutcome, Role};
use serde::Serialize;

#[derive(Serialize)]
struct DecisionBody<'a> {
    decision: ApprovalDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    remarks: Option<&'a str>,
}

/// Faculty dashboard
#[derive(Clone)]
pub struct FacultyDashboard {
    page: DashboardPage,
}

impl FacultyDashboard {
    pub fn new(client: AuthenticatedClient, outcome: GuardOutcome) -> Result<Self> {
        Ok(Self {
            page: DashboardPage::authorize(Role::Faculty, client, outcome)?,
        })
    }

    pub fn page(&self) -> &DashboardPage {
        &self.page
    }

    pub fn profile(&self) -> Result<FacultyProfile> {
        FacultyProfile::from_session(self.page.session())
    }

    /// Postings and student records waiting for a decision
    pub async fn pending_approvals(&self) -> Result<Vec<Approval>> {
        self.page
            .fetch(ApiRequest::get(endpoints::FACULTY_APPROVALS).query("status", "pending"))
            .await
    }

    pub async fn approve(&self, approval_id: &str, remarks: Option<&str>) -> Result<()> {
        self.decide(approval_id, ApprovalDecision::Approved, remarks)
            .await
    }

    pub async fn reject(&self, approval_id: &str, remarks: Option<&str>) -> Result<()> {
        self.decide(approval_id, ApprovalDecision::Rejected, remarks)
            .await
    }

    async fn decide(
        &self,
        approval_id: &str,
        decision: ApprovalDecision,
        remarks: Option<&str>,
    ) -> Result<()> {
        let request = ApiRequest::patch(endpoints::faculty_approval(approval_id)?)
            .with_json(&DecisionBody { decision, remarks })?;
        self.page.execute(request).await
    }
}
