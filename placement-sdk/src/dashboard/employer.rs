// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0

use super::DashboardPage;
use crate::endpoints;
use crate::error::{Error, Result};
use crate::models::{Application, ApplicationStatus, Job, JobDraft};
use crate::profiles::{EmployerProfile, Profile};
use chrono::Utc;
use placement::{ApiRequest, AuthenticatedClient, GuardOutcome, OptimisticUpdate, Role};
use serde_json::json;

/// Employer dashboard
#[derive(Clone)]
pub struct EmployerDashboard {
    page: DashboardPage,
}

impl EmployerDashboard {
    pub fn new(client: AuthenticatedClient, outcome: GuardOutcome) -> Result<Self> {
        Ok(Self {
            page: DashboardPage::authorize(Role::Employer, client, outcome)?,
        })
    }

    pub fn page(&self) -> &DashboardPage {
        &self.page
    }

    pub fn profile(&self) -> Result<EmployerProfile> {
        EmployerProfile::from_session(self.page.session())
    }

    /// The employer's own postings
    pub async fn postings(&self) -> Result<Vec<Job>> {
        self.page.fetch(ApiRequest::get(endpoints::EMPLOYER_JOBS)).await
    }

    pub async fn create_posting(&self, draft: &JobDraft) -> Result<Job> {
        draft.validate(Utc::now())?;
        let request = ApiRequest::post(endpoints::EMPLOYER_JOBS).with_json(draft)?;
        self.page.fetch(request).await
    }

    pub async fn update_posting(&self, job_id: &str, draft: &JobDraft) -> Result<Job> {
        draft.validate(Utc::now())?;
        let request = ApiRequest::put(endpoints::employer_job(job_id)?).with_json(draft)?;
        self.page.fetch(request).await
    }

    pub async fn close_posting(&self, job_id: &str) -> Result<Job> {
        self.page
            .fetch(ApiRequest::post(endpoints::employer_close_job(job_id)?))
            .await
    }

    pub async fn applicants(&self, job_id: &str) -> Result<Vec<Application>> {
        self.page
            .fetch(ApiRequest::get(endpoints::employer_applicants(job_id)?))
            .await
    }

    /// Move an application to `status`
    ///
    /// `application` shows the new status while the call runs and is put
    /// back to its previous status if the call fails. Once the page has been
    /// left, `application` belongs to a discarded view and is not touched.
    pub async fn set_application_status(
        &self,
        application: &mut Application,
        status: ApplicationStatus,
    ) -> Result<()> {
        if application.status.is_final() {
            return Err(Error::Validation(format!(
                "application {} is already {}",
                application.id, application.status
            )));
        }
        if !self.page.scope().is_mounted() {
            return Err(self.page.stale());
        }

        let request = ApiRequest::patch(endpoints::employer_application_status(&application.id)?)
            .json(json!({ "status": status }));
        let mut update = OptimisticUpdate::apply(&mut application.status, status);
        match self.page.execute(request).await {
            Ok(()) => Ok(()),
            Err(stale @ Error::Stale { .. }) => Err(stale),
            Err(e) => {
                update.rollback();
                log::warn!("Status change to {} rolled back: {}", status, e);
                Err(e)
            }
        }
    }
}
