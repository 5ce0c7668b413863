// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0

use super::DashboardPage;
use crate::endpoints;
use crate::error::{Error, Result};
use crate::models::{Application, Job};
use crate::profiles::{Profile, StudentProfile};
use placement::{ApiRequest, AuthenticatedClient, FilePart, GuardOutcome, Role};

const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;

/// Jobs and applications shown when the student dashboard opens
#[derive(Debug, Clone, PartialEq)]
pub struct StudentOverview {
    pub jobs: Vec<Job>,
    pub applications: Vec<Application>,
}

impl StudentOverview {
    /// Jobs the student has not applied to yet
    pub fn unapplied_jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs
            .iter()
            .filter(|job| !self.applications.iter().any(|a| a.job_id == job.id))
    }
}

/// Student dashboard
#[derive(Clone)]
pub struct StudentDashboard {
    page: DashboardPage,
}

impl StudentDashboard {
    pub fn new(client: AuthenticatedClient, outcome: GuardOutcome) -> Result<Self> {
        Ok(Self {
            page: DashboardPage::authorize(Role::Student, client, outcome)?,
        })
    }

    pub fn page(&self) -> &DashboardPage {
        &self.page
    }

    pub fn profile(&self) -> Result<StudentProfile> {
        StudentProfile::from_session(self.page.session())
    }

    /// Open jobs and own applications, fetched together
    pub async fn overview(&self) -> Result<StudentOverview> {
        let (jobs, applications) = tokio::join!(self.jobs(), self.applications());
        Ok(StudentOverview {
            jobs: jobs?,
            applications: applications?,
        })
    }

    pub async fn jobs(&self) -> Result<Vec<Job>> {
        self.page.fetch(ApiRequest::get(endpoints::STUDENT_JOBS)).await
    }

    pub async fn job(&self, job_id: &str) -> Result<Job> {
        self.page
            .fetch(ApiRequest::get(endpoints::student_job(job_id)?))
            .await
    }

    pub async fn apply(&self, job_id: &str) -> Result<Application> {
        self.page
            .fetch(ApiRequest::post(endpoints::student_apply(job_id)?))
            .await
    }

    pub async fn applications(&self) -> Result<Vec<Application>> {
        self.page
            .fetch(ApiRequest::get(endpoints::STUDENT_APPLICATIONS))
            .await
    }

    pub async fn withdraw(&self, application_id: &str) -> Result<()> {
        self.page
            .execute(ApiRequest::delete(endpoints::student_application(
                application_id,
            )?))
            .await
    }

    /// Upload a resume (PDF or Word document)
    pub async fn upload_resume(&self, file_name: &str, bytes: Vec<u8>) -> Result<()> {
        if bytes.is_empty() {
            return Err(Error::Validation("resume file is empty".to_string()));
        }
        if bytes.len() > MAX_RESUME_BYTES {
            return Err(Error::Validation(format!(
                "resume is {} bytes; the limit is {}",
                bytes.len(),
                MAX_RESUME_BYTES
            )));
        }
        let mime = resume_mime(file_name).ok_or_else(|| {
            Error::Validation(format!("'{}' is not a PDF or Word document", file_name))
        })?;

        let part = FilePart {
            field: "resume".to_string(),
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes,
        };
        self.page
            .execute(ApiRequest::post(endpoints::STUDENT_RESUME).multipart(part))
            .await
    }
}

fn resume_mime(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "doc" => Some("application/msword"),
        "docx" => Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_mime() {
        assert_eq!(resume_mime("cv.PDF"), Some("application/pdf"));
        assert!(resume_mime("cv.docx").is_some());
        assert_eq!(resume_mime("cv.png"), None);
        assert_eq!(resume_mime("resume"), None);
    }
}
