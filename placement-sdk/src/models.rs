// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Dashboard data models
//!
//! Field names follow the backend's camelCase JSON. Record ids are accepted
//! under `_id` as well.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use placement::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Lifecycle of a job posting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Open,
    PendingApproval,
    Closed,
}

/// A job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: JobStatus,
}

impl Job {
    /// Open and not past its deadline at `now`
    pub fn accepts_applications(&self, now: DateTime<Utc>) -> bool {
        self.status == JobStatus::Open && self.deadline.map_or(true, |d| d > now)
    }
}

/// Fields an employer submits to create or update a posting
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
}

impl JobDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Reject drafts the backend would refuse anyway
    pub fn validate(&self, now: DateTime<Utc>) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("job title is required".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation("job description is required".to_string()));
        }
        if let Some(deadline) = self.deadline {
            if deadline <= now {
                return Err(Error::Validation(format!(
                    "deadline {} is in the past",
                    deadline.to_rfc3339()
                )));
            }
        }
        Ok(())
    }
}

/// Where an application stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Shortlisted,
    Interview,
    Offered,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Interview,
        ApplicationStatus::Offered,
        ApplicationStatus::Rejected,
        ApplicationStatus::Withdrawn,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Shortlisted => "shortlisted",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offered => "offered",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Withdrawn => "withdrawn",
        }
    }

    /// No further transitions once rejected or withdrawn
    pub fn is_final(self) -> bool {
        matches!(self, ApplicationStatus::Rejected | ApplicationStatus::Withdrawn)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == lowered)
            .ok_or_else(|| format!("unknown application status '{}'", s))
    }
}

/// A student's application to a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(alias = "_id")]
    pub id: String,
    pub job_id: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
}

/// What a faculty approval request is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalKind {
    Job,
    Student,
}

/// A record waiting for faculty sign-off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    #[serde(alias = "_id")]
    pub id: String,
    pub kind: ApprovalKind,
    /// Job title or student name
    pub subject: String,
    #[serde(default)]
    pub requested_by: Option<String>,
    #[serde(default)]
    pub requested_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalDecision {
    Approved,
    Rejected,
}

/// A portal account as listed to admins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

/// Placement statistics for the admin dashboard
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlacementAnalytics {
    pub total_students: u64,
    pub placed_students: u64,
    pub total_employers: u64,
    pub open_jobs: u64,
    pub total_applications: u64,
    pub placements_by_department: BTreeMap<String, u64>,
}

impl PlacementAnalytics {
    /// Placed students as a percentage of all students
    pub fn placement_rate(&self) -> f64 {
        if self.total_students == 0 {
            return 0.0;
        }
        self.placed_students as f64 * 100.0 / self.total_students as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_job_from_backend_json() {
        let job: Job = serde_json::from_value(json!({
            "_id": "j1",
            "title": "Backend Intern",
            "companyName": "Acme",
            "deadline": "2030-01-31T00:00:00Z",
            "status": "pending_approval"
        }))
        .unwrap();

        assert_eq!(job.id, "j1");
        assert_eq!(job.company_name.as_deref(), Some("Acme"));
        assert_eq!(job.status, JobStatus::PendingApproval);
        assert!(!job.accepts_applications(Utc::now()));
    }

    #[test]
    fn test_deadline_closes_applications() {
        let job = Job {
            id: "j2".into(),
            title: "Analyst".into(),
            company_name: None,
            description: String::new(),
            location: None,
            salary: None,
            deadline: Some(Utc.with_ymd_and_hms(2030, 6, 1, 0, 0, 0).unwrap()),
            status: JobStatus::Open,
        };
        assert!(job.accepts_applications(Utc.with_ymd_and_hms(2030, 5, 1, 0, 0, 0).unwrap()));
        assert!(!job.accepts_applications(Utc.with_ymd_and_hms(2030, 7, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_draft_validation() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        assert!(JobDraft::new("", "desc").validate(now).is_err());
        assert!(JobDraft::new("Intern", " ").validate(now).is_err());
        assert!(JobDraft::new("Intern", "desc")
            .with_deadline(Utc.with_ymd_and_hms(2029, 1, 1, 0, 0, 0).unwrap())
            .validate(now)
            .is_err());
        assert!(JobDraft::new("Intern", "desc").validate(now).is_ok());
    }

    #[test]
    fn test_application_status_parse() {
        assert_eq!(
            "Shortlisted".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Shortlisted
        );
        assert!("hired".parse::<ApplicationStatus>().is_err());
        assert!(ApplicationStatus::Withdrawn.is_final());
    }

    #[test]
    fn test_analytics_defaults_and_rate() {
        let analytics: PlacementAnalytics =
            serde_json::from_value(json!({"totalStudents": 200, "placedStudents": 50})).unwrap();
        assert_eq!(analytics.open_jobs, 0);
        assert!((analytics.placement_rate() - 25.0).abs() < f64::EPSILON);
        assert_eq!(PlacementAnalytics::default().placement_rate(), 0.0);
    }

    #[test]
    fn test_user_summary_defaults_active() {
        let user: UserSummary = serde_json::from_value(json!({
            "id": "u1", "name": "Priya", "email": "priya@college.test", "role": "student"
        }))
        .unwrap();
        assert!(user.active);
        assert_eq!(user.role, Role::Student);
    }
}
