// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Backend paths used by the dashboards

use crate::error::{Error, Result};

pub const STUDENT_JOBS: &str = "/api/student/jobs";
pub const STUDENT_APPLICATIONS: &str = "/api/student/applications";
pub const STUDENT_RESUME: &str = "/api/student/resume";

pub const EMPLOYER_JOBS: &str = "/api/employer/jobs";
pub const EMPLOYER_APPLICATIONS: &str = "/api/employer/applications";

pub const FACULTY_APPROVALS: &str = "/api/faculty/approvals";

pub const ADMIN_USERS: &str = "/api/admin/users";
pub const ADMIN_ANALYTICS: &str = "/api/admin/analytics";

/// Check that `id` is a single path segment
///
/// Ids come from backend payloads and user input; one holding a separator or
/// a dot segment would address a different endpoint.
fn segment(id: &str) -> Result<&str> {
    let invalid = id.is_empty()
        || id == "."
        || id == ".."
        || id
            .chars()
            .any(|c| matches!(c, '/' | '\\' | '?' | '#' | '%') || c.is_whitespace() || c.is_control());
    if invalid {
        return Err(Error::Validation(format!("invalid id '{}'", id.escape_debug())));
    }
    Ok(id)
}

pub fn student_job(job_id: &str) -> Result<String> {
    Ok(format!("{}/{}", STUDENT_JOBS, segment(job_id)?))
}

pub fn student_apply(job_id: &str) -> Result<String> {
    Ok(format!("{}/{}/apply", STUDENT_JOBS, segment(job_id)?))
}

pub fn student_application(application_id: &str) -> Result<String> {
    Ok(format!("{}/{}", STUDENT_APPLICATIONS, segment(application_id)?))
}

pub fn employer_job(job_id: &str) -> Result<String> {
    Ok(format!("{}/{}", EMPLOYER_JOBS, segment(job_id)?))
}

pub fn employer_close_job(job_id: &str) -> Result<String> {
    Ok(format!("{}/{}/close", EMPLOYER_JOBS, segment(job_id)?))
}

pub fn employer_applicants(job_id: &str) -> Result<String> {
    Ok(format!("{}/{}/applications", EMPLOYER_JOBS, segment(job_id)?))
}

pub fn employer_application_status(application_id: &str) -> Result<String> {
    Ok(format!("{}/{}/status", EMPLOYER_APPLICATIONS, segment(application_id)?))
}

pub fn faculty_approval(approval_id: &str) -> Result<String> {
    Ok(format!("{}/{}", FACULTY_APPROVALS, segment(approval_id)?))
}

pub fn admin_user_status(user_id: &str) -> Result<String> {
    Ok(format!("{}/{}/status", ADMIN_USERS, segment(user_id)?))
}
