// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Placement SDK - role dashboards for the placement portal
//!
//! Typed, role-scoped access to the portal backend on top of the
//! [`placement`] session layer. Each role gets a dashboard that can only be
//! opened with a valid session for that role:
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │ Portal                                     │
//! │   student() / employer() / faculty() /     │
//! │   admin()  ── route guard ──┐              │
//! ├─────────────────────────────┴──────────────┤
//! │ Dashboards (jobs, applications, approvals, │
//! │ users, analytics)                          │
//! ├────────────────────────────────────────────┤
//! │ placement: credential store, guard,        │
//! │ authenticated client, page scope           │
//! └────────────────────────────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - [`portal`] - Entry point, login and dashboard access
//! - [`dashboard`] - Role dashboards
//! - [`models`] - Jobs, applications, approvals, users, analytics
//! - [`profiles`] - Typed user records per role
//! - [`endpoints`] - Backend paths
//! - [`error`] - Error types and handling

// Re-export the session layer types dashboards are used with
pub use placement::{PortalConfig, PortalContext, Role, Session};

pub mod dashboard;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod portal;
pub mod profiles;

pub use dashboard::{
    AdminDashboard, DashboardPage, EmployerDashboard, FacultyDashboard, StudentDashboard,
    StudentOverview,
};
pub use error::{Error, Result};
pub use models::{
    Application, ApplicationStatus, Approval, ApprovalDecision, ApprovalKind, Job, JobDraft,
    JobStatus, PlacementAnalytics, UserSummary,
};
pub use portal::Portal;
pub use profiles::{AdminProfile, EmployerProfile, FacultyProfile, Profile, StudentProfile};
