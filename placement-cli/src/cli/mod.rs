// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI module for Placement
//!
//! Signs in to the portal per role, keeps those sessions between runs and
//! issues authenticated calls on their behalf.

pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_get, handle_jobs, handle_login, handle_logout, handle_post, handle_whoami,
};
