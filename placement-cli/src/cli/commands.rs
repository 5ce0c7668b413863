// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use placement::Role;
use std::path::PathBuf;

/// Placement portal command-line client
#[derive(Parser, Debug)]
#[command(name = "placement")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_parser = parse_log_level)]
    pub log_level: Option<log::Level>,
}

/// Connection options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Backend base URL (overrides PLACEMENT_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Directory holding saved sessions (overrides PLACEMENT_STORE_DIR)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in as a role and keep the session
    Login {
        /// Role to sign in as
        #[arg(short, long)]
        role: Role,

        #[arg(short, long)]
        email: String,

        /// Password (prompted for when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget a saved session
    Logout {
        #[arg(short, long, required_unless_present = "all", conflicts_with = "all")]
        role: Option<Role>,

        /// Forget every role's session
        #[arg(long)]
        all: bool,
    },

    /// Show saved sessions
    Whoami {
        #[arg(short, long)]
        role: Option<Role>,
    },

    /// GET a backend path as a role
    Get {
        #[arg(short, long)]
        role: Role,

        /// Path relative to the API base, e.g. /api/student/jobs
        path: String,
    },

    /// POST to a backend path as a role
    Post {
        #[arg(short, long)]
        role: Role,

        path: String,

        /// JSON request body
        #[arg(short, long)]
        data: Option<String>,
    },

    /// List jobs (open jobs for students, own postings for employers)
    Jobs {
        #[arg(short, long, default_value = "student")]
        role: Role,
    },

    /// Show version information
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

fn parse_log_level(value: &str) -> Result<log::Level, String> {
    value
        .parse()
        .map_err(|_| format!("invalid log level '{}'", value))
}
