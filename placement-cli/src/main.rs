// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! Placement CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // -v wins over --log-level; RUST_LOG still applies to other targets
    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        level.to_level_filter()
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let format = cli.format;
    match cli.command {
        Commands::Version => {
            println!("{} {}", "Placement".bold().green(), placement::VERSION);
            println!("Placement portal client");
            Ok(())
        }

        Commands::Login {
            role,
            email,
            password,
        } => cli::handle_login(&cli.global, role, email, password, format),

        Commands::Logout { role, all } => cli::handle_logout(&cli.global, role, all),

        Commands::Whoami { role } => cli::handle_whoami(&cli.global, role, format),

        Commands::Get { role, path } => cli::handle_get(&cli.global, role, path, format),

        Commands::Post { role, path, data } => {
            cli::handle_post(&cli.global, role, path, data, format)
        }

        Commands::Jobs { role } => cli::handle_jobs(&cli.global, role, format),
    }
}
