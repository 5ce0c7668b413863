// Copyright (c) 2024-2025 Placement Portal Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! CLI command handlers for Placement

use colored::Colorize;
use placement::{ApiRequest, PortalConfig, Role, SessionProvider, StorageScope};
use placement_sdk::Portal;
use serde_json::Value;
use std::error::Error;
use std::path::PathBuf;

use super::commands::{GlobalArgs, OutputFormat};
use super::output::OutputFormatter;

type CliResult<T = ()> = Result<T, Box<dyn Error>>;

const STORE_DIR_NAME: &str = ".placement";

/// Apply command-line overrides to `base`
///
/// Sessions made from the command line must outlive the process, so every
/// role without an explicit scope override is stored persistently.
fn resolve_config(mut base: PortalConfig, global: &GlobalArgs) -> PortalConfig {
    if let Some(url) = &global.api_url {
        base = base.with_api_base_url(url.clone());
    }
    if let Some(store) = &global.store {
        base = base.with_store_dir(store.clone());
    } else if base.store_dir.is_none() {
        base = base.with_store_dir(default_store_dir());
    }
    for role in Role::ALL {
        if !base.role_scopes.contains_key(&role) {
            base = base.with_scope(role, StorageScope::Persistent);
        }
    }
    base
}

fn default_store_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORE_DIR_NAME)
}

fn open_portal(global: &GlobalArgs) -> CliResult<Portal> {
    let config = resolve_config(PortalConfig::from_env()?, global);
    log::debug!(
        "Using {} with sessions in {:?}",
        config.api_base_url,
        config.store_dir
    );
    Ok(Portal::open(config)?)
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

/// Pass `result` through, telling the user how to sign in again when the
/// failure was an authorization one
fn relogin_hint<T>(role: Role, result: placement_sdk::Result<T>) -> CliResult<T> {
    result.map_err(|e| {
        if e.is_unauthorized() {
            eprintln!(
                "{}",
                format!(
                    "No valid {} session. Sign in with: placement login --role {} --email <email>",
                    role, role
                )
                .yellow()
            );
        }
        e.into()
    })
}

/// Handle the login command
pub fn handle_login(
    global: &GlobalArgs,
    role: Role,
    email: String,
    password: Option<String>,
    format: OutputFormat,
) -> CliResult {
    let password = match password {
        Some(password) => password,
        None => {
            print!("Password: ");
            std::io::Write::flush(&mut std::io::stdout())?;
            rpassword::read_password()?
        }
    };

    let portal = open_portal(global)?;
    let session = runtime()?.block_on(portal.login(role, &email, &password));
    let session = match session {
        Ok(session) => session,
        Err(e) => {
            println!("{}", format!("Login failed: {}", e).red());
            return Err(e.into());
        }
    };

    match format {
        OutputFormat::Json => {
            println!("{}", OutputFormatter::sessions(&[session], format));
        }
        OutputFormat::Table => {
            let name = session.user_record.display_name().unwrap_or(&email);
            println!(
                "{}",
                format!("Signed in as {} ({})", role, name).bold().green()
            );
        }
    }
    Ok(())
}

/// Handle the logout command
pub fn handle_logout(global: &GlobalArgs, role: Option<Role>, all: bool) -> CliResult {
    let portal = open_portal(global)?;

    if all {
        portal.context().sessions().clear_all();
        println!("{}", "Signed out of every role".green());
        return Ok(());
    }
    if let Some(role) = role {
        portal.logout(role);
        println!("{}", format!("Signed out of {}", role).green());
    }
    Ok(())
}

/// Handle the whoami command
pub fn handle_whoami(global: &GlobalArgs, role: Option<Role>, format: OutputFormat) -> CliResult {
    let portal = open_portal(global)?;
    let sessions = portal.context().sessions();

    let roles = match role {
        Some(role) => vec![role],
        None => sessions.active_roles(),
    };
    let active: Vec<_> = roles.into_iter().filter_map(|r| sessions.load(r)).collect();

    print!("{}", OutputFormatter::sessions(&active, format));
    Ok(())
}

/// Handle the get command
pub fn handle_get(global: &GlobalArgs, role: Role, path: String, format: OutputFormat) -> CliResult {
    send_and_print(global, role, ApiRequest::get(path), format)
}

/// Handle the post command
pub fn handle_post(
    global: &GlobalArgs,
    role: Role,
    path: String,
    data: Option<String>,
    format: OutputFormat,
) -> CliResult {
    let mut request = ApiRequest::post(path);
    if let Some(data) = data {
        let body: Value =
            serde_json::from_str(&data).map_err(|e| format!("--data is not valid JSON: {}", e))?;
        request = request.json(body);
    }
    send_and_print(global, role, request, format)
}

fn send_and_print(
    global: &GlobalArgs,
    role: Role,
    request: ApiRequest,
    format: OutputFormat,
) -> CliResult {
    let portal = open_portal(global)?;
    let client = portal.context().client().clone();

    let response = runtime()?.block_on(client.send(role, request));
    let response = relogin_hint(role, response.map_err(placement_sdk::Error::from))?;
    let value: Value = response.json()?;

    print!("{}", OutputFormatter::value(&value, format));
    Ok(())
}

/// Handle the jobs command
pub fn handle_jobs(global: &GlobalArgs, role: Role, format: OutputFormat) -> CliResult {
    let portal = open_portal(global)?;
    let rt = runtime()?;

    let jobs = match role {
        Role::Student => {
            let student = relogin_hint(role, portal.student())?;
            relogin_hint(role, rt.block_on(student.jobs()))?
        }
        Role::Employer => {
            let employer = relogin_hint(role, portal.employer())?;
            relogin_hint(role, rt.block_on(employer.postings()))?
        }
        other => {
            return Err(format!("jobs is available to students and employers, not {}", other).into())
        }
    };

    print!("{}", OutputFormatter::jobs(&jobs, format));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_sessions_default_to_persistent() {
        let config = resolve_config(
            PortalConfig::default().with_scope(Role::Admin, StorageScope::Session),
            &GlobalArgs::default(),
        );

        assert_eq!(config.scope_for(Role::Faculty), StorageScope::Persistent);
        assert_eq!(config.scope_for(Role::Admin), StorageScope::Session);
        assert!(config.store_dir.unwrap().ends_with(STORE_DIR_NAME));
    }

    #[test]
    fn test_flags_override_config() {
        let global = GlobalArgs {
            api_url: Some("https://placements.college.test".to_string()),
            store: Some(PathBuf::from("/tmp/placement-sessions")),
        };
        let config = resolve_config(
            PortalConfig::default().with_store_dir("/var/lib/placement"),
            &global,
        );

        assert_eq!(config.api_base_url, "https://placements.college.test");
        assert_eq!(
            config.store_dir,
            Some(PathBuf::from("/tmp/placement-sessions"))
        );
    }
}
