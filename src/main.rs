//! portal-rbac - inspect roles and evaluate access decisions
//!
//! Loads configuration, validates the role registry and answers questions
//! about roles, departments and ad-hoc profiles from the command line.

#![allow(missing_docs)]

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use portal_rbac::config::Config;
use portal_rbac::utils::logging::init_logging;
use portal_rbac::{
    AccessError, AccountStatus, Language, Requirement, Result, RoleKey, RoleRegistry, UserProfile,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "portal-rbac", version, about = "Inspect portal roles and permissions")]
struct Cli {
    /// YAML configuration file; environment variables are used when omitted
    #[arg(long, short, env = "PORTAL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List roles, most senior first
    Roles {
        #[arg(long)]
        lang: Option<Language>,
    },
    /// List departments
    Departments {
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Print the effective permissions of a profile
    Permissions(ProfileArgs),
    /// Evaluate a role or permission requirement for a profile
    Check {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Permission the profile must hold
        #[arg(long, conflicts_with = "requires_role", required_unless_present = "requires_role")]
        permission: Option<String>,
        /// Role the profile must equal or outrank
        #[arg(long)]
        requires_role: Option<String>,
        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate configuration and the role registry
    Validate,
}

#[derive(Debug, Args)]
struct ProfileArgs {
    /// Role key stored on the profile
    #[arg(long)]
    role: Option<String>,
    /// Custom permission grants, repeatable
    #[arg(long = "custom")]
    custom_permissions: Vec<String>,
    /// Account status
    #[arg(long, default_value = "active")]
    status: AccountStatus,
    /// Clear the legacy active flag
    #[arg(long)]
    inactive: bool,
}

impl ProfileArgs {
    fn to_profile(&self) -> UserProfile {
        let mut profile = UserProfile::first_login("cli", None, RoleKey::SupportStaff, Utc::now());
        profile.role = self.role.clone();
        profile.custom_permissions = self.custom_permissions.clone();
        profile.status = self.status;
        profile.is_active = !self.inactive;
        profile
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Returns `false` when a `check` is denied
async fn run(cli: Cli) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };
    init_logging(config.logging())?;

    let registry = RoleRegistry::global();
    registry.validate()?;
    debug!("Registry ready");

    let default_language = config.access().default_language;

    match cli.command {
        Command::Roles { lang } => {
            let lang = lang.unwrap_or(default_language);
            for role in registry.roles_sorted_by_level() {
                println!(
                    "{:>2}  {:<18} {:<28} {:<7} {}",
                    role.level,
                    role.key,
                    role.label(lang),
                    role.color,
                    role.permissions.len()
                );
            }
        }
        Command::Departments { lang } => {
            let lang = lang.unwrap_or(default_language);
            for department in registry.departments() {
                println!("{:<5} {}", department.code, department.name(lang));
            }
        }
        Command::Permissions(args) => {
            let profile = args.to_profile();
            if let Some(role) = profile.role_key() {
                if registry.get_role_config(role).is_none() {
                    eprintln!("warning: role '{}' is not registered", role);
                }
            }
            for permission in registry.get_effective_permissions(Some(&profile)) {
                println!("{}", permission);
            }
        }
        Command::Check {
            profile,
            permission,
            requires_role,
            json,
        } => {
            let profile = profile.to_profile();
            let requirement = match (permission, requires_role) {
                (Some(permission), _) => Requirement::Permission(permission),
                (None, Some(role)) => Requirement::Role(role),
                (None, None) => {
                    return Err(AccessError::validation(
                        "Either --permission or --requires-role is required",
                    ));
                }
            };

            let check = registry.authorize(Some(&profile), &requirement);
            if json {
                println!("{}", serde_json::to_string_pretty(&check)?);
            } else if check.granted {
                println!("granted");
            } else {
                let reason = check
                    .denial_reason
                    .as_ref()
                    .map(|r| r.to_string())
                    .unwrap_or_default();
                println!("denied: {}", reason);
            }
            return Ok(check.granted);
        }
        Command::Validate => {
            println!(
                "configuration and registry are valid ({} roles, {} permissions)",
                registry.roles_sorted_by_level().len(),
                registry.list_permissions().len()
            );
        }
    }

    Ok(true)
}
