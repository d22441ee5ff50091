//! Command-line interface

pub mod commands;

use std::path::PathBuf;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};

use crate::config::env_vars;
use crate::services::import::ImportOptions;

#[derive(Parser, Debug)]
#[command(
    name = "techfreedom-import",
    version,
    about = "TechFreedom PocketBase setup & data import",
    after_help = "Without --export-json, --url, --email and --password are required \
                  (the password is prompted for on a terminal)."
)]
pub struct Cli {
    /// PocketBase URL (e.g. https://api.techfreedom.eu)
    #[arg(long, env = env_vars::URL)]
    pub url: Option<String>,

    /// Admin email
    #[arg(long, env = env_vars::EMAIL)]
    pub email: Option<String>,

    /// Admin password
    #[arg(long, env = env_vars::PASSWORD, hide_env_values = true)]
    pub password: Option<String>,

    /// Path to techfreedom-database.xlsx
    #[arg(long, env = env_vars::XLSX)]
    pub xlsx: PathBuf,

    /// Export tools.json, archetypes.json and alternatives.json to DIR (no PocketBase needed)
    #[arg(long, value_name = "DIR")]
    pub export_json: Option<PathBuf>,

    /// Skip collection creation
    #[arg(long)]
    pub skip_collections: bool,

    /// Skip data import
    #[arg(long)]
    pub skip_import: bool,

    /// HTTP request timeout
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// What the invocation asks for
#[derive(Debug)]
pub enum Mode {
    Export { xlsx: PathBuf, output_dir: PathBuf },
    Import(ImportArgs),
}

/// Settings for a PocketBase import; the password may still need prompting
#[derive(Debug)]
pub struct ImportArgs {
    pub url: String,
    pub email: String,
    pub password: Option<String>,
    pub xlsx: PathBuf,
    pub options: ImportOptions,
    pub timeout: Duration,
}

impl Cli {
    /// Resolve the run mode, rejecting imports without a URL or email
    pub fn into_mode(self) -> Result<Mode, clap::Error> {
        if let Some(output_dir) = self.export_json {
            return Ok(Mode::Export {
                xlsx: self.xlsx,
                output_dir,
            });
        }

        let (Some(url), Some(email)) = (non_empty(self.url), non_empty(self.email)) else {
            return Err(missing_credentials());
        };

        Ok(Mode::Import(ImportArgs {
            url,
            email,
            password: non_empty(self.password),
            xlsx: self.xlsx,
            options: ImportOptions {
                skip_collections: self.skip_collections,
                skip_import: self.skip_import,
            },
            timeout: Duration::from_secs(self.timeout),
        }))
    }
}

/// Treat an empty flag or variable (`TECHFREEDOM_URL=`) as unset
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Usage error for an import missing its credentials
pub fn missing_credentials() -> clap::Error {
    Cli::command().error(
        ErrorKind::MissingRequiredArgument,
        "--url, --email, and --password are required for PocketBase import (or use --export-json)",
    )
}
