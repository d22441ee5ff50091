//! Import command handler

use is_terminal::IsTerminal;

use anyhow::{Context, Result, bail};
use colored::*;
use log::{debug, info};

use crate::api::{ClientConfig, PocketBaseClient};
use crate::cli::{ImportArgs, missing_credentials};
use crate::services::import::{Credentials, run_import};

/// Set up collections and import the workbook into PocketBase
pub async fn handle_import_command(args: ImportArgs) -> Result<()> {
    if !args.xlsx.exists() && !args.options.skip_import {
        bail!("Workbook does not exist: {}", args.xlsx.display());
    }

    let password = resolve_password(args.password, &args.email)?;
    let credentials = Credentials {
        email: args.email,
        password,
    };

    let config = ClientConfig::builder().timeout(args.timeout).build();
    debug!("HTTP client config: {:?}", config);
    let mut client = PocketBaseClient::with_config(&args.url, config)?;
    let base_url = client.base_url().to_string();

    println!("PocketBase: {}", base_url.cyan());

    let report = run_import(
        &mut client,
        &base_url,
        &args.xlsx,
        &credentials,
        args.options,
    )
    .await?;

    info!(
        "Created {} collections ({} already existed)",
        report.collections_created.len(),
        report.collections_existing.len()
    );
    if !report.missing_tool_slugs.is_empty() {
        info!(
            "{} archetype tool slugs did not match an imported tool",
            report.missing_tool_slugs.len()
        );
    }

    Ok(())
}

/// Use the supplied password, or prompt for one when attached to a terminal
fn resolve_password(password: Option<String>, email: &str) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }

    if !std::io::stdin().is_terminal() {
        return Err(missing_credentials().into());
    }

    rpassword::prompt_password(format!("Password for {}: ", email))
        .context("Failed to read password")
}
