mod api;
mod catalog;
mod cli;
mod config;
mod models;
mod services;
mod sheet;
mod slug;

use clap::Parser;
use colored::*;
use log::debug;

use cli::commands::{handle_export_command, handle_import_command};
use cli::{Cli, Mode};

#[tokio::main]
async fn main() {
    let env_file = config::load_env();
    let cli = Cli::parse();

    config::init_logging(cli.verbose);
    if let Some(path) = env_file {
        debug!("Loaded environment from {}", path.display());
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = run(cli).await {
        if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
            clap_err.exit();
        }
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.into_mode()? {
        Mode::Export { xlsx, output_dir } => handle_export_command(&xlsx, &output_dir),
        Mode::Import(args) => handle_import_command(args).await,
    }
}
