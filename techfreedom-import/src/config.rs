//! Process-level configuration: `.env` loading and log setup

use std::path::PathBuf;

/// Environment variables read as flag fallbacks
pub mod env_vars {
    pub const URL: &str = "TECHFREEDOM_URL";
    pub const EMAIL: &str = "TECHFREEDOM_EMAIL";
    pub const PASSWORD: &str = "TECHFREEDOM_PASSWORD";
    pub const XLSX: &str = "TECHFREEDOM_XLSX";
}

/// Load `.env` from the working directory (or a parent) if there is one
///
/// Must run before argument parsing so the variables can stand in for flags,
/// which also means before logging is up; the loaded path is returned for
/// logging later.
pub fn load_env() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(e) if e.not_found() => None,
        Err(e) => {
            eprintln!("Warning: ignoring unreadable .env file: {}", e);
            None
        }
    }
}

/// Log filter for a `-v` count; RUST_LOG takes precedence when set
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_logging(verbose: u8) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(verbose)))
        .format_timestamp(None)
        .init();
}
