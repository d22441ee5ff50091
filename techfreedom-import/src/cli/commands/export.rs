//! Export command handler

use std::path::Path;

use anyhow::{Result, bail};
use colored::*;
use log::info;

use crate::services::export::export_json;

/// Write the static JSON files for the workbook at `xlsx`
pub fn handle_export_command(xlsx: &Path, output_dir: &Path) -> Result<()> {
    if !xlsx.exists() {
        bail!("Workbook does not exist: {}", xlsx.display());
    }

    println!(
        "Exporting {} to {}",
        xlsx.display().to_string().cyan(),
        output_dir.display().to_string().cyan()
    );

    let summary = export_json(xlsx, output_dir)?;
    info!(
        "Exported {} tools, {} archetypes, {} alternatives into {} files",
        summary.tools,
        summary.archetypes,
        summary.alternatives,
        summary.files.len()
    );

    Ok(())
}
