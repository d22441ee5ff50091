//! Static JSON export: tools.json, archetypes.json and alternatives.json

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::*;
use serde::Serialize;

use crate::catalog::build_archetypes;
use crate::models::numbered;
use crate::sheet::Workbook;

pub const TOOLS_FILE: &str = "tools.json";
pub const ARCHETYPES_FILE: &str = "archetypes.json";
pub const ALTERNATIVES_FILE: &str = "alternatives.json";

/// What an export produced
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub tools: usize,
    pub archetypes: usize,
    pub alternatives: usize,
    /// Files written, in write order
    pub files: Vec<PathBuf>,
}

/// Read the workbook and write the three JSON files into `output_dir`
///
/// The directory is created if needed; existing files are overwritten.
pub fn export_json(xlsx: &Path, output_dir: &Path) -> Result<ExportSummary> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    println!("\nReading xlsx...");
    let mut workbook = Workbook::open(xlsx)?;

    let tools = workbook.read_tools()?;
    println!("  Found {} tools", tools.len());

    let archetypes = build_archetypes(&tools);
    println!("  Built {} archetypes", archetypes.len());

    let alternatives = workbook.read_alternatives()?;
    println!("  Found {} alternatives", alternatives.len());

    let published: Vec<_> = tools.iter().map(|tool| tool.published()).collect();
    let files = vec![
        write_json(&output_dir.join(TOOLS_FILE), &numbered(&published))?,
        write_json(&output_dir.join(ARCHETYPES_FILE), &archetypes)?,
        write_json(&output_dir.join(ALTERNATIVES_FILE), &numbered(&alternatives))?,
    ];

    println!("\n{}", "Done! Static JSON files ready for deployment.".green());

    Ok(ExportSummary {
        tools: tools.len(),
        archetypes: archetypes.len(),
        alternatives: alternatives.len(),
        files,
    })
}

/// Pretty-print `value` to `path` (2-space indent, UTF-8, no ASCII escaping)
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("  Wrote {}", path.display().to_string().cyan());
    Ok(path.to_path_buf())
}
