//! Read tool and alternative rows from the risk workbook
//!
//! Sheets are addressed by position, not name:
//! - sheet 1 -> tools
//! - sheet 2 -> alternatives
//!
//! Row 1 is a header. Data runs from row 2 down to the first row whose
//! name column is empty; anything below that is ignored.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use log::debug;

use super::alternatives::alternative_from_row;
use super::tools::tool_from_row;
use super::values::is_blank;
use crate::models::{Alternative, Tool};

/// Position of the tools sheet
pub const TOOLS_SHEET: usize = 0;
/// Position of the alternatives sheet
pub const ALTERNATIVES_SHEET: usize = 1;

/// An opened risk workbook
pub struct Workbook {
    path: PathBuf,
    inner: Xlsx<BufReader<File>>,
}

impl Workbook {
    /// Open an .xlsx file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let inner: Xlsx<_> = open_workbook(path)
            .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    /// Read every tool from the first sheet
    pub fn read_tools(&mut self) -> Result<Vec<Tool>> {
        let rows = self.data_rows(TOOLS_SHEET)?;
        Ok(rows.iter().map(|row| tool_from_row(row)).collect())
    }

    /// Read every alternative from the second sheet
    pub fn read_alternatives(&mut self) -> Result<Vec<Alternative>> {
        let rows = self.data_rows(ALTERNATIVES_SHEET)?;
        Ok(rows.iter().map(|row| alternative_from_row(row)).collect())
    }

    /// Data rows of the sheet at `index`, columns aligned to the sheet's column A
    pub fn data_rows(&mut self, index: usize) -> Result<Vec<Vec<Data>>> {
        let sheet_name = self
            .inner
            .sheet_names()
            .get(index)
            .cloned()
            .with_context(|| {
                format!(
                    "Excel file {} has no sheet at position {}",
                    self.path.display(),
                    index + 1
                )
            })?;

        let range = self
            .inner
            .worksheet_range(&sheet_name)
            .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

        let rows = data_rows(&range);
        debug!("Sheet '{}': {} data rows", sheet_name, rows.len());
        Ok(rows)
    }
}

/// Extract data rows from a worksheet range
///
/// calamine ranges start at the first used cell, which is not always A1, so
/// rows are left-padded back to absolute column positions.
fn data_rows(range: &Range<Data>) -> Vec<Vec<Data>> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    // Row 2 lies above the used range, so the data block is empty
    if start_row > 1 {
        return Vec::new();
    }

    let header_rows = if start_row == 0 { 1 } else { 0 };
    let pad = start_col as usize;

    range
        .rows()
        .skip(header_rows)
        .map(|row| {
            let mut cells = vec![Data::Empty; pad];
            cells.extend_from_slice(row);
            cells
        })
        .take_while(|cells| !is_blank(cells.first()))
        .collect()
}
