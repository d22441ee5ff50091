//! Cell coercions for spreadsheet values
//!
//! The sheets are hand-maintained, so every coercion is total: a cell that
//! cannot be read as the wanted type falls back to an empty string, `0` or
//! `"No"` instead of failing the row.

use calamine::Data;
use chrono::{NaiveDateTime, Timelike};

static EMPTY: Data = Data::Empty;

/// Get a cell by column index, treating cells past the end of the row as empty
pub fn cell(row: &[Data], col: usize) -> &Data {
    row.get(col).unwrap_or(&EMPTY)
}

/// Whether a cell terminates the data block when found in the name column
pub fn is_blank(cell: Option<&Data>) -> bool {
    match cell {
        None | Some(Data::Empty) => true,
        Some(Data::String(s)) => s.is_empty(),
        _ => false,
    }
}

/// Render any cell as a string
///
/// Whole-number floats lose their fractional part ("3" rather than "3.0"),
/// booleans render as "True"/"False", dates as "YYYY-MM-DD HH:MM:SS" and
/// time-only cells as "HH:MM:SS".
pub fn display(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => {
                let time_only = dt.is_datetime() && (0.0..1.0).contains(&dt.as_f64());
                format_datetime(&datetime, time_only)
            }
            None => dt.to_string(),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// Cells holding only a time of day (serial below 1) drop the date part;
/// fractional seconds are shown as microseconds only when present.
fn format_datetime(datetime: &NaiveDateTime, time_only: bool) -> String {
    let time_format = if datetime.nanosecond() == 0 {
        "%H:%M:%S"
    } else {
        "%H:%M:%S%.6f"
    };

    if time_only {
        datetime.format(time_format).to_string()
    } else {
        format!(
            "{} {}",
            datetime.format("%Y-%m-%d"),
            datetime.format(time_format)
        )
    }
}

/// Text column value: falsy cells (empty, zero, false) become ""
pub fn text(cell: &Data) -> String {
    match cell {
        Data::Int(0) | Data::Bool(false) => String::new(),
        Data::Float(f) if *f == 0.0 => String::new(),
        other => display(other),
    }
}

/// Integer column value, 0 when the cell holds nothing numeric
///
/// Floats are truncated toward zero; numeric strings are parsed after trimming.
pub fn int(cell: &Data) -> i64 {
    match cell {
        Data::Int(i) => *i,
        Data::Float(f) if f.is_finite() => f.trunc() as i64,
        Data::Bool(b) => i64::from(*b),
        Data::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Normalise a Yes/No/Partially/N/A style cell
///
/// Unknown and empty values fall back to "No".
pub fn select(cell: &Data) -> String {
    let s = text(cell).to_lowercase();
    let label = match s.trim() {
        "yes" | "true" => "Yes",
        "no" | "false" => "No",
        "partially" => "Partially",
        "n/a" | "na" => "N/A",
        _ => "No",
    };
    label.to_string()
}
