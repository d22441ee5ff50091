//! Row mapping for the tools sheet

use calamine::Data;

use super::values::{cell, display, int, text};
use crate::models::{RiskScores, Tool};
use crate::slug::slugify;

/// Column indices of the tools sheet
mod cols {
    pub const NAME: usize = 0;
    pub const CATEGORY: usize = 1;
    pub const PROVIDER: usize = 2;
    pub const HQ_COUNTRY: usize = 3;
    pub const DATA_HOSTING: usize = 4;
    pub const JURISDICTION: usize = 5;
    pub const CONTINUITY: usize = 6;
    pub const SURVEILLANCE: usize = 7;
    pub const LOCK_IN: usize = 8;
    pub const COST_EXPOSURE: usize = 9;
    pub const TOTAL: usize = 10;
    pub const RISK_LEVEL: usize = 11;
    pub const KEY_RISKS: usize = 12;
    pub const LAST_REVIEWED: usize = 13;
}

/// Build a Tool from one data row
pub fn tool_from_row(row: &[Data]) -> Tool {
    let name = display(cell(row, cols::NAME));
    let slug = slugify(&name);

    Tool {
        name,
        slug,
        category: text(cell(row, cols::CATEGORY)),
        provider: text(cell(row, cols::PROVIDER)),
        hq_country: text(cell(row, cols::HQ_COUNTRY)),
        data_hosting: text(cell(row, cols::DATA_HOSTING)),
        scores: RiskScores {
            jurisdiction: int(cell(row, cols::JURISDICTION)),
            continuity: int(cell(row, cols::CONTINUITY)),
            surveillance: int(cell(row, cols::SURVEILLANCE)),
            lock_in: int(cell(row, cols::LOCK_IN)),
            cost_exposure: int(cell(row, cols::COST_EXPOSURE)),
        },
        total: int(cell(row, cols::TOTAL)),
        risk_level: text(cell(row, cols::RISK_LEVEL)),
        key_risks: text(cell(row, cols::KEY_RISKS)),
        last_reviewed: text(cell(row, cols::LAST_REVIEWED)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    #[test]
    fn test_full_row() {
        let row = vec![
            s("Microsoft 365"),
            s("Productivity"),
            s("Microsoft"),
            s("USA"),
            s("US/EU"),
            Data::Float(4.0),
            Data::Float(4.0),
            Data::Int(3),
            Data::Float(5.0),
            Data::Float(4.0),
            Data::Float(20.0),
            s("High"),
            s("CLOUD Act exposure"),
            s("2025-02"),
        ];

        let tool = tool_from_row(&row);
        assert_eq!(tool.name, "Microsoft 365");
        assert_eq!(tool.slug, "microsoft-365");
        assert_eq!(tool.category, "Productivity");
        assert_eq!(tool.data_hosting, "US/EU");
        assert_eq!(
            tool.scores,
            RiskScores {
                jurisdiction: 4,
                continuity: 4,
                surveillance: 3,
                lock_in: 5,
                cost_exposure: 4,
            }
        );
        assert_eq!(tool.total, 20);
        assert_eq!(tool.risk_level, "High");
        assert_eq!(tool.key_risks, "CLOUD Act exposure");
        assert_eq!(tool.last_reviewed, "2025-02");
    }

    #[test]
    fn test_short_row_defaults() {
        let row = vec![s("Trello"), s("Project management")];

        let tool = tool_from_row(&row);
        assert_eq!(tool.slug, "trello");
        assert_eq!(tool.provider, "");
        assert_eq!(tool.scores, RiskScores::default());
        assert_eq!(tool.total, 0);
        assert_eq!(tool.last_reviewed, "");
    }

    #[test]
    fn test_numeric_name_is_kept() {
        let row = vec![Data::Int(0)];
        assert_eq!(tool_from_row(&row).name, "0");
    }
}
