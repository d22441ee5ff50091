//! Row mapping for the alternatives sheet

use calamine::Data;

use super::values::{cell, display, int, select, text};
use crate::models::{Alternative, RiskScores};
use crate::slug::{slugify, slugify_list};

/// Column indices of the alternatives sheet
mod cols {
    pub const NAME: usize = 0;
    pub const CATEGORY: usize = 1;
    pub const ALTERNATIVE_TO: usize = 2;
    pub const PROVIDER: usize = 3;
    pub const HQ_COUNTRY: usize = 4;
    pub const OPEN_SOURCE: usize = 5;
    pub const SELF_HOSTABLE: usize = 6;
    pub const DATA_HOSTING: usize = 7;
    pub const JURISDICTION: usize = 8;
    pub const CONTINUITY: usize = 9;
    pub const SURVEILLANCE: usize = 10;
    pub const LOCK_IN: usize = 11;
    pub const COST_EXPOSURE: usize = 12;
    pub const TOTAL: usize = 13;
    pub const APPROX_COST: usize = 14;
    pub const MIGRATION_DIFFICULTY: usize = 15;
    pub const TRADEOFFS: usize = 16;
    pub const LAST_REVIEWED: usize = 17;
}

/// Build an Alternative from one data row
pub fn alternative_from_row(row: &[Data]) -> Alternative {
    let name = display(cell(row, cols::NAME));
    let slug = slugify(&name);

    Alternative {
        name,
        slug,
        category: text(cell(row, cols::CATEGORY)),
        alternative_to: slugify_list(&text(cell(row, cols::ALTERNATIVE_TO))),
        provider: text(cell(row, cols::PROVIDER)),
        hq_country: text(cell(row, cols::HQ_COUNTRY)),
        open_source: select(cell(row, cols::OPEN_SOURCE)),
        self_hostable: select(cell(row, cols::SELF_HOSTABLE)),
        data_hosting: text(cell(row, cols::DATA_HOSTING)),
        scores: RiskScores {
            jurisdiction: int(cell(row, cols::JURISDICTION)),
            continuity: int(cell(row, cols::CONTINUITY)),
            surveillance: int(cell(row, cols::SURVEILLANCE)),
            lock_in: int(cell(row, cols::LOCK_IN)),
            cost_exposure: int(cell(row, cols::COST_EXPOSURE)),
        },
        total: int(cell(row, cols::TOTAL)),
        approx_cost: text(cell(row, cols::APPROX_COST)),
        migration_difficulty: text(cell(row, cols::MIGRATION_DIFFICULTY)),
        tradeoffs: text(cell(row, cols::TRADEOFFS)),
        last_reviewed: text(cell(row, cols::LAST_REVIEWED)),
    }
}
