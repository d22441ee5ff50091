//! Record types shared by the spreadsheet reader, the JSON export and the
//! PocketBase import.
//!
//! Every type serializes with camelCase keys, which is the shape both the
//! static site and the PocketBase collections expect.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// A tool row from the first sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    pub slug: String,
    pub category: String,
    pub provider: String,
    pub hq_country: String,
    pub data_hosting: String,
    #[serde(flatten)]
    pub scores: RiskScores,
    pub total: i64,
    /// Low / Medium / High / Critical, taken verbatim from the sheet
    pub risk_level: String,
    pub key_risks: String,
    pub last_reviewed: String,
}

/// A tool as published in `tools.json`
///
/// The static site has no use for `lastReviewed`, so it stays import-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedTool<'a> {
    pub name: &'a str,
    pub slug: &'a str,
    pub category: &'a str,
    pub provider: &'a str,
    pub hq_country: &'a str,
    pub data_hosting: &'a str,
    #[serde(flatten)]
    pub scores: RiskScores,
    pub total: i64,
    pub risk_level: &'a str,
    pub key_risks: &'a str,
}

/// An alternative row from the second sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub name: String,
    pub slug: String,
    pub category: String,
    /// Slugs of the tools this replaces, in sheet order
    pub alternative_to: Vec<String>,
    pub provider: String,
    pub hq_country: String,
    pub open_source: String,
    pub self_hostable: String,
    pub data_hosting: String,
    #[serde(flatten)]
    pub scores: RiskScores,
    pub total: i64,
    pub approx_cost: String,
    pub migration_difficulty: String,
    pub tradeoffs: String,
    pub last_reviewed: String,
}

/// The five risk dimensions, each nominally scored 1-5 (0 when the cell was unusable)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskScores {
    pub jurisdiction: i64,
    pub continuity: i64,
    pub surveillance: i64,
    pub lock_in: i64,
    pub cost_exposure: i64,
}

/// An archetype as written to `archetypes.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub tool_slugs: Vec<String>,
}

/// Export wrapper that prefixes a record with its 1-based row ordinal
#[derive(Debug, Clone, Serialize)]
pub struct Numbered<T> {
    pub id: usize,
    #[serde(flatten)]
    pub record: T,
}

/// Number records from 1 in their current order
pub fn numbered<T: Clone>(records: &[T]) -> Vec<Numbered<T>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| Numbered {
            id: i + 1,
            record: record.clone(),
        })
        .collect()
}

impl Tool {
    pub fn published(&self) -> PublishedTool<'_> {
        PublishedTool {
            name: &self.name,
            slug: &self.slug,
            category: &self.category,
            provider: &self.provider,
            hq_country: &self.hq_country,
            data_hosting: &self.data_hosting,
            scores: self.scores,
            total: self.total,
            risk_level: &self.risk_level,
            key_risks: &self.key_risks,
        }
    }

    /// Body for `POST /api/collections/tools/records`
    pub fn to_record(&self) -> Result<Value> {
        serde_json::to_value(self).context("Failed to serialize tool record")
    }
}

impl Alternative {
    /// Body for `POST /api/collections/alternatives/records`
    ///
    /// The collection stores `alternativeTo` as a text field, so the slug list
    /// is sent comma-joined.
    pub fn to_record(&self) -> Result<Value> {
        let mut record =
            serde_json::to_value(self).context("Failed to serialize alternative record")?;
        if let Value::Object(ref mut map) = record {
            map.insert(
                "alternativeTo".to_string(),
                Value::String(self.alternative_to.join(",")),
            );
        }
        Ok(record)
    }
}
