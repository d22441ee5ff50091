//! PocketBase collections created by the import, in creation order

use crate::api::models::{
    ADMIN_ONLY, AUTHENTICATED, CollectionDefinition, FieldSchema, FieldType, PUBLIC,
};

pub const TOOLS: &str = "tools";
pub const ARCHETYPES: &str = "archetypes";
pub const ASSESSMENTS: &str = "assessments";
pub const COHORTS: &str = "cohorts";
pub const SCORING_GUIDE: &str = "scoring_guide";
pub const ALTERNATIVES: &str = "alternatives";

const RISK_LEVELS: &[&str] = &["Low", "Medium", "High", "Critical"];
const DIMENSIONS: &[&str] = &[
    "jurisdiction",
    "continuity",
    "surveillance",
    "lockIn",
    "costExposure",
];

/// Every collection definition
///
/// Collections holding relations come after the collections they point at.
pub fn collections() -> Vec<CollectionDefinition> {
    vec![
        tools(),
        archetypes(),
        assessments(),
        cohorts(),
        scoring_guide(),
        alternatives(),
    ]
}

fn tools() -> CollectionDefinition {
    let mut def = CollectionDefinition::base(TOOLS)
        .field(FieldSchema::text("name").required().range(1, 200))
        .field(FieldSchema::text("slug").required().slug_pattern())
        .field(FieldSchema::text("category").required())
        .field(FieldSchema::text("provider").required())
        .field(FieldSchema::text("hqCountry"))
        .field(FieldSchema::text("dataHosting"));

    for dimension in DIMENSIONS {
        def = def.field(FieldSchema::number(*dimension).required().range(1, 5));
    }

    def.field(FieldSchema::number("total"))
        .field(FieldSchema::select("riskLevel", RISK_LEVELS))
        .field(FieldSchema::editor("keyRisks"))
        .field(FieldSchema::text("lastReviewed"))
        .read_rule(PUBLIC)
}

fn archetypes() -> CollectionDefinition {
    CollectionDefinition::base(ARCHETYPES)
        .field(FieldSchema::text("name").required())
        .field(FieldSchema::text("slug").required().slug_pattern())
        .field(FieldSchema::text("description"))
        .field(FieldSchema::relation("tools", TOOLS).required())
        .read_rule(PUBLIC)
}

/// Visitor self-assessments: anyone may submit, nobody may browse
fn assessments() -> CollectionDefinition {
    CollectionDefinition::base(ASSESSMENTS)
        .field(FieldSchema::relation("tools", TOOLS))
        .field(FieldSchema::new("scores", FieldType::Json))
        .field(FieldSchema::editor("summary"))
        .field(FieldSchema::new("email", FieldType::Email))
        .field(FieldSchema::text("shareCode").range(0, 50))
        .read_rule(ADMIN_ONLY)
        .create_rule(PUBLIC)
}

fn cohorts() -> CollectionDefinition {
    CollectionDefinition::base(COHORTS)
        .field(FieldSchema::text("name").required())
        .field(FieldSchema::new("startDate", FieldType::Date))
        .field(FieldSchema::new("lumaUrl", FieldType::Url))
        .field(FieldSchema::select("status", &["Open", "Full", "Completed"]))
        .field(FieldSchema::number("capacity"))
        .read_rule(PUBLIC)
}

fn scoring_guide() -> CollectionDefinition {
    CollectionDefinition::base(SCORING_GUIDE)
        .field(FieldSchema::text("dimension").required())
        .field(FieldSchema::number("score").required().range(1, 5))
        .field(FieldSchema::text("label").required())
        .field(FieldSchema::editor("description"))
        .read_rule(PUBLIC)
}

fn alternatives() -> CollectionDefinition {
    let mut def = CollectionDefinition::base(ALTERNATIVES)
        .field(FieldSchema::text("name").required())
        .field(FieldSchema::text("slug").required())
        .field(FieldSchema::text("category").required())
        .field(FieldSchema::text("alternativeTo"))
        .field(FieldSchema::text("provider"))
        .field(FieldSchema::text("hqCountry"))
        .field(FieldSchema::select("openSource", &["Yes", "No", "Partially"]))
        .field(FieldSchema::select("selfHostable", &["Yes", "No", "N/A"]))
        .field(FieldSchema::text("dataHosting"));

    for dimension in DIMENSIONS {
        def = def.field(FieldSchema::number(*dimension).range(1, 5));
    }

    def.field(FieldSchema::number("total"))
        .field(FieldSchema::text("approxCost"))
        .field(FieldSchema::select(
            "migrationDifficulty",
            &["Low", "Low-Medium", "Medium", "High"],
        ))
        .field(FieldSchema::editor("tradeoffs"))
        .field(FieldSchema::text("lastReviewed"))
        .read_rule(AUTHENTICATED)
}
