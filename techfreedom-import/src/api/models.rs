//! PocketBase collection schema and response models

use std::collections::HashMap;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// API rule that lets anyone through
pub const PUBLIC: Option<&str> = Some("");
/// API rule that restricts access to admins (serialized as null)
pub const ADMIN_ONLY: Option<&str> = None;
/// API rule that requires an authenticated user
pub const AUTHENTICATED: Option<&str> = Some("@request.auth.id != ''");

/// Field data types understood by PocketBase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Select,
    Editor,
    Relation,
    Json,
    Email,
    Date,
    Url,
}

/// One field of a collection schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Map<String, Value>>,
    /// Collection a relation field points at, by name
    #[serde(skip)]
    pub relation_to: Option<String>,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            options: None,
            relation_to: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Number)
    }

    pub fn editor(name: impl Into<String>) -> Self {
        Self::new(name, FieldType::Editor)
    }

    /// Select field limited to `values`
    pub fn select(name: impl Into<String>, values: &[&str]) -> Self {
        Self::new(name, FieldType::Select).option("values", json!(values))
    }

    /// Multi-valued relation to the collection called `target`
    ///
    /// `collectionId` holds the target name until [`CollectionDefinition::resolve_relations`]
    /// swaps in the real id.
    pub fn relation(name: impl Into<String>, target: &str) -> Self {
        let mut field = Self::new(name, FieldType::Relation)
            .option("collectionId", json!(target))
            .option("maxSelect", Value::Null);
        field.relation_to = Some(target.to_string());
        field
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set a single option key
    pub fn option(mut self, key: &str, value: Value) -> Self {
        self.options
            .get_or_insert_with(Map::new)
            .insert(key.to_string(), value);
        self
    }

    /// Numeric range (or text length) bounds
    pub fn range(self, min: i64, max: i64) -> Self {
        self.option("min", json!(min)).option("max", json!(max))
    }

    /// Slug-shaped text: 1-100 chars of `[a-z0-9-]`
    pub fn slug_pattern(self) -> Self {
        self.range(1, 100).option("pattern", json!("^[a-z0-9-]+$"))
    }
}

/// A collection as sent to `POST /api/collections`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub collection_type: String,
    pub schema: Vec<FieldSchema>,
    pub list_rule: Option<String>,
    pub view_rule: Option<String>,
    pub create_rule: Option<String>,
    pub update_rule: Option<String>,
    pub delete_rule: Option<String>,
}

impl CollectionDefinition {
    /// A base collection with no fields and admin-only rules
    pub fn base(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collection_type: "base".to_string(),
            schema: Vec::new(),
            list_rule: None,
            view_rule: None,
            create_rule: None,
            update_rule: None,
            delete_rule: None,
        }
    }

    pub fn field(mut self, field: FieldSchema) -> Self {
        self.schema.push(field);
        self
    }

    /// Set the list and view rules together
    pub fn read_rule(mut self, rule: Option<&str>) -> Self {
        self.list_rule = rule.map(str::to_string);
        self.view_rule = rule.map(str::to_string);
        self
    }

    pub fn create_rule(mut self, rule: Option<&str>) -> Self {
        self.create_rule = rule.map(str::to_string);
        self
    }

    /// Names of the collections this one holds relations to
    pub fn relation_targets(&self) -> Vec<&str> {
        self.schema
            .iter()
            .filter_map(|f| f.relation_to.as_deref())
            .collect()
    }

    /// Copy of this definition with relation targets replaced by collection ids
    ///
    /// `ids` maps collection name to id for everything created (or found) so far.
    pub fn resolve_relations(&self, ids: &HashMap<String, String>) -> Result<Self> {
        let mut resolved = self.clone();

        for field in &mut resolved.schema {
            let Some(target) = field.relation_to.as_deref() else {
                continue;
            };
            let Some(id) = ids.get(target) else {
                bail!(
                    "'{}' collection must be created before '{}'",
                    target,
                    self.name
                );
            };
            let id = id.clone();
            field
                .options
                .get_or_insert_with(Map::new)
                .insert("collectionId".to_string(), Value::String(id));
        }

        Ok(resolved)
    }
}

/// Response of `POST /api/admins/auth-with-password`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Paged list response of `GET /api/collections/{name}/records`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordList {
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub total_items: Option<u64>,
}

/// Id of a created or fetched object, if the response carries one
pub fn object_id(value: &Value) -> Option<String> {
    value.get("id").and_then(Value::as_str).map(str::to_string)
}
