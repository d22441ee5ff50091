//! The operations the import pipeline needs from a PocketBase server

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use super::models::{CollectionDefinition, RecordList};

/// A PocketBase-like record store
///
/// Methods returning `Ok(None)` signal a request the server rejected; the
/// rejection has already been reported. `Err` is reserved for failures that
/// should stop the run (transport errors, unreadable responses).
#[async_trait]
pub trait Backend {
    /// Authenticate as an admin; later requests carry the session token
    async fn authenticate(&mut self, email: &str, password: &str) -> Result<()>;

    /// Fetch a collection by name, `None` when it does not exist
    async fn get_collection(&self, name: &str) -> Result<Option<Value>>;

    /// All collections keyed by name
    async fn list_collections(&self) -> Result<HashMap<String, Value>>;

    async fn create_collection(&self, definition: &CollectionDefinition) -> Result<Option<Value>>;

    async fn create_record(&self, collection: &str, data: &Value) -> Result<Option<Value>>;

    async fn list_records(
        &self,
        collection: &str,
        per_page: u32,
        filter: Option<&str>,
    ) -> Result<RecordList>;
}
