//! PocketBase setup and data import
//!
//! Runs a fixed sequence against a [`Backend`]:
//! 1. authenticate as admin
//! 2. create any missing collections (relations resolved to real ids)
//! 3. read the workbook
//! 4. create tools, alternatives, archetypes and scoring guide records
//! 5. report record counts
//!
//! A rejected record is reported and skipped; everything else that goes
//! wrong aborts the run.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::*;
use log::{debug, info, warn};
use serde_json::json;

use crate::api::Backend;
use crate::api::models::object_id;
use crate::catalog::collections::{ALTERNATIVES, ARCHETYPES, SCORING_GUIDE, TOOLS};
use crate::catalog::{self, ARCHETYPES as ARCHETYPE_DEFINITIONS, SCORING_GUIDE as GUIDE_ENTRIES};
use crate::models::{Alternative, Tool};
use crate::sheet::Workbook;

/// Collections that receive records, in import order
const IMPORTED_COLLECTIONS: [&str; 4] = [TOOLS, ALTERNATIVES, ARCHETYPES, SCORING_GUIDE];

/// Which phases to run
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    pub skip_collections: bool,
    pub skip_import: bool,
}

/// Admin login for the PocketBase instance
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// What an import run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Collections created by this run
    pub collections_created: Vec<String>,
    /// Collections that already existed and were left untouched
    pub collections_existing: Vec<String>,
    pub tools: usize,
    pub alternatives: usize,
    pub archetypes: usize,
    pub scoring_guide: usize,
    /// (archetype name, tool slug) pairs that matched no imported tool
    pub missing_tool_slugs: Vec<(String, String)>,
    /// Record collections found missing when creation was skipped
    pub collections_missing: Vec<String>,
    /// Records per collection as reported by the server after the import
    pub record_counts: Vec<(String, Option<u64>)>,
}

/// Run the whole import against `backend`
pub async fn run_import<B: Backend + Send + Sync>(
    backend: &mut B,
    base_url: &str,
    xlsx: &Path,
    credentials: &Credentials,
    options: ImportOptions,
) -> Result<ImportReport> {
    let mut report = ImportReport::default();

    println!("\n{}", "[1/5] Authenticating...".bold());
    backend
        .authenticate(&credentials.email, &credentials.password)
        .await?;
    println!("  Authenticated as {}", credentials.email.green());

    if options.skip_collections {
        println!("\n{}", "[2/5] Skipping collection creation".bold());
        if !options.skip_import {
            check_collections_exist(backend, &mut report).await?;
        }
    } else {
        println!("\n{}", "[2/5] Creating collections...".bold());
        create_collections(backend, &mut report).await?;
    }

    if options.skip_import {
        println!("\n{}", "[3-4/5] Skipping data import".bold());
    } else {
        println!("\n{}", "[3/5] Reading xlsx data...".bold());
        let mut workbook = Workbook::open(xlsx)?;
        let tools = workbook.read_tools()?;
        let alternatives = workbook.read_alternatives()?;
        info!(
            "Read {} tools and {} alternatives from {}",
            tools.len(),
            alternatives.len(),
            xlsx.display()
        );

        println!("\n{}", "[4/5] Importing tools...".bold());
        let tool_ids = import_tools(backend, &tools, &mut report).await?;

        println!("\n  Importing alternatives...");
        import_alternatives(backend, &alternatives, &mut report).await?;

        println!("\n  Importing archetypes...");
        import_archetypes(backend, &tool_ids, &mut report).await?;

        println!("\n  Importing scoring guide...");
        import_scoring_guide(backend, &mut report).await?;
    }

    println!("\n{}", "[5/5] Done!".bold().green());
    if !options.skip_import {
        print_record_counts(backend, &mut report).await;
    }
    println!("\n  Admin UI: {}/_/", base_url);
    println!("  API: {}/api/collections/tools/records", base_url);
    println!(
        "  API: {}/api/collections/archetypes/records?expand=tools",
        base_url
    );
    println!();

    Ok(report)
}

/// Create every catalog collection that does not exist yet
async fn create_collections<B: Backend + Send + Sync>(
    backend: &B,
    report: &mut ImportReport,
) -> Result<()> {
    let mut collection_ids: HashMap<String, String> = HashMap::new();

    for definition in catalog::collections() {
        let name = definition.name.clone();

        if let Some(existing) = backend.get_collection(&name).await? {
            println!("  '{}' already exists, skipping", name);
            let id = object_id(&existing)
                .with_context(|| format!("Existing collection '{}' has no id", name))?;
            collection_ids.insert(name.clone(), id);
            report.collections_existing.push(name);
            continue;
        }

        debug!("'{}' relates to {:?}", name, definition.relation_targets());
        let payload = definition.resolve_relations(&collection_ids)?;
        let Some(created) = backend.create_collection(&payload).await? else {
            bail!("Failed to create collection '{}'", name);
        };
        let id = object_id(&created)
            .with_context(|| format!("Created collection '{}' has no id", name))?;

        println!("  {} '{}' (id: {})", "Created".green(), name, id);
        collection_ids.insert(name.clone(), id);
        report.collections_created.push(name);
    }

    Ok(())
}

/// Warn about record collections missing when creation was skipped
async fn check_collections_exist<B: Backend + Send + Sync>(
    backend: &B,
    report: &mut ImportReport,
) -> Result<()> {
    let existing = backend.list_collections().await?;
    for name in IMPORTED_COLLECTIONS {
        if !existing.contains_key(name) {
            println!(
                "  {}",
                format!("WARNING: collection '{}' does not exist", name).yellow()
            );
            report.collections_missing.push(name.to_string());
        }
    }
    Ok(())
}

/// Create one record per tool, returning slug -> record id for the ones accepted
async fn import_tools<B: Backend + Send + Sync>(
    backend: &B,
    tools: &[Tool],
    report: &mut ImportReport,
) -> Result<HashMap<String, String>> {
    let mut tool_ids = HashMap::new();

    for tool in tools {
        let Some(record) = backend.create_record(TOOLS, &tool.to_record()?).await? else {
            warn!("Tool '{}' was rejected", tool.name);
            continue;
        };
        let Some(id) = object_id(&record) else {
            warn!("Tool '{}' was created without an id", tool.name);
            continue;
        };

        tool_ids.insert(tool.slug.clone(), id);
        println!("  {} {} ({})", "+".green(), tool.name, tool.slug.dimmed());
    }

    report.tools = tool_ids.len();
    println!("  Imported {} tools", tool_ids.len());
    Ok(tool_ids)
}

async fn import_alternatives<B: Backend + Send + Sync>(
    backend: &B,
    alternatives: &[Alternative],
    report: &mut ImportReport,
) -> Result<()> {
    let mut count = 0;

    for alternative in alternatives {
        let record = alternative.to_record()?;
        if backend.create_record(ALTERNATIVES, &record).await?.is_some() {
            count += 1;
            println!("  {} {}", "+".green(), alternative.name);
        } else {
            warn!("Alternative '{}' was rejected", alternative.name);
        }
    }

    report.alternatives = count;
    println!("  Imported {} alternatives", count);
    Ok(())
}

/// Create the archetypes, linking tools by the record ids created earlier
async fn import_archetypes<B: Backend + Send + Sync>(
    backend: &B,
    tool_ids: &HashMap<String, String>,
    report: &mut ImportReport,
) -> Result<()> {
    for archetype in ARCHETYPE_DEFINITIONS {
        let mut ids = Vec::new();
        for slug in archetype.tool_slugs {
            match tool_ids.get(*slug) {
                Some(id) => ids.push(id.clone()),
                None => {
                    println!(
                        "  {}",
                        format!(
                            "WARNING: Tool slug '{}' not found for archetype '{}'",
                            slug, archetype.name
                        )
                        .yellow()
                    );
                    report
                        .missing_tool_slugs
                        .push((archetype.name.to_string(), slug.to_string()));
                }
            }
        }

        let record = json!({
            "name": archetype.name,
            "slug": archetype.slug,
            "description": archetype.description,
            "tools": ids,
        });

        if backend.create_record(ARCHETYPES, &record).await?.is_some() {
            report.archetypes += 1;
            println!("  {} {} ({} tools)", "+".green(), archetype.name, ids.len());
        }
    }

    Ok(())
}

async fn import_scoring_guide<B: Backend + Send + Sync>(
    backend: &B,
    report: &mut ImportReport,
) -> Result<()> {
    for entry in GUIDE_ENTRIES {
        let record = serde_json::to_value(entry).context("Failed to serialize scoring guide entry")?;
        if backend.create_record(SCORING_GUIDE, &record).await?.is_some() {
            report.scoring_guide += 1;
        }
    }

    println!("  Imported {} scoring guide entries", report.scoring_guide);
    Ok(())
}

/// Print how many records each imported collection now holds
///
/// Counting is informational, so failures are only logged.
async fn print_record_counts<B: Backend + Send + Sync>(backend: &B, report: &mut ImportReport) {
    for name in IMPORTED_COLLECTIONS {
        match backend.list_records(name, 1, None).await {
            Ok(list) => {
                match list.total_items {
                    Some(total) => println!("  {}: {} records", name, total),
                    None => println!("  {}: {}+ records", name, list.items.len()),
                }
                report.record_counts.push((name.to_string(), list.total_items));
            }
            Err(e) => warn!("Could not count records in '{}': {:#}", name, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{CollectionDefinition, RecordList};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rust_xlsxwriter::Workbook as XlsxWriter;
    use serde_json::Value;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// In-memory stand-in for a PocketBase server
    #[derive(Default)]
    struct MemoryBackend {
        authenticated: bool,
        reject_password: bool,
        existing: HashMap<String, Value>,
        rejected_names: HashSet<String>,
        fail_collection: Option<String>,
        created_collections: Mutex<Vec<CollectionDefinition>>,
        records: Mutex<Vec<(String, Value)>>,
        /// Read-only calls, in order
        calls: Mutex<Vec<String>>,
    }

    impl MemoryBackend {
        fn records_in(&self, collection: &str) -> Vec<Value> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .filter(|(c, _)| c == collection)
                .map(|(_, v)| v.clone())
                .collect()
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Backend for MemoryBackend {
        async fn authenticate(&mut self, _email: &str, _password: &str) -> Result<()> {
            if self.reject_password {
                bail!("Auth failed: 400 {{\"message\":\"Failed to authenticate.\"}}");
            }
            self.authenticated = true;
            Ok(())
        }

        async fn get_collection(&self, name: &str) -> Result<Option<Value>> {
            Ok(self.existing.get(name).cloned())
        }

        async fn list_collections(&self) -> Result<HashMap<String, Value>> {
            self.calls.lock().unwrap().push("list_collections".to_string());
            Ok(self.existing.clone())
        }

        async fn create_collection(
            &self,
            definition: &CollectionDefinition,
        ) -> Result<Option<Value>> {
            if self.fail_collection.as_deref() == Some(definition.name.as_str()) {
                return Ok(None);
            }
            let mut created = self.created_collections.lock().unwrap();
            created.push(definition.clone());
            Ok(Some(json!({"id": format!("col_{}", definition.name)})))
        }

        async fn create_record(&self, collection: &str, data: &Value) -> Result<Option<Value>> {
            assert!(self.authenticated, "record created before authentication");
            let name = data["name"].as_str().unwrap_or_default();
            if self.rejected_names.contains(name) {
                return Ok(None);
            }
            let mut records = self.records.lock().unwrap();
            let id = format!("rec_{}", records.len());
            records.push((collection.to_string(), data.clone()));
            Ok(Some(json!({"id": id})))
        }

        async fn list_records(
            &self,
            collection: &str,
            per_page: u32,
            _filter: Option<&str>,
        ) -> Result<RecordList> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("list_records {} perPage={}", collection, per_page));
            Ok(RecordList {
                items: Vec::new(),
                total_items: Some(self.records_in(collection).len() as u64),
            })
        }
    }

    fn write_fixture(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("risk.xlsx");
        let mut workbook = XlsxWriter::new();

        let tools = workbook.add_worksheet();
        tools.write_string(0, 0, "Tool").unwrap();
        for (row, name) in ["Slack", "AWS", "Zoom", "HubSpot"].iter().enumerate() {
            tools.write_string(row as u32 + 1, 0, *name).unwrap();
            tools.write_string(row as u32 + 1, 1, "Category").unwrap();
            tools.write_number(row as u32 + 1, 10, 12.0).unwrap();
            tools.write_string(row as u32 + 1, 13, "2025-01").unwrap();
        }

        let alternatives = workbook.add_worksheet();
        alternatives.write_string(0, 0, "Alternative").unwrap();
        alternatives.write_string(1, 0, "Mattermost").unwrap();
        alternatives.write_string(1, 2, "Slack, Microsoft Teams").unwrap();
        alternatives.write_string(1, 6, "yes").unwrap();
        alternatives.write_string(2, 0, "Jitsi").unwrap();
        alternatives.write_string(2, 2, "Zoom").unwrap();

        workbook.save(&path).unwrap();
        path
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "admin@techfreedom.eu".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_full_import() {
        let dir = TempDir::new().unwrap();
        let xlsx = write_fixture(&dir);
        let mut backend = MemoryBackend::default();

        let report = run_import(
            &mut backend,
            "https://api.example.org",
            &xlsx,
            &credentials(),
            ImportOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(
            report.collections_created,
            vec!["tools", "archetypes", "assessments", "cohorts", "scoring_guide", "alternatives"]
        );
        assert_eq!(report.tools, 4);
        assert_eq!(report.alternatives, 2);
        assert_eq!(report.archetypes, 6);
        assert_eq!(report.scoring_guide, 25);

        let tools = backend.records_in(TOOLS);
        assert_eq!(tools[0]["slug"], json!("slack"));
        assert_eq!(tools[0]["total"], json!(12));
        assert_eq!(tools[0]["lastReviewed"], json!("2025-01"));
        assert!(tools[0].get("id").is_none());

        let alternatives = backend.records_in(ALTERNATIVES);
        assert_eq!(alternatives[0]["alternativeTo"], json!("slack,microsoft-teams"));
        assert_eq!(alternatives[0]["selfHostable"], json!("Yes"));
        assert_eq!(alternatives[0]["openSource"], json!("No"));

        // Startup = slack, aws, hubspot, asana, calendly, zoom
        let archetypes = backend.records_in(ARCHETYPES);
        let startup = archetypes.iter().find(|a| a["slug"] == "startup").unwrap();
        assert_eq!(startup["tools"], json!(["rec_0", "rec_1", "rec_3", "rec_2"]));
        assert!(
            report
                .missing_tool_slugs
                .contains(&("Startup".to_string(), "asana".to_string()))
        );

        assert_eq!(backend.records_in(SCORING_GUIDE).len(), 25);
        assert!(report.collections_missing.is_empty());
    }

    #[tokio::test]
    async fn test_record_counts_read_back() {
        let dir = TempDir::new().unwrap();
        let xlsx = write_fixture(&dir);
        let mut backend = MemoryBackend::default();

        let report = run_import(
            &mut backend,
            "https://api.example.org",
            &xlsx,
            &credentials(),
            ImportOptions::default(),
        )
        .await
        .unwrap();

        assert_eq!(
            backend.calls(),
            vec![
                "list_records tools perPage=1",
                "list_records alternatives perPage=1",
                "list_records archetypes perPage=1",
                "list_records scoring_guide perPage=1",
            ]
        );
        assert_eq!(
            report.record_counts,
            vec![
                ("tools".to_string(), Some(4)),
                ("alternatives".to_string(), Some(2)),
                ("archetypes".to_string(), Some(6)),
                ("scoring_guide".to_string(), Some(25)),
            ]
        );
    }

    #[tokio::test]
    async fn test_skip_collections_reports_missing() {
        let dir = TempDir::new().unwrap();
        let xlsx = write_fixture(&dir);
        let mut backend = MemoryBackend::default();
        backend
            .existing
            .insert("tools".to_string(), json!({"id": "pbc_tools", "name": "tools"}));
        backend.existing.insert(
            "archetypes".to_string(),
            json!({"id": "pbc_archetypes", "name": "archetypes"}),
        );

        let report = run_import(
            &mut backend,
            "https://api.example.org",
            &xlsx,
            &credentials(),
            ImportOptions {
                skip_collections: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(backend.calls()[0], "list_collections");
        assert_eq!(report.collections_missing, vec!["alternatives", "scoring_guide"]);
        assert!(backend.created_collections.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_skip_everything_makes_no_reads() {
        let dir = TempDir::new().unwrap();
        let xlsx = write_fixture(&dir);
        let mut backend = MemoryBackend::default();

        let report = run_import(
            &mut backend,
            "https://api.example.org",
            &xlsx,
            &credentials(),
            ImportOptions {
                skip_collections: true,
                skip_import: true,
            },
        )
        .await
        .unwrap();

        assert!(backend.calls().is_empty());
        assert!(report.collections_missing.is_empty());
        assert!(report.record_counts.is_empty());
    }

    #[tokio::test]
    async fn test_relations_resolved_to_created_ids() {
        let dir = TempDir::new().unwrap();
        let xlsx = write_fixture(&dir);
        let mut backend = MemoryBackend::default();

        run_import(
            &mut backend,
            "https://api.example.org",
            &xlsx,
            &credentials(),
            ImportOptions {
                skip_import: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let created = backend.created_collections.lock().unwrap();
        let archetypes = created.iter().find(|c| c.name == "archetypes").unwrap();
        let relation = archetypes.schema.iter().find(|f| f.name == "tools").unwrap();
        assert_eq!(
            relation.options.as_ref().unwrap()["collectionId"],
            json!("col_tools")
        );
        assert!(backend.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_existing_collections_are_reused() {
        let dir = TempDir::new().unwrap();
        let xlsx = write_fixture(&dir);
        let mut backend = MemoryBackend::default();
        backend
            .existing
            .insert("tools".to_string(), json!({"id": "pbc_existing", "name": "tools"}));

        let report = run_import(
            &mut backend,
            "https://api.example.org",
            &xlsx,
            &credentials(),
            ImportOptions {
                skip_import: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(report.collections_existing, vec!["tools"]);
        assert_eq!(report.collections_created.len(), 5);

        let created = backend.created_collections.lock().unwrap();
        assert!(created.iter().all(|c| c.name != "tools"));
        let assessments = created.iter().find(|c| c.name == "assessments").unwrap();
        assert_eq!(
            assessments.schema[0].options.as_ref().unwrap()["collectionId"],
            json!("pbc_existing")
        );
    }

    #[tokio::test]
    async fn test_failed_collection_aborts() {
        let dir = TempDir::new().unwrap();
        let xlsx = write_fixture(&dir);
        let mut backend = MemoryBackend {
            fail_collection: Some("cohorts".to_string()),
            ..Default::default()
        };

        let err = run_import(
            &mut backend,
            "https://api.example.org",
            &xlsx,
            &credentials(),
            ImportOptions::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "Failed to create collection 'cohorts'");
        assert!(backend.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_records_are_skipped() {
        let dir = TempDir::new().unwrap();
        let xlsx = write_fixture(&dir);
        let mut backend = MemoryBackend::default();
        backend.rejected_names.insert("AWS".to_string());
        backend.rejected_names.insert("Jitsi".to_string());

        let report = run_import(
            &mut backend,
            "https://api.example.org",
            &xlsx,
            &credentials(),
            ImportOptions {
                skip_collections: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert!(report.collections_created.is_empty());
        assert_eq!(report.tools, 3);
        assert_eq!(report.alternatives, 1);
        assert!(
            report
                .missing_tool_slugs
                .contains(&("Startup".to_string(), "aws".to_string()))
        );
    }

    #[tokio::test]
    async fn test_auth_failure_stops_everything() {
        let dir = TempDir::new().unwrap();
        let xlsx = write_fixture(&dir);
        let mut backend = MemoryBackend {
            reject_password: true,
            ..Default::default()
        };

        let err = run_import(
            &mut backend,
            "https://api.example.org",
            &xlsx,
            &credentials(),
            ImportOptions::default(),
        )
        .await
        .unwrap_err();

        assert!(err.to_string().starts_with("Auth failed: 400"));
        assert!(backend.created_collections.lock().unwrap().is_empty());
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let text = format!("{:?}", credentials());
        assert!(text.contains("admin@techfreedom.eu"));
        assert!(!text.contains("secret"));
    }
}
