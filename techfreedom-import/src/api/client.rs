//! PocketBase REST client

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use colored::*;
use log::debug;
use reqwest::{Method, RequestBuilder, Response, StatusCode, header::AUTHORIZATION};
use serde_json::{Value, json};

use super::backend::Backend;
use super::config::ClientConfig;
use super::models::{AuthResponse, CollectionDefinition, RecordList};

/// Longest slice of a rejected record's response body that gets printed
const RECORD_ERROR_BODY_LIMIT: usize = 200;

/// Client for a single PocketBase instance
#[derive(Debug, Clone)]
pub struct PocketBaseClient {
    base_url: String,
    http: reqwest::Client,
    token: Option<String>,
}

impl PocketBaseClient {
    /// Create a client with default settings
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            token: None,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request, attaching the admin token once authenticated
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, token.as_str()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder, what: &str) -> Result<Response> {
        let response = builder
            .send()
            .await
            .with_context(|| format!("Request failed: {}", what))?;
        debug!("{} -> {}", what, response.status());
        Ok(response)
    }
}

#[async_trait]
impl Backend for PocketBaseClient {
    async fn authenticate(&mut self, email: &str, password: &str) -> Result<()> {
        let builder = self
            .request(Method::POST, "/api/admins/auth-with-password")
            .json(&json!({"identity": email, "password": password}));
        let response = self.send(builder, "authenticate").await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            bail!("Auth failed: {} {}", status.as_u16(), body);
        }

        let auth: AuthResponse = response
            .json()
            .await
            .context("Failed to parse authentication response")?;
        self.token = Some(auth.token);
        Ok(())
    }

    async fn get_collection(&self, name: &str) -> Result<Option<Value>> {
        let builder = self.request(Method::GET, &format!("/api/collections/{}", name));
        let response = self.send(builder, "get collection").await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = ensure_success(response, &format!("collection '{}'", name)).await?;

        let collection = response
            .json()
            .await
            .with_context(|| format!("Failed to parse collection '{}'", name))?;
        Ok(Some(collection))
    }

    async fn list_collections(&self) -> Result<HashMap<String, Value>> {
        let builder = self.request(Method::GET, "/api/collections");
        let response = self.send(builder, "list collections").await?;
        let response = ensure_success(response, "collection list").await?;

        let body: Value = response
            .json()
            .await
            .context("Failed to parse collection list")?;
        Ok(collections_by_name(body))
    }

    async fn create_collection(&self, definition: &CollectionDefinition) -> Result<Option<Value>> {
        let builder = self
            .request(Method::POST, "/api/collections")
            .json(definition);
        let response = self.send(builder, "create collection").await?;

        if !is_created(response.status()) {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            println!(
                "  {}",
                format!(
                    "Failed to create collection '{}': {}",
                    definition.name, status
                )
                .red()
            );
            println!("  {}", body.dimmed());
            return Ok(None);
        }

        let created = response
            .json()
            .await
            .with_context(|| format!("Failed to parse created collection '{}'", definition.name))?;
        Ok(Some(created))
    }

    async fn create_record(&self, collection: &str, data: &Value) -> Result<Option<Value>> {
        let builder = self
            .request(
                Method::POST,
                &format!("/api/collections/{}/records", collection),
            )
            .json(data);
        let response = self.send(builder, "create record").await?;

        if !is_created(response.status()) {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            println!(
                "  {}",
                format!("Failed to create record in '{}': {}", collection, status).red()
            );
            println!(
                "  {}",
                truncate_chars(&body, RECORD_ERROR_BODY_LIMIT).dimmed()
            );
            return Ok(None);
        }

        let record = response
            .json()
            .await
            .with_context(|| format!("Failed to parse created record in '{}'", collection))?;
        Ok(Some(record))
    }

    async fn list_records(
        &self,
        collection: &str,
        per_page: u32,
        filter: Option<&str>,
    ) -> Result<RecordList> {
        let mut params = vec![("perPage", per_page.to_string())];
        if let Some(filter) = filter {
            params.push(("filter", filter.to_string()));
        }

        let builder = self
            .request(
                Method::GET,
                &format!("/api/collections/{}/records", collection),
            )
            .query(&params);
        let response = self.send(builder, "list records").await?;
        let response = ensure_success(response, &format!("records of '{}'", collection)).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse records of '{}'", collection))
    }
}

fn is_created(status: StatusCode) -> bool {
    status == StatusCode::OK || status == StatusCode::CREATED
}

/// Turn a non-success response into an error carrying status and body
async fn ensure_success(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    bail!("Failed to fetch {}: {} {}", what, status.as_u16(), body)
}

/// Index a collection list by name
///
/// Accepts both the paged `{"items": [...]}` shape and a bare array.
fn collections_by_name(body: Value) -> HashMap<String, Value> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    items
        .into_iter()
        .filter_map(|c| {
            let name = c.get("name")?.as_str()?.to_string();
            Some((name, c))
        })
        .collect()
}

/// First `limit` characters of `s`
fn truncate_chars(s: &str, limit: usize) -> String {
    s.chars().take(limit).collect()
}
