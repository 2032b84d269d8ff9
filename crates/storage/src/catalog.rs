//! Catalog sources: where the static list of API entries comes from.

use std::path::PathBuf;
use std::str::FromStr;

use api_explorer_core::Entry;
use async_trait::async_trait;
use serde_json::Value;

use crate::error::LoadError;

/// Read-only origin of the catalog, consumed once at startup.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and decode every entry.
    async fn load(&self) -> Result<Vec<Entry>, LoadError>;

    /// Human-readable location for logs.
    fn describe(&self) -> String;
}

/// Decode a catalog payload.
///
/// The payload must be a JSON array. Elements that are not objects are skipped
/// with a warning; fields inside objects are tolerated one by one.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Entry>, LoadError> {
    let value: Value = serde_json::from_slice(bytes)?;
    let Value::Array(items) = value else {
        return Err(LoadError::NotAList { found: json_kind(&value) });
    };

    let total = items.len();
    let entries: Vec<Entry> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let kind = json_kind(&item);
            let entry = Entry::from_json_value(item);
            if entry.is_none() {
                tracing::warn!(index, kind, "skipping catalog element that is not an object");
            }
            entry
        })
        .collect();

    if entries.len() < total {
        tracing::warn!(kept = entries.len(), total, "catalog contained malformed elements");
    }
    Ok(entries)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Catalog stored as a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn load(&self) -> Result<Vec<Entry>, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io { path: self.path.clone(), source })?;
        parse_catalog(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Catalog served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn load(&self) -> Result<Vec<Entry>, LoadError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus { code: status.as_u16() });
        }
        let bytes = response.bytes().await?;
        parse_catalog(&bytes)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// In-memory catalog, handy for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<Entry>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn load(&self) -> Result<Vec<Entry>, LoadError> {
        Ok(self.entries.clone())
    }

    fn describe(&self) -> String {
        format!("static catalog ({} entries)", self.entries.len())
    }
}

/// Where to load the catalog from, as given on the command line or in the env.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    File(PathBuf),
    Url(String),
}

impl CatalogLocation {
    #[must_use]
    pub fn into_source(self) -> Box<dyn CatalogSource> {
        match self {
            Self::File(path) => Box::new(FileCatalog::new(path)),
            Self::Url(url) => Box::new(HttpCatalog::new(url)),
        }
    }
}

impl FromStr for CatalogLocation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(Self::Url(trimmed.to_owned()))
        } else {
            Ok(Self::File(PathBuf::from(trimmed)))
        }
    }
}
