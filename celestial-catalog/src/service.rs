//! The query collaborator: turns a query URL into a table of rows.
//!
//! [`QueryService`] is the seam between the engine and the network. The
//! engine only builds URLs and interprets `(columns, rows)`;
//! [`HttpQueryService`] is the shipped implementation, fetching CSV over
//! HTTPS with `reqwest`.

use crate::columns::ColumnMap;
use async_trait::async_trait;
use celestial_core::{SurveyError, SurveyResult};
use std::time::Duration;
use tracing::debug;

/// A tabular query result, header plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn column_map(&self) -> ColumnMap {
        ColumnMap::from_headers(&self.columns)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Parses a CSV response body.
    ///
    /// An empty body is an empty table. XML bodies (TAP services answer
    /// errors as VOTable documents) and unreadable CSV fail with
    /// [`SurveyError::MalformedResponse`]; no partial table is returned.
    pub fn from_csv(catalog: &str, body: &str) -> SurveyResult<Self> {
        let trimmed = body.trim_start_matches('\u{feff}').trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        if trimmed.starts_with('<') {
            return Err(SurveyError::malformed_response(catalog, &error_summary(trimmed)));
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(trimmed.as_bytes());

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| SurveyError::malformed_response(catalog, &e.to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let rows = reader
            .records()
            .map(|record| record.map(|r| r.iter().map(str::to_string).collect()))
            .collect::<Result<Vec<Vec<String>>, _>>()
            .map_err(|e| SurveyError::malformed_response(catalog, &e.to_string()))?;

        Ok(Self { columns, rows })
    }
}

/// First informative line of an XML error document, for the error message.
fn error_summary(xml: &str) -> String {
    let info = xml
        .find("<INFO")
        .and_then(|start| xml[start..].find('>').map(|end| start + end + 1))
        .and_then(|body| xml[body..].find("</INFO>").map(|end| &xml[body..body + end]))
        .map(str::trim)
        .filter(|text| !text.is_empty());
    match info {
        Some(text) => format!("service returned an error document: {}", text),
        None => "expected CSV, got an XML document".to_string(),
    }
}

/// Fetches query results for one catalog.
#[async_trait]
pub trait QueryService: Send + Sync {
    /// Fetches `url` on behalf of `catalog`, the name used in errors.
    async fn fetch(&self, catalog: &str, url: &str) -> SurveyResult<ResultTable>;
}

/// HTTPS + CSV implementation of [`QueryService`].
#[derive(Debug, Clone)]
pub struct HttpQueryService {
    client: reqwest::Client,
}

impl HttpQueryService {
    pub const DEFAULT_USER_AGENT: &'static str =
        concat!("celestial-catalog/", env!("CARGO_PKG_VERSION"));
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(user_agent: &str, timeout: Duration) -> SurveyResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| SurveyError::invalid_input("http client", &e.to_string()))?;
        Ok(Self { client })
    }

    pub fn with_defaults() -> SurveyResult<Self> {
        Self::new(Self::DEFAULT_USER_AGENT, Self::DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl QueryService for HttpQueryService {
    async fn fetch(&self, catalog: &str, url: &str) -> SurveyResult<ResultTable> {
        debug!(catalog, url, "querying catalog");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SurveyError::service_unavailable(catalog, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SurveyError::service_unavailable(
                catalog,
                &format!("HTTP status {}", status),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SurveyError::service_unavailable(catalog, &e.to_string()))?;
        let table = ResultTable::from_csv(catalog, &body)?;
        debug!(catalog, rows = table.len(), "catalog responded");
        Ok(table)
    }
}
