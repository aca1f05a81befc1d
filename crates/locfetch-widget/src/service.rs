//! Location search backends.
//!
//! The widget only sees [`LocationQueryService`]; the mock and the HTTP
//! backend are interchangeable behind it.

use std::time::Duration;

use async_trait::async_trait;
use locfetch_core::{LocationQueryResult, LocationRecord};
use reqwest::{Client, Url};

use crate::error::WidgetError;

/// Latency the mock backend waits before answering.
pub const MOCK_LATENCY: Duration = Duration::from_millis(500);

#[async_trait]
pub trait LocationQueryService: Send + Sync {
    /// Returns the locations matching `query`.
    ///
    /// Callers enforce the minimum query length; implementations answer
    /// whatever they are given.
    async fn search(&self, query: &str) -> Result<LocationQueryResult, WidgetError>;
}

/// The three placeholder locations served until a real backend is wired in.
#[must_use]
pub fn mock_records() -> Vec<LocationRecord> {
    vec![
        LocationRecord::new(
            "9584",
            "Baylor Scott & White Family Health Center - Richardson",
        ),
        LocationRecord::new("9585", "Baylor Scott & White Medical Center - Dallas"),
        LocationRecord::new("9586", "Baylor Scott & White Family Health Center - Plano"),
    ]
}

/// Stand-in backend: fixed records, fixed latency, name-only matching.
#[derive(Debug, Clone)]
pub struct MockLocationService {
    records: Vec<LocationRecord>,
    latency: Duration,
}

impl Default for MockLocationService {
    fn default() -> Self {
        Self::new(mock_records(), MOCK_LATENCY)
    }
}

impl MockLocationService {
    #[must_use]
    pub fn new(records: Vec<LocationRecord>, latency: Duration) -> Self {
        Self { records, latency }
    }
}

#[async_trait]
impl LocationQueryService for MockLocationService {
    async fn search(&self, query: &str) -> Result<LocationQueryResult, WidgetError> {
        tokio::time::sleep(self.latency).await;

        let location_results = self
            .records
            .iter()
            .filter(|record| record.name_contains(query))
            .cloned()
            .collect();

        Ok(LocationQueryResult {
            location_count: u64::try_from(self.records.len()).unwrap_or(u64::MAX),
            location_results,
        })
    }
}

/// Backend that asks a search endpoint: `GET <base_url>?query=<q>` answering
/// with a `LocationQueryResult` JSON body.
pub struct HttpLocationService {
    client: Client,
    base_url: Url,
}

impl HttpLocationService {
    /// # Errors
    ///
    /// Returns [`WidgetError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`WidgetError::InvalidUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, WidgetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        let base_url = Url::parse(base_url).map_err(|e| WidgetError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, base_url })
    }

    fn search_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("query", query);
        url
    }
}

#[async_trait]
impl LocationQueryService for HttpLocationService {
    async fn search(&self, query: &str) -> Result<LocationQueryResult, WidgetError> {
        let url = self.search_url(query);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| WidgetError::Deserialize {
            context: format!("location search (query={query})"),
            source,
        })
    }
}
