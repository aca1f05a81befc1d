//! Widget-side caller of the field-update route.

use std::time::Duration;

use async_trait::async_trait;
use locfetch_core::FieldUpdateRequest;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::WidgetError;

pub const UPDATE_FIELD_PATH: &str = "/api/update-sitecore-field";

#[async_trait]
pub trait FieldUpdateProxy: Send + Sync {
    async fn update_field(&self, request: &FieldUpdateRequest) -> Result<Value, WidgetError>;
}

/// Posts field updates to a running `locfetch-server`.
pub struct HttpFieldUpdateProxy {
    client: Client,
    url: Url,
}

impl HttpFieldUpdateProxy {
    /// `base_url` is the server origin; the route path is appended.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`WidgetError::InvalidUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, WidgetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        let joined = format!("{}{UPDATE_FIELD_PATH}", base_url.trim_end_matches('/'));
        let url = Url::parse(&joined).map_err(|e| WidgetError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl FieldUpdateProxy for HttpFieldUpdateProxy {
    async fn update_field(&self, request: &FieldUpdateRequest) -> Result<Value, WidgetError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| WidgetError::Deserialize {
            context: UPDATE_FIELD_PATH.to_string(),
            source,
        })
    }
}
