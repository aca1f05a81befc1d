//! Token exchange followed by the field-update mutation.

use std::time::Duration;

use locfetch_core::{AppConfig, FieldUpdate};
use reqwest::Client;
use serde_json::Value;

use crate::error::SitecoreError;
use crate::graphql::GraphqlClient;
use crate::token::TokenClient;

/// Runs one field update end to end: a fresh token exchange, then a single
/// `updateItem` mutation. Holds no per-call state, so one instance can be
/// shared across concurrent requests.
pub struct SitecoreClient {
    tokens: TokenClient,
    graphql: GraphqlClient,
}

impl SitecoreClient {
    /// Builds a client from application config.
    ///
    /// # Errors
    ///
    /// Returns [`SitecoreError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`SitecoreError::InvalidUrl`] if either endpoint is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, SitecoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        let tokens = TokenClient::new(
            client.clone(),
            &config.sitecore_token_url,
            &config.sitecore_client_id,
            &config.sitecore_client_secret,
            &config.sitecore_audience,
        )?;
        let graphql = GraphqlClient::new(client, &config.sitecore_graphql_endpoint)?;

        Ok(Self::new(tokens, graphql))
    }

    #[must_use]
    pub fn new(tokens: TokenClient, graphql: GraphqlClient) -> Self {
        Self { tokens, graphql }
    }

    /// Exchanges credentials and applies `update`, returning the GraphQL body.
    ///
    /// The mutation is only attempted when the exchange yields an access token.
    ///
    /// # Errors
    ///
    /// - [`SitecoreError::TokenStatus`] / [`SitecoreError::Http`] from the exchange.
    /// - [`SitecoreError::TokenMissing`] if the exchange returned no token.
    /// - Any error from [`GraphqlClient::update_item`].
    pub async fn update_field(&self, update: &FieldUpdate) -> Result<Value, SitecoreError> {
        let token = self.tokens.fetch_token().await?;

        let Some(access_token) = token.access_token.filter(|t| !t.is_empty()) else {
            tracing::error!("token exchange succeeded without an access token");
            return Err(SitecoreError::TokenMissing);
        };

        tracing::info!(
            item_id = %update.item_id,
            field = %update.field_name,
            "running updateItem mutation"
        );
        self.graphql.update_item(&access_token, update).await
    }
}
