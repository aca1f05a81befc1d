//! OAuth2 client-credentials exchange against the Sitecore identity provider.
//!
//! Every call performs a fresh exchange; tokens are never cached or logged.

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::SitecoreError;

/// Body of a successful token exchange.
///
/// `access_token` is optional because the endpoint may answer 2xx without one;
/// callers decide how to treat that case.
#[derive(Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &self.access_token.as_ref().map(|_| "[redacted]"))
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Client for the client-credentials token endpoint.
pub struct TokenClient {
    client: Client,
    token_url: Url,
    client_id: String,
    client_secret: String,
    audience: String,
}

impl TokenClient {
    /// # Errors
    ///
    /// Returns [`SitecoreError::InvalidUrl`] if `token_url` does not parse.
    pub fn new(
        client: Client,
        token_url: &str,
        client_id: &str,
        client_secret: &str,
        audience: &str,
    ) -> Result<Self, SitecoreError> {
        let token_url = Url::parse(token_url).map_err(|e| SitecoreError::InvalidUrl {
            url: token_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            token_url,
            client_id: client_id.to_owned(),
            client_secret: client_secret.to_owned(),
            audience: audience.to_owned(),
        })
    }

    /// Exchanges the configured client id/secret for a bearer token.
    ///
    /// # Errors
    ///
    /// - [`SitecoreError::TokenStatus`] on a non-2xx status.
    /// - [`SitecoreError::Http`] on network failure or a body that is not JSON.
    pub async fn fetch_token(&self) -> Result<TokenResponse, SitecoreError> {
        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("audience", self.audience.as_str()),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .client
            .post(self.token_url.clone())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "token exchange rejected");
            return Err(SitecoreError::TokenStatus {
                status: status.as_u16(),
            });
        }

        let token = response.json::<TokenResponse>().await?;
        tracing::debug!(
            has_token = token.access_token.is_some(),
            "token exchange completed"
        );
        Ok(token)
    }
}
