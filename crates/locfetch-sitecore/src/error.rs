use thiserror::Error;

/// Errors returned while exchanging credentials or running the update mutation.
#[derive(Debug, Error)]
pub enum SitecoreError {
    /// Network or TLS failure, or an undecodable token response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The token endpoint answered with a non-2xx status.
    #[error("Token request failed with status {status}")]
    TokenStatus { status: u16 },

    /// The token endpoint answered 2xx but without an `access_token`.
    #[error("Token response did not include an access_token")]
    TokenMissing,

    /// The GraphQL endpoint answered with a non-2xx status. `body` is the raw text.
    #[error("GraphQL request failed with status {status}")]
    GraphqlStatus { status: u16, body: String },

    /// The GraphQL endpoint answered 2xx with a body that is not JSON.
    #[error("Sitecore returned non-JSON data")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
    },

    /// The GraphQL endpoint answered 2xx with JSON that is not an object.
    #[error("Sitecore returned an unexpected response body")]
    UnexpectedBody,

    /// The GraphQL response carried a non-empty top-level `errors` field.
    #[error("GraphQL execution returned errors")]
    GraphqlErrors(serde_json::Value),

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
