//! The `updateItem` mutation against the Sitecore authoring GraphQL endpoint.

use locfetch_core::FieldUpdate;
use reqwest::{header, Client, Url};
use serde_json::{json, Value};

use crate::error::SitecoreError;

/// Content database every mutation targets.
pub const DATABASE: &str = "master";
/// Language version every mutation targets.
pub const LANGUAGE: &str = "en";

pub const UPDATE_ITEM_MUTATION: &str = "
mutation($input: UpdateItemInput!) {
  updateItem(input: $input) {
    item {
      itemId
      name
    }
  }
}
";

/// Builds the JSON request body for a single-field `updateItem` mutation.
///
/// A missing `field_value` is left out of the field entry rather than sent as `null`.
#[must_use]
pub fn update_item_body(update: &FieldUpdate) -> Value {
    let mut field = json!({ "name": update.field_name });
    if let Some(value) = &update.field_value {
        field["value"] = Value::String(value.clone());
    }

    json!({
        "query": UPDATE_ITEM_MUTATION,
        "variables": {
            "input": {
                "database": DATABASE,
                "itemId": update.item_id,
                "language": LANGUAGE,
                "fields": [field],
            }
        }
    })
}

pub struct GraphqlClient {
    client: Client,
    endpoint: Url,
}

impl GraphqlClient {
    /// # Errors
    ///
    /// Returns [`SitecoreError::InvalidUrl`] if `endpoint` does not parse.
    pub fn new(client: Client, endpoint: &str) -> Result<Self, SitecoreError> {
        let endpoint = Url::parse(endpoint).map_err(|e| SitecoreError::InvalidUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, endpoint })
    }

    /// Runs the mutation with `access_token` as the bearer credential and
    /// returns the parsed response body.
    ///
    /// The body is read as text first. A non-2xx status returns that text
    /// without attempting a JSON parse.
    ///
    /// # Errors
    ///
    /// - [`SitecoreError::GraphqlStatus`] on a non-2xx status.
    /// - [`SitecoreError::MalformedResponse`] if a 2xx body is not JSON.
    /// - [`SitecoreError::UnexpectedBody`] if a 2xx body is JSON but not an object.
    /// - [`SitecoreError::GraphqlErrors`] if the body has a truthy top-level `errors` field.
    /// - [`SitecoreError::Http`] on network failure.
    pub async fn update_item(
        &self,
        access_token: &str,
        update: &FieldUpdate,
    ) -> Result<Value, SitecoreError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(access_token)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&update_item_body(update))
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!(status = status.as_u16(), body = %text, "GraphQL request failed");
            return Err(SitecoreError::GraphqlStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let data: Value = serde_json::from_str(&text).map_err(|source| {
            tracing::error!(body = %text, "non-JSON response from GraphQL endpoint");
            SitecoreError::MalformedResponse { source }
        })?;

        let Some(object) = data.as_object() else {
            tracing::error!(body = %text, "GraphQL response is not an object");
            return Err(SitecoreError::UnexpectedBody);
        };

        if let Some(errors) = object.get("errors").filter(|e| is_truthy(e)) {
            tracing::error!(errors = %errors, "GraphQL errors");
            return Err(SitecoreError::GraphqlErrors(errors.clone()));
        }

        Ok(data)
    }
}

/// `null`, `false`, `0` and `""` do not signal failure; arrays and objects
/// always do, even when empty.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
