//! Capabilities the embedding CMS host offers the widget.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::error::WidgetError;

/// Host query resolving the page currently open in the editor.
pub const PAGES_CONTEXT: &str = "pages.context";

/// The host surface the widget runs inside. Injected at construction.
#[async_trait]
pub trait HostClient: Send + Sync {
    /// Runs a named host query such as [`PAGES_CONTEXT`].
    async fn query(&self, name: &str) -> Result<Value, WidgetError>;

    /// Persists `value` as the field value the widget is editing.
    async fn set_value(&self, value: &str, flag: bool) -> Result<(), WidgetError>;

    /// Asks the host to close the widget.
    fn close_app(&self);
}

#[derive(Debug, Default, Deserialize)]
struct PageContextResponse {
    #[serde(default)]
    data: Option<PageContextData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageContextData {
    #[serde(default)]
    page_info: Option<PageInfo>,
}

#[derive(Debug, Default, Deserialize)]
struct PageInfo {
    #[serde(default)]
    id: Option<String>,
}

/// Extracts `data.pageInfo.id` from a `pages.context` response.
#[must_use]
pub fn page_id(response: &Value) -> Option<String> {
    PageContextResponse::deserialize(response)
        .ok()?
        .data?
        .page_info?
        .id
        .filter(|id| !id.is_empty())
}
