//! Stand-ins for the CMS host and proxy when the widget runs from a terminal.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use locfetch_core::FieldUpdateRequest;
use locfetch_widget::{FieldUpdateProxy, HostClient, WidgetError, PAGES_CONTEXT};
use serde_json::{json, Value};
use tokio::sync::Notify;

/// Host that answers `pages.context` with a fixed page id and prints what
/// the widget persists.
pub(crate) struct ConsoleHost {
    page_id: Option<String>,
    closes: AtomicUsize,
}

impl ConsoleHost {
    pub(crate) fn new(page_id: Option<String>) -> Self {
        Self {
            page_id,
            closes: AtomicUsize::new(0),
        }
    }

    /// How many times the widget asked the host to close.
    pub(crate) fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HostClient for ConsoleHost {
    async fn query(&self, name: &str) -> Result<Value, WidgetError> {
        if name != PAGES_CONTEXT {
            return Err(WidgetError::Host(format!("unsupported host query '{name}'")));
        }
        Ok(match &self.page_id {
            Some(id) => json!({ "data": { "pageInfo": { "id": id } } }),
            None => json!({ "data": null }),
        })
    }

    async fn set_value(&self, value: &str, flag: bool) -> Result<(), WidgetError> {
        println!("host.setValue({value}, {flag})");
        Ok(())
    }

    fn close_app(&self) {
        println!("host.closeApp()");
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Forwards to another proxy and signals once the call has finished, so a
/// short-lived process can wait for the detached update before exiting.
pub(crate) struct ReportingProxy {
    inner: Arc<dyn FieldUpdateProxy>,
    done: Arc<Notify>,
}

impl ReportingProxy {
    pub(crate) fn new(inner: Arc<dyn FieldUpdateProxy>) -> Self {
        Self {
            inner,
            done: Arc::new(Notify::new()),
        }
    }

    pub(crate) fn done(&self) -> Arc<Notify> {
        Arc::clone(&self.done)
    }
}

#[async_trait]
impl FieldUpdateProxy for ReportingProxy {
    async fn update_field(&self, request: &FieldUpdateRequest) -> Result<Value, WidgetError> {
        let result = self.inner.update_field(request).await;
        match &result {
            Ok(body) => println!("field update response: {body}"),
            Err(e) => println!("field update failed: {e}"),
        }
        self.done.notify_one();
        result
    }
}
