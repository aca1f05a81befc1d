//! The search widget state machine.
//!
//! Handlers mirror UI events (`input`, `click_outside`, `focus`, `select`)
//! and mutate the single [`SearchState`] owned by the widget. Work that must
//! not block the handler (debounced search, host persistence, title update)
//! runs on detached tokio tasks whose outcome is only logged.
//!
//! Search uses one cancellable task slot: a new keystroke aborts the
//! previous task whether it is still debouncing or already waiting on the
//! query service, so a superseded response never reaches the state.

use std::sync::Arc;
use std::time::Duration;

use locfetch_core::{FieldUpdateRequest, LocationRecord};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::host::{page_id, HostClient, PAGES_CONTEXT};
use crate::proxy::FieldUpdateProxy;
use crate::service::LocationQueryService;
use crate::state::SearchState;

/// Field written by [`SearchWidget::update_fields`].
pub const TITLE_FIELD: &str = "title";

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Quiet period after the last keystroke before searching.
    pub debounce: Duration,
    /// Trimmed queries shorter than this never reach the query service.
    pub min_query_len: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_query_len: 2,
        }
    }
}

struct Core {
    state: SearchState,
    search_task: Option<JoinHandle<()>>,
}

impl Core {
    fn cancel_search(&mut self) {
        if let Some(task) = self.search_task.take() {
            task.abort();
        }
        self.state.set_debounce_pending(false);
        self.state.set_loading(false);
    }
}

struct Inner {
    config: WidgetConfig,
    service: Arc<dyn LocationQueryService>,
    host: Arc<dyn HostClient>,
    proxy: Arc<dyn FieldUpdateProxy>,
    core: Mutex<Core>,
}

/// Cheap to clone; clones share one state.
#[derive(Clone)]
pub struct SearchWidget {
    inner: Arc<Inner>,
}

impl SearchWidget {
    pub fn new(
        config: WidgetConfig,
        service: Arc<dyn LocationQueryService>,
        host: Arc<dyn HostClient>,
        proxy: Arc<dyn FieldUpdateProxy>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                service,
                host,
                proxy,
                core: Mutex::new(Core {
                    state: SearchState::default(),
                    search_task: None,
                }),
            }),
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> SearchState {
        self.inner.core.lock().await.state.clone()
    }

    /// Logs the page the host has open. Failures are logged, never returned.
    pub async fn probe_page_context(&self) {
        match self.inner.host.query(PAGES_CONTEXT).await {
            Ok(response) => {
                tracing::info!(page_id = ?page_id(&response), "retrieved pages.context");
            }
            Err(e) => tracing::error!(error = %e, "error retrieving pages.context"),
        }
    }

    /// Keystroke in the search box.
    ///
    /// Updates the query immediately, clears any selection, and replaces the
    /// pending search with a new debounced one.
    pub async fn input(&self, value: impl Into<String>) {
        let value = value.into();
        let mut core = self.inner.core.lock().await;
        core.cancel_search();
        core.state.set_query(value.clone());
        core.state.set_debounce_pending(true);

        let widget = self.clone();
        let debounce = self.inner.config.debounce;
        core.search_task = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            widget.inner.core.lock().await.state.set_debounce_pending(false);
            widget.fetch_locations(&value).await;
        }));
    }

    /// Runs one search and folds the result into the state.
    ///
    /// Queries below the minimum length return without touching the state.
    /// Service failures are logged and leave no candidates.
    pub async fn fetch_locations(&self, query: &str) {
        if query.trim().chars().count() < self.inner.config.min_query_len {
            return;
        }

        self.inner.core.lock().await.state.set_loading(true);
        let result = self.inner.service.search(query).await;

        let mut core = self.inner.core.lock().await;
        core.state.set_loading(false);
        match result {
            Ok(found) => {
                tracing::debug!(
                    query,
                    location_count = found.location_count,
                    returned = found.location_results.len(),
                    "location search completed"
                );
                core.state.set_candidates(found.location_results);
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "error fetching locations");
                core.state.set_candidates(Vec::new());
            }
        }
    }

    /// Mouse-down outside the dropdown.
    pub async fn click_outside(&self) {
        self.inner.core.lock().await.state.close_dropdown();
    }

    /// Focus on the search box reopens the dropdown when there is something to show.
    pub async fn focus(&self) {
        self.inner.core.lock().await.state.reopen_dropdown();
    }

    /// Picks `record`.
    ///
    /// The state changes immediately. Persisting the identifier through the
    /// host runs detached: on success the host is asked to close, on failure
    /// the error is logged and the selection stays.
    pub async fn select(&self, record: LocationRecord) -> JoinHandle<()> {
        {
            let mut core = self.inner.core.lock().await;
            core.cancel_search();
            core.state.select(record.clone());
        }

        let host = Arc::clone(&self.inner.host);
        tokio::spawn(async move {
            match host.set_value(&record.location_id, true).await {
                Ok(()) => {
                    tracing::info!(location_id = %record.location_id, "location ID saved");
                    host.close_app();
                }
                Err(e) => {
                    tracing::error!(
                        location_id = %record.location_id,
                        error = %e,
                        "error saving location ID"
                    );
                }
            }
        })
    }

    /// Writes `data` into the current page's title through the field-update
    /// proxy, then closes the host.
    ///
    /// Runs detached. Nothing is sent, and the host stays open, unless the
    /// host reports a page id and the query is non-empty at call time. The
    /// proxy call itself is not awaited before closing.
    pub async fn update_fields(&self, data: impl Into<String>) -> JoinHandle<()> {
        let data = data.into();
        let query = self.inner.core.lock().await.state.query().to_string();
        let host = Arc::clone(&self.inner.host);
        let proxy = Arc::clone(&self.inner.proxy);

        tokio::spawn(async move {
            let response = match host.query(PAGES_CONTEXT).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!(error = %e, "error retrieving pages.context");
                    return;
                }
            };

            let page = page_id(&response);
            tracing::info!(page_id = ?page, "page info");
            let Some(page) = page.filter(|_| !query.is_empty()) else {
                return;
            };

            let request = FieldUpdateRequest::new(page, TITLE_FIELD, data);
            tokio::spawn(async move {
                match proxy.update_field(&request).await {
                    Ok(_) => tracing::info!(item_id = ?request.item_id, "title update sent"),
                    Err(e) => tracing::error!(error = %e, "title update failed"),
                }
            });
            host.close_app();
        })
    }
}
