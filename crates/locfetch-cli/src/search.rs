//! `search`: drive the widget from the terminal.

use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use locfetch_widget::{
    HttpFieldUpdateProxy, HttpLocationService, LocationQueryService, MockLocationService,
    SearchWidget, WidgetConfig, WidgetPhase,
};

use crate::host::{ConsoleHost, ReportingProxy};

/// Upper bound on how long the CLI waits for a search or a detached update.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Text typed into the search box
    pub query: String,

    /// Select the visible candidate with this location ID
    #[arg(long)]
    pub select: Option<String>,

    /// Location search endpoint; the built-in mock locations are used when absent
    #[arg(long, env = "LOCFETCH_SEARCH_URL")]
    pub service_url: Option<String>,

    /// Page id the console host reports for `pages.context`
    #[arg(long)]
    pub page_id: Option<String>,

    /// Origin of a running locfetch-server
    #[arg(long, env = "LOCFETCH_PROXY_URL", default_value = "http://localhost:3000")]
    pub proxy_url: String,

    /// After searching, write this text into the page title through the proxy
    #[arg(long)]
    pub title: Option<String>,

    /// Debounce window in milliseconds
    #[arg(long, default_value_t = 300)]
    pub debounce_ms: u64,

    /// HTTP timeout for the search endpoint and the proxy
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

/// Types `args.query`, waits for the search to settle, prints the visible
/// candidates, then optionally selects one and/or updates the page title.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built, the search does not
/// settle in time, or `--select` names a location that is not visible.
pub(crate) async fn run_search(args: SearchArgs) -> anyhow::Result<()> {
    let service: Arc<dyn LocationQueryService> = match &args.service_url {
        Some(url) => Arc::new(HttpLocationService::new(url, args.timeout_secs)?),
        None => Arc::new(MockLocationService::default()),
    };
    let host = Arc::new(ConsoleHost::new(args.page_id.clone()));
    let proxy = Arc::new(ReportingProxy::new(Arc::new(HttpFieldUpdateProxy::new(
        &args.proxy_url,
        args.timeout_secs,
    )?)));

    let config = WidgetConfig {
        debounce: Duration::from_millis(args.debounce_ms),
        ..WidgetConfig::default()
    };
    let widget = SearchWidget::new(config, service, host.clone(), proxy.clone());
    widget.probe_page_context().await;

    widget.input(args.query.clone()).await;
    tokio::time::timeout(SETTLE_TIMEOUT, wait_until_settled(&widget))
        .await
        .map_err(|_| anyhow::anyhow!("search did not settle within {SETTLE_TIMEOUT:?}"))?;

    let state = widget.state().await;
    if state.visible_candidates().is_empty() {
        println!("No locations found. Try a different search term.");
    }
    for record in state.visible_candidates() {
        println!("{}\t{}", record.location_id, record.location_name);
    }

    if let Some(id) = &args.select {
        let record = state
            .visible_candidates()
            .iter()
            .find(|r| &r.location_id == id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("location '{id}' is not among the results"))?;
        widget.select(record.clone()).await.await?;
        println!("selected: {} ({})", record.location_name, record.location_id);
    }

    if let Some(title) = args.title {
        let closes_before = host.close_count();
        let done = proxy.done();
        widget.update_fields(title).await.await?;
        // The host is closed only once the update has been issued.
        if host.close_count() > closes_before {
            tokio::time::timeout(SETTLE_TIMEOUT, done.notified())
                .await
                .map_err(|_| anyhow::anyhow!("title update did not finish in time"))?;
        } else {
            println!("title not updated: no page id or empty query");
        }
    }

    Ok(())
}

async fn wait_until_settled(widget: &SearchWidget) {
    loop {
        let phase = widget.state().await.phase();
        if !matches!(phase, WidgetPhase::Typing | WidgetPhase::Loading) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
}
