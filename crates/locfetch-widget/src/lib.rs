//! Headless location search widget: debounced incremental search, candidate
//! filtering, selection persistence through the host, and the title update
//! through the field-update proxy.

pub mod error;
pub mod host;
pub mod proxy;
pub mod service;
pub mod state;
pub mod widget;

pub use error::WidgetError;
pub use host::{page_id, HostClient, PAGES_CONTEXT};
pub use proxy::{FieldUpdateProxy, HttpFieldUpdateProxy};
pub use service::{mock_records, HttpLocationService, LocationQueryService, MockLocationService};
pub use state::{filter_candidates, SearchState, WidgetPhase};
pub use widget::{SearchWidget, WidgetConfig};
