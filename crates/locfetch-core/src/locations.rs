//! Location records as exchanged between the search backend and the widget.

use serde::{Deserialize, Serialize};

/// A single selectable location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Opaque backend identifier, unique per location.
    #[serde(rename = "locationID")]
    pub location_id: String,
    /// Display label.
    #[serde(rename = "locationName")]
    pub location_name: String,
}

impl LocationRecord {
    pub fn new(location_id: impl Into<String>, location_name: impl Into<String>) -> Self {
        Self {
            location_id: location_id.into(),
            location_name: location_name.into(),
        }
    }

    /// Case-insensitive substring match on the display name only.
    #[must_use]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.location_name
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    /// Case-insensitive substring match on either the name or the identifier.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name_contains(needle)
            || self
                .location_id
                .to_lowercase()
                .contains(&needle.to_lowercase())
    }
}

/// Envelope returned by a location search.
///
/// `location_count` is informational and need not equal `location_results.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationQueryResult {
    pub location_count: u64,
    pub location_results: Vec<LocationRecord>,
}
