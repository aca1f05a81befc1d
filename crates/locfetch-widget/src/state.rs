//! Search widget state and the derived candidate filter.

use locfetch_core::LocationRecord;

/// Where the widget currently is, derived from [`SearchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetPhase {
    /// Empty query, dropdown closed.
    Idle,
    /// Query edited, debounce timer pending.
    Typing,
    /// Query service call in flight.
    Loading,
    /// Dropdown open with at least one visible candidate.
    ResultsShown,
    /// Non-empty query with nothing to show.
    NoResults,
    /// Visible candidates exist but the dropdown was closed.
    Dismissed,
    /// A candidate was picked; the next keystroke returns to `Typing`.
    Selected,
}

/// Candidates whose name or identifier contains `query`, ignoring case.
///
/// A blank query shows nothing.
#[must_use]
pub fn filter_candidates(candidates: &[LocationRecord], query: &str) -> Vec<LocationRecord> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    candidates
        .iter()
        .filter(|record| record.matches(query))
        .cloned()
        .collect()
}

/// State owned by one widget instance.
///
/// `visible_candidates` is always `filter_candidates(candidates, query)`;
/// every mutator that touches either input recomputes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
    candidates: Vec<LocationRecord>,
    visible_candidates: Vec<LocationRecord>,
    dropdown_open: bool,
    selected: Option<LocationRecord>,
    loading: bool,
    debounce_pending: bool,
}

impl SearchState {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn candidates(&self) -> &[LocationRecord] {
        &self.candidates
    }

    #[must_use]
    pub fn visible_candidates(&self) -> &[LocationRecord] {
        &self.visible_candidates
    }

    #[must_use]
    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    #[must_use]
    pub fn selected(&self) -> Option<&LocationRecord> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn debounce_pending(&self) -> bool {
        self.debounce_pending
    }

    #[must_use]
    pub fn phase(&self) -> WidgetPhase {
        if self.selected.is_some() {
            WidgetPhase::Selected
        } else if self.query.trim().is_empty() {
            WidgetPhase::Idle
        } else if self.loading {
            WidgetPhase::Loading
        } else if self.debounce_pending {
            WidgetPhase::Typing
        } else if self.dropdown_open {
            WidgetPhase::ResultsShown
        } else if self.visible_candidates.is_empty() {
            WidgetPhase::NoResults
        } else {
            WidgetPhase::Dismissed
        }
    }

    /// Keystroke: new query text, selection cleared.
    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
        self.selected = None;
        self.refilter();
        self.dropdown_open = !self.visible_candidates.is_empty();
    }

    pub(crate) fn set_candidates(&mut self, candidates: Vec<LocationRecord>) {
        self.candidates = candidates;
        self.refilter();
        self.dropdown_open = !self.visible_candidates.is_empty();
    }

    pub(crate) fn select(&mut self, record: LocationRecord) {
        self.query = record.location_name.clone();
        self.selected = Some(record);
        self.refilter();
        self.dropdown_open = false;
    }

    pub(crate) fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    pub(crate) fn reopen_dropdown(&mut self) {
        if !self.visible_candidates.is_empty() {
            self.dropdown_open = true;
        }
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn set_debounce_pending(&mut self, pending: bool) {
        self.debounce_pending = pending;
    }

    fn refilter(&mut self) {
        self.visible_candidates = filter_candidates(&self.candidates, &self.query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::mock_records;

    #[test]
    fn default_state_is_idle() {
        let state = SearchState::default();
        assert_eq!(state.phase(), WidgetPhase::Idle);
        assert!(!state.dropdown_open());
    }

    #[test]
    fn identifier_substring_shows_every_mock_record() {
        let mut state = SearchState::default();
        state.set_candidates(mock_records());
        state.set_query("958".to_string());

        assert_eq!(state.visible_candidates(), mock_records().as_slice());
        assert!(state.dropdown_open());
        assert_eq!(state.phase(), WidgetPhase::ResultsShown);
    }

    #[test]
    fn visible_candidates_track_query_and_candidates() {
        let mut state = SearchState::default();
        state.set_query("PLANO".to_string());
        assert!(state.visible_candidates().is_empty());
        assert_eq!(state.phase(), WidgetPhase::NoResults);

        state.set_candidates(mock_records());
        assert_eq!(state.visible_candidates().len(), 1);
        assert_eq!(state.visible_candidates()[0].location_id, "9586");

        state.set_query("family".to_string());
        assert_eq!(
            state
                .visible_candidates()
                .iter()
                .map(|r| r.location_id.as_str())
                .collect::<Vec<_>>(),
            vec!["9584", "9586"]
        );
    }

    #[test]
    fn blank_query_hides_everything() {
        let mut state = SearchState::default();
        state.set_candidates(mock_records());
        state.set_query("   ".to_string());
        assert!(state.visible_candidates().is_empty());
        assert!(!state.dropdown_open());
        assert_eq!(state.phase(), WidgetPhase::Idle);
    }

    #[test]
    fn select_sets_query_and_closes_dropdown() {
        let mut state = SearchState::default();
        state.set_candidates(mock_records());
        state.set_query("baylor".to_string());
        assert!(state.dropdown_open());

        let dallas = mock_records().remove(1);
        state.select(dallas.clone());

        assert_eq!(state.selected(), Some(&dallas));
        assert_eq!(state.query(), dallas.location_name);
        assert!(!state.dropdown_open());
        assert_eq!(state.phase(), WidgetPhase::Selected);

        state.set_query("baylor s".to_string());
        assert!(state.selected().is_none());
    }

    #[test]
    fn closing_with_results_is_dismissed_and_reopens() {
        let mut state = SearchState::default();
        state.set_candidates(mock_records());
        state.set_query("dallas".to_string());
        state.close_dropdown();
        assert_eq!(state.phase(), WidgetPhase::Dismissed);
        assert_eq!(state.query(), "dallas");
        assert_eq!(state.candidates().len(), 3);

        state.reopen_dropdown();
        assert_eq!(state.phase(), WidgetPhase::ResultsShown);
    }

    #[test]
    fn loading_and_typing_take_precedence_over_results() {
        let mut state = SearchState::default();
        state.set_candidates(mock_records());
        state.set_query("dallas".to_string());
        state.set_debounce_pending(true);
        assert_eq!(state.phase(), WidgetPhase::Typing);
        state.set_loading(true);
        assert_eq!(state.phase(), WidgetPhase::Loading);
    }
}
