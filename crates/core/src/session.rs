//! Search session: the Idle → Loading → Results/Errors cycle of the result
//! area, guarded by a generation counter so only the latest search lands.

use std::sync::Arc;
use tracing::{debug, info};

use crate::errors::ErrorMap;
use crate::product::Product;

/// What the backend answered.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Success status, list of product records.
    Found(Vec<Product>),
    /// Non-success status (or a folded transport failure), field-keyed errors.
    Rejected(ErrorMap),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    ShowingResults,
    ShowingErrors,
}

/// Handle for one in-flight search. Only the most recent ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Result of handing an outcome back to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A newer search started after this one; nothing changed.
    Stale,
    /// Results are now live.
    Results(usize),
    /// Errors to hand to the error board.
    Errors(ErrorMap),
}

#[derive(Debug, Default)]
pub struct SearchSession {
    generation: u64,
    phase: SearchPhase,
    products: Vec<Arc<Product>>,
    has_shown_results: bool,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search: clear the grid, enter `Loading`, supersede any
    /// earlier ticket.
    pub fn begin(&mut self) -> SearchTicket {
        self.generation += 1;
        self.phase = SearchPhase::Loading;
        self.products.clear();
        debug!(generation = self.generation, "search started");
        SearchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply an outcome if `ticket` is still current.
    pub fn resolve(&mut self, ticket: SearchTicket, outcome: SearchOutcome) -> Resolution {
        if !self.is_current(ticket) {
            debug!(
                generation = ticket.0,
                current = self.generation,
                "discarding superseded search response"
            );
            return Resolution::Stale;
        }
        match outcome {
            SearchOutcome::Found(products) => {
                let count = products.len();
                info!(count, "search returned products");
                self.products = products.into_iter().map(Arc::new).collect();
                self.phase = SearchPhase::ShowingResults;
                self.has_shown_results = true;
                Resolution::Results(count)
            }
            SearchOutcome::Rejected(errors) => {
                info!(fields = errors.len(), "search rejected");
                self.products.clear();
                self.phase = SearchPhase::ShowingErrors;
                Resolution::Errors(errors)
            }
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Loading
    }

    /// The live product list.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Set once any search has rendered results; drives the compact layout.
    pub fn has_shown_results(&self) -> bool {
        self.has_shown_results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::sample;

    #[test]
    fn begin_clears_previous_results() {
        let mut s = SearchSession::new();
        assert_eq!(s.phase(), SearchPhase::Idle);
        let t = s.begin();
        s.resolve(t, SearchOutcome::Found(vec![sample("A", &["a"])]));
        assert_eq!(s.products().len(), 1);

        s.begin();
        assert!(s.is_loading());
        assert!(s.products().is_empty());
    }

    #[test]
    fn results_keep_order() {
        let mut s = SearchSession::new();
        let t = s.begin();
        let products = vec![sample("A", &["a"]), sample("B", &["b"]), sample("C", &["c"])];
        assert_eq!(s.resolve(t, SearchOutcome::Found(products)), Resolution::Results(3));
        assert_eq!(s.phase(), SearchPhase::ShowingResults);
        let names: Vec<&str> = s.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        let images: Vec<Option<&str>> = s.products().iter().map(|p| p.first_image()).collect();
        assert_eq!(images, vec![Some("a"), Some("b"), Some("c")]);
        assert!(s.has_shown_results());
    }

    #[test]
    fn rejection_shows_errors_without_results() {
        let mut s = SearchSession::new();
        let t = s.begin();
        let errors = ErrorMap::single("currency", "Invalid currency");
        assert_eq!(
            s.resolve(t, SearchOutcome::Rejected(errors.clone())),
            Resolution::Errors(errors)
        );
        assert_eq!(s.phase(), SearchPhase::ShowingErrors);
        assert!(s.products().is_empty());
        assert!(!s.has_shown_results());
    }

    #[test]
    fn late_response_from_superseded_search_is_discarded() {
        let mut s = SearchSession::new();
        let first = s.begin();
        let second = s.begin();

        // Second request finishes first.
        s.resolve(second, SearchOutcome::Found(vec![sample("New", &[])]));
        // First request straggles in afterwards.
        assert_eq!(
            s.resolve(first, SearchOutcome::Found(vec![sample("Old", &[]), sample("Old2", &[])])),
            Resolution::Stale
        );
        assert_eq!(s.products().len(), 1);
        assert_eq!(s.products()[0].name, "New");
    }

    #[test]
    fn stale_errors_do_not_replace_loading_state() {
        let mut s = SearchSession::new();
        let first = s.begin();
        let _second = s.begin();
        assert_eq!(
            s.resolve(first, SearchOutcome::Rejected(ErrorMap::general())),
            Resolution::Stale
        );
        assert!(s.is_loading());
    }
}
