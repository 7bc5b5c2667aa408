//! Global application state using Dioxus signals, plus the actions that
//! move it: running a search and showing/clearing errors.

use dioxus::prelude::*;
use dioxus::core::Task;
use tracing::warn;

use prodsearch_core::detail::Overlay;
use prodsearch_core::errors::{ErrorBoard, ErrorMap, AUTO_DISMISS};
use prodsearch_core::filters::{FilterControls, FilterOptions};
use prodsearch_core::query::build_params;
use prodsearch_core::session::{Resolution, SearchSession};
use prodsearch_core::ClientConfig;
use prodsearch_http::SearchClient;

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Search client, built from the config loaded before launch
pub static CLIENT: GlobalSignal<SearchClient> = Signal::global(|| {
    let config: ClientConfig = crate::INITIAL_CONFIG
        .lock()
        .ok()
        .and_then(|mut slot| slot.take())
        .unwrap_or_default();
    SearchClient::new(&config)
});

/// Current text in the search box
pub static QUERY: GlobalSignal<String> = Signal::global(String::new);

/// Raw filter-panel control values
pub static FILTERS: GlobalSignal<FilterControls> = Signal::global(FilterControls::default);

/// Selectable values for the filter panel selects
pub static FILTER_OPTIONS: GlobalSignal<FilterOptions> = Signal::global(FilterOptions::default);

/// Whether the filter panel is open
pub static FILTER_PANEL_OPEN: GlobalSignal<bool> = Signal::global(|| false);

/// Search cycle state and the live product list
pub static SESSION: GlobalSignal<SearchSession> = Signal::global(SearchSession::new);

/// Displayed error messages and control highlights
pub static ERROR_BOARD: GlobalSignal<ErrorBoard> = Signal::global(ErrorBoard::new);

/// Pending auto-dismiss timer for the current error set
pub static DISMISS_TASK: GlobalSignal<Option<Task>> = Signal::global(|| None);

/// Product detail overlay
pub static OVERLAY: GlobalSignal<Overlay> = Signal::global(Overlay::default);

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Collect filters, build params, and run one search. A newer search
/// supersedes this one; its late response is dropped by the session.
pub fn run_search() {
    let query = QUERY.read().clone();
    let filters = FILTERS.read().collect();
    let params = build_params(&query, &filters);
    let ticket = SESSION.write().begin();
    let client = CLIENT.read().clone();

    spawn(async move {
        let outcome = client.search_outcome(&params).await;
        let resolution = SESSION.write().resolve(ticket, outcome);
        if let Resolution::Errors(errors) = resolution {
            show_errors(&errors);
        }
    });
}

/// Replace displayed errors and (re)arm the auto-dismiss timer.
pub fn show_errors(errors: &ErrorMap) {
    let epoch = ERROR_BOARD.write().show(errors);
    cancel_dismiss_timer();
    let task = spawn(async move {
        tokio::time::sleep(AUTO_DISMISS).await;
        if ERROR_BOARD.write().expire(epoch) {
            *DISMISS_TASK.write() = None;
        }
    });
    *DISMISS_TASK.write() = Some(task);
}

fn cancel_dismiss_timer() {
    if let Some(task) = DISMISS_TASK.write().take() {
        task.cancel();
    }
}

/// Load the filter option lists once. Failure leaves the selects empty.
pub async fn load_filter_options() {
    let client = CLIENT.read().clone();
    match client.filter_options().await {
        Ok(options) => *FILTER_OPTIONS.write() = options,
        Err(e) => warn!("could not load filter options: {e}"),
    }
}
