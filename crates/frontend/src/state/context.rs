use analytics::SalesLedger;
use leptos::prelude::*;

use super::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Dashboard,
    Admin,
}

/// App-wide state shared via context: the ledger is the single source the
/// dashboard aggregates are derived from, the rest is navigation and the
/// login gate.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub ledger: RwSignal<SalesLedger>,
    pub view: RwSignal<AppView>,
    pub logged_in: RwSignal<bool>,
    pub show_login: RwSignal<bool>,
}

impl AppContext {
    /// Restore the ledger from localStorage (seed data on first run) and
    /// start on the public dashboard, logged out.
    pub fn new() -> Self {
        Self {
            ledger: RwSignal::new(storage::load_ledger()),
            view: RwSignal::new(AppView::Dashboard),
            logged_in: RwSignal::new(false),
            show_login: RwSignal::new(false),
        }
    }

    pub fn log_out(&self) {
        self.logged_in.set(false);
        self.view.set(AppView::Dashboard);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found in component tree")
}
