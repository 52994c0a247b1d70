//! localStorage persistence for the ledger snapshot and the seller board
//! filter state. All failures degrade silently: a browser without storage
//! still gets a working (non-persistent) app.

use analytics::{snapshot, SalesLedger};
use contracts::query::LeaderboardQuery;
use web_sys::window;

const LEDGER_KEY: &str = "sales_ledger_snapshot";
const BOARD_QUERY_KEY: &str = "seller_board_query";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Ledger from the persisted snapshot. First run (no key at all) starts
/// from the seed dataset; a present but defective snapshot decodes to an
/// empty ledger inside `analytics::snapshot`.
pub fn load_ledger() -> SalesLedger {
    match local_storage().and_then(|s| s.get_item(LEDGER_KEY).ok().flatten()) {
        Some(raw) => snapshot::decode(&raw),
        None => super::seed::seed_ledger(),
    }
}

/// Write-through after every mutation
pub fn save_ledger(ledger: &SalesLedger) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(json) = snapshot::encode(ledger) {
        let _ = storage.set_item(LEDGER_KEY, &json);
    }
}

/// Last used seller board filters, defaults when absent or stale
pub fn load_board_query() -> LeaderboardQuery {
    local_storage()
        .and_then(|s| s.get_item(BOARD_QUERY_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_board_query(query: &LeaderboardQuery) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(query) {
        let _ = storage.set_item(BOARD_QUERY_KEY, &json);
    }
}
