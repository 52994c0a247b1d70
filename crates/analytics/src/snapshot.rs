//! Serialized form of the ledger for the storage collaborator.
//!
//! The storage side (localStorage in the browser) is treated as untrusted:
//! a missing, empty or malformed snapshot decodes to an empty ledger with a
//! warning in the log, never an error. Both fields default so a snapshot
//! written by an older build that lacked the roster still loads.

use contracts::domain::SaleRecord;
use serde::{Deserialize, Serialize};

use crate::ledger::SalesLedger;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LedgerSnapshot {
    pub records: Vec<SaleRecord>,
    pub sellers: Vec<String>,
}

impl From<&SalesLedger> for LedgerSnapshot {
    fn from(ledger: &SalesLedger) -> Self {
        Self {
            records: ledger.records().to_vec(),
            sellers: ledger.sellers().to_vec(),
        }
    }
}

impl LedgerSnapshot {
    pub fn into_ledger(self) -> SalesLedger {
        SalesLedger::new(self.records, self.sellers)
    }
}

/// Decode a raw snapshot string, falling back to an empty ledger on any
/// defect in the persisted data.
pub fn decode(raw: &str) -> SalesLedger {
    if raw.trim().is_empty() {
        return SalesLedger::default();
    }
    match serde_json::from_str::<LedgerSnapshot>(raw) {
        Ok(snapshot) => snapshot.into_ledger(),
        Err(err) => {
            log::warn!("discarding malformed ledger snapshot: {err}");
            SalesLedger::default()
        }
    }
}

/// Encode the ledger for write-through persistence
pub fn encode(ledger: &SalesLedger) -> serde_json::Result<String> {
    serde_json::to_string(&LedgerSnapshot::from(ledger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{Month, SaleDraft, StoreChannel};

    fn populated_ledger() -> SalesLedger {
        let mut ledger = SalesLedger::default();
        ledger.add_seller("Ana").unwrap();
        ledger
            .add_sale(&SaleDraft {
                seller_name: "Ana".to_string(),
                day: "5".to_string(),
                month: Month::Jan,
                channel: StoreChannel::Wholesale,
                quantity: "10".to_string(),
                amount: "100.0".to_string(),
            })
            .unwrap();
        ledger
    }

    #[test]
    fn encode_then_decode_restores_the_ledger() {
        let ledger = populated_ledger();
        let raw = encode(&ledger).unwrap();
        assert_eq!(decode(&raw), ledger);
    }

    #[test]
    fn malformed_snapshot_falls_back_to_empty() {
        for raw in ["not json at all", "{\"records\": 42}", "[1,2,3]"] {
            let ledger = decode(raw);
            assert!(ledger.records().is_empty(), "{raw}");
            assert!(ledger.sellers().is_empty(), "{raw}");
        }
    }

    #[test]
    fn empty_snapshot_falls_back_to_empty() {
        for raw in ["", "   ", "{}"] {
            let ledger = decode(raw);
            assert_eq!(ledger, SalesLedger::default(), "{raw:?}");
        }
    }

    #[test]
    fn snapshot_without_roster_field_still_loads() {
        let ledger = decode("{\"records\": []}");
        assert_eq!(ledger, SalesLedger::default());
    }
}
