//! Derived-metrics layer of the sales dashboard.
//!
//! [`ledger`] owns the flat record collection and the seller roster;
//! [`engine`] turns a snapshot of those records into the aggregates the UI
//! displays. Every engine function is pure and total over well-formed input:
//! empty collections yield zero/empty results, never an error.

pub mod engine;
pub mod ledger;
pub mod snapshot;

pub use ledger::{LedgerError, SalesLedger};
pub use snapshot::LedgerSnapshot;
