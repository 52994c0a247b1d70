//! The record store: a flat, append/remove-only collection of sale records
//! plus the seller roster. Value semantics: the UI keeps a ledger in a
//! signal, mutates a clone through these methods and swaps it in whole, so
//! no aggregation ever observes a partially applied change.

use contracts::domain::{SaleDraft, SaleId, SaleRecord, ValidationIssue};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// The admin form produced invalid input; nothing was applied
    #[error("sale input failed validation")]
    Validation { issues: Vec<ValidationIssue> },

    /// Roster membership is unique case-insensitively
    #[error("seller {name:?} is already registered")]
    DuplicateSeller { name: String },

    /// Roster entries cannot be blank
    #[error("seller name must not be blank")]
    BlankSeller,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesLedger {
    records: Vec<SaleRecord>,
    sellers: Vec<String>,
}

impl SalesLedger {
    /// Build a ledger from raw parts. The roster is sorted and deduplicated
    /// case-insensitively (first occurrence wins), so a ledger restored from
    /// an old snapshot ends up with the same invariants as a fresh one.
    pub fn new(records: Vec<SaleRecord>, sellers: Vec<String>) -> Self {
        let mut ledger = Self {
            records,
            sellers: Vec::new(),
        };
        for name in sellers {
            let _ = ledger.add_seller(&name);
        }
        ledger
    }

    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Roster view, always sorted lexicographically
    pub fn sellers(&self) -> &[String] {
        &self.sellers
    }

    /// Validate the draft and append the record, returning its generated id.
    /// A draft that fails validation leaves the ledger untouched.
    pub fn add_sale(&mut self, draft: &SaleDraft) -> Result<SaleId, LedgerError> {
        let sale = draft
            .validate()
            .map_err(|issues| LedgerError::Validation { issues })?;

        let id = SaleId::new_v4();
        self.records.push(SaleRecord {
            id,
            seller_name: sale.seller_name,
            day: sale.day,
            month: sale.month,
            channel: sale.channel,
            quantity: sale.quantity,
            amount: sale.amount,
        });
        Ok(id)
    }

    /// Delete by id. Unknown ids are a no-op: the UI only offers deletion of
    /// records it just listed, so a miss means the work is already done.
    pub fn remove_sale(&mut self, id: SaleId) {
        self.records.retain(|sale| sale.id != id);
    }

    /// Add a roster entry. The name is trimmed; blank names and
    /// case-insensitive duplicates are rejected without mutation. Returns
    /// the stored form of the name.
    pub fn add_seller(&mut self, name: &str) -> Result<String, LedgerError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LedgerError::BlankSeller);
        }
        if self
            .sellers
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(trimmed))
        {
            return Err(LedgerError::DuplicateSeller {
                name: trimmed.to_string(),
            });
        }

        let stored = trimmed.to_string();
        self.sellers.push(stored.clone());
        self.sellers.sort();
        Ok(stored)
    }

    /// Delete a roster entry and cascade to every sale record carrying that
    /// seller's name. Unknown names are a no-op.
    pub fn remove_seller(&mut self, name: &str) {
        self.sellers.retain(|existing| existing != name);
        self.records.retain(|sale| sale.seller_name != name);
    }
}
