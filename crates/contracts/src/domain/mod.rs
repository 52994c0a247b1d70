pub mod draft;
pub mod sale;

pub use draft::{SaleDraft, SaleField, ValidatedSale, ValidationIssue};
pub use sale::{Month, SaleId, SaleRecord, StoreChannel};
