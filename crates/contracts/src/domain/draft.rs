//! Raw admin-form input for a new sale and its validation.
//!
//! The form submits free text for `day`, `quantity` and `amount`; validation
//! either produces the fully typed field set or a list of issues naming the
//! offending fields. A draft is never partially applied.

use super::sale::{Month, StoreChannel};

/// Field names a validation issue can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleField {
    SellerName,
    Day,
    Quantity,
    Amount,
}

impl SaleField {
    pub fn label(&self) -> &'static str {
        match self {
            SaleField::SellerName => "Seller",
            SaleField::Day => "Day",
            SaleField::Quantity => "Quantity",
            SaleField::Amount => "Amount",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub field: SaleField,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: SaleField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field.label(), self.message)
    }
}

/// What the new-sale form holds before validation
#[derive(Debug, Clone, PartialEq)]
pub struct SaleDraft {
    pub seller_name: String,
    pub day: String,
    pub month: Month,
    pub channel: StoreChannel,
    pub quantity: String,
    pub amount: String,
}

impl SaleDraft {
    pub fn new(month: Month, channel: StoreChannel) -> Self {
        Self {
            seller_name: String::new(),
            day: String::new(),
            month,
            channel,
            quantity: String::new(),
            amount: String::new(),
        }
    }

    /// Validate every field, collecting all issues rather than stopping at
    /// the first one so the form can highlight everything at once.
    pub fn validate(&self) -> Result<ValidatedSale, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let seller_name = self.seller_name.trim().to_string();
        if seller_name.is_empty() {
            issues.push(ValidationIssue::new(
                SaleField::SellerName,
                "must not be blank",
            ));
        }

        let day = match self.day.trim().parse::<u8>() {
            Ok(d) if (1..=31).contains(&d) => Some(d),
            Ok(_) => {
                issues.push(ValidationIssue::new(
                    SaleField::Day,
                    "must be between 1 and 31",
                ));
                None
            }
            Err(_) => {
                issues.push(ValidationIssue::new(
                    SaleField::Day,
                    "must be a whole number between 1 and 31",
                ));
                None
            }
        };

        let quantity = match self.quantity.trim().parse::<u32>() {
            Ok(q) => Some(q),
            Err(_) => {
                issues.push(ValidationIssue::new(
                    SaleField::Quantity,
                    "must be a non-negative whole number",
                ));
                None
            }
        };

        let amount = match self.amount.trim().parse::<f64>() {
            Ok(a) if a.is_finite() && a >= 0.0 => Some(a),
            Ok(_) => {
                issues.push(ValidationIssue::new(
                    SaleField::Amount,
                    "must be a non-negative number",
                ));
                None
            }
            Err(_) => {
                issues.push(ValidationIssue::new(
                    SaleField::Amount,
                    "must be a number, e.g. 2500.50",
                ));
                None
            }
        };

        if !issues.is_empty() {
            return Err(issues);
        }

        // All three are Some here: a None always pushes an issue above.
        Ok(ValidatedSale {
            seller_name,
            day: day.unwrap_or_default(),
            month: self.month,
            channel: self.channel,
            quantity: quantity.unwrap_or_default(),
            amount: amount.unwrap_or_default(),
        })
    }
}

/// Typed outcome of a successful [`SaleDraft::validate`]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSale {
    pub seller_name: String,
    pub day: u8,
    pub month: Month,
    pub channel: StoreChannel,
    pub quantity: u32,
    pub amount: f64,
}
