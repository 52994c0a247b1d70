//! Aggregate structures the analytics engine produces for the dashboard.
//! These carry raw numbers only; currency formatting is a frontend concern.

use crate::domain::Month;
use serde::{Deserialize, Serialize};

/// Revenue total for one template month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: Month,
    pub revenue: f64,
}

/// Revenue total for one day within a month (sparse: zero days are omitted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub day: u8,
    pub revenue: f64,
}

/// Scope a top-seller result was computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    Overall,
    Month(Month),
}

impl ReportScope {
    pub fn label(&self) -> String {
        match self {
            ReportScope::Overall => "Top Seller (Overall)".to_string(),
            ReportScope::Month(m) => format!("Seller of the Month ({})", m.code()),
        }
    }
}

/// Best seller within a scope, by summed revenue
#[derive(Debug, Clone, PartialEq)]
pub struct TopSeller {
    pub name: String,
    pub revenue: f64,
    pub scope: ReportScope,
}

/// Per-seller leaderboard row: filtered records grouped by seller name
#[derive(Debug, Clone, PartialEq)]
pub struct SellerTotals {
    pub name: String,
    pub quantity: u64,
    pub amount: f64,
}

/// Achieved revenue measured against the configured goal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub achieved: f64,
    pub remaining: f64,
    /// 0..=100 and beyond when the goal is exceeded; 0.0 when the goal is 0
    pub percentage: f64,
}
