use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Typed id for a sale record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaleId(pub Uuid);

impl SaleId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for SaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Calendar month of a sale. Variant order is calendar order, which the
/// derived `Ord` relies on; `Month::ALL` is the fixed template the monthly
/// chart is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Short wire code, identical to the serde form
    pub fn code(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Full display name
    pub fn label(&self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }

    pub fn from_code(code: &str) -> Option<Month> {
        Month::ALL.iter().copied().find(|m| m.code() == code)
    }

    /// 1-based calendar number, e.g. for mapping from `chrono::Datelike::month`
    pub fn from_number(n: u32) -> Option<Month> {
        match n {
            1..=12 => Some(Month::ALL[(n - 1) as usize]),
            _ => None,
        }
    }
}

/// Distribution channel of a sale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoreChannel {
    Wholesale,
    Industrial,
}

impl StoreChannel {
    pub const ALL: [StoreChannel; 2] = [StoreChannel::Wholesale, StoreChannel::Industrial];

    /// Wire code, identical to the serde form
    pub fn code(&self) -> &'static str {
        match self {
            StoreChannel::Wholesale => "WHOLESALE",
            StoreChannel::Industrial => "INDUSTRIAL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StoreChannel::Wholesale => "Wholesale",
            StoreChannel::Industrial => "Industrial",
        }
    }

    pub fn from_code(code: &str) -> Option<StoreChannel> {
        StoreChannel::ALL.iter().copied().find(|c| c.code() == code)
    }
}

/// One sale transaction. Immutable once stored; the ledger only ever
/// appends new records or deletes whole records by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: SaleId,
    pub seller_name: String,
    pub day: u8,
    pub month: Month,
    pub channel: StoreChannel,
    pub quantity: u32,
    pub amount: f64,
}
