//! Static configuration and the first-run dataset.
//!
//! The admin password is a plain client-side gate for a single-user tool,
//! not a security boundary.

use analytics::SalesLedger;
use contracts::domain::{Month, SaleId, SaleRecord, StoreChannel};

pub const ADMIN_PASSWORD: &str = "admin2025";

/// Revenue target for the measurement period
pub const SALES_GOAL: f64 = 1_200_000.0;

fn sale(seller: &str, month: Month, day: u8, channel: StoreChannel, quantity: u32, amount: f64) -> SaleRecord {
    SaleRecord {
        id: SaleId::new_v4(),
        seller_name: seller.to_string(),
        day,
        month,
        channel,
        quantity,
        amount,
    }
}

/// Dataset shown before the first admin entry, so a fresh install renders a
/// meaningful dashboard instead of twelve empty bars.
pub fn seed_ledger() -> SalesLedger {
    let sellers = vec![
        "Ana Lima".to_string(),
        "Bruno Costa".to_string(),
        "Carla Dias".to_string(),
        "Diego Alves".to_string(),
    ];

    let records = vec![
        sale("Ana Lima", Month::Jan, 8, StoreChannel::Wholesale, 120, 48_500.0),
        sale("Bruno Costa", Month::Jan, 15, StoreChannel::Industrial, 60, 61_200.0),
        sale("Carla Dias", Month::Feb, 3, StoreChannel::Wholesale, 95, 39_800.0),
        sale("Ana Lima", Month::Feb, 21, StoreChannel::Industrial, 40, 44_300.0),
        sale("Diego Alves", Month::Mar, 11, StoreChannel::Wholesale, 150, 57_900.0),
        sale("Bruno Costa", Month::Mar, 27, StoreChannel::Wholesale, 80, 33_400.0),
        sale("Carla Dias", Month::Apr, 9, StoreChannel::Industrial, 55, 49_100.0),
        sale("Diego Alves", Month::May, 14, StoreChannel::Industrial, 70, 52_600.0),
    ];

    SalesLedger::new(records, sellers)
}
