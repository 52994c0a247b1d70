//! Pure aggregation functions over a snapshot of sale records.
//!
//! Grouping goes through `BTreeMap` so iteration order, and therefore every
//! tie-break, is deterministic: identical input always yields identical
//! output, and equal-revenue ties resolve to the lexicographically first
//! seller name.

use std::collections::BTreeMap;

use contracts::domain::{Month, SaleRecord};
use contracts::query::{LeaderboardQuery, SortDirection, SortKey};
use contracts::reports::{
    DailyRevenue, GoalProgress, MonthlyRevenue, ReportScope, SellerTotals, TopSeller,
};

/// Revenue per template month, one entry per month in calendar order.
/// Months without records contribute a zero entry, so the monthly chart
/// always shows all twelve bars.
pub fn monthly_totals(records: &[SaleRecord]) -> Vec<MonthlyRevenue> {
    let mut by_month: BTreeMap<Month, f64> = BTreeMap::new();
    for sale in records {
        *by_month.entry(sale.month).or_insert(0.0) += sale.amount;
    }

    Month::ALL
        .iter()
        .map(|&month| MonthlyRevenue {
            month,
            revenue: by_month.get(&month).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Total revenue, optionally scoped to a single month
pub fn total_revenue(records: &[SaleRecord], month: Option<Month>) -> f64 {
    records
        .iter()
        .filter(|sale| month.is_none_or(|m| sale.month == m))
        .map(|sale| sale.amount)
        .sum()
}

/// The seller with the highest summed revenue, optionally scoped to a month.
/// `None` when no record matches the scope. On exactly equal sums the
/// lexicographically first name wins (strictly-greater comparison over
/// name-ordered groups).
pub fn top_seller(records: &[SaleRecord], month: Option<Month>) -> Option<TopSeller> {
    let mut by_seller: BTreeMap<&str, f64> = BTreeMap::new();
    for sale in records {
        if month.is_none_or(|m| sale.month == m) {
            *by_seller.entry(sale.seller_name.as_str()).or_insert(0.0) += sale.amount;
        }
    }

    let mut best: Option<(&str, f64)> = None;
    for (name, revenue) in by_seller {
        match best {
            Some((_, top)) if revenue <= top => {}
            _ => best = Some((name, revenue)),
        }
    }

    best.map(|(name, revenue)| TopSeller {
        name: name.to_string(),
        revenue,
        scope: month.map_or(ReportScope::Overall, ReportScope::Month),
    })
}

/// Revenue per day within one month, ascending by day. Sparse: days with no
/// records are omitted rather than padded to 1..=31.
pub fn daily_breakdown(records: &[SaleRecord], month: Month) -> Vec<DailyRevenue> {
    let mut by_day: BTreeMap<u8, f64> = BTreeMap::new();
    for sale in records {
        if sale.month == month {
            *by_day.entry(sale.day).or_insert(0.0) += sale.amount;
        }
    }

    by_day
        .into_iter()
        .map(|(day, revenue)| DailyRevenue { day, revenue })
        .collect()
}

/// All filters of the query AND-composed over one record
fn matches(sale: &SaleRecord, query: &LeaderboardQuery) -> bool {
    let search = query.search.trim();
    if !search.is_empty()
        && !sale
            .seller_name
            .to_lowercase()
            .contains(&search.to_lowercase())
    {
        return false;
    }
    if query.month.is_some_and(|m| sale.month != m) {
        return false;
    }
    if query.channel.is_some_and(|c| sale.channel != c) {
        return false;
    }
    if query.day.is_some_and(|d| sale.day != d) {
        return false;
    }
    true
}

/// The records the query's filters keep, in store order. The admin sales
/// list reuses this without the grouping step.
pub fn filtered<'a>(records: &'a [SaleRecord], query: &LeaderboardQuery) -> Vec<&'a SaleRecord> {
    records.iter().filter(|sale| matches(sale, query)).collect()
}

/// Filter, then group by seller summing quantity and amount, then sort by
/// the query's key and direction. Ties under a numeric key keep name order
/// (the grouping order), which the stable sort preserves.
pub fn leaderboard(records: &[SaleRecord], query: &LeaderboardQuery) -> Vec<SellerTotals> {
    let mut by_seller: BTreeMap<&str, (u64, f64)> = BTreeMap::new();
    for sale in filtered(records, query) {
        let entry = by_seller.entry(sale.seller_name.as_str()).or_insert((0, 0.0));
        entry.0 += u64::from(sale.quantity);
        entry.1 += sale.amount;
    }

    let mut rows: Vec<SellerTotals> = by_seller
        .into_iter()
        .map(|(name, (quantity, amount))| SellerTotals {
            name: name.to_string(),
            quantity,
            amount,
        })
        .collect();

    rows.sort_by(|a, b| {
        let ordering = match query.sort_key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Quantity => a.quantity.cmp(&b.quantity),
            SortKey::Amount => a
                .amount
                .partial_cmp(&b.amount)
                .unwrap_or(std::cmp::Ordering::Equal),
        };
        match query.sort_direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    rows
}

/// Achieved revenue against the configured goal. `remaining` goes negative
/// once the goal is exceeded; that is success, not an error. A zero (or
/// negative) goal yields the 0.0 percentage sentinel instead of a NaN/inf
/// artifact.
pub fn goal_progress(achieved: f64, goal: f64) -> GoalProgress {
    let percentage = if goal > 0.0 {
        achieved / goal * 100.0
    } else {
        0.0
    };
    GoalProgress {
        achieved,
        remaining: goal - achieved,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::{SaleId, StoreChannel};

    fn sale(seller: &str, month: Month, day: u8, channel: StoreChannel, qty: u32, amount: f64) -> SaleRecord {
        SaleRecord {
            id: SaleId::new_v4(),
            seller_name: seller.to_string(),
            day,
            month,
            channel,
            quantity: qty,
            amount,
        }
    }

    /// The two-record scenario the dashboard documentation uses throughout
    fn two_january_sales() -> Vec<SaleRecord> {
        vec![
            sale("A", Month::Jan, 5, StoreChannel::Wholesale, 10, 100.0),
            sale("B", Month::Jan, 6, StoreChannel::Wholesale, 5, 200.0),
        ]
    }

    #[test]
    fn monthly_totals_cover_all_twelve_months() {
        let records = two_january_sales();
        let totals = monthly_totals(&records);
        assert_eq!(totals.len(), 12);
        assert_eq!(totals[0].month, Month::Jan);
        assert_eq!(totals[0].revenue, 300.0);
        for row in &totals[1..] {
            assert_eq!(row.revenue, 0.0);
        }
    }

    #[test]
    fn monthly_totals_conserve_total_revenue() {
        let records = vec![
            sale("A", Month::Jan, 5, StoreChannel::Wholesale, 10, 100.0),
            sale("B", Month::Mar, 6, StoreChannel::Industrial, 5, 200.5),
            sale("C", Month::Dec, 31, StoreChannel::Wholesale, 1, 49.5),
        ];
        let sum_of_months: f64 = monthly_totals(&records).iter().map(|m| m.revenue).sum();
        let sum_of_records: f64 = records.iter().map(|s| s.amount).sum();
        assert!((sum_of_months - sum_of_records).abs() < 1e-9);
    }

    #[test]
    fn empty_records_yield_twelve_zero_months() {
        let totals = monthly_totals(&[]);
        assert_eq!(totals.len(), 12);
        assert!(totals.iter().all(|m| m.revenue == 0.0));
    }

    #[test]
    fn top_seller_overall_picks_highest_sum() {
        let records = two_january_sales();
        let top = top_seller(&records, None).unwrap();
        assert_eq!(top.name, "B");
        assert_eq!(top.revenue, 200.0);
        assert_eq!(top.scope, ReportScope::Overall);
    }

    #[test]
    fn top_seller_scoped_to_month() {
        let mut records = two_january_sales();
        records.push(sale("C", Month::Feb, 1, StoreChannel::Industrial, 1, 999.0));

        let top = top_seller(&records, Some(Month::Jan)).unwrap();
        assert_eq!(top.name, "B");
        assert_eq!(top.scope, ReportScope::Month(Month::Jan));

        let top = top_seller(&records, Some(Month::Feb)).unwrap();
        assert_eq!(top.name, "C");

        assert!(top_seller(&records, Some(Month::Mar)).is_none());
    }

    #[test]
    fn top_seller_tie_resolves_to_first_name() {
        // Equal sums: the lexicographically first name wins, and the result
        // is stable across shuffled input order.
        let forward = vec![
            sale("Bruna", Month::Jan, 1, StoreChannel::Wholesale, 1, 150.0),
            sale("Ana", Month::Jan, 2, StoreChannel::Wholesale, 1, 150.0),
        ];
        let reversed: Vec<SaleRecord> = forward.iter().rev().cloned().collect();

        assert_eq!(top_seller(&forward, None).unwrap().name, "Ana");
        assert_eq!(top_seller(&reversed, None).unwrap().name, "Ana");
    }

    #[test]
    fn top_seller_of_empty_set_is_none() {
        assert!(top_seller(&[], None).is_none());
        assert!(top_seller(&[], Some(Month::Jan)).is_none());
    }

    #[test]
    fn daily_breakdown_is_sparse_and_ascending() {
        let records = vec![
            sale("A", Month::Jan, 20, StoreChannel::Wholesale, 1, 30.0),
            sale("B", Month::Jan, 5, StoreChannel::Industrial, 1, 10.0),
            sale("C", Month::Jan, 5, StoreChannel::Wholesale, 1, 15.0),
            sale("D", Month::Feb, 7, StoreChannel::Wholesale, 1, 99.0),
        ];
        let days = daily_breakdown(&records, Month::Jan);
        assert_eq!(days.len(), 2);
        assert_eq!((days[0].day, days[0].revenue), (5, 25.0));
        assert_eq!((days[1].day, days[1].revenue), (20, 30.0));

        assert!(daily_breakdown(&records, Month::Mar).is_empty());
        assert!(daily_breakdown(&[], Month::Jan).is_empty());
    }

    #[test]
    fn daily_breakdown_matches_documented_scenario() {
        let days = daily_breakdown(&two_january_sales(), Month::Jan);
        assert_eq!(
            days,
            vec![
                DailyRevenue { day: 5, revenue: 100.0 },
                DailyRevenue { day: 6, revenue: 200.0 },
            ]
        );
    }

    #[test]
    fn leaderboard_filters_by_channel_and_sorts_by_amount_desc() {
        let query = LeaderboardQuery {
            channel: Some(StoreChannel::Wholesale),
            ..LeaderboardQuery::default()
        };
        let rows = leaderboard(&two_january_sales(), &query);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].name.as_str(), rows[0].quantity, rows[0].amount), ("B", 5, 200.0));
        assert_eq!((rows[1].name.as_str(), rows[1].quantity, rows[1].amount), ("A", 10, 100.0));
    }

    #[test]
    fn leaderboard_search_is_case_insensitive_substring() {
        let records = vec![
            sale("Ana Souza", Month::Jan, 1, StoreChannel::Wholesale, 1, 10.0),
            sale("Bruna Lima", Month::Jan, 2, StoreChannel::Wholesale, 1, 20.0),
        ];
        let query = LeaderboardQuery {
            search: "SOU".to_string(),
            ..LeaderboardQuery::default()
        };
        let rows = leaderboard(&records, &query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ana Souza");
    }

    #[test]
    fn leaderboard_composes_all_filters_with_and() {
        let records = vec![
            sale("Ana", Month::Jan, 5, StoreChannel::Wholesale, 2, 10.0),
            sale("Ana", Month::Jan, 6, StoreChannel::Wholesale, 3, 20.0),
            sale("Ana", Month::Feb, 5, StoreChannel::Wholesale, 4, 40.0),
            sale("Ana", Month::Jan, 5, StoreChannel::Industrial, 5, 80.0),
        ];
        let query = LeaderboardQuery {
            search: "an".to_string(),
            month: Some(Month::Jan),
            channel: Some(StoreChannel::Wholesale),
            day: Some(5),
            ..LeaderboardQuery::default()
        };
        let rows = leaderboard(&records, &query);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].quantity, 2);
        assert_eq!(rows[0].amount, 10.0);
    }

    #[test]
    fn leaderboard_groups_before_sorting() {
        let records = vec![
            sale("Ana", Month::Jan, 1, StoreChannel::Wholesale, 2, 50.0),
            sale("Ana", Month::Feb, 2, StoreChannel::Industrial, 3, 25.0),
            sale("Bruna", Month::Jan, 3, StoreChannel::Wholesale, 1, 60.0),
        ];
        let query = LeaderboardQuery {
            sort_key: SortKey::Quantity,
            sort_direction: SortDirection::Desc,
            ..LeaderboardQuery::default()
        };
        let rows = leaderboard(&records, &query);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].name.as_str(), rows[0].quantity, rows[0].amount), ("Ana", 5, 75.0));
        assert_eq!((rows[1].name.as_str(), rows[1].quantity), ("Bruna", 1));
    }

    #[test]
    fn leaderboard_name_sort_is_lexicographic_both_ways() {
        let records = vec![
            sale("Carla", Month::Jan, 1, StoreChannel::Wholesale, 1, 1.0),
            sale("Ana", Month::Jan, 1, StoreChannel::Wholesale, 1, 1.0),
            sale("Bruna", Month::Jan, 1, StoreChannel::Wholesale, 1, 1.0),
        ];
        let asc = LeaderboardQuery {
            sort_key: SortKey::Name,
            sort_direction: SortDirection::Asc,
            ..LeaderboardQuery::default()
        };
        let names: Vec<_> = leaderboard(&records, &asc).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Ana", "Bruna", "Carla"]);

        let desc = LeaderboardQuery {
            sort_direction: SortDirection::Desc,
            ..asc
        };
        let names: Vec<_> = leaderboard(&records, &desc).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Carla", "Bruna", "Ana"]);
    }

    #[test]
    fn leaderboard_is_idempotent_for_identical_input() {
        let records = vec![
            sale("Ana", Month::Jan, 1, StoreChannel::Wholesale, 1, 100.0),
            sale("Bruna", Month::Jan, 2, StoreChannel::Industrial, 2, 100.0),
            sale("Carla", Month::Feb, 3, StoreChannel::Wholesale, 3, 100.0),
        ];
        // Equal amounts force the tie path as well.
        let query = LeaderboardQuery::default();
        let first = leaderboard(&records, &query);
        let second = leaderboard(&records, &query);
        assert_eq!(first, second);
        // Ties keep name order under the stable sort.
        let names: Vec<_> = first.into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Ana", "Bruna", "Carla"]);
    }

    #[test]
    fn filtered_preserves_store_order() {
        let records = two_january_sales();
        let query = LeaderboardQuery::default();
        let kept = filtered(&records, &query);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].seller_name, "A");
        assert_eq!(kept[1].seller_name, "B");
    }

    #[test]
    fn goal_progress_matches_documented_scenario() {
        let progress = goal_progress(300.0, 1000.0);
        assert_eq!(progress.remaining, 700.0);
        assert!((progress.percentage - 30.0).abs() < 1e-9);
    }

    #[test]
    fn exceeded_goal_goes_negative_without_error() {
        let progress = goal_progress(1200.0, 1000.0);
        assert_eq!(progress.remaining, -200.0);
        assert!((progress.percentage - 120.0).abs() < 1e-9);
    }

    #[test]
    fn zero_goal_yields_sentinel_percentage() {
        let progress = goal_progress(300.0, 0.0);
        assert_eq!(progress.percentage, 0.0);
        assert_eq!(progress.remaining, -300.0);
        assert!(progress.percentage.is_finite());
    }

    #[test]
    fn total_revenue_scopes_by_month() {
        let mut records = two_january_sales();
        records.push(sale("C", Month::Feb, 1, StoreChannel::Wholesale, 1, 50.0));
        assert_eq!(total_revenue(&records, None), 350.0);
        assert_eq!(total_revenue(&records, Some(Month::Jan)), 300.0);
        assert_eq!(total_revenue(&records, Some(Month::Mar)), 0.0);
        assert_eq!(total_revenue(&[], None), 0.0);
    }
}
