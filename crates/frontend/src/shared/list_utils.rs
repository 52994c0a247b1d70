//! Small helpers for sortable table headers.

use contracts::query::{LeaderboardQuery, SortDirection, SortKey};

/// Indicator glyph next to a column header: the active column shows the
/// direction, inactive columns a neutral hint.
pub fn sort_indicator(query: &LeaderboardQuery, key: SortKey) -> &'static str {
    if query.sort_key != key {
        "\u{2195}"
    } else {
        match query.sort_direction {
            SortDirection::Asc => "\u{25b2}",
            SortDirection::Desc => "\u{25bc}",
        }
    }
}

pub fn sort_class(query: &LeaderboardQuery, key: SortKey) -> &'static str {
    if query.sort_key == key {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_follows_active_column_and_direction() {
        let query = LeaderboardQuery::default(); // amount, descending
        assert_eq!(sort_indicator(&query, SortKey::Amount), "\u{25bc}");
        assert_eq!(sort_indicator(&query, SortKey::Name), "\u{2195}");

        let query = query.with_sort(SortKey::Name);
        assert_eq!(sort_indicator(&query, SortKey::Name), "\u{25b2}");
        assert_eq!(sort_class(&query, SortKey::Name), "sort-indicator sort-indicator--active");
        assert_eq!(sort_class(&query, SortKey::Quantity), "sort-indicator");
    }
}
