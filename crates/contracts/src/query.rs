//! Filter and sort configuration for the seller leaderboard and the admin
//! sales list. All active filters are AND-composed by the analytics engine.

use crate::domain::{Month, StoreChannel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Quantity,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardQuery {
    /// Case-insensitive substring match on the seller name; empty = no filter
    pub search: String,
    pub month: Option<Month>,
    pub channel: Option<StoreChannel>,
    pub day: Option<u8>,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        // The dashboard opens on revenue, highest first
        Self {
            search: String::new(),
            month: None,
            channel: None,
            day: None,
            sort_key: SortKey::Amount,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl LeaderboardQuery {
    /// Same filters, different ordering: clicking an already active column
    /// header flips the direction, a new column starts ascending.
    pub fn with_sort(mut self, key: SortKey) -> Self {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Asc;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_sort_click_toggles_direction() {
        let q = LeaderboardQuery::default();
        assert_eq!(q.sort_key, SortKey::Amount);
        assert_eq!(q.sort_direction, SortDirection::Desc);

        let q = q.with_sort(SortKey::Name);
        assert_eq!(q.sort_key, SortKey::Name);
        assert_eq!(q.sort_direction, SortDirection::Asc);

        let q = q.with_sort(SortKey::Name);
        assert_eq!(q.sort_direction, SortDirection::Desc);
    }
}
