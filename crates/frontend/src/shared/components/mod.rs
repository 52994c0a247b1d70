pub mod query_filters;
pub mod stat_card;

pub use query_filters::QueryFilters;
pub use stat_card::StatCard;
