use contracts::domain::{Month, StoreChannel};
use contracts::query::LeaderboardQuery;
use leptos::prelude::*;

/// Filter row shared by the seller board and the admin sales list: free-text
/// seller search, month, channel and day. Sort state lives with the caller.
#[component]
pub fn QueryFilters(
    query: ReadSignal<LeaderboardQuery>,
    set_query: WriteSignal<LeaderboardQuery>,
) -> impl IntoView {
    view! {
        <div class="filter-row">
            <input
                type="text"
                class="filter-row__search"
                placeholder="Search seller..."
                prop:value=move || query.get().search
                on:input=move |ev| set_query.update(|q| q.search = event_target_value(&ev))
            />
            <select
                aria-label="Filter by month"
                prop:value=move || {
                    query.get().month.map(|m| m.code().to_string()).unwrap_or_else(|| "All".to_string())
                }
                on:change=move |ev| {
                    set_query.update(|q| q.month = Month::from_code(&event_target_value(&ev)))
                }
            >
                <option value="All">"All Months"</option>
                {Month::ALL
                    .iter()
                    .map(|m| view! { <option value=m.code()>{m.label()}</option> })
                    .collect_view()}
            </select>
            <select
                aria-label="Filter by channel"
                prop:value=move || {
                    query.get().channel.map(|c| c.code().to_string()).unwrap_or_else(|| "All".to_string())
                }
                on:change=move |ev| {
                    set_query.update(|q| q.channel = StoreChannel::from_code(&event_target_value(&ev)))
                }
            >
                <option value="All">"All Channels"</option>
                {StoreChannel::ALL
                    .iter()
                    .map(|c| view! { <option value=c.code()>{c.label()}</option> })
                    .collect_view()}
            </select>
            <input
                type="number"
                class="filter-row__day"
                placeholder="Day"
                min="1"
                max="31"
                aria-label="Filter by day"
                prop:value=move || query.get().day.map(|d| d.to_string()).unwrap_or_default()
                on:input=move |ev| {
                    set_query.update(|q| q.day = event_target_value(&ev).trim().parse().ok())
                }
            />
        </div>
    }
}
