use analytics::engine;
use contracts::query::SortKey;
use leptos::prelude::*;

use crate::shared::components::QueryFilters;
use crate::shared::list_utils::{sort_class, sort_indicator};
use crate::shared::number_format::{format_int, format_money};
use crate::state::{storage, use_app};

/// Filterable, sortable per-seller leaderboard. The filter/sort state is
/// restored from the previous visit and written back on every change.
#[component]
pub fn SellerBoard() -> impl IntoView {
    let ctx = use_app();
    let (query, set_query) = signal(storage::load_board_query());

    Effect::new(move |_| {
        query.with(|q| storage::save_board_query(q));
    });

    let rows = Memo::new(move |_| {
        let q = query.get();
        ctx.ledger.with(|l| engine::leaderboard(l.records(), &q))
    });

    let sort_by = move |key: SortKey| {
        set_query.update(|q| *q = q.clone().with_sort(key));
    };

    view! {
        <div class="panel">
            <h2>"Seller Performance"</h2>
            <QueryFilters query=query set_query=set_query />

            <table class="data-table">
                <thead>
                    <tr>
                        <th on:click=move |_| sort_by(SortKey::Name)>
                            "Seller "
                            <span class=move || query.with(|q| sort_class(q, SortKey::Name))>
                                {move || query.with(|q| sort_indicator(q, SortKey::Name))}
                            </span>
                        </th>
                        <th on:click=move |_| sort_by(SortKey::Quantity)>
                            "Units Sold "
                            <span class=move || query.with(|q| sort_class(q, SortKey::Quantity))>
                                {move || query.with(|q| sort_indicator(q, SortKey::Quantity))}
                            </span>
                        </th>
                        <th on:click=move |_| sort_by(SortKey::Amount)>
                            "Revenue "
                            <span class=move || query.with(|q| sort_class(q, SortKey::Amount))>
                                {move || query.with(|q| sort_indicator(q, SortKey::Amount))}
                            </span>
                        </th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="3" class="data-table__empty">
                                        "No results for the selected filters."
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            rows.into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            <td class="data-table__name">{row.name}</td>
                                            <td>{format_int(row.quantity)}</td>
                                            <td class="data-table__money">{format_money(row.amount)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
