//! Data management view behind the login gate: new-sale form, seller roster
//! and the raw sales list with per-row deletion.

use analytics::engine;
use analytics::LedgerError;
use chrono::Datelike;
use contracts::domain::{Month, SaleDraft, SaleId, SaleRecord, StoreChannel};
use contracts::query::LeaderboardQuery;
use leptos::prelude::*;

use crate::shared::components::QueryFilters;
use crate::shared::number_format::{format_int, format_money};
use crate::state::use_app;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn current_month() -> Month {
    Month::from_number(chrono::Utc::now().date_naive().month()).unwrap_or(Month::Jan)
}

#[derive(Clone, PartialEq)]
enum Feedback {
    Success(String),
    Failure(String),
}

fn feedback_view(feedback: ReadSignal<Option<Feedback>>) -> impl IntoView {
    move || {
        feedback.get().map(|f| match f {
            Feedback::Success(msg) => {
                view! { <div class="form-feedback form-feedback--ok">{msg}</div> }.into_any()
            }
            Feedback::Failure(msg) => {
                view! { <div class="form-feedback form-feedback--error">{msg}</div> }.into_any()
            }
        })
    }
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    view! {
        <div class="admin">
            <SaleForm />
            <RosterPanel />
            <SalesList />
        </div>
    }
}

#[component]
fn SaleForm() -> impl IntoView {
    let ctx = use_app();
    let (seller, set_seller) = signal(String::new());
    let (day, set_day) = signal(String::new());
    let (month, set_month) = signal(current_month());
    let (channel, set_channel) = signal(StoreChannel::Wholesale);
    let (quantity, set_quantity) = signal(String::new());
    let (amount, set_amount) = signal(String::new());
    let (feedback, set_feedback) = signal(None::<Feedback>);

    let sellers = Memo::new(move |_| ctx.ledger.with(|l| l.sellers().to_vec()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = SaleDraft {
            seller_name: seller.get(),
            day: day.get(),
            month: month.get(),
            channel: channel.get(),
            quantity: quantity.get(),
            amount: amount.get(),
        };

        let mut outcome = None;
        ctx.ledger.update(|ledger| outcome = Some(ledger.add_sale(&draft)));

        match outcome {
            Some(Ok(_)) => {
                log::info!("sale recorded for {}", draft.seller_name);
                set_feedback.set(Some(Feedback::Success(format!(
                    "Sale for {} recorded.",
                    draft.seller_name.trim()
                ))));
                set_day.set(String::new());
                set_quantity.set(String::new());
                set_amount.set(String::new());
            }
            Some(Err(LedgerError::Validation { issues })) => {
                let detail = issues
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                set_feedback.set(Some(Feedback::Failure(detail)));
            }
            Some(Err(other)) => set_feedback.set(Some(Feedback::Failure(other.to_string()))),
            None => {}
        }
    };

    view! {
        <div class="panel panel--form">
            <h2>"New Sale"</h2>
            <form class="sale-form" on:submit=on_submit>
                <div class="sale-form__field">
                    <label for="sale-seller">"Seller"</label>
                    <select
                        id="sale-seller"
                        prop:value=move || seller.get()
                        on:change=move |ev| set_seller.set(event_target_value(&ev))
                    >
                        <option value="" disabled>"Select a seller"</option>
                        {move || {
                            sellers
                                .get()
                                .into_iter()
                                .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="sale-form__row">
                    <div class="sale-form__field">
                        <label for="sale-day">"Day"</label>
                        <input
                            type="number"
                            id="sale-day"
                            min="1"
                            max="31"
                            placeholder="e.g. 15"
                            prop:value=move || day.get()
                            on:input=move |ev| set_day.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="sale-form__field">
                        <label for="sale-month">"Month"</label>
                        <select
                            id="sale-month"
                            prop:value=move || month.get().code().to_string()
                            on:change=move |ev| {
                                if let Some(m) = Month::from_code(&event_target_value(&ev)) {
                                    set_month.set(m);
                                }
                            }
                        >
                            {Month::ALL
                                .iter()
                                .map(|m| view! { <option value=m.code()>{m.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="sale-form__field">
                        <label for="sale-channel">"Channel"</label>
                        <select
                            id="sale-channel"
                            prop:value=move || channel.get().code().to_string()
                            on:change=move |ev| {
                                if let Some(c) = StoreChannel::from_code(&event_target_value(&ev)) {
                                    set_channel.set(c);
                                }
                            }
                        >
                            {StoreChannel::ALL
                                .iter()
                                .map(|c| view! { <option value=c.code()>{c.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="sale-form__row">
                    <div class="sale-form__field">
                        <label for="sale-quantity">"Quantity"</label>
                        <input
                            type="number"
                            id="sale-quantity"
                            placeholder="e.g. 10"
                            prop:value=move || quantity.get()
                            on:input=move |ev| set_quantity.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="sale-form__field">
                        <label for="sale-amount">"Amount"</label>
                        <input
                            type="number"
                            step="0.01"
                            id="sale-amount"
                            placeholder="e.g. 2500.50"
                            prop:value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <button type="submit" class="btn btn--primary">"Add Sale"</button>
            </form>
            {feedback_view(feedback)}
        </div>
    }
}

#[component]
fn RosterPanel() -> impl IntoView {
    let ctx = use_app();
    let (new_name, set_new_name) = signal(String::new());
    let (feedback, set_feedback) = signal(None::<Feedback>);

    let sellers = Memo::new(move |_| ctx.ledger.with(|l| l.sellers().to_vec()));

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        let mut outcome = None;
        ctx.ledger.update(|ledger| outcome = Some(ledger.add_seller(&name)));

        match outcome {
            Some(Ok(stored)) => {
                set_feedback.set(Some(Feedback::Success(format!("Seller {stored} added."))));
                set_new_name.set(String::new());
            }
            Some(Err(err)) => set_feedback.set(Some(Feedback::Failure(err.to_string()))),
            None => {}
        }
    };

    let delete_seller = move |name: String| {
        let message = format!(
            "Remove {name} and every sale recorded for them? This cannot be undone."
        );
        if confirm(&message) {
            log::info!("removing seller {name} and cascading to their sales");
            ctx.ledger.update(|ledger| ledger.remove_seller(&name));
        }
    };

    view! {
        <div class="panel">
            <h2>"Sellers"</h2>
            <form class="roster-form" on:submit=on_add>
                <input
                    type="text"
                    placeholder="New seller name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn--primary">"Add Seller"</button>
            </form>
            {feedback_view(feedback)}
            <ul class="roster">
                {move || {
                    sellers
                        .get()
                        .into_iter()
                        .map(|name| {
                            let name_for_delete = name.clone();
                            view! {
                                <li class="roster__item">
                                    <span>{name}</span>
                                    <button
                                        class="btn btn--danger"
                                        on:click=move |_| delete_seller(name_for_delete.clone())
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
fn SalesList() -> impl IntoView {
    let ctx = use_app();
    let (filter, set_filter) = signal(LeaderboardQuery::default());

    let rows = Memo::new(move |_| {
        let q = filter.get();
        ctx.ledger.with(|l| {
            let mut rows: Vec<SaleRecord> =
                engine::filtered(l.records(), &q).into_iter().cloned().collect();
            // Chronological reading order: month, then day, then name
            rows.sort_by(|a, b| {
                a.month
                    .cmp(&b.month)
                    .then(a.day.cmp(&b.day))
                    .then_with(|| a.seller_name.cmp(&b.seller_name))
            });
            rows
        })
    });

    let delete_sale = move |id: SaleId| {
        if confirm("Delete this sale entry? This cannot be undone.") {
            ctx.ledger.update(|ledger| ledger.remove_sale(id));
        }
    };

    view! {
        <div class="panel">
            <h2>"Recorded Sales"</h2>
            <QueryFilters query=filter set_query=set_filter />

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Seller"</th>
                        <th>"Day"</th>
                        <th>"Month"</th>
                        <th>"Channel"</th>
                        <th>"Quantity"</th>
                        <th>"Amount"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="7" class="data-table__empty">
                                        "No entries match the selected filters."
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            rows.into_iter()
                                .map(|sale| {
                                    let id = sale.id;
                                    view! {
                                        <tr>
                                            <td class="data-table__name">{sale.seller_name.clone()}</td>
                                            <td>{sale.day}</td>
                                            <td>{sale.month.code()}</td>
                                            <td>{sale.channel.label()}</td>
                                            <td>{format_int(u64::from(sale.quantity))}</td>
                                            <td class="data-table__money">{format_money(sale.amount)}</td>
                                            <td>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| delete_sale(id)
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
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
