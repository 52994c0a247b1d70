mod charts;
mod seller_board;

use analytics::engine;
use contracts::domain::Month;
use leptos::prelude::*;

use crate::shared::components::StatCard;
use crate::shared::number_format::format_money;
use crate::state::{seed, use_app};
use charts::{DailyRevenueChart, GoalProgressBar, MonthlyRevenueChart};
use seller_board::SellerBoard;

/// Public dashboard view: KPI tiles, monthly chart, goal progress, daily
/// breakdown and the seller board, all derived from the ledger signal.
#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app();
    let (month_filter, set_month_filter) = signal(None::<Month>);

    let monthly = Memo::new(move |_| ctx.ledger.with(|l| engine::monthly_totals(l.records())));
    let overall_total =
        Memo::new(move |_| ctx.ledger.with(|l| engine::total_revenue(l.records(), None)));
    let scoped_total = Memo::new(move |_| {
        ctx.ledger
            .with(|l| engine::total_revenue(l.records(), month_filter.get()))
    });
    let top = Memo::new(move |_| {
        ctx.ledger
            .with(|l| engine::top_seller(l.records(), month_filter.get()))
    });
    let daily = Memo::new(move |_| {
        month_filter
            .get()
            .map(|m| ctx.ledger.with(|l| engine::daily_breakdown(l.records(), m)))
    });
    // Goal progress is measured over the whole period regardless of the
    // month filter, like the original report.
    let progress = Memo::new(move |_| engine::goal_progress(overall_total.get(), seed::SALES_GOAL));

    view! {
        <div class="dashboard">
            <div class="toolbar">
                <label for="month-filter">"Filter by month:"</label>
                <select
                    id="month-filter"
                    prop:value=move || {
                        month_filter.get().map(|m| m.code().to_string()).unwrap_or_else(|| "All".to_string())
                    }
                    on:change=move |ev| set_month_filter.set(Month::from_code(&event_target_value(&ev)))
                >
                    <option value="All">"All Months"</option>
                    {Month::ALL
                        .iter()
                        .map(|m| view! { <option value=m.code()>{m.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="kpi-grid">
                {move || {
                    let top = top.get();
                    let progress = progress.get();
                    let total_label = match month_filter.get() {
                        None => "Total Sales".to_string(),
                        Some(m) => format!("Sales ({})", m.code()),
                    };
                    view! {
                        <StatCard label=total_label value=format_money(scoped_total.get()) />
                        <StatCard
                            label=top
                                .as_ref()
                                .map(|t| t.scope.label())
                                .unwrap_or_else(|| "Seller of the Month".to_string())
                            value=top.as_ref().map(|t| t.name.clone()).unwrap_or_else(|| "N/A".to_string())
                            subtitle=top.as_ref().map(|t| format_money(t.revenue))
                        />
                        <StatCard label="Sales Goal".to_string() value=format_money(seed::SALES_GOAL) />
                        <StatCard
                            label="Remaining to Goal".to_string()
                            value=format_money(progress.remaining)
                            accent=if progress.remaining <= 0.0 {
                                "stat-card--success"
                            } else {
                                "stat-card--warning"
                            }
                        />
                    }
                }}
            </div>

            <div class="panel-grid">
                <div class="panel panel--wide">
                    <h2>"Monthly Revenue"</h2>
                    <MonthlyRevenueChart data=monthly selected=month_filter />
                </div>
                <div class="panel">
                    <h2>"Goal Progress"</h2>
                    <GoalProgressBar progress=progress />
                </div>
            </div>

            <div class="panel">
                <h2>
                    {move || match month_filter.get() {
                        Some(m) => format!("Daily Sales ({})", m.code()),
                        None => "Daily Sales".to_string(),
                    }}
                </h2>
                {move || match daily.get() {
                    Some(days) if !days.is_empty() => {
                        view! { <DailyRevenueChart days=days /> }.into_any()
                    }
                    Some(_) => {
                        view! { <p class="panel__empty">"No sales recorded for this month."</p> }
                            .into_any()
                    }
                    None => {
                        view! {
                            <p class="panel__empty">"Select a month to see the daily breakdown."</p>
                        }
                            .into_any()
                    }
                }}
            </div>

            <SellerBoard />
        </div>
    }
}
