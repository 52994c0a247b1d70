//! Chart rendering for the dashboard: plain div bars, no canvas.

use contracts::domain::Month;
use contracts::reports::{DailyRevenue, GoalProgress, MonthlyRevenue};
use leptos::prelude::*;

use crate::shared::number_format::{format_money, format_percent};

/// One bar per template month, always twelve, the filtered month highlighted
#[component]
pub fn MonthlyRevenueChart(
    #[prop(into)] data: Signal<Vec<MonthlyRevenue>>,
    #[prop(into)] selected: Signal<Option<Month>>,
) -> impl IntoView {
    view! {
        <div class="bar-chart">
            {move || {
                let rows = data.get();
                let max = rows.iter().map(|r| r.revenue).fold(0.0_f64, f64::max);
                let active = selected.get();
                rows.into_iter()
                    .map(|row| {
                        // Keep a sliver visible for zero months
                        let height = if max > 0.0 {
                            (row.revenue / max * 100.0).max(2.0)
                        } else {
                            2.0
                        };
                        let bar_class = if active == Some(row.month) {
                            "bar-chart__bar bar-chart__bar--active"
                        } else {
                            "bar-chart__bar"
                        };
                        let tooltip = format!("{}: {}", row.month.label(), format_money(row.revenue));
                        view! {
                            <div class="bar-chart__item" title=tooltip>
                                <div class=bar_class style=format!("height: {:.1}%;", height)></div>
                                <span class="bar-chart__label">{row.month.code()}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

/// Sparse day bars for the selected month; the caller only renders this when
/// there is data to show.
#[component]
pub fn DailyRevenueChart(days: Vec<DailyRevenue>) -> impl IntoView {
    let max = days.iter().map(|d| d.revenue).fold(0.0_f64, f64::max);

    view! {
        <div class="bar-chart bar-chart--daily">
            {days
                .into_iter()
                .map(|d| {
                    let height = if max > 0.0 {
                        (d.revenue / max * 100.0).max(2.0)
                    } else {
                        2.0
                    };
                    let tooltip = format!("Day {}: {}", d.day, format_money(d.revenue));
                    view! {
                        <div class="bar-chart__item" title=tooltip>
                            <div class="bar-chart__bar" style=format!("height: {:.1}%;", height)></div>
                            <span class="bar-chart__label">{d.day}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Horizontal fill toward the goal; the fill clamps at 100% while the text
/// keeps reporting the real percentage past it.
#[component]
pub fn GoalProgressBar(#[prop(into)] progress: Signal<GoalProgress>) -> impl IntoView {
    view! {
        <div class="goal-progress">
            {move || {
                let p = progress.get();
                let width = p.percentage.clamp(0.0, 100.0);
                let remaining_text = if p.remaining > 0.0 {
                    format!("{} to go", format_money(p.remaining))
                } else {
                    format!("goal exceeded by {}", format_money(-p.remaining))
                };
                view! {
                    <div class="goal-progress__track">
                        <div class="goal-progress__fill" style=format!("width: {:.1}%;", width)></div>
                    </div>
                    <div class="goal-progress__stats">
                        <span class="goal-progress__percent">{format_percent(p.percentage)}</span>
                        <span>{format!("{} achieved", format_money(p.achieved))}</span>
                        <span>{remaining_text}</span>
                    </div>
                }
            }}
        </div>
    }
}
