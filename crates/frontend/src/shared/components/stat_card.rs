use leptos::prelude::*;

/// KPI tile for the dashboard header row. Values arrive pre-formatted; the
/// caller re-renders the card when the underlying aggregate changes.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Primary display value
    value: String,
    /// Optional secondary line below the value
    #[prop(optional_no_strip)]
    subtitle: Option<String>,
    /// Extra modifier class, e.g. "stat-card--warning"
    #[prop(optional, default = "")]
    accent: &'static str,
) -> impl IntoView {
    let class = if accent.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card {}", accent)
    };

    let subtitle_view = subtitle.map(|s| {
        view! { <div class="stat-card__subtitle">{s}</div> }
    });

    view! {
        <div class=class>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{value}</div>
            {subtitle_view}
        </div>
    }
}
