use leptos::prelude::*;

/// Card wrapper with a title header, used on the dashboards for counts
/// and summary rows.
#[component]
pub fn MetricCard(
    /// Title displayed at the top of the card
    title: String,
    /// Card content
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-title">{title}</div>
            {children()}
        </div>
    }
}
