use leptos::prelude::*;
use leptos::task::spawn_local;

use garage_client::api::orders;
use garage_client::Api;
use garage_types::{OrderStatus, Paginated, RepairOrder, UserInfo};

use crate::components::metric_card::MetricCard;
use crate::errors::use_error_sink;
use crate::router::paths;
use crate::store::auth::AuthStore;

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let sink = use_error_sink();

    let (recent, setRecent) = signal(Option::<Result<Paginated<RepairOrder>, String>>::None);

    {
        let sink = sink.clone();
        spawn_local(async move {
            let api = Api::new();
            match orders::my_orders(&api, 1, 5).await {
                Ok(page) => setRecent.set(Some(Ok(page))),
                Err(e) => {
                    sink.publish(&e);
                    setRecent.set(Some(Err(e.to_string())));
                }
            }
        });
    }

    let customerName = move || match auth.user_info() {
        Some(UserInfo::Customer(customer)) => customer.name,
        _ => String::new(),
    };

    view! {
        <div class="dashboard-header">
            <h1>{move || format!("Welcome, {}", customerName())}</h1>
            <p class="subtitle">"Your vehicle repairs at a glance"</p>
        </div>
        {move || {
            match recent.get() {
                None => view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading orders..."
                    </div>
                }
                    .into_any(),
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Failed to load orders: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(page)) => {
                    let inRepair = page
                        .items
                        .iter()
                        .filter(|o| o.status == OrderStatus::InProgress)
                        .count();
                    view! {
                        <div class="dashboard-grid">
                            <MetricCard title="Total Orders".to_string()>
                                <div class="metric-value-lg">{page.total}</div>
                            </MetricCard>
                            <MetricCard title="In Repair".to_string()>
                                <div class="metric-value-lg">{inRepair}</div>
                            </MetricCard>
                        </div>
                        <div class="card">
                            <div class="card-title">"Recent Orders"</div>
                            {if page.items.is_empty() {
                                view! { <p class="empty-hint">"No repair orders yet"</p> }
                                    .into_any()
                            } else {
                                page.items
                                    .iter()
                                    .map(|order| {
                                        view! {
                                            <div class="metric-row">
                                                <span class="metric-label">
                                                    {order.order_number.clone()}
                                                </span>
                                                <span class="metric-value">
                                                    {order.description.clone()}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                            <a href=paths::USER_ORDERS class="gauge-label">
                                "See all orders"
                            </a>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
