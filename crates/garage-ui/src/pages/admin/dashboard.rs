use leptos::prelude::*;
use leptos::task::spawn_local;

use garage_client::api::{orders, workers};
use garage_client::Api;
use garage_types::{OrderStatus, UserInfo};

use crate::components::metric_card::MetricCard;
use crate::errors::use_error_sink;
use crate::store::auth::AuthStore;

/// Shop-wide overview. Counts come from the totals of one-row filtered
/// queries rather than a dedicated statistics endpoint.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let sink = use_error_sink();

    let (pendingTotal, setPendingTotal) = signal(Option::<i64>::None);
    let (inProgressTotal, setInProgressTotal) = signal(Option::<i64>::None);
    let (completedTotal, setCompletedTotal) = signal(Option::<i64>::None);
    let (workerTotal, setWorkerTotal) = signal(Option::<i64>::None);

    let countOrders = {
        let sink = sink.clone();
        move |status: OrderStatus, setTotal: WriteSignal<Option<i64>>| {
            let sink = sink.clone();
            spawn_local(async move {
                let api = Api::new();
                match orders::all_orders(&api, 1, 1, Some(status)).await {
                    Ok(page) => setTotal.set(Some(page.total)),
                    Err(e) => sink.publish(&e),
                }
            });
        }
    };

    countOrders(OrderStatus::Pending, setPendingTotal);
    countOrders(OrderStatus::InProgress, setInProgressTotal);
    countOrders(OrderStatus::Completed, setCompletedTotal);

    {
        let sink = sink.clone();
        spawn_local(async move {
            let api = Api::new();
            match workers::list_workers(&api, 1, 1).await {
                Ok(page) => setWorkerTotal.set(Some(page.total)),
                Err(e) => sink.publish(&e),
            }
        });
    }

    let adminName = move || match auth.user_info() {
        Some(UserInfo::Admin(admin)) => admin.name,
        _ => String::new(),
    };

    let showCount = |total: ReadSignal<Option<i64>>| {
        move || {
            total
                .get()
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".into())
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>{move || format!("Welcome, {}", adminName())}</h1>
            <p class="subtitle">"Shop overview"</p>
        </div>
        <div class="dashboard-grid">
            <MetricCard title="Pending Orders".to_string()>
                <div class="metric-value-lg">{showCount(pendingTotal)}</div>
            </MetricCard>
            <MetricCard title="In Progress".to_string()>
                <div class="metric-value-lg">{showCount(inProgressTotal)}</div>
            </MetricCard>
            <MetricCard title="Completed".to_string()>
                <div class="metric-value-lg">{showCount(completedTotal)}</div>
            </MetricCard>
            <MetricCard title="Workers".to_string()>
                <div class="metric-value-lg">{showCount(workerTotal)}</div>
            </MetricCard>
        </div>
    }
}
