use leptos::prelude::*;
use leptos::task::spawn_local;

use garage_client::api::orders;
use garage_client::Api;
use garage_types::{OrderStatus, Paginated, RepairOrder, UserInfo};

use crate::components::metric_card::MetricCard;
use crate::errors::use_error_sink;
use crate::router::paths;
use crate::store::auth::AuthStore;

fn count_with_status(page: &Paginated<RepairOrder>, status: OrderStatus) -> usize {
    page.items.iter().filter(|o| o.status == status).count()
}

#[component]
pub fn WorkerDashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let sink = use_error_sink();

    let (assigned, setAssigned) =
        signal(Option::<Result<Paginated<RepairOrder>, String>>::None);
    let (openPool, setOpenPool) = signal(Option::<i64>::None);

    {
        let sink = sink.clone();
        spawn_local(async move {
            let api = Api::new();
            match orders::worker_orders(&api, 1, 100, None).await {
                Ok(page) => setAssigned.set(Some(Ok(page))),
                Err(e) => {
                    sink.publish(&e);
                    setAssigned.set(Some(Err(e.to_string())));
                }
            }
        });
    }
    {
        let sink = sink.clone();
        spawn_local(async move {
            let api = Api::new();
            match orders::available_orders(&api, 1, 1).await {
                Ok(page) => setOpenPool.set(Some(page.total)),
                Err(e) => sink.publish(&e),
            }
        });
    }

    let workerName = move || match auth.user_info() {
        Some(UserInfo::Worker(worker)) => worker.name,
        _ => String::new(),
    };

    view! {
        <div class="dashboard-header">
            <h1>{move || format!("Welcome, {}", workerName())}</h1>
            <p class="subtitle">"Your workload at a glance"</p>
        </div>
        {move || {
            match assigned.get() {
                None => view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading workload..."
                    </div>
                }
                    .into_any(),
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Failed to load workload: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(page)) => {
                    let pendingCount = count_with_status(&page, OrderStatus::Pending);
                    let inProgressCount = count_with_status(&page, OrderStatus::InProgress);
                    view! {
                        <div class="dashboard-grid">
                            <MetricCard title="Assigned Orders".to_string()>
                                <div class="metric-value-lg">{page.total}</div>
                            </MetricCard>
                            <MetricCard title="Waiting to Start".to_string()>
                                <div class="metric-value-lg">{pendingCount}</div>
                            </MetricCard>
                            <MetricCard title="In Progress".to_string()>
                                <div class="metric-value-lg">{inProgressCount}</div>
                            </MetricCard>
                            <MetricCard title="Open Pool".to_string()>
                                <div class="metric-value-lg">
                                    {move || {
                                        openPool
                                            .get()
                                            .map(|n| n.to_string())
                                            .unwrap_or_else(|| "-".into())
                                    }}
                                </div>
                                <a href=paths::WORKER_ORDERS class="gauge-label">
                                    "Browse available orders"
                                </a>
                            </MetricCard>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
