use leptos::prelude::*;
use leptos::task::spawn_local;

use garage_client::api::orders;
use garage_client::Api;
use garage_types::{OrderPriority, OrderStatus, Paginated, RepairOrder};

use crate::errors::use_error_sink;

const PAGE_SIZE: i64 = 20;

fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Pending",
        OrderStatus::InProgress => "In Progress",
        OrderStatus::Completed => "Completed",
        OrderStatus::Cancelled => "Cancelled",
    }
}

fn priority_label(priority: OrderPriority) -> &'static str {
    match priority {
        OrderPriority::Low => "Low",
        OrderPriority::Medium => "Medium",
        OrderPriority::High => "High",
        OrderPriority::Urgent => "Urgent",
    }
}

fn parse_filter(value: &str) -> Option<OrderStatus> {
    match value {
        "pending" => Some(OrderStatus::Pending),
        "in_progress" => Some(OrderStatus::InProgress),
        "completed" => Some(OrderStatus::Completed),
        "cancelled" => Some(OrderStatus::Cancelled),
        _ => None,
    }
}

/// The full order book with a status filter.
#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let sink = use_error_sink();

    let (filter, setFilter) = signal(Option::<OrderStatus>::None);
    let (page, setPage) = signal(1i64);
    let (result, setResult) = signal(Option::<Result<Paginated<RepairOrder>, String>>::None);

    let fetch = {
        let sink = sink.clone();
        move |pageNumber: i64, status: Option<OrderStatus>| {
            let sink = sink.clone();
            setResult.set(None);
            spawn_local(async move {
                let api = Api::new();
                match orders::all_orders(&api, pageNumber, PAGE_SIZE, status).await {
                    Ok(fetched) => setResult.set(Some(Ok(fetched))),
                    Err(e) => {
                        sink.publish(&e);
                        setResult.set(Some(Err(e.to_string())));
                    }
                }
            });
        }
    };

    fetch(1, None);

    let handleFilterChange = {
        let fetch = fetch.clone();
        move |ev: leptos::ev::Event| {
            let status = parse_filter(&event_target_value(&ev));
            setFilter.set(status);
            setPage.set(1);
            fetch(1, status);
        }
    };

    let previousPage = {
        let fetch = fetch.clone();
        move |_| {
            let target = (page.get_untracked() - 1).max(1);
            setPage.set(target);
            fetch(target, filter.get_untracked());
        }
    };
    let nextPage = {
        let fetch = fetch.clone();
        move |_| {
            let target = page.get_untracked() + 1;
            setPage.set(target);
            fetch(target, filter.get_untracked());
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"Orders"</h1>
            <p class="subtitle">"All repair orders in the shop"</p>
        </div>

        <div class="card">
            <div class="filter-row">
                <label for="status-filter">"Status"</label>
                <select id="status-filter" on:change=handleFilterChange>
                    <option value="">"All"</option>
                    <option value="pending">"Pending"</option>
                    <option value="in_progress">"In Progress"</option>
                    <option value="completed">"Completed"</option>
                    <option value="cancelled">"Cancelled"</option>
                </select>
            </div>
            {move || {
                match result.get() {
                    None => view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading orders..."
                        </div>
                    }
                        .into_any(),
                    Some(Err(e)) => {
                        view! { <p class="login-error">"Failed to load orders: " {e}</p> }
                            .into_any()
                    }
                    Some(Ok(fetched)) => {
                        let lastPage = fetched.pages.max(1);
                        let currentPage = fetched.page;
                        view! {
                            {if fetched.items.is_empty() {
                                view! { <p class="empty-hint">"No orders match this filter"</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <table>
                                        <thead>
                                            <tr>
                                                <th>"Order"</th>
                                                <th>"Description"</th>
                                                <th>"Status"</th>
                                                <th>"Priority"</th>
                                                <th>"Created"</th>
                                                <th>"Total"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {fetched
                                                .items
                                                .iter()
                                                .map(|order| {
                                                    view! {
                                                        <tr>
                                                            <td>{order.order_number.clone()}</td>
                                                            <td>{order.description.clone()}</td>
                                                            <td>{status_label(order.status)}</td>
                                                            <td>{priority_label(order.priority)}</td>
                                                            <td>{order.create_time.clone()}</td>
                                                            <td>{format!("\u{00A5}{:.2}", order.total_cost)}</td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }}
                            <div class="pagination">
                                <button
                                    class="btn btn-ghost btn-sm"
                                    disabled={currentPage <= 1}
                                    on:click=previousPage.clone()
                                >
                                    "Previous"
                                </button>
                                <span class="pagination-state">
                                    {format!("Page {currentPage} of {lastPage}")}
                                </span>
                                <button
                                    class="btn btn-ghost btn-sm"
                                    disabled={currentPage >= lastPage}
                                    on:click=nextPage.clone()
                                >
                                    "Next"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
