use leptos::prelude::*;
use leptos::task::spawn_local;

use garage_client::api::orders;
use garage_client::Api;
use garage_types::{OrderStatus, Paginated, RepairOrder};

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

fn format_cost(amount: f64) -> String {
    format!("\u{00A5}{amount:.2}")
}

/// Paginated list of the customer's own orders.
#[component]
pub fn UserOrdersPage() -> impl IntoView {
    let sink = use_error_sink();

    let (page, setPage) = signal(1i64);
    let (result, setResult) = signal(Option::<Result<Paginated<RepairOrder>, String>>::None);

    let fetch = {
        let sink = sink.clone();
        move |pageNumber: i64| {
            let sink = sink.clone();
            setResult.set(None);
            spawn_local(async move {
                let api = Api::new();
                match orders::my_orders(&api, pageNumber, PAGE_SIZE).await {
                    Ok(fetched) => setResult.set(Some(Ok(fetched))),
                    Err(e) => {
                        sink.publish(&e);
                        setResult.set(Some(Err(e.to_string())));
                    }
                }
            });
        }
    };

    fetch(page.get_untracked());

    let previousPage = {
        let fetch = fetch.clone();
        move |_| {
            let target = (page.get_untracked() - 1).max(1);
            setPage.set(target);
            fetch(target);
        }
    };
    let nextPage = {
        let fetch = fetch.clone();
        move |_| {
            let target = page.get_untracked() + 1;
            setPage.set(target);
            fetch(target);
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"My Orders"</h1>
            <p class="subtitle">"Every repair order you have placed"</p>
        </div>

        <div class="card">
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
                                view! { <p class="empty-hint">"No repair orders yet"</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <table>
                                        <thead>
                                            <tr>
                                                <th>"Order"</th>
                                                <th>"Description"</th>
                                                <th>"Status"</th>
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
                                                            <td>{order.create_time.clone()}</td>
                                                            <td>{format_cost(order.total_cost)}</td>
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
