use leptos::prelude::*;
use leptos::task::spawn_local;

use garage_client::api::orders;
use garage_client::Api;
use garage_types::{
    CompletionReport, OrderPriority, OrderStatus, Paginated, RepairOrder, StatusUpdate,
};

use crate::components::toast::ToastContext;
use crate::errors::use_error_sink;

const PAGE_SIZE: i64 = 50;

fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Pending",
        OrderStatus::InProgress => "In Progress",
        OrderStatus::Completed => "Completed",
        OrderStatus::Cancelled => "Cancelled",
    }
}

fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "status-pending",
        OrderStatus::InProgress => "status-in-progress",
        OrderStatus::Completed => "status-completed",
        OrderStatus::Cancelled => "status-cancelled",
    }
}

fn format_cost(amount: f64) -> String {
    format!("\u{00A5}{amount:.2}")
}

fn priority_label(priority: OrderPriority) -> &'static str {
    match priority {
        OrderPriority::Low => "Low",
        OrderPriority::Medium => "Medium",
        OrderPriority::High => "High",
        OrderPriority::Urgent => "Urgent",
    }
}

#[derive(Clone, Copy, PartialEq)]
enum OrderAction {
    Accept,
    Reject,
    Start,
}

/// The worker order board: orders assigned to the logged-in worker plus
/// the pool of unassigned orders they can pick up.
#[component]
pub fn WorkerOrdersPage() -> impl IntoView {
    let sink = use_error_sink();
    let toasts = expect_context::<ToastContext>();

    let (assigned, setAssigned) =
        signal(Option::<Result<Paginated<RepairOrder>, String>>::None);
    let (available, setAvailable) =
        signal(Option::<Result<Paginated<RepairOrder>, String>>::None);
    let (actionPending, setActionPending) = signal(Option::<i64>::None);

    // Completion form: open for at most one order at a time.
    let (completingId, setCompletingId) = signal(Option::<i64>::None);
    let (workHours, setWorkHours) = signal(String::new());
    let (overtimeHours, setOvertimeHours) = signal(String::new());
    let (workNotes, setWorkNotes) = signal(String::new());

    let fetchAssigned = {
        let sink = sink.clone();
        move || {
            let sink = sink.clone();
            spawn_local(async move {
                let api = Api::new();
                match orders::worker_orders(&api, 1, PAGE_SIZE, None).await {
                    Ok(page) => setAssigned.set(Some(Ok(page))),
                    Err(e) => {
                        sink.publish(&e);
                        setAssigned.set(Some(Err(e.to_string())));
                    }
                }
            });
        }
    };

    let fetchAvailable = {
        let sink = sink.clone();
        move || {
            let sink = sink.clone();
            spawn_local(async move {
                let api = Api::new();
                match orders::available_orders(&api, 1, PAGE_SIZE).await {
                    Ok(page) => setAvailable.set(Some(Ok(page))),
                    Err(e) => {
                        sink.publish(&e);
                        setAvailable.set(Some(Err(e.to_string())));
                    }
                }
            });
        }
    };

    fetchAssigned();
    fetchAvailable();

    let runAction = {
        let sink = sink.clone();
        let fetchAssigned = fetchAssigned.clone();
        let fetchAvailable = fetchAvailable.clone();
        move |orderId: i64, action: OrderAction| {
            let sink = sink.clone();
            let fetchAssigned = fetchAssigned.clone();
            let fetchAvailable = fetchAvailable.clone();
            setActionPending.set(Some(orderId));
            spawn_local(async move {
                let api = Api::new();
                let result = match action {
                    OrderAction::Accept => orders::accept_order(&api, orderId).await,
                    OrderAction::Reject => orders::reject_order(&api, orderId).await,
                    OrderAction::Start => {
                        orders::update_worker_order_status(
                            &api,
                            orderId,
                            &StatusUpdate {
                                status: OrderStatus::InProgress,
                            },
                        )
                        .await
                    }
                };
                setActionPending.set(None);
                match result {
                    Ok(_) => {
                        fetchAssigned();
                        fetchAvailable();
                    }
                    Err(e) => sink.publish(&e),
                }
            });
        }
    };

    let submitCompletion = {
        let sink = sink.clone();
        let fetchAssigned = fetchAssigned.clone();
        move |orderId: i64| {
            let hours = workHours.get_untracked().trim().parse::<f64>();
            let overtime = {
                let raw = overtimeHours.get_untracked();
                let trimmed = raw.trim().to_string();
                if trimmed.is_empty() {
                    Ok(0.0)
                } else {
                    trimmed.parse::<f64>()
                }
            };
            let (Ok(workHoursValue), Ok(overtimeValue)) = (hours, overtime) else {
                toasts.error("Enter the hours worked as a number");
                return;
            };
            let report = CompletionReport {
                work_hours: workHoursValue,
                overtime_hours: overtimeValue,
                work_description: {
                    let notes = workNotes.get_untracked();
                    if notes.trim().is_empty() {
                        None
                    } else {
                        Some(notes)
                    }
                },
            };
            let sink = sink.clone();
            let fetchAssigned = fetchAssigned.clone();
            setActionPending.set(Some(orderId));
            spawn_local(async move {
                let api = Api::new();
                let result = orders::complete_order(&api, orderId, &report).await;
                setActionPending.set(None);
                match result {
                    Ok(_) => {
                        toasts.success("Order completed");
                        setCompletingId.set(None);
                        setWorkHours.set(String::new());
                        setOvertimeHours.set(String::new());
                        setWorkNotes.set(String::new());
                        fetchAssigned();
                    }
                    Err(e) => sink.publish(&e),
                }
            });
        }
    };

    let assignedAction = runAction.clone();
    let availableAction = runAction;

    view! {
        <div class="dashboard-header">
            <h1>"Repair Orders"</h1>
            <p class="subtitle">"Your assignments and the open order pool"</p>
        </div>

        <div class="card">
            <div class="card-title">"My Assignments"</div>
            {move || {
                let runAction = assignedAction.clone();
                let submitCompletion = submitCompletion.clone();
                match assigned.get() {
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
                    Some(Ok(page)) => {
                        if page.items.is_empty() {
                            view! { <p class="empty-hint">"No orders assigned to you"</p> }
                                .into_any()
                        } else {
                            let currentAction = actionPending.get();
                            let openForm = completingId.get();
                            page.items
                                .into_iter()
                                .map(|order| {
                                    let runAction = runAction.clone();
                                    let submitCompletion = submitCompletion.clone();
                                    let orderId = order.id;
                                    let isPending = currentAction == Some(orderId);
                                    let formOpen = openForm == Some(orderId);
                                    view! {
                                        <div class="order-row">
                                            <div class="order-summary">
                                                <span class=format!(
                                                    "status-badge {}",
                                                    status_class(order.status),
                                                )></span>
                                                <strong>{order.order_number.clone()}</strong>
                                                <span class="order-status">
                                                    {status_label(order.status)}
                                                </span>
                                                <span class="order-cost">
                                                    {format_cost(order.total_cost)}
                                                </span>
                                            </div>
                                            <div class="order-description">
                                                {order.description.clone()}
                                            </div>
                                            <div class="order-actions">
                                                {(order.status == OrderStatus::Pending)
                                                    .then(|| {
                                                        let runAction = runAction.clone();
                                                        view! {
                                                            <button
                                                                class="btn btn-ghost btn-sm"
                                                                disabled=isPending
                                                                on:click=move |_| runAction(
                                                                    orderId,
                                                                    OrderAction::Start,
                                                                )
                                                            >
                                                                {if isPending { "Starting..." } else { "Start Work" }}
                                                            </button>
                                                        }
                                                    })}
                                                {(order.status == OrderStatus::InProgress)
                                                    .then(|| {
                                                        view! {
                                                            <button
                                                                class="btn btn-ghost btn-sm"
                                                                disabled=isPending
                                                                on:click=move |_| {
                                                                    setCompletingId
                                                                        .set(
                                                                            if formOpen { None } else { Some(orderId) },
                                                                        )
                                                                }
                                                            >
                                                                {if formOpen { "Cancel" } else { "Complete..." }}
                                                            </button>
                                                        }
                                                    })}
                                            </div>
                                            {formOpen
                                                .then(|| {
                                                    let submitCompletion = submitCompletion.clone();
                                                    view! {
                                                        <div class="completion-form">
                                                            <div class="form-group">
                                                                <label>"Hours Worked"</label>
                                                                <input
                                                                    type="text"
                                                                    prop:value=workHours
                                                                    on:input=move |ev| {
                                                                        setWorkHours.set(event_target_value(&ev))
                                                                    }
                                                                />
                                                            </div>
                                                            <div class="form-group">
                                                                <label>"Overtime Hours"</label>
                                                                <input
                                                                    type="text"
                                                                    prop:value=overtimeHours
                                                                    on:input=move |ev| {
                                                                        setOvertimeHours.set(event_target_value(&ev))
                                                                    }
                                                                />
                                                            </div>
                                                            <div class="form-group">
                                                                <label>"Work Description"</label>
                                                                <input
                                                                    type="text"
                                                                    prop:value=workNotes
                                                                    on:input=move |ev| {
                                                                        setWorkNotes.set(event_target_value(&ev))
                                                                    }
                                                                />
                                                            </div>
                                                            <button
                                                                class="btn btn-primary btn-sm"
                                                                disabled=isPending
                                                                on:click=move |_| submitCompletion(orderId)
                                                            >
                                                                {if isPending {
                                                                    "Submitting..."
                                                                } else {
                                                                    "Submit Completion"
                                                                }}
                                                            </button>
                                                        </div>
                                                    }
                                                })}
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }
                }
            }}
        </div>

        <div class="card">
            <div class="card-title">"Available Orders"</div>
            {move || {
                let runAction = availableAction.clone();
                match available.get() {
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
                    Some(Ok(page)) => {
                        if page.items.is_empty() {
                            view! { <p class="empty-hint">"No open orders right now"</p> }
                                .into_any()
                        } else {
                            let currentAction = actionPending.get();
                            page.items
                                .into_iter()
                                .map(|order| {
                                    let acceptAction = runAction.clone();
                                    let rejectAction = runAction.clone();
                                    let orderId = order.id;
                                    let isPending = currentAction == Some(orderId);
                                    view! {
                                        <div class="order-row">
                                            <div class="order-summary">
                                                <strong>{order.order_number.clone()}</strong>
                                                <span class="order-priority">
                                                    {priority_label(order.priority)}
                                                </span>
                                            </div>
                                            <div class="order-description">
                                                {order.description.clone()}
                                            </div>
                                            <div class="order-actions">
                                                <button
                                                    class="btn btn-primary btn-sm"
                                                    disabled=isPending
                                                    on:click=move |_| acceptAction(
                                                        orderId,
                                                        OrderAction::Accept,
                                                    )
                                                >
                                                    {if isPending { "Accepting..." } else { "Accept" }}
                                                </button>
                                                <button
                                                    class="btn btn-ghost btn-sm"
                                                    disabled=isPending
                                                    on:click=move |_| rejectAction(
                                                        orderId,
                                                        OrderAction::Reject,
                                                    )
                                                >
                                                    "Reject"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }
                }
            }}
        </div>
    }
}
