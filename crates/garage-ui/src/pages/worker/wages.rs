use leptos::prelude::*;
use leptos::task::spawn_local;

use garage_client::api::wages;
use garage_client::Api;
use garage_types::{Wage, WageStatus};

use crate::errors::use_error_sink;

fn status_label(status: WageStatus) -> &'static str {
    match status {
        WageStatus::Calculated => "Calculated",
        WageStatus::Paid => "Paid",
        WageStatus::Disputed => "Disputed",
    }
}

fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("\u{00A5}{value:.2}"),
        None => "-".into(),
    }
}

fn optional_month(value: String) -> Option<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Wage history for the logged-in worker, optionally bounded to a month
/// range (YYYY-MM).
#[component]
pub fn WorkerWagesPage() -> impl IntoView {
    let sink = use_error_sink();

    let (records, setRecords) = signal(Option::<Result<Vec<Wage>, String>>::None);
    let (startMonth, setStartMonth) = signal(String::new());
    let (endMonth, setEndMonth) = signal(String::new());

    let fetch = {
        let sink = sink.clone();
        move || {
            let sink = sink.clone();
            let start = optional_month(startMonth.get_untracked());
            let end = optional_month(endMonth.get_untracked());
            setRecords.set(None);
            spawn_local(async move {
                let api = Api::new();
                match wages::my_wages(&api, start.as_deref(), end.as_deref()).await {
                    Ok(list) => setRecords.set(Some(Ok(list))),
                    Err(e) => {
                        sink.publish(&e);
                        setRecords.set(Some(Err(e.to_string())));
                    }
                }
            });
        }
    };

    fetch();
    let applyFilter = fetch.clone();

    view! {
        <div class="dashboard-header">
            <h1>"My Wages"</h1>
            <p class="subtitle">"Monthly wage records"</p>
        </div>

        <div class="card">
            <div class="filter-row">
                <div class="form-group">
                    <label for="start-month">"From (YYYY-MM)"</label>
                    <input
                        type="text"
                        id="start-month"
                        placeholder="2026-01"
                        prop:value=startMonth
                        on:input=move |ev| setStartMonth.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="end-month">"To (YYYY-MM)"</label>
                    <input
                        type="text"
                        id="end-month"
                        placeholder="2026-06"
                        prop:value=endMonth
                        on:input=move |ev| setEndMonth.set(event_target_value(&ev))
                    />
                </div>
                <button class="btn btn-primary btn-sm" on:click=move |_| applyFilter()>
                    "Apply"
                </button>
            </div>
        </div>

        <div class="card">
            <div class="card-title">"Wage Records"</div>
            {move || {
                match records.get() {
                    None => view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading wages..."
                        </div>
                    }
                        .into_any(),
                    Some(Err(e)) => {
                        view! { <p class="login-error">"Failed to load wages: " {e}</p> }
                            .into_any()
                    }
                    Some(Ok(list)) => {
                        if list.is_empty() {
                            view! { <p class="empty-hint">"No wage records in this range"</p> }
                                .into_any()
                        } else {
                            view! {
                                <table>
                                    <thead>
                                        <tr>
                                            <th>"Period"</th>
                                            <th>"Hours"</th>
                                            <th>"Base"</th>
                                            <th>"Overtime"</th>
                                            <th>"Bonus"</th>
                                            <th>"Total"</th>
                                            <th>"Status"</th>
                                            <th>"Paid On"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|wage| {
                                                view! {
                                                    <tr>
                                                        <td>{wage.pay_period.clone()}</td>
                                                        <td>
                                                            {wage
                                                                .total_hours
                                                                .map(|h| format!("{h:.1}"))
                                                                .unwrap_or_else(|| "-".into())}
                                                        </td>
                                                        <td>{format_amount(wage.base_salary)}</td>
                                                        <td>{format_amount(wage.overtime_pay)}</td>
                                                        <td>{format_amount(wage.bonus)}</td>
                                                        <td>{format_amount(wage.total_payment)}</td>
                                                        <td>{status_label(wage.status)}</td>
                                                        <td>
                                                            {wage.pay_date.clone().unwrap_or_else(|| "-".into())}
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                                .into_any()
                        }
                    }
                }
            }}
        </div>
    }
}
