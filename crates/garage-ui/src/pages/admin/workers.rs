use leptos::prelude::*;
use leptos::task::spawn_local;

use garage_client::api::workers;
use garage_client::Api;
use garage_types::{Paginated, SkillLevel, SkillType, WorkerProfile, WorkerStatus};

use crate::errors::use_error_sink;

fn skill_label(skill: SkillType, level: SkillLevel) -> String {
    let kind = match skill {
        SkillType::Mechanical => "Mechanical",
        SkillType::Electrical => "Electrical",
        SkillType::Bodywork => "Bodywork",
        SkillType::Engine => "Engine",
        SkillType::Transmission => "Transmission",
        SkillType::Brake => "Brake",
        SkillType::Suspension => "Suspension",
        SkillType::AirConditioning => "Air Conditioning",
    };
    let grade = match level {
        SkillLevel::Junior => "Junior",
        SkillLevel::Intermediate => "Intermediate",
        SkillLevel::Senior => "Senior",
        SkillLevel::Expert => "Expert",
    };
    format!("{kind} ({grade})")
}

fn status_label(status: WorkerStatus) -> &'static str {
    match status {
        WorkerStatus::Active => "Active",
        WorkerStatus::Inactive => "Inactive",
        WorkerStatus::OnLeave => "On Leave",
    }
}

/// Read-only worker roster.
#[component]
pub fn AdminWorkersPage() -> impl IntoView {
    let sink = use_error_sink();

    let (roster, setRoster) = signal(Option::<Result<Paginated<WorkerProfile>, String>>::None);

    {
        let sink = sink.clone();
        spawn_local(async move {
            let api = Api::new();
            match workers::list_workers(&api, 1, 100).await {
                Ok(page) => setRoster.set(Some(Ok(page))),
                Err(e) => {
                    sink.publish(&e);
                    setRoster.set(Some(Err(e.to_string())));
                }
            }
        });
    }

    view! {
        <div class="dashboard-header">
            <h1>"Workers"</h1>
            <p class="subtitle">"Repair staff roster"</p>
        </div>

        <div class="card">
            {move || {
                match roster.get() {
                    None => view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading roster..."
                        </div>
                    }
                        .into_any(),
                    Some(Err(e)) => {
                        view! { <p class="login-error">"Failed to load roster: " {e}</p> }
                            .into_any()
                    }
                    Some(Ok(page)) => {
                        if page.items.is_empty() {
                            view! { <p class="empty-hint">"No workers on file"</p> }
                                .into_any()
                        } else {
                            view! {
                                <table>
                                    <thead>
                                        <tr>
                                            <th>"Employee ID"</th>
                                            <th>"Name"</th>
                                            <th>"Skill"</th>
                                            <th>"Hourly Rate"</th>
                                            <th>"Status"</th>
                                            <th>"Hired"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {page
                                            .items
                                            .iter()
                                            .map(|worker| {
                                                view! {
                                                    <tr>
                                                        <td>{worker.employee_id.clone()}</td>
                                                        <td>{worker.name.clone()}</td>
                                                        <td>
                                                            {skill_label(worker.skill_type, worker.skill_level)}
                                                        </td>
                                                        <td>
                                                            {format!("\u{00A5}{:.2}", worker.hourly_rate)}
                                                        </td>
                                                        <td>{status_label(worker.status)}</td>
                                                        <td>{worker.hire_date.clone()}</td>
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
