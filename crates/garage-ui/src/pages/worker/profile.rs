use leptos::prelude::*;
use leptos::task::spawn_local;

use garage_client::api::workers;
use garage_client::Api;
use garage_types::{
    PasswordChange, ProfileUpdate, SkillLevel, SkillType, UserInfo, WorkerProfile,
};

use crate::components::toast::ToastContext;
use crate::errors::use_error_sink;
use crate::store::auth::AuthStore;

fn skill_type_label(skill: SkillType) -> &'static str {
    match skill {
        SkillType::Mechanical => "Mechanical",
        SkillType::Electrical => "Electrical",
        SkillType::Bodywork => "Bodywork",
        SkillType::Engine => "Engine",
        SkillType::Transmission => "Transmission",
        SkillType::Brake => "Brake",
        SkillType::Suspension => "Suspension",
        SkillType::AirConditioning => "Air Conditioning",
    }
}

fn skill_level_label(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Junior => "Junior",
        SkillLevel::Intermediate => "Intermediate",
        SkillLevel::Senior => "Senior",
        SkillLevel::Expert => "Expert",
    }
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Worker profile: read-only employment facts, editable contact fields,
/// and a password change form.
#[component]
pub fn WorkerProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let sink = use_error_sink();
    let toasts = expect_context::<ToastContext>();

    let (profile, setProfile) = signal(Option::<Result<WorkerProfile, String>>::None);

    let (name, setName) = signal(String::new());
    let (phone, setPhone) = signal(String::new());
    let (email, setEmail) = signal(String::new());
    let (certifications, setCertifications) = signal(String::new());
    let (saving, setSaving) = signal(false);

    let (oldPassword, setOldPassword) = signal(String::new());
    let (newPassword, setNewPassword) = signal(String::new());
    let (changingPassword, setChangingPassword) = signal(false);

    {
        let sink = sink.clone();
        spawn_local(async move {
            let api = Api::new();
            match workers::my_profile(&api).await {
                Ok(fetched) => {
                    setName.set(fetched.name.clone());
                    setPhone.set(fetched.phone.clone().unwrap_or_default());
                    setEmail.set(fetched.email.clone().unwrap_or_default());
                    setCertifications.set(fetched.certifications.clone().unwrap_or_default());
                    setProfile.set(Some(Ok(fetched)));
                }
                Err(e) => {
                    sink.publish(&e);
                    setProfile.set(Some(Err(e.to_string())));
                }
            }
        });
    }

    let handleSave = {
        let sink = sink.clone();
        move |_| {
            let sink = sink.clone();
            let update = ProfileUpdate {
                name: optional(name.get_untracked()),
                phone: optional(phone.get_untracked()),
                email: optional(email.get_untracked()),
                certifications: optional(certifications.get_untracked()),
            };
            setSaving.set(true);
            spawn_local(async move {
                let api = Api::new();
                let result = workers::update_my_profile(&api, &update).await;
                setSaving.set(false);
                match result {
                    Ok(saved) => {
                        toasts.success("Profile saved");
                        // Keep the session display name in step with the profile.
                        if let Some(UserInfo::Worker(mut worker)) = auth.user_info() {
                            worker.name = saved.name.clone();
                            auth.update_user_info(UserInfo::Worker(worker));
                        }
                        setProfile.set(Some(Ok(saved)));
                    }
                    Err(e) => sink.publish(&e),
                }
            });
        }
    };

    let handlePasswordChange = {
        let sink = sink.clone();
        move |_| {
            let sink = sink.clone();
            let change = PasswordChange {
                old_password: oldPassword.get_untracked(),
                new_password: newPassword.get_untracked(),
            };
            if change.new_password.len() < 6 {
                toasts.error("New password must be at least 6 characters");
                return;
            }
            setChangingPassword.set(true);
            spawn_local(async move {
                let api = Api::new();
                let result = workers::change_my_password(&api, &change).await;
                setChangingPassword.set(false);
                match result {
                    Ok(message) => {
                        toasts.success(message.message);
                        setOldPassword.set(String::new());
                        setNewPassword.set(String::new());
                    }
                    Err(e) => sink.publish(&e),
                }
            });
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"My Profile"</h1>
            <p class="subtitle">"Employment details and contact information"</p>
        </div>

        {move || {
            match profile.get() {
                None => view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading profile..."
                    </div>
                }
                    .into_any(),
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Failed to load profile: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(current)) => {
                    view! {
                        <div class="card">
                            <div class="card-title">"Employment"</div>
                            <div class="metric-row">
                                <span class="metric-label">"Employee ID"</span>
                                <span class="metric-value">{current.employee_id.clone()}</span>
                            </div>
                            <div class="metric-row">
                                <span class="metric-label">"Skill"</span>
                                <span class="metric-value">
                                    {format!(
                                        "{} ({})",
                                        skill_type_label(current.skill_type),
                                        skill_level_label(current.skill_level),
                                    )}
                                </span>
                            </div>
                            <div class="metric-row">
                                <span class="metric-label">"Hourly Rate"</span>
                                <span class="metric-value">
                                    {format!("\u{00A5}{:.2}", current.hourly_rate)}
                                </span>
                            </div>
                            <div class="metric-row">
                                <span class="metric-label">"Hired"</span>
                                <span class="metric-value">{current.hire_date.clone()}</span>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }
        }}

        <div class="card">
            <div class="card-title">"Contact Details"</div>
            <div class="form-group">
                <label for="name">"Name"</label>
                <input
                    type="text"
                    id="name"
                    prop:value=name
                    on:input=move |ev| setName.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="phone">"Phone"</label>
                <input
                    type="text"
                    id="phone"
                    prop:value=phone
                    on:input=move |ev| setPhone.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="text"
                    id="email"
                    prop:value=email
                    on:input=move |ev| setEmail.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="certifications">"Certifications"</label>
                <input
                    type="text"
                    id="certifications"
                    prop:value=certifications
                    on:input=move |ev| setCertifications.set(event_target_value(&ev))
                />
            </div>
            <button class="btn btn-primary" disabled=saving on:click=handleSave>
                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
            </button>
        </div>

        <div class="card">
            <div class="card-title">"Change Password"</div>
            <div class="form-group">
                <label for="old-password">"Current Password"</label>
                <input
                    type="password"
                    id="old-password"
                    prop:value=oldPassword
                    on:input=move |ev| setOldPassword.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="new-password">"New Password"</label>
                <input
                    type="password"
                    id="new-password"
                    prop:value=newPassword
                    on:input=move |ev| setNewPassword.set(event_target_value(&ev))
                />
            </div>
            <button
                class="btn btn-primary"
                disabled=changingPassword
                on:click=handlePasswordChange
            >
                {move || if changingPassword.get() { "Updating..." } else { "Update Password" }}
            </button>
        </div>
    }
}
