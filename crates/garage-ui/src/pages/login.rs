use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use garage_client::Api;
use garage_types::{CustomerCredentials, StaffCredentials, UserRole, WorkerCredentials};

use crate::errors::use_error_sink;
use crate::router::paths;
use crate::store::auth::AuthStore;

fn identifier_label(role: UserRole) -> &'static str {
    match role {
        UserRole::User => "Phone Number",
        UserRole::Admin => "Username",
        UserRole::Worker => "Employee ID",
    }
}

/// Login with three role tabs. The tabs differ only in which endpoint is
/// called and how the identifier field is labelled.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let sink = use_error_sink();
    let navigate = use_navigate();

    let (role, setRole) = signal(UserRole::User);
    let (identifier, setIdentifier) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    let (pending, setPending) = signal(false);
    let (error, setError) = signal(Option::<String>::None);

    let handleSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let sink = sink.clone();
        let navigate = navigate.clone();
        let selectedRole = role.get_untracked();
        let identifierValue = identifier.get_untracked();
        let passwordValue = password.get_untracked();

        setPending.set(true);
        setError.set(None);
        spawn_local(async move {
            let api = Api::new();
            let result = match selectedRole {
                UserRole::User => {
                    auth.login_user(
                        &api,
                        &CustomerCredentials {
                            phone: identifierValue,
                            password: passwordValue,
                        },
                    )
                    .await
                }
                UserRole::Admin => {
                    auth.login_admin(
                        &api,
                        &StaffCredentials {
                            username: identifierValue,
                            password: passwordValue,
                        },
                    )
                    .await
                }
                UserRole::Worker => {
                    auth.login_worker(
                        &api,
                        &WorkerCredentials {
                            employee_id: identifierValue,
                            password: passwordValue,
                        },
                    )
                    .await
                }
            };
            setPending.set(false);
            match result {
                Ok(()) => navigate(paths::dashboard(selectedRole), Default::default()),
                Err(e) => {
                    setError.set(Some(e.to_string()));
                    sink.publish(&e);
                }
            }
        });
    };

    let roleTab = move |tabRole: UserRole, label: &'static str| {
        view! {
            <button
                type="button"
                class=move || {
                    if role.get() == tabRole {
                        "tab active"
                    } else {
                        "tab"
                    }
                }
                on:click=move |_| setRole.set(tabRole)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"G"</div>
                    <h1>"Garage Console"</h1>
                    <p>"Sign in to your workspace"</p>
                </div>

                <div class="login-tabs">
                    {roleTab(UserRole::User, "Customer")}
                    {roleTab(UserRole::Admin, "Administrator")}
                    {roleTab(UserRole::Worker, "Worker")}
                </div>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="login-error">{message}</div> })
                }}

                <form on:submit=handleSubmit>
                    <div class="form-group">
                        <label for="identifier">{move || identifier_label(role.get())}</label>
                        <input
                            type="text"
                            id="identifier"
                            prop:value=identifier
                            on:input=move |ev| setIdentifier.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=password
                            on:input=move |ev| setPassword.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=pending>
                        {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="login-footer">
                    "New customer? " <a href=paths::REGISTER>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
