use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use garage_client::api::auth;
use garage_client::Api;
use garage_types::RegisterRequest;

use crate::components::toast::ToastContext;
use crate::errors::use_error_sink;
use crate::router::paths;

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Customer self-registration. Staff accounts are provisioned by an
/// administrator instead.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let sink = use_error_sink();
    let toasts = expect_context::<ToastContext>();
    let navigate = use_navigate();

    let (name, setName) = signal(String::new());
    let (username, setUsername) = signal(String::new());
    let (phone, setPhone) = signal(String::new());
    let (email, setEmail) = signal(String::new());
    let (address, setAddress) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    let (pending, setPending) = signal(false);

    let handleSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let sink = sink.clone();
        let navigate = navigate.clone();
        let request = RegisterRequest {
            name: name.get_untracked(),
            username: username.get_untracked(),
            phone: optional(phone.get_untracked()),
            email: optional(email.get_untracked()),
            address: optional(address.get_untracked()),
            password: password.get_untracked(),
        };

        setPending.set(true);
        spawn_local(async move {
            let api = Api::new();
            let result = auth::register(&api, &request).await;
            setPending.set(false);
            match result {
                Ok(account) => {
                    toasts.success(format!("Account created for {}", account.name));
                    navigate(paths::LOGIN, Default::default());
                }
                Err(e) => sink.publish(&e),
            }
        });
    };

    let textField = move |id: &'static str,
                          label: &'static str,
                          value: ReadSignal<String>,
                          setValue: WriteSignal<String>,
                          required: bool| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type="text"
                    id=id
                    prop:value=value
                    on:input=move |ev| setValue.set(event_target_value(&ev))
                    required=required
                />
            </div>
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <h1>"Create Account"</h1>
                    <p>"Register to book repairs and track your orders"</p>
                </div>

                <form on:submit=handleSubmit>
                    {textField("name", "Full Name", name, setName, true)}
                    {textField("username", "Username", username, setUsername, true)}
                    {textField("phone", "Phone Number", phone, setPhone, false)}
                    {textField("email", "Email", email, setEmail, false)}
                    {textField("address", "Address", address, setAddress, false)}
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
                        {move || if pending.get() { "Creating..." } else { "Create Account" }}
                    </button>
                </form>

                <p class="login-footer">
                    "Already registered? " <a href=paths::LOGIN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
