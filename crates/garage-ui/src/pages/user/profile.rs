use leptos::prelude::*;
use leptos::task::spawn_local;

use garage_client::api::account;
use garage_client::Api;
use garage_types::{AccountUpdate, UserAccount, UserInfo};

use crate::components::toast::ToastContext;
use crate::errors::use_error_sink;
use crate::store::auth::AuthStore;

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Customer account page: contact details with inline editing.
#[component]
pub fn UserProfilePage() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let sink = use_error_sink();
    let toasts = expect_context::<ToastContext>();

    let (accountState, setAccountState) = signal(Option::<Result<UserAccount, String>>::None);

    let (name, setName) = signal(String::new());
    let (phone, setPhone) = signal(String::new());
    let (email, setEmail) = signal(String::new());
    let (address, setAddress) = signal(String::new());
    let (saving, setSaving) = signal(false);

    {
        let sink = sink.clone();
        spawn_local(async move {
            let api = Api::new();
            match account::my_account(&api).await {
                Ok(fetched) => {
                    setName.set(fetched.name.clone());
                    setPhone.set(fetched.phone.clone().unwrap_or_default());
                    setEmail.set(fetched.email.clone().unwrap_or_default());
                    setAddress.set(fetched.address.clone().unwrap_or_default());
                    setAccountState.set(Some(Ok(fetched)));
                }
                Err(e) => {
                    sink.publish(&e);
                    setAccountState.set(Some(Err(e.to_string())));
                }
            }
        });
    }

    let handleSave = {
        let sink = sink.clone();
        move |_| {
            let sink = sink.clone();
            let update = AccountUpdate {
                name: optional(name.get_untracked()),
                phone: optional(phone.get_untracked()),
                email: optional(email.get_untracked()),
                address: optional(address.get_untracked()),
            };
            setSaving.set(true);
            spawn_local(async move {
                let api = Api::new();
                let result = account::update_my_account(&api, &update).await;
                setSaving.set(false);
                match result {
                    Ok(saved) => {
                        toasts.success("Account updated");
                        if let Some(UserInfo::Customer(mut customer)) = auth.user_info() {
                            customer.name = saved.name.clone();
                            customer.phone = saved.phone.clone();
                            customer.email = saved.email.clone();
                            auth.update_user_info(UserInfo::Customer(customer));
                        }
                        setAccountState.set(Some(Ok(saved)));
                    }
                    Err(e) => sink.publish(&e),
                }
            });
        }
    };

    view! {
        <div class="dashboard-header">
            <h1>"My Account"</h1>
            <p class="subtitle">"Contact details on file with the shop"</p>
        </div>

        {move || {
            match accountState.get() {
                None => view! {
                    <div class="loading">
                        <div class="spinner"></div>
                        "Loading account..."
                    </div>
                }
                    .into_any(),
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Failed to load account: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(current)) => {
                    view! {
                        <div class="card">
                            <div class="metric-row">
                                <span class="metric-label">"Username"</span>
                                <span class="metric-value">{current.username.clone()}</span>
                            </div>
                            <div class="metric-row">
                                <span class="metric-label">"Member Since"</span>
                                <span class="metric-value">{current.created_at.clone()}</span>
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
                <label for="address">"Address"</label>
                <input
                    type="text"
                    id="address"
                    prop:value=address
                    on:input=move |ev| setAddress.set(event_target_value(&ev))
                />
            </div>
            <button class="btn btn-primary" disabled=saving on:click=handleSave>
                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
            </button>
        </div>
    }
}
