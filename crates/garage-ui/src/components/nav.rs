use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use garage_types::UserRole;

use crate::router::paths;
use crate::store::auth::AuthStore;

fn links_for(role: Option<UserRole>) -> Vec<(&'static str, &'static str)> {
    match role {
        Some(UserRole::User) => vec![
            ("Dashboard", paths::USER_DASHBOARD),
            ("My Orders", paths::USER_ORDERS),
            ("Profile", paths::USER_PROFILE),
        ],
        Some(UserRole::Admin) => vec![
            ("Dashboard", paths::ADMIN_DASHBOARD),
            ("Orders", paths::ADMIN_ORDERS),
            ("Workers", paths::ADMIN_WORKERS),
        ],
        Some(UserRole::Worker) => vec![
            ("Dashboard", paths::WORKER_DASHBOARD),
            ("Orders", paths::WORKER_ORDERS),
            ("Wages", paths::WORKER_WAGES),
            ("Profile", paths::WORKER_PROFILE),
        ],
        None => Vec::new(),
    }
}

/// Sidebar shared by the three role layouts. Links follow the stored
/// role; the footer shows the display name and the logout action.
#[component]
pub fn Nav() -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let location = use_location();
    let navigate = use_navigate();

    let displayName = move || {
        auth.user_info()
            .map(|info| info.display_name().to_string())
            .unwrap_or_default()
    };

    let handleLogout = move |_| {
        auth.logout();
        navigate(paths::LOGIN, Default::default());
    };

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"G"</div>
                <span class="brand-text">"Garage Console"</span>
            </div>
            <ul class="nav-links">
                {move || {
                    let currentPath = location.pathname.get();
                    links_for(auth.role())
                        .into_iter()
                        .map(|(label, href)| {
                            let activeClass = if currentPath == href {
                                "nav-item active"
                            } else {
                                "nav-item"
                            };
                            view! {
                                <li class=activeClass>
                                    <a href=href>
                                        <span>{label}</span>
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <div class="nav-footer">
                <span class="nav-user">{displayName}</span>
                <button class="btn btn-ghost btn-sm" on:click=handleLogout>
                    "Sign Out"
                </button>
            </div>
        </nav>
    }
}
