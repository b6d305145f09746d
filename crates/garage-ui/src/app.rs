use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::StaticSegment;

use garage_types::UserRole;

use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;
use crate::pages::admin::{AdminDashboardPage, AdminOrdersPage, AdminWorkersPage};
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::pages::user::{UserDashboardPage, UserOrdersPage, UserProfilePage};
use crate::pages::worker::{
    WorkerDashboardPage, WorkerOrdersPage, WorkerProfilePage, WorkerWagesPage,
};
use crate::router::guard::{GuestOnly, Protected};
use crate::router::paths;
use crate::store::auth::AuthStore;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthStore::new();
    // Restore a persisted session before the first navigation runs.
    auth.check_auth();
    provide_context(auth);

    view! {
        <Title text="Garage Console" />
        <ToastProvider>
            <Router>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Redirect path=paths::LOGIN /> }
                    />
                    <Route path=StaticSegment("login") view=LoginView />
                    <Route path=StaticSegment("register") view=RegisterView />

                    <ParentRoute path=StaticSegment("user") view=UserShell>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <Redirect path=paths::USER_DASHBOARD /> }
                        />
                        <Route path=StaticSegment("dashboard") view=UserDashboardPage />
                        <Route path=StaticSegment("orders") view=UserOrdersPage />
                        <Route path=StaticSegment("profile") view=UserProfilePage />
                    </ParentRoute>

                    <ParentRoute path=StaticSegment("admin") view=AdminShell>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <Redirect path=paths::ADMIN_DASHBOARD /> }
                        />
                        <Route path=StaticSegment("dashboard") view=AdminDashboardPage />
                        <Route path=StaticSegment("orders") view=AdminOrdersPage />
                        <Route path=StaticSegment("workers") view=AdminWorkersPage />
                    </ParentRoute>

                    <ParentRoute path=StaticSegment("worker") view=WorkerShell>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <Redirect path=paths::WORKER_DASHBOARD /> }
                        />
                        <Route path=StaticSegment("dashboard") view=WorkerDashboardPage />
                        <Route path=StaticSegment("orders") view=WorkerOrdersPage />
                        <Route path=StaticSegment("wages") view=WorkerWagesPage />
                        <Route path=StaticSegment("profile") view=WorkerProfilePage />
                    </ParentRoute>
                </Routes>
            </Router>
        </ToastProvider>
    }
}

#[component]
fn LoginView() -> impl IntoView {
    view! {
        <GuestOnly>
            <LoginPage />
        </GuestOnly>
    }
}

#[component]
fn RegisterView() -> impl IntoView {
    view! {
        <GuestOnly>
            <RegisterPage />
        </GuestOnly>
    }
}

#[component]
fn UserShell() -> impl IntoView {
    view! {
        <Protected role=UserRole::User>
            <div class="app-layout">
                <Nav />
                <main class="main-content">
                    <Outlet />
                </main>
            </div>
        </Protected>
    }
}

#[component]
fn AdminShell() -> impl IntoView {
    view! {
        <Protected role=UserRole::Admin>
            <div class="app-layout">
                <Nav />
                <main class="main-content">
                    <Outlet />
                </main>
            </div>
        </Protected>
    }
}

#[component]
fn WorkerShell() -> impl IntoView {
    view! {
        <Protected role=UserRole::Worker>
            <div class="app-layout">
                <Nav />
                <main class="main-content">
                    <Outlet />
                </main>
            </div>
        </Protected>
    }
}
