use leptos::prelude::*;

use crate::router::paths;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"This page does not exist."</p>
            <a href=paths::ROOT>"Back to start"</a>
        </div>
    }
}
