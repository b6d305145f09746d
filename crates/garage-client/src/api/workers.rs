use garage_types::{Message, Paginated, PasswordChange, ProfileUpdate, WorkerProfile};

use crate::error::ApiError;
use crate::http::Api;

pub async fn my_profile(api: &Api) -> Result<WorkerProfile, ApiError> {
    api.get("/workers/me").await
}

pub async fn update_my_profile(
    api: &Api,
    update: &ProfileUpdate,
) -> Result<WorkerProfile, ApiError> {
    api.put("/workers/me", update).await
}

pub async fn change_my_password(
    api: &Api,
    change: &PasswordChange,
) -> Result<Message, ApiError> {
    api.put("/workers/me/password", change).await
}

/// Worker roster, administrators only.
pub async fn list_workers(
    api: &Api,
    page: i64,
    size: i64,
) -> Result<Paginated<WorkerProfile>, ApiError> {
    api.get_with(
        "/workers/",
        &[("page", page.to_string()), ("size", size.to_string())],
    )
    .await
}
