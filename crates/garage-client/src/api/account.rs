use garage_types::{AccountUpdate, UserAccount};

use crate::error::ApiError;
use crate::http::Api;

pub async fn my_account(api: &Api) -> Result<UserAccount, ApiError> {
    api.get("/users/me").await
}

pub async fn update_my_account(
    api: &Api,
    update: &AccountUpdate,
) -> Result<UserAccount, ApiError> {
    api.put("/users/me", update).await
}
