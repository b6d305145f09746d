use garage_types::{
    CustomerCredentials, LoginResponse, RegisterRequest, StaffCredentials, UserAccount,
    WorkerCredentials,
};

use crate::error::ApiError;
use crate::http::Api;

pub async fn login_user(
    api: &Api,
    credentials: &CustomerCredentials,
) -> Result<LoginResponse, ApiError> {
    api.post("/auth/login/user", credentials).await
}

pub async fn login_admin(
    api: &Api,
    credentials: &StaffCredentials,
) -> Result<LoginResponse, ApiError> {
    api.post("/auth/login/admin", credentials).await
}

pub async fn login_worker(
    api: &Api,
    credentials: &WorkerCredentials,
) -> Result<LoginResponse, ApiError> {
    api.post("/auth/login/worker", credentials).await
}

/// Opens a customer account. Admin and worker accounts are provisioned
/// by an administrator, so there is no self-service path for those.
pub async fn register(api: &Api, request: &RegisterRequest) -> Result<UserAccount, ApiError> {
    api.post("/users/register", request).await
}
