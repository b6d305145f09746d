pub mod guard;

pub mod paths {
    use garage_types::UserRole;

    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";

    pub const USER_DASHBOARD: &str = "/user/dashboard";
    pub const USER_ORDERS: &str = "/user/orders";
    pub const USER_PROFILE: &str = "/user/profile";

    pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
    pub const ADMIN_ORDERS: &str = "/admin/orders";
    pub const ADMIN_WORKERS: &str = "/admin/workers";

    pub const WORKER_DASHBOARD: &str = "/worker/dashboard";
    pub const WORKER_ORDERS: &str = "/worker/orders";
    pub const WORKER_WAGES: &str = "/worker/wages";
    pub const WORKER_PROFILE: &str = "/worker/profile";

    /// Landing page for a role, the target of cross-role redirects.
    pub fn dashboard(role: UserRole) -> &'static str {
        match role {
            UserRole::User => USER_DASHBOARD,
            UserRole::Admin => ADMIN_DASHBOARD,
            UserRole::Worker => WORKER_DASHBOARD,
        }
    }
}
