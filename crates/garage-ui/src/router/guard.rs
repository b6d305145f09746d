use leptos::prelude::*;
use leptos_router::components::Redirect;

use garage_types::{Session, UserRole};

use crate::router::paths;
use crate::store::auth::AuthStore;

/// Static per-route flags consulted before rendering a route tree. There
/// is no runtime mutation; each tree declares its metadata once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_guest: bool,
    pub role: Option<UserRole>,
}

impl RouteMeta {
    pub fn authenticated(role: UserRole) -> Self {
        Self {
            requires_auth: true,
            requires_guest: false,
            role: Some(role),
        }
    }

    pub fn guest() -> Self {
        Self {
            requires_auth: false,
            requires_guest: true,
            role: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

/// Synchronous navigation decision:
/// 1. auth required without a token: back to login;
/// 2. role mismatch: over to the stored role's own dashboard, or login
///    when the stored role is unrecognized;
/// 3. guest-only while logged in: to the stored role's dashboard.
pub fn evaluate(meta: &RouteMeta, session: &Session) -> GuardOutcome {
    if meta.requires_auth {
        if !session.is_logged_in() {
            return GuardOutcome::Redirect(paths::LOGIN);
        }
        if let Some(required) = meta.role {
            if session.role != Some(required) {
                return match session.role {
                    Some(actual) => GuardOutcome::Redirect(paths::dashboard(actual)),
                    None => GuardOutcome::Redirect(paths::LOGIN),
                };
            }
        }
    }
    if meta.requires_guest && session.is_logged_in() {
        return match session.role {
            Some(actual) => GuardOutcome::Redirect(paths::dashboard(actual)),
            None => GuardOutcome::Redirect(paths::ROOT),
        };
    }
    GuardOutcome::Allow
}

/// Wraps a role tree: renders the children only when the session passes
/// the guard, otherwise a client-side redirect.
#[component]
pub fn Protected(role: UserRole, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let meta = RouteMeta::authenticated(role);
    view! {
        {move || match evaluate(&meta, &auth.session()) {
            GuardOutcome::Allow => children().into_any(),
            GuardOutcome::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
        }}
    }
}

/// Wraps login and register: a logged-in session is sent to its own
/// dashboard instead.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthStore>();
    let meta = RouteMeta::guest();
    view! {
        {move || match evaluate(&meta, &auth.session()) {
            GuardOutcome::Allow => children().into_any(),
            GuardOutcome::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_types::{CustomerInfo, UserInfo};

    fn logged_in(role: UserRole) -> Session {
        Session {
            token: Some("jwt".into()),
            user_info: Some(UserInfo::Customer(CustomerInfo {
                id: 1,
                name: "Zhang".into(),
                phone: None,
                email: None,
            })),
            role: Some(role),
        }
    }

    /// The stored role can be tampered with externally; a token with an
    /// unrecognized role must not pass a role-gated tree.
    fn tampered() -> Session {
        Session {
            token: Some("jwt".into()),
            user_info: None,
            role: None,
        }
    }

    #[test]
    fn unauthenticated_visitor_is_sent_to_login() {
        let meta = RouteMeta::authenticated(UserRole::Worker);
        assert_eq!(
            evaluate(&meta, &Session::default()),
            GuardOutcome::Redirect(paths::LOGIN)
        );
    }

    #[test]
    fn matching_role_is_allowed_through() {
        for role in [UserRole::User, UserRole::Admin, UserRole::Worker] {
            let meta = RouteMeta::authenticated(role);
            assert_eq!(evaluate(&meta, &logged_in(role)), GuardOutcome::Allow);
        }
    }

    #[test]
    fn mismatched_role_lands_on_its_own_dashboard() {
        let meta = RouteMeta::authenticated(UserRole::Admin);
        assert_eq!(
            evaluate(&meta, &logged_in(UserRole::Worker)),
            GuardOutcome::Redirect(paths::WORKER_DASHBOARD)
        );
        assert_eq!(
            evaluate(&meta, &logged_in(UserRole::User)),
            GuardOutcome::Redirect(paths::USER_DASHBOARD)
        );
    }

    #[test]
    fn unrecognized_role_on_guarded_tree_falls_back_to_login() {
        let meta = RouteMeta::authenticated(UserRole::User);
        assert_eq!(
            evaluate(&meta, &tampered()),
            GuardOutcome::Redirect(paths::LOGIN)
        );
    }

    #[test]
    fn guest_pages_bounce_a_live_session_to_its_dashboard() {
        let meta = RouteMeta::guest();
        assert_eq!(
            evaluate(&meta, &logged_in(UserRole::Admin)),
            GuardOutcome::Redirect(paths::ADMIN_DASHBOARD)
        );
        assert_eq!(evaluate(&meta, &Session::default()), GuardOutcome::Allow);
    }

    #[test]
    fn guest_pages_send_an_unrecognized_role_to_the_root() {
        let meta = RouteMeta::guest();
        assert_eq!(
            evaluate(&meta, &tampered()),
            GuardOutcome::Redirect(paths::ROOT)
        );
    }
}
