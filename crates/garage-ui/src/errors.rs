use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use garage_client::ApiError;

use crate::components::toast::{ToastContext, ToastLevel};
use crate::router::paths;
use crate::store::auth::AuthStore;

/// Fixed mapping from a classified failure to the toast lines shown for
/// it. A 422 expands into one line per offending field.
pub fn toast_lines(error: &ApiError) -> Vec<(ToastLevel, String)> {
    match error {
        ApiError::Unauthorized => vec![(
            ToastLevel::Error,
            "Session expired, please log in again".into(),
        )],
        ApiError::Forbidden => vec![(
            ToastLevel::Error,
            "You do not have permission to access this resource".into(),
        )],
        ApiError::NotFound => vec![(
            ToastLevel::Error,
            "The requested resource does not exist".into(),
        )],
        ApiError::Validation(fields) if fields.is_empty() => {
            vec![(ToastLevel::Error, "Request validation failed".into())]
        }
        ApiError::Validation(fields) => fields
            .iter()
            .map(|f| (ToastLevel::Error, format!("{}: {}", f.field, f.message)))
            .collect(),
        ApiError::Server => vec![(ToastLevel::Error, "Internal server error".into())],
        ApiError::Other {
            message: Some(message),
            ..
        } => vec![(ToastLevel::Error, message.clone())],
        ApiError::Other { .. } => vec![(ToastLevel::Error, "Request failed".into())],
        ApiError::Network(_) => vec![(ToastLevel::Error, "Network connection failed".into())],
        ApiError::Timeout => vec![(ToastLevel::Error, "Request timed out".into())],
        ApiError::Decode => vec![(
            ToastLevel::Error,
            "Unexpected response from the server".into(),
        )],
    }
}

/// Central failure sink. Every failed call funnels through `publish`:
/// the failure is toasted per the table above, and a 401 additionally
/// clears the session and navigates to the login page. All other
/// failures leave application state unchanged.
#[derive(Clone)]
pub struct ErrorSink {
    toasts: ToastContext,
    auth: AuthStore,
    navigate: Arc<dyn Fn(&str) + Send + Sync>,
}

/// Builds the sink from context. Must be called during component setup,
/// where the router is available; the sink itself can then travel into
/// async handlers.
pub fn use_error_sink() -> ErrorSink {
    let navigate = use_navigate();
    ErrorSink {
        toasts: expect_context::<ToastContext>(),
        auth: expect_context::<AuthStore>(),
        navigate: Arc::new(move |path: &str| navigate(path, Default::default())),
    }
}

impl ErrorSink {
    pub fn publish(&self, error: &ApiError) {
        for (level, message) in toast_lines(error) {
            self.toasts.push(message, level);
        }
        if matches!(error, ApiError::Unauthorized) {
            self.auth.logout();
            (self.navigate)(paths::LOGIN);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_client::FieldError;

    #[test]
    fn validation_failure_toasts_one_line_per_field() {
        let error = ApiError::Validation(vec![
            FieldError {
                field: "phone".into(),
                message: "field required".into(),
            },
            FieldError {
                field: "password".into(),
                message: "too short".into(),
            },
        ]);
        let lines = toast_lines(&error);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].1, "phone: field required");
        assert_eq!(lines[1].1, "password: too short");
    }

    #[test]
    fn empty_validation_detail_toasts_a_generic_line() {
        let lines = toast_lines(&ApiError::Validation(Vec::new()));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].1, "Request validation failed");
    }

    #[test]
    fn other_failures_prefer_the_body_message() {
        let lines = toast_lines(&ApiError::Other {
            status: 409,
            message: Some("order already assigned".into()),
        });
        assert_eq!(lines[0].1, "order already assigned");

        let lines = toast_lines(&ApiError::Other {
            status: 409,
            message: None,
        });
        assert_eq!(lines[0].1, "Request failed");
    }

    #[test]
    fn session_expiry_has_its_own_message() {
        let lines = toast_lines(&ApiError::Unauthorized);
        assert_eq!(lines[0].1, "Session expired, please log in again");
    }
}
