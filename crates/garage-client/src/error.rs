use thiserror::Error;

/// One entry of a 422 validation `detail` list, flattened to the field
/// name and its message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Classified outcome of a failed request. `Unauthorized` is fatal to the
/// session; everything else is informational and leaves state unchanged.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    #[error("session expired")]
    Unauthorized,
    #[error("permission denied")]
    Forbidden,
    #[error("resource not found")]
    NotFound,
    #[error("request validation failed")]
    Validation(Vec<FieldError>),
    #[error("internal server error")]
    Server,
    #[error("request failed with status {status}")]
    Other {
        status: u16,
        message: Option<String>,
    },
    #[error("network failure: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("malformed response body")]
    Decode,
}

/// Maps a non-2xx response to its `ApiError`. The body is consulted only
/// for 422 (validation detail list) and for the fallback message of
/// unlisted statuses.
pub fn classify(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        422 => ApiError::Validation(validation_errors(body)),
        500 => ApiError::Server,
        _ => ApiError::Other {
            status,
            message: body_message(body),
        },
    }
}

/// Unpacks the FastAPI `detail` array into per-field messages. A missing
/// or non-array `detail` yields an empty list, which the presentation
/// layer renders as a single generic validation message.
fn validation_errors(body: &str) -> Vec<FieldError> {
    let parsed: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return Vec::new(),
    };
    let Some(detail) = parsed.get("detail").and_then(|d| d.as_array()) else {
        return Vec::new();
    };
    detail
        .iter()
        .map(|entry| {
            let field = entry
                .get("loc")
                .and_then(|loc| loc.get(1))
                .and_then(|f| f.as_str())
                .unwrap_or("parameter")
                .to_string();
            let message = entry
                .get("msg")
                .and_then(|m| m.as_str())
                .unwrap_or("invalid value")
                .to_string();
            FieldError { field, message }
        })
        .collect()
}

fn body_message(body: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    for key in ["message", "detail"] {
        if let Some(text) = parsed.get(key).and_then(|v| v.as_str()) {
            return Some(text.to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_statuses_classify_without_a_body() {
        assert_eq!(classify(401, ""), ApiError::Unauthorized);
        assert_eq!(classify(403, ""), ApiError::Forbidden);
        assert_eq!(classify(404, ""), ApiError::NotFound);
        assert_eq!(classify(500, ""), ApiError::Server);
    }

    #[test]
    fn unlisted_status_carries_the_body_message() {
        let err = classify(409, r#"{"message":"order already assigned"}"#);
        assert_eq!(
            err,
            ApiError::Other {
                status: 409,
                message: Some("order already assigned".into()),
            }
        );

        let err = classify(400, r#"{"detail":"account disabled"}"#);
        assert_eq!(
            err,
            ApiError::Other {
                status: 400,
                message: Some("account disabled".into()),
            }
        );

        let err = classify(418, "plain text");
        assert_eq!(
            err,
            ApiError::Other {
                status: 418,
                message: None,
            }
        );
    }

    #[test]
    fn validation_detail_unpacks_per_field() {
        let body = r#"{"detail":[
            {"loc":["body","phone"],"msg":"field required","type":"value_error.missing"},
            {"loc":["body","password"],"msg":"too short","type":"value_error"}
        ]}"#;
        let err = classify(422, body);
        assert_eq!(
            err,
            ApiError::Validation(vec![
                FieldError {
                    field: "phone".into(),
                    message: "field required".into(),
                },
                FieldError {
                    field: "password".into(),
                    message: "too short".into(),
                },
            ])
        );
    }

    #[test]
    fn non_array_validation_detail_degrades_to_generic() {
        assert_eq!(
            classify(422, r#"{"detail":"bad request"}"#),
            ApiError::Validation(Vec::new())
        );
        assert_eq!(classify(422, "not json"), ApiError::Validation(Vec::new()));
    }

    #[test]
    fn detail_entry_without_field_location_falls_back() {
        let body = r#"{"detail":[{"loc":[],"msg":"invalid"}]}"#;
        let ApiError::Validation(fields) = classify(422, body) else {
            panic!("expected validation error");
        };
        assert_eq!(fields[0].field, "parameter");
    }
}
