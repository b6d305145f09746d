use garage_types::Wage;

use crate::error::ApiError;
use crate::http::Api;

/// Wage records for the logged-in worker, optionally bounded to a month
/// range. Months are `YYYY-MM` strings.
pub async fn my_wages(
    api: &Api,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<Vec<Wage>, ApiError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(start) = start_date {
        query.push(("start_date", start.to_string()));
    }
    if let Some(end) = end_date {
        query.push(("end_date", end.to_string()));
    }
    if query.is_empty() {
        api.get("/workers/my-wages").await
    } else {
        api.get_with("/workers/my-wages", &query).await
    }
}
