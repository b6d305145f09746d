use garage_types::{CompletionReport, OrderStatus, Paginated, RepairOrder, StatusUpdate};

use crate::error::ApiError;
use crate::http::Api;

fn page_query(page: i64, size: i64, status: Option<OrderStatus>) -> Vec<(&'static str, String)> {
    let mut query = vec![("page", page.to_string()), ("size", size.to_string())];
    if let Some(status) = status {
        query.push(("status", status.as_str().to_string()));
    }
    query
}

/// Orders currently assigned to the logged-in worker.
pub async fn worker_orders(
    api: &Api,
    page: i64,
    size: i64,
    status: Option<OrderStatus>,
) -> Result<Paginated<RepairOrder>, ApiError> {
    api.get_with("/repair-orders/worker-orders", &page_query(page, size, status))
        .await
}

pub async fn update_worker_order_status(
    api: &Api,
    order_id: i64,
    update: &StatusUpdate,
) -> Result<RepairOrder, ApiError> {
    api.put(
        &format!("/repair-orders/worker-orders/{order_id}/status"),
        update,
    )
    .await
}

/// Unassigned orders a worker may pick up.
pub async fn available_orders(
    api: &Api,
    page: i64,
    size: i64,
) -> Result<Paginated<RepairOrder>, ApiError> {
    api.get_with("/repair-orders/available", &page_query(page, size, None))
        .await
}

pub async fn accept_order(api: &Api, order_id: i64) -> Result<RepairOrder, ApiError> {
    api.post_empty(&format!("/repair-orders/{order_id}/accept"))
        .await
}

pub async fn reject_order(api: &Api, order_id: i64) -> Result<RepairOrder, ApiError> {
    api.put_empty(&format!("/repair-orders/{order_id}/reject"))
        .await
}

/// Closes out an assigned order, reporting hours worked.
pub async fn complete_order(
    api: &Api,
    order_id: i64,
    report: &CompletionReport,
) -> Result<RepairOrder, ApiError> {
    api.post(
        &format!("/repair-orders/worker-orders/{order_id}/complete"),
        report,
    )
    .await
}

/// Orders placed by the logged-in customer.
pub async fn my_orders(
    api: &Api,
    page: i64,
    size: i64,
) -> Result<Paginated<RepairOrder>, ApiError> {
    api.get_with("/repair-orders/my-orders", &page_query(page, size, None))
        .await
}

/// Full order book, administrators only.
pub async fn all_orders(
    api: &Api,
    page: i64,
    size: i64,
    status: Option<OrderStatus>,
) -> Result<Paginated<RepairOrder>, ApiError> {
    api.get_with("/repair-orders/", &page_query(page, size, status))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_includes_status_only_when_filtered() {
        let plain = page_query(2, 20, None);
        assert_eq!(
            plain,
            vec![("page", "2".to_string()), ("size", "20".to_string())]
        );

        let filtered = page_query(1, 10, Some(OrderStatus::InProgress));
        assert_eq!(filtered.last(), Some(&("status", "in_progress".to_string())));
    }
}
