use serde::{Deserialize, Serialize};

use crate::session::{AdminInfo, CustomerInfo, WorkerInfo};

/// Response of the three `/auth/login/*` endpoints. Exactly one of the
/// info fields is populated, matching the endpoint that was called.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub user_info: Option<CustomerInfo>,
    #[serde(default)]
    pub admin_info: Option<AdminInfo>,
    #[serde(default)]
    pub worker_info: Option<WorkerInfo>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CustomerCredentials {
    pub phone: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StaffCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkerCredentials {
    pub employee_id: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
    pub pages: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub message: String,
    #[serde(default = "default_true")]
    pub success: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Wire form, also used for query-string filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// A repair order as the backend returns it. Timestamps stay strings and
/// money stays f64; the client only displays these fields.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RepairOrder {
    pub id: i64,
    pub user_id: i64,
    pub vehicle_id: i64,
    pub admin_id: Option<i64>,
    pub order_number: String,
    pub description: String,
    pub status: OrderStatus,
    pub priority: OrderPriority,
    pub create_time: String,
    pub estimated_completion_time: Option<String>,
    pub actual_completion_time: Option<String>,
    pub total_labor_cost: f64,
    pub total_material_cost: f64,
    pub total_service_cost: f64,
    pub total_cost: f64,
    pub internal_notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

/// Body of the order completion call: hours worked plus an optional
/// free-text description of the work performed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompletionReport {
    pub work_hours: f64,
    pub overtime_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_description: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WageStatus {
    Calculated,
    Paid,
    Disputed,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Wage {
    pub id: i64,
    pub worker_id: i64,
    /// Pay period in `YYYY-MM` form.
    pub pay_period: String,
    pub total_hours: Option<f64>,
    pub base_salary: Option<f64>,
    pub overtime_pay: Option<f64>,
    pub bonus: Option<f64>,
    pub total_payment: Option<f64>,
    pub status: WageStatus,
    pub pay_date: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkillType {
    Mechanical,
    Electrical,
    Bodywork,
    Engine,
    Transmission,
    Brake,
    Suspension,
    AirConditioning,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Junior,
    Intermediate,
    Senior,
    Expert,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    Active,
    Inactive,
    OnLeave,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkerProfile {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub skill_type: SkillType,
    pub skill_level: SkillLevel,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub hourly_rate: f64,
    pub status: WorkerStatus,
    pub hire_date: String,
    pub certifications: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields a worker may change on their own profile.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub status: AccountStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_uses_snake_case_wire_form() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);
    }

    #[test]
    fn login_response_carries_exactly_the_populated_info() {
        let body = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "worker_info": {
                "id": 2,
                "employee_id": "W-0002",
                "name": "Wang",
                "skill_type": "brake",
                "skill_level": "junior"
            }
        }"#;
        let resp: LoginResponse = serde_json::from_str(body).unwrap();
        assert!(resp.user_info.is_none());
        assert!(resp.admin_info.is_none());
        assert_eq!(resp.worker_info.unwrap().employee_id, "W-0002");
    }

    #[test]
    fn completion_report_omits_absent_description() {
        let body = CompletionReport {
            work_hours: 3.5,
            overtime_hours: 0.0,
            work_description: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("work_description"));
    }

    #[test]
    fn paginated_orders_deserialize() {
        let body = r#"{
            "items": [],
            "total": 0,
            "page": 1,
            "size": 20,
            "pages": 0
        }"#;
        let page: Paginated<RepairOrder> = serde_json::from_str(body).unwrap();
        assert_eq!(page.page, 1);
        assert!(page.items.is_empty());
    }
}
