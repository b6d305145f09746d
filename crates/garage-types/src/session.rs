use serde::{Deserialize, Serialize};

/// Which of the three login endpoints produced the current session.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
    Worker,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
            UserRole::Worker => "worker",
        }
    }

    /// Parses the value stored under the `userType` key. Anything other
    /// than the three known roles (including the empty string) is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(UserRole::User),
            "admin" => Some(UserRole::Admin),
            "worker" => Some(UserRole::Worker),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CustomerInfo {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdminInfo {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub role: String,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkerInfo {
    pub id: i64,
    pub employee_id: String,
    pub name: String,
    pub skill_type: String,
    pub skill_level: String,
}

/// The `user_info` / `admin_info` / `worker_info` payload of a login
/// response, persisted verbatim under the `userInfo` storage key.
///
/// Untagged: variants are tried in order, so the ones with distinguishing
/// required fields (`employee_id`, `username` + `role`) come first.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum UserInfo {
    Worker(WorkerInfo),
    Admin(AdminInfo),
    Customer(CustomerInfo),
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        match self {
            UserInfo::Worker(w) => &w.name,
            UserInfo::Admin(a) => &a.name,
            UserInfo::Customer(c) => &c.name,
        }
    }
}

/// The client-held token / user / role triple. Login writes all three
/// storage keys together and logout clears all three together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
    pub role: Option<UserRole>,
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_storage_strings() {
        for role in [UserRole::User, UserRole::Admin, UserRole::Worker] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse(""), None);
        assert_eq!(UserRole::parse("superadmin"), None);
    }

    #[test]
    fn user_info_picks_variant_by_shape() {
        let worker: UserInfo = serde_json::from_str(
            r#"{"id":7,"employee_id":"W-0007","name":"Li Wei","skill_type":"engine","skill_level":"senior"}"#,
        )
        .unwrap();
        assert!(matches!(worker, UserInfo::Worker(_)));

        let admin: UserInfo = serde_json::from_str(
            r#"{"id":1,"username":"root","name":"Admin","role":"super_admin","email":null}"#,
        )
        .unwrap();
        assert!(matches!(admin, UserInfo::Admin(_)));

        let customer: UserInfo = serde_json::from_str(
            r#"{"id":3,"name":"Zhang San","phone":"13800000000","email":"z@example.com"}"#,
        )
        .unwrap();
        assert!(matches!(customer, UserInfo::Customer(_)));
    }

    #[test]
    fn empty_session_is_logged_out() {
        assert!(!Session::default().is_logged_in());
    }
}
