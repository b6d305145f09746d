use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use garage_types::{Session, UserInfo, UserRole};

pub const TOKEN_KEY: &str = "token";
pub const USER_INFO_KEY: &str = "userInfo";
pub const USER_TYPE_KEY: &str = "userType";

/// Raw key-value storage behind the session store. The browser backend is
/// local storage; tests use the in-memory backend.
pub trait SessionBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser local storage. Reads and writes fall back to no-ops when the
/// storage area is unavailable (private browsing, quota).
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Mirror of the three session storage entries. Login writes all three
/// keys, logout removes all three; `load` tolerates missing or corrupt
/// entries by treating them as absent.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn browser() -> Self {
        Self {
            backend: Rc::new(BrowserStorage),
        }
    }

    pub fn with_backend(backend: Rc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    pub fn load(&self) -> Session {
        let token = self.backend.read(TOKEN_KEY);
        let user_info = self
            .backend
            .read(USER_INFO_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        let role = self
            .backend
            .read(USER_TYPE_KEY)
            .as_deref()
            .and_then(UserRole::parse);
        Session {
            token,
            user_info,
            role,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.backend.read(TOKEN_KEY)
    }

    pub fn persist(&self, token: &str, info: &UserInfo, role: UserRole) {
        self.backend.write(TOKEN_KEY, token);
        if let Ok(raw) = serde_json::to_string(info) {
            self.backend.write(USER_INFO_KEY, &raw);
        }
        self.backend.write(USER_TYPE_KEY, role.as_str());
    }

    pub fn update_user_info(&self, info: &UserInfo) {
        if let Ok(raw) = serde_json::to_string(info) {
            self.backend.write(USER_INFO_KEY, &raw);
        }
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_INFO_KEY);
        self.backend.remove(USER_TYPE_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garage_types::WorkerInfo;

    fn worker_info() -> UserInfo {
        UserInfo::Worker(WorkerInfo {
            id: 9,
            employee_id: "W-0009".into(),
            name: "Chen".into(),
            skill_type: "electrical".into(),
            skill_level: "senior".into(),
        })
    }

    #[test]
    fn load_tolerates_corrupt_user_info() {
        let backend = MemoryStorage::default();
        backend.write(TOKEN_KEY, "jwt");
        backend.write(USER_INFO_KEY, "{not json");
        backend.write(USER_TYPE_KEY, "worker");

        let session = SessionStore::with_backend(Rc::new(backend)).load();
        assert_eq!(session.token.as_deref(), Some("jwt"));
        assert!(session.user_info.is_none());
        assert_eq!(session.role, Some(UserRole::Worker));
    }

    #[test]
    fn load_treats_unknown_role_as_absent() {
        let backend = MemoryStorage::default();
        backend.write(USER_TYPE_KEY, "superuser");
        let session = SessionStore::with_backend(Rc::new(backend)).load();
        assert_eq!(session.role, None);
    }

    #[test]
    fn update_user_info_leaves_token_and_role_alone() {
        let backend = MemoryStorage::default();
        let store = SessionStore::with_backend(Rc::new(backend.clone()));
        store.persist("jwt", &worker_info(), UserRole::Worker);

        let mut updated = match worker_info() {
            UserInfo::Worker(w) => w,
            _ => unreachable!(),
        };
        updated.name = "Chen Wei".into();
        let renamed = UserInfo::Worker(updated);
        store.update_user_info(&renamed);

        assert_eq!(backend.read(TOKEN_KEY).as_deref(), Some("jwt"));
        assert_eq!(backend.read(USER_TYPE_KEY).as_deref(), Some("worker"));
        assert_eq!(store.load().user_info, Some(renamed));
    }
}
