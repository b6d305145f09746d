use std::rc::Rc;

use garage_client::session::{TOKEN_KEY, USER_INFO_KEY, USER_TYPE_KEY};
use garage_client::{MemoryStorage, SessionBackend, SessionStore};
use garage_types::{CustomerInfo, UserInfo, UserRole};

fn customer() -> UserInfo {
    UserInfo::Customer(CustomerInfo {
        id: 11,
        name: "Zhao".into(),
        phone: Some("13900000000".into()),
        email: None,
    })
}

#[test]
fn login_persists_all_three_storage_keys() {
    let backend = MemoryStorage::default();
    let store = SessionStore::with_backend(Rc::new(backend.clone()));

    store.persist("jwt-token", &customer(), UserRole::User);

    assert_eq!(backend.read(TOKEN_KEY).as_deref(), Some("jwt-token"));
    assert_eq!(backend.read(USER_TYPE_KEY).as_deref(), Some("user"));
    let raw_info = backend.read(USER_INFO_KEY).expect("userInfo written");
    let round_tripped: UserInfo = serde_json::from_str(&raw_info).unwrap();
    assert_eq!(round_tripped, customer());
}

#[test]
fn logout_clears_all_three_storage_keys() {
    let backend = MemoryStorage::default();
    let store = SessionStore::with_backend(Rc::new(backend.clone()));
    store.persist("jwt-token", &customer(), UserRole::User);

    store.clear();

    assert_eq!(backend.read(TOKEN_KEY), None);
    assert_eq!(backend.read(USER_INFO_KEY), None);
    assert_eq!(backend.read(USER_TYPE_KEY), None);
    assert!(!store.load().is_logged_in());
}

#[test]
fn persisted_session_restores_after_reload() {
    let backend = MemoryStorage::default();
    {
        let store = SessionStore::with_backend(Rc::new(backend.clone()));
        store.persist("jwt-token", &customer(), UserRole::User);
    }

    // A fresh store over the same backend simulates a new browser tab.
    let restored = SessionStore::with_backend(Rc::new(backend)).load();
    assert!(restored.is_logged_in());
    assert_eq!(restored.role, Some(UserRole::User));
    assert_eq!(restored.user_info, Some(customer()));
}
