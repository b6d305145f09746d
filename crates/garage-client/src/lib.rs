#![allow(non_snake_case)]

pub mod api;
pub mod error;
pub mod http;
pub mod session;

pub use error::{ApiError, FieldError};
pub use http::Api;
pub use session::{BrowserStorage, MemoryStorage, SessionBackend, SessionStore};
