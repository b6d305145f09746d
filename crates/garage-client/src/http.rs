use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{self, ApiError};
use crate::session::SessionStore;

pub const BASE_URL: &str = "/api/v1";

const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Shared HTTP client. Every request goes out with the stored bearer
/// token attached when one is present, and every response is either
/// deserialized to its DTO or classified into an [`ApiError`].
#[derive(Clone)]
pub struct Api {
    session: SessionStore,
}

impl Default for Api {
    fn default() -> Self {
        Self::new()
    }
}

impl Api {
    pub fn new() -> Self {
        Self {
            session: SessionStore::browser(),
        }
    }

    pub fn with_session(session: SessionStore) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(path: &str) -> String {
        format!("{BASE_URL}{path}")
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::get(&Self::url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::dispatch(request).await
    }

    pub async fn get_with<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let builder = Request::get(&Self::url(path))
            .query(query.iter().map(|(key, value)| (*key, value.as_str())));
        let request = self
            .authorize(builder)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::dispatch(request).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&Self::url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::dispatch(request).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&Self::url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::dispatch(request).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::put(&Self::url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::dispatch(request).await
    }

    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::put(&Self::url(path)))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::dispatch(request).await
    }

    /// Sends the request with the fixed timeout and applies the response
    /// mapping: 2xx deserializes the body, everything else classifies.
    async fn dispatch<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
        let send = request.send();
        let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        pin_mut!(send);
        pin_mut!(timeout);

        let response: Response = match select(send, timeout).await {
            Either::Left((result, _)) => {
                result.map_err(|e| ApiError::Network(e.to_string()))?
            }
            Either::Right(_) => return Err(ApiError::Timeout),
        };

        if response.ok() {
            response.json::<T>().await.map_err(|_| ApiError::Decode)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(error::classify(status, &body))
        }
    }
}
