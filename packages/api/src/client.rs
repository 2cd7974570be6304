//! # HTTP client adapter
//!
//! [`ApiClient`] is the one place outbound requests go through. It owns the
//! three cross-cutting behaviors every call needs:
//!
//! - **Bearer attachment**: the token from durable storage rides along as
//!   `Authorization: Bearer <token>` whenever one exists.
//! - **Timeout**: the wasm fetch client has no builder timeout, so every
//!   request races a 15 second sleep; losing the race cancels the request
//!   and surfaces [`ApiError::Timeout`].
//! - **401 handling**: an authentication-rejected response clears the
//!   stored session and sends the browser back to `/login`, unless the user
//!   is already on the login or registration screen (a failed login attempt
//!   is itself a 401 and must not trigger a reload loop).
//!
//! Callers get back the parsed response [`Envelope`] or an [`ApiError`];
//! transport failures are folded into the distinguished timeout and
//! cannot-reach-server messages rather than leaking reqwest errors upward.

use std::time::Duration;

use futures::future::{select, Either};
use reqwest::StatusCode;
use serde::Serialize;
use store::SharedSessionStore;

use crate::config;
use crate::envelope::{Envelope, MALFORMED};
use crate::error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: SharedSessionStore,
}

impl ApiClient {
    pub fn new(store: SharedSessionStore) -> Self {
        Self::with_base_url(config::api_base_url(), store)
    }

    pub fn with_base_url(base_url: impl Into<String>, store: SharedSessionStore) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            store,
        }
    }

    pub fn store(&self) -> &SharedSessionStore {
        &self.store
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(
        &self,
        path: &str,
        params: &[(&'static str, String)],
    ) -> Result<Envelope, ApiError> {
        self.send(self.http.get(self.url(path)).query(params)).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, ApiError> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Envelope, ApiError> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    /// Bodyless PATCH; this is how status transition endpoints are called.
    pub async fn patch(&self, path: &str) -> Result<Envelope, ApiError> {
        self.send(self.http.patch(self.url(path))).await
    }

    pub async fn delete(&self, path: &str) -> Result<Envelope, ApiError> {
        self.send(self.http.delete(self.url(path))).await
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<Envelope, ApiError> {
        let builder = match self.store.token() {
            Some(token) => builder.header("Authorization", format!("Bearer {token}")),
            None => builder,
        };

        let request = Box::pin(builder.send());
        let deadline = Box::pin(sleep(REQUEST_TIMEOUT));
        let response = match select(request, deadline).await {
            Either::Left((Ok(response), _)) => response,
            Either::Left((Err(err), _)) => {
                tracing::error!("request failed: {err}");
                return Err(if err.is_timeout() {
                    ApiError::Timeout
                } else {
                    ApiError::Unreachable
                });
            }
            Either::Right((_, request)) => {
                // Dropping the in-flight future aborts the fetch.
                drop(request);
                tracing::warn!("request exceeded {}s deadline", REQUEST_TIMEOUT.as_secs());
                return Err(ApiError::Timeout);
            }
        };

        let status = response.status();
        let envelope: Option<Envelope> = response.json().await.ok();

        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
            return Err(ApiError::from_status(
                401,
                envelope.and_then(|env| env.message),
            ));
        }
        if status.is_success() {
            return envelope.ok_or_else(|| ApiError::Server(MALFORMED.to_string()));
        }

        let message = envelope.and_then(|env| env.message);
        tracing::warn!("request rejected with {status}: {message:?}");
        Err(ApiError::from_status(status.as_u16(), message))
    }

    /// Global 401 effect: the stored session is gone no matter which call
    /// tripped it. The hard navigation also resets all in-memory state, which
    /// is exactly what a rejected session needs.
    fn expire_session(&self) {
        tracing::warn!("authentication rejected; clearing stored session");
        self.store.clear();

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let location = window.location();
                let on_auth_screen = matches!(
                    location.pathname().as_deref(),
                    Ok("/login") | Ok("/register")
                );
                if !on_auth_screen {
                    let _ = location.set_href("/login");
                }
            }
        }
    }
}
