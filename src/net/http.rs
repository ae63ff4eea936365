//! HTTP request pipeline.
//!
//! Every REST call goes through this module so that two cross-cutting
//! rules hold uniformly, no matter which feature issued the request:
//!
//! - Outbound: the current bearer token (if any) is attached as an
//!   `Authorization` header.
//! - Inbound: a 401 on a request that carried a bearer token means the
//!   credential is no longer valid. The registered session-expiry hook
//!   fires exactly once per expiry (the session state collapses repeated
//!   triggers) and the caller gets `ApiError::Unauthorized`. A 401 on a
//!   credential-free request (login, register) is an ordinary rejection
//!   and never escalates.
//!
//! Requests are bounded by a fixed timeout; exceeding it is reported as
//! a transport failure, never retried here.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

/// Upper bound on any single request, in milliseconds.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Failure taxonomy for the REST layer.
#[derive(Clone, Debug, Error)]
pub enum ApiError {
    /// The server rejected a previously accepted credential. The
    /// session-expiry hook has already fired by the time this surfaces.
    #[error("session expired")]
    Unauthorized,
    /// The request exceeded [`REQUEST_TIMEOUT_MS`].
    #[error("request timed out")]
    Timeout,
    /// Connection-level failure (DNS, refused, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// Browser-only call made outside the browser (SSR or native).
    #[error("not available outside the browser")]
    Unavailable,
}

thread_local! {
    static BEARER: RefCell<Option<String>> = const { RefCell::new(None) };
    static EXPIRY_HOOK: RefCell<Option<Rc<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Register (or clear) the bearer token attached to subsequent requests.
pub fn set_bearer(token: Option<String>) {
    BEARER.with(|slot| *slot.borrow_mut() = token);
}

/// The currently attached bearer token, if any.
pub fn bearer() -> Option<String> {
    BEARER.with(|slot| slot.borrow().clone())
}

/// Install the hook invoked when an authenticated request comes back 401.
pub fn set_session_expired_hook(hook: impl Fn() + 'static) {
    EXPIRY_HOOK.with(|slot| *slot.borrow_mut() = Some(Rc::new(hook)));
}

fn report_session_expired() {
    let hook = EXPIRY_HOOK.with(|slot| slot.borrow().clone());
    if let Some(hook) = hook {
        hook();
    }
}

/// Format a token as an `Authorization` header value.
pub fn authorization_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Whether a response status forces the current session out.
///
/// Only a 401 on a request that actually carried the credential counts:
/// a 401 from `login` or `register` is a rejection of the submitted
/// credentials, not an invalidation of a held session.
pub fn escalates_to_logout(status: u16, bearer_attached: bool) -> bool {
    status == 401 && bearer_attached
}

/// Extract a user-displayable message from an error payload.
///
/// Prefers the server's `error` field, then `message`, then a generic
/// fallback naming the status.
pub fn error_message(status: u16, body: &serde_json::Value) -> String {
    body.get("error")
        .and_then(serde_json::Value::as_str)
        .or_else(|| body.get("message").and_then(serde_json::Value::as_str))
        .map_or_else(|| format!("Request failed ({status})"), str::to_owned)
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Method, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, REQUEST_TIMEOUT_MS};

    fn attach_bearer(builder: RequestBuilder) -> (RequestBuilder, bool) {
        match super::bearer() {
            Some(token) => {
                let header = super::authorization_header(&token);
                (builder.header("Authorization", &header), true)
            }
            None => (builder, false),
        }
    }

    async fn send(
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<Response, ApiError> {
        use futures::FutureExt;

        let builder = RequestBuilder::new(path).method(method);
        let (builder, bearer_attached) = attach_bearer(builder);
        let request = match body {
            Some(json) => builder.json(json).map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let send = request.send().fuse();
        let timeout = gloo_timers::future::sleep(std::time::Duration::from_millis(
            REQUEST_TIMEOUT_MS,
        ))
        .fuse();
        futures::pin_mut!(send, timeout);
        let response = futures::select! {
            result = send => result.map_err(|e| ApiError::Network(e.to_string()))?,
            () = timeout => return Err(ApiError::Timeout),
        };

        if super::escalates_to_logout(response.status(), bearer_attached) {
            super::report_session_expired();
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let status = response.status();
            let body = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            return Err(ApiError::Server {
                status,
                message: super::error_message(status, &body),
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn encode(body: &impl Serialize) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        decode(send(Method::GET, path, None).await?).await
    }

    pub async fn post_json<T: DeserializeOwned>(
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        decode(send(Method::POST, path, Some(&encode(body)?)).await?).await
    }

    pub async fn post_json_unit(path: &str, body: &impl Serialize) -> Result<(), ApiError> {
        send(Method::POST, path, Some(&encode(body)?)).await.map(|_| ())
    }

    pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        decode(send(Method::POST, path, None).await?).await
    }

    pub async fn post_empty_unit(path: &str) -> Result<(), ApiError> {
        send(Method::POST, path, None).await.map(|_| ())
    }

    pub async fn delete_unit(path: &str) -> Result<(), ApiError> {
        send(Method::DELETE, path, None).await.map(|_| ())
    }
}

#[cfg(feature = "hydrate")]
pub use transport::{
    delete_unit, get_json, post_empty, post_empty_unit, post_json, post_json_unit,
};
