//! Typed REST calls for communicating with the server.
//!
//! Client-side (hydrate): real HTTP through the pipeline in
//! [`super::http`], which attaches the bearer credential and escalates
//! 401s on authenticated calls. Server-side (SSR): stubs returning
//! [`ApiError::Unavailable`] since these endpoints are only meaningful
//! in the browser.

#![allow(clippy::unused_async)]

use super::http::ApiError;
use super::types::{
    AuthResponse, Comment, CommentRequest, IdeaRequest, LoginRequest, Notification,
    RefreshResponse, RegisterRequest, SopDocument, User,
};

#[cfg(feature = "hydrate")]
use super::http;
#[cfg(feature = "hydrate")]
use super::types::{MeResponse, UnreadCount};

/// `POST /api/auth/login` — exchange credentials for a token and user.
pub async fn login(payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json("/api/auth/login", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/auth/register` — create an account; responds like login.
pub async fn register(payload: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json("/api/auth/register", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/auth/me` — the identity behind the attached bearer token.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response: MeResponse = http::get_json("/api/auth/me").await?;
        Ok(response.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/auth/refresh` — swap the attached token for a fresh one.
pub async fn refresh() -> Result<RefreshResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_empty("/api/auth/refresh").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/ideas` — submit a new idea.
pub async fn submit_idea(payload: &IdeaRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_json_unit("/api/ideas", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/entities/{id}/comments` — the comment thread for an entity.
pub async fn fetch_comments(entity_id: &str) -> Result<Vec<Comment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json(&format!("/api/entities/{entity_id}/comments")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entity_id;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/entities/{id}/comments` — append to an entity's thread.
pub async fn post_comment(entity_id: &str, text: &str) -> Result<Comment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = CommentRequest { text: text.to_owned() };
        http::post_json(&format!("/api/entities/{entity_id}/comments"), &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (entity_id, text);
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/notifications` — the full notification list.
pub async fn fetch_notifications() -> Result<Vec<Notification>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json("/api/notifications").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/notifications/unread/count` — badge count.
pub async fn fetch_unread_count() -> Result<u32, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response: UnreadCount = http::get_json("/api/notifications/unread/count").await?;
        Ok(response.count)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/notifications/{id}/read` — mark one notification read.
pub async fn mark_notification_read(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::post_empty_unit(&format!("/api/notifications/{id}/read")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/sop` — the stored SOP documents.
pub async fn fetch_sops() -> Result<Vec<SopDocument>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::get_json("/api/sop").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `DELETE /api/sop/{id}` — remove a stored SOP document.
pub async fn delete_sop(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        http::delete_unit(&format!("/api/sop/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
