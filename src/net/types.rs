//! Wire types shared between the REST layer and the UI.

use serde::{Deserialize, Serialize};

/// An authenticated user as reported by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// `POST /api/auth/login` request body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/register` request body.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Successful login/register response: a bearer token plus the user it
/// identifies.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// `GET /api/auth/me` response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// `POST /api/auth/refresh` response. The server also echoes the user;
/// only the replacement token matters here.
#[derive(Clone, Debug, Deserialize)]
pub struct RefreshResponse {
    pub token: String,
}

/// `POST /api/ideas` request body.
#[derive(Clone, Debug, Serialize)]
pub struct IdeaRequest {
    pub title: String,
    pub description: String,
}

/// A comment on an entity thread.
#[derive(Clone, Debug, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub author: Option<String>,
    pub text: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// `POST /api/entities/{id}/comments` request body.
#[derive(Clone, Debug, Serialize)]
pub struct CommentRequest {
    pub text: String,
}

/// A notification as listed by `GET /api/notifications`.
#[derive(Clone, Debug, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// `GET /api/notifications/unread/count` response.
#[derive(Clone, Debug, Deserialize)]
pub struct UnreadCount {
    pub count: u32,
}

/// A stored SOP document as listed by `GET /api/sop`.
#[derive(Clone, Debug, Deserialize)]
pub struct SopDocument {
    pub id: i64,
    pub filename: String,
    #[serde(rename = "uploadedAt", default)]
    pub uploaded_at: Option<String>,
}
