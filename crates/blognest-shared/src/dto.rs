//! Data Transfer Objects - request/response types for the API.
//!
//! Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Email/password sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The registration form as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub password: String,
    pub confirm_password: String,
}

/// The create-post form as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub featured_image: Option<String>,
    /// Comma separated, e.g. `"Rust, Web Development"`.
    pub tags: String,
    pub author: Option<String>,
}

/// A user's public information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub provider: String,
}

/// Who is signed in, and whether a sign-in is still being worked on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: Option<UserResponse>,
    pub is_loading: bool,
}

/// One entry in the about page's feature list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// The about page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutResponse {
    pub tagline: String,
    pub mission: Vec<String>,
    pub features: Vec<Feature>,
    pub tech_stack: Vec<String>,
    pub getting_started: Vec<String>,
}
