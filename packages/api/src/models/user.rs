//! # User models
//!
//! [`CurrentUser`] is the single user representation the API returns, both
//! from `GET /api/users/me` (the viewer) and `GET /api/users/{id}` (a
//! profile). It carries the marketplace [`Role`] that drives every gating
//! decision in [`crate::gate`].
//!
//! Tags arrive as `{id, name}` objects but are sent back as plain names in a
//! [`ProfileUpdate`]; [`CurrentUser::tag_line`] renders them the way the
//! profile form edits them (`"Rust, Axum"`).

use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// Marketplace role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employer,
    Freelancer,
    /// Administrative accounts take part in neither side of the marketplace.
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employer => "employer",
            Role::Freelancer => "freelancer",
            Role::Admin => "admin",
        }
    }

    /// Parse a role from a form `<select>` value.
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim() {
            "employer" => Some(Role::Employer),
            "freelancer" => Some(Role::Freelancer),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// A user as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    pub status: String,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl CurrentUser {
    pub fn is_employer(&self) -> bool {
        self.role == Role::Employer
    }

    pub fn is_freelancer(&self) -> bool {
        self.role == Role::Freelancer
    }

    /// Tag names joined with `", "`.
    pub fn tag_line(&self) -> String {
        self.tags
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Body of `POST /api/users/`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body of `PUT /api/users/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileUpdate {
    pub about: String,
    pub tags: Vec<String>,
}

/// Response of `POST /api/users/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
