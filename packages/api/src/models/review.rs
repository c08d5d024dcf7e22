use serde::{Deserialize, Serialize};

use super::UserId;

/// A rating one user left about another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub reviewer_id: UserId,
    #[serde(alias = "reviewed_id")]
    pub target_user_id: UserId,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String,
}

/// Body of `POST /api/users/{id}/reviews/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewCreate {
    pub rating: u8,
    pub comment: Option<String>,
}
