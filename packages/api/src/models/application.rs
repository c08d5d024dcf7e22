use serde::{Deserialize, Serialize};

use super::project::ProjectId;
use super::UserId;

pub type ApplicationId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A freelancer's proposal on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub project_id: ProjectId,
    pub freelancer_id: UserId,
    pub proposal_text: String,
    pub proposed_price: f64,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body of `POST .../applications/`. New applications always start as
/// [`ApplicationStatus::Pending`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationCreate {
    pub proposal_text: String,
    pub proposed_price: f64,
    pub status: ApplicationStatus,
}

impl ApplicationCreate {
    pub fn pending(proposal_text: String, proposed_price: f64) -> Self {
        Self {
            proposal_text,
            proposed_price,
            status: ApplicationStatus::Pending,
        }
    }
}

/// Body of `PUT /api/applications/{id}`. The status is never sent, so an
/// edit cannot reset an accepted or rejected application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationUpdate {
    pub proposal_text: String,
    pub proposed_price: f64,
}
