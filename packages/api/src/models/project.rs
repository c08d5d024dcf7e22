use serde::{Deserialize, Serialize};

use super::UserId;

pub type ProjectId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Open,
    InProgress,
    Closed,
}

impl ProjectStatus {
    /// Every status an employer may pick. No ordering between them is
    /// enforced on the client; the server decides which transitions it accepts.
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Open,
        ProjectStatus::InProgress,
        ProjectStatus::Closed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Open => "open",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::Closed => "closed",
        }
    }

    pub fn parse(value: &str) -> Option<ProjectStatus> {
        Self::ALL.into_iter().find(|s| s.as_str() == value.trim())
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Open => "Open",
            ProjectStatus::InProgress => "In progress",
            ProjectStatus::Closed => "Closed",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub budget: f64,
    pub status: ProjectStatus,
    pub employer_id: UserId,
}

impl Project {
    pub fn is_open(&self) -> bool {
        self.status == ProjectStatus::Open
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.employer_id == user_id
    }

    /// Budget with two decimals, as shown on cards.
    pub fn budget_display(&self) -> String {
        format!("{:.2}", self.budget)
    }
}

/// Body of `POST /api/projects/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCreate {
    pub title: String,
    pub description: String,
    pub budget: f64,
    pub status: ProjectStatus,
}

/// Body of `PUT /api/projects/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

impl ProjectUpdate {
    pub fn status(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Aggregate figures from `GET /api/projects/{id}/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectStats {
    #[serde(default)]
    pub applications_count: Option<u64>,
    #[serde(default)]
    pub pending_count: Option<u64>,
    #[serde(default)]
    pub accepted_count: Option<u64>,
    #[serde(default)]
    pub rejected_count: Option<u64>,
    #[serde(default)]
    pub average_price: Option<f64>,
}

/// Search, filter and paging parameters for `GET /api/projects/`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectListQuery {
    pub search: String,
    pub status: Option<ProjectStatus>,
    pub skip: u32,
    pub limit: u32,
}

impl Default for ProjectListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            skip: 0,
            limit: 20,
        }
    }
}

impl ProjectListQuery {
    /// Query-string pairs. Empty search and "any status" are omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs.push(("skip", self.skip.to_string()));
        pairs.push(("limit", self.limit.to_string()));
        pairs
    }

    pub fn next_page(&self) -> Self {
        Self {
            skip: self.skip + self.limit,
            ..self.clone()
        }
    }

    pub fn previous_page(&self) -> Self {
        Self {
            skip: self.skip.saturating_sub(self.limit),
            ..self.clone()
        }
    }
}
