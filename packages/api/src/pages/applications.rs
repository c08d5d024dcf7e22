//! # Applications review
//!
//! Protected page for the owning employer. Each card is enriched with the
//! freelancer's email; when that lookup fails the card falls back to
//! `#<freelancer_id>`.

use tracing::warn;

use crate::client::ApiClient;
use crate::enrich::{enrich_bounded, ENRICH_CONCURRENCY};
use crate::error::Result;
use crate::format;
use crate::models::{Application, ProjectId};

pub const EMPTY_TEXT: &str = "No applications for this project yet.";

#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationCard {
    pub application: Application,
    pub freelancer_label: String,
    pub created_display: Option<String>,
}

impl ApplicationCard {
    pub fn heading(&self) -> String {
        format!(
            "Application #{} from {}",
            self.application.id, self.freelancer_label
        )
    }

    pub fn price_display(&self) -> String {
        format::amount(self.application.proposed_price)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationsView {
    /// 403: the viewer does not own the project.
    Denied(String),
    /// 404: no such project.
    NotFound(String),
    Failed(String),
    Empty,
    Cards(Vec<ApplicationCard>),
}

/// Load and enrich the applications of one project.
///
/// Only [`crate::ApiError::Unauthenticated`] is returned as an error; the
/// page navigates to the entry page on it.
pub async fn load_applications(
    client: &ApiClient,
    project_id: ProjectId,
) -> Result<ApplicationsView> {
    let applications = match client.project_applications(project_id).await {
        Ok(applications) => applications,
        Err(e) if e.requires_sign_in() => return Err(e),
        Err(e) if e.is_forbidden() => return Ok(ApplicationsView::Denied(e.to_string())),
        Err(e) if e.is_not_found() => return Ok(ApplicationsView::NotFound(e.to_string())),
        Err(e) => return Ok(ApplicationsView::Failed(e.to_string())),
    };

    if applications.is_empty() {
        return Ok(ApplicationsView::Empty);
    }

    let enriched = enrich_bounded(applications, ENRICH_CONCURRENCY, |application| {
        let freelancer_id = application.freelancer_id;
        async move {
            match client.user(freelancer_id).await {
                Ok(user) => user.email,
                Err(e) => {
                    warn!(freelancer_id, error = %e, "Freelancer lookup failed");
                    format!("#{freelancer_id}")
                }
            }
        }
    })
    .await;

    let cards = enriched
        .into_iter()
        .map(|(application, freelancer_label)| ApplicationCard {
            created_display: application.created_at.as_deref().map(format::timestamp),
            application,
            freelancer_label,
        })
        .collect();

    Ok(ApplicationsView::Cards(cards))
}
