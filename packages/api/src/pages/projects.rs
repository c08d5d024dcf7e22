//! # Project list
//!
//! The list is public. What each card offers depends on the viewer (see
//! [`crate::gate::card_actions`]); for freelancers every open project needs a
//! "have I applied" probe first, run through [`enrich_bounded`].

use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::enrich::{enrich_bounded, ENRICH_CONCURRENCY};
use crate::error::Result;
use crate::format;
use crate::gate::{
    can_create_projects, card_actions, needs_application_probe, visible_projects, CardActions,
};
use crate::models::{
    CurrentUser, Project, ProjectId, ProjectListQuery, ProjectStats, ProjectStatus, ProjectUpdate,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub project: Project,
    pub actions: CardActions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectListView {
    pub cards: Vec<ProjectCard>,
    /// Employers get the inline create form and the "new project" link.
    pub can_create: bool,
    /// The server returned a full page, so there may be another one.
    pub has_more: bool,
}

impl ProjectListView {
    pub fn empty_text(&self) -> Option<&'static str> {
        if !self.cards.is_empty() {
            None
        } else if self.can_create {
            Some("You have not created any projects yet.")
        } else {
            Some("No projects found.")
        }
    }
}

/// Status selector on a managed card.
///
/// The label only ever shows a status the server confirmed. A rejected
/// update snaps the selector back to that status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusControl {
    pub label: ProjectStatus,
    pub selected: ProjectStatus,
}

impl StatusControl {
    pub fn new(status: ProjectStatus) -> Self {
        Self {
            label: status,
            selected: status,
        }
    }

    pub fn select(&mut self, status: ProjectStatus) {
        self.selected = status;
    }

    pub fn confirm(&mut self, stored: ProjectStatus) {
        self.label = stored;
        self.selected = stored;
    }

    pub fn reject(&mut self) {
        self.selected = self.label;
    }
}

/// Fetch one page of projects and work out every card's actions.
///
/// A failed probe only affects its own card, which then offers "apply". A
/// lost session fails the whole list so the page can leave for sign-in.
pub async fn load_project_list(
    client: &ApiClient,
    viewer: Option<&CurrentUser>,
    query: &ProjectListQuery,
) -> Result<ProjectListView> {
    let projects = client.projects(query).await?;
    let has_more = projects.len() as u32 >= query.limit;
    let projects = visible_projects(viewer, projects);
    debug!(count = projects.len(), "Projects visible to viewer");

    let enriched = enrich_bounded(projects, ENRICH_CONCURRENCY, |project| {
        let project_id = project.id;
        let probe = needs_application_probe(viewer, project);
        async move {
            if !probe {
                return Ok(false);
            }
            match client.my_application(project_id).await {
                Ok(found) => Ok(found.is_some()),
                Err(e) if e.requires_sign_in() => Err(e),
                Err(e) => {
                    warn!(project_id, error = %e, "Application probe failed");
                    Ok(false)
                }
            }
        }
    })
    .await;

    let mut cards = Vec::with_capacity(enriched.len());
    for (project, has_application) in enriched {
        let has_application = has_application?;
        cards.push(ProjectCard {
            actions: card_actions(viewer, &project, has_application),
            project,
        });
    }

    Ok(ProjectListView {
        cards,
        can_create: can_create_projects(viewer),
        has_more,
    })
}

/// Send exactly one status update and return the status the server stored.
pub async fn change_status(
    client: &ApiClient,
    project_id: ProjectId,
    status: ProjectStatus,
) -> Result<ProjectStatus> {
    let project = client
        .update_project(project_id, &ProjectUpdate::status(status))
        .await?;
    info!(project_id, status = %project.status, "Project status changed");
    Ok(project.status)
}

pub async fn load_stats(client: &ApiClient, project_id: ProjectId) -> Result<ProjectStats> {
    client.project_stats(project_id).await
}

/// Label/value rows for the statistics panel. Missing figures are skipped.
pub fn stats_rows(stats: &ProjectStats) -> Vec<(&'static str, String)> {
    let counts = [
        ("Applications", stats.applications_count),
        ("Pending", stats.pending_count),
        ("Accepted", stats.accepted_count),
        ("Rejected", stats.rejected_count),
    ];
    let mut rows: Vec<(&'static str, String)> = counts
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v.to_string())))
        .collect();
    if let Some(price) = stats.average_price {
        rows.push(("Average price", format::amount(price)));
    }
    rows
}
