use tracing::info;

use crate::client::ApiClient;
use crate::error::Result;
use crate::forms::validate_project;
use crate::gate::can_create_projects;
use crate::models::{CurrentUser, Project};

pub const CREATED: &str = "Project created! Redirecting...";
pub const EMPLOYERS_ONLY: &str = "Only employers can create projects.";

/// Who may use the create-project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateAccess {
    Allowed,
    /// Signed in, but not as an employer; the page shows [`EMPLOYERS_ONLY`].
    EmployersOnly,
}

pub fn create_access(viewer: &CurrentUser) -> CreateAccess {
    if can_create_projects(Some(viewer)) {
        CreateAccess::Allowed
    } else {
        CreateAccess::EmployersOnly
    }
}

/// Validate and create an open project.
pub async fn create_project(
    client: &ApiClient,
    title: &str,
    description: &str,
    budget: &str,
) -> Result<Project> {
    let body = validate_project(title, description, budget)?;
    let project = client.create_project(&body).await?;
    info!(project_id = project.id, "Project created");
    Ok(project)
}
