//! # Project detail and the application form
//!
//! The page is public. A freelancer looking at an open project gets a form
//! whose mode is settled by probing `GET .../applications/me` once:
//!
//! | Probe | Form |
//! |-------|------|
//! | 200 | [`ApplicationForm::Edit`], pre-filled, submits with `PUT` |
//! | 404 | [`ApplicationForm::Create`], submits with `POST`, locks on success |
//! | 401 | [`ApiError::Unauthenticated`], the page leaves for sign-in |
//! | anything else | [`ApplicationForm::Unavailable`], shown disabled |
//!
//! A project that is not open shows [`ApplicationForm::Closed`] to everyone.

use tracing::{info, warn};

use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use crate::forms::{validate_application, FormState, Notice};
use crate::gate::{application_gate, can_view_applications, ApplicationGate};
use crate::models::{Application, ApplicationId, CurrentUser, Project, ProjectId};

pub const NOT_FOUND_TITLE: &str = "Project not found";
pub const FAILED_TITLE: &str = "Failed to load project";
pub const CLOSED_NOTICE: &str = "This project is closed for new applications.";

#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationForm {
    /// Guests, employers and admins.
    Hidden,
    Closed,
    Create,
    Edit {
        application_id: ApplicationId,
        proposal_text: String,
        proposed_price: f64,
    },
    /// The probe failed; the form is shown disabled with this message.
    Unavailable(String),
}

impl ApplicationForm {
    /// Only a lost session is passed on; other failures disable the form.
    fn from_probe(result: Result<Option<Application>>) -> Result<Self> {
        let form = match result {
            Ok(Some(application)) => ApplicationForm::Edit {
                application_id: application.id,
                proposal_text: application.proposal_text,
                proposed_price: application.proposed_price,
            },
            Ok(None) => ApplicationForm::Create,
            Err(e) if e.requires_sign_in() => return Err(e),
            Err(e) => ApplicationForm::Unavailable(e.to_string()),
        };
        Ok(form)
    }

    pub fn is_visible(&self) -> bool {
        matches!(
            self,
            ApplicationForm::Create | ApplicationForm::Edit { .. } | ApplicationForm::Unavailable(_)
        )
    }

    /// Initial `(proposal_text, proposed_price)` input values.
    pub fn prefill(&self) -> (String, String) {
        match self {
            ApplicationForm::Edit {
                proposal_text,
                proposed_price,
                ..
            } => (proposal_text.clone(), proposed_price.to_string()),
            _ => (String::new(), String::new()),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            ApplicationForm::Edit { .. } => "Update application",
            _ => "Submit application",
        }
    }

    pub fn initial_state(&self) -> FormState {
        match self {
            ApplicationForm::Unavailable(message) => {
                FormState::locked(Some(Notice::error(message.clone())))
            }
            _ => FormState::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDetail {
    pub project: Project,
    pub show_applications_link: bool,
    pub form: ApplicationForm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectLoad {
    Loaded(ProjectDetail),
    NotFound,
    Failed(String),
}

impl ProjectLoad {
    /// Page heading.
    pub fn title(&self) -> &str {
        match self {
            ProjectLoad::Loaded(detail) => &detail.project.title,
            ProjectLoad::NotFound => NOT_FOUND_TITLE,
            ProjectLoad::Failed(_) => FAILED_TITLE,
        }
    }
}

/// Load the project and settle the form.
///
/// Every failure is folded into the returned [`ProjectLoad`] except
/// [`ApiError::Unauthenticated`], which the page resolves by leaving.
pub async fn load_project_detail(
    client: &ApiClient,
    viewer: Option<&CurrentUser>,
    project_id: ProjectId,
) -> Result<ProjectLoad> {
    let project = match client.project(project_id).await {
        Ok(project) => project,
        Err(e) if e.is_not_found() => return Ok(ProjectLoad::NotFound),
        Err(e) => {
            warn!(project_id, error = %e, "Failed to load project");
            return Ok(ProjectLoad::Failed(e.to_string()));
        }
    };

    let form = match application_gate(viewer, &project) {
        ApplicationGate::Closed => ApplicationForm::Closed,
        ApplicationGate::Hidden => ApplicationForm::Hidden,
        ApplicationGate::Probe => {
            ApplicationForm::from_probe(client.my_application(project_id).await)?
        }
    };

    Ok(ProjectLoad::Loaded(ProjectDetail {
        show_applications_link: can_view_applications(viewer, &project),
        project,
        form,
    }))
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(Application),
    Updated(Application),
}

impl SubmitOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SubmitOutcome::Created(_) => "Application submitted!",
            SubmitOutcome::Updated(_) => "Application updated!",
        }
    }

    /// A new application locks the form; an edit leaves it open.
    pub fn locks_form(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }
}

/// Validate and send the application form in its current mode.
///
/// `Create` posts a new pending application, `Edit` puts the new text and
/// price (status is never sent). Other modes refuse without a request.
pub async fn submit_application(
    client: &ApiClient,
    project_id: ProjectId,
    form: &ApplicationForm,
    proposal_text: &str,
    proposed_price: &str,
) -> Result<SubmitOutcome> {
    let draft = validate_application(proposal_text, proposed_price)?;
    match form {
        ApplicationForm::Create => {
            let application = client
                .create_application(project_id, &draft.into_create())
                .await?;
            info!(project_id, application_id = application.id, "Application created");
            Ok(SubmitOutcome::Created(application))
        }
        ApplicationForm::Edit { application_id, .. } => {
            let application = client
                .update_application(*application_id, &draft.into_update())
                .await?;
            info!(project_id, application_id = application.id, "Application updated");
            Ok(SubmitOutcome::Updated(application))
        }
        _ => Err(ApiError::invalid("Applications cannot be submitted for this project.")),
    }
}
