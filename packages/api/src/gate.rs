//! # Role-gated affordances
//!
//! Pure decisions about which interactive elements a page shows. Inputs are
//! always the viewer (`None` for guests) and the entity on screen; nothing
//! here touches the network. The server remains the authority, so these rules
//! only decide what is *offered*.

use crate::models::{CurrentUser, Project, Role, UserId};

/// What a project card lets the viewer do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardActions {
    /// The owning employer: view applications, view statistics, change status.
    Manage,
    /// A freelancer without an application on this open project.
    Apply,
    /// A freelancer who already applied to this open project.
    EditApplication,
    /// Read-only link to an open project.
    View,
    /// Nothing to offer.
    None,
}

/// Projects a viewer gets to see in the list.
///
/// Employers see only their own projects, freelancers see open projects,
/// everyone else sees everything the server returned.
pub fn visible_projects(viewer: Option<&CurrentUser>, projects: Vec<Project>) -> Vec<Project> {
    match viewer {
        Some(user) if user.role == Role::Employer => projects
            .into_iter()
            .filter(|p| p.is_owned_by(user.id))
            .collect(),
        Some(user) if user.role == Role::Freelancer => {
            projects.into_iter().filter(Project::is_open).collect()
        }
        _ => projects,
    }
}

/// Whether a card needs the "does the viewer already have an application"
/// lookup before its actions are known.
pub fn needs_application_probe(viewer: Option<&CurrentUser>, project: &Project) -> bool {
    matches!(viewer, Some(user) if user.is_freelancer()) && project.is_open()
}

pub fn card_actions(viewer: Option<&CurrentUser>, project: &Project, has_application: bool) -> CardActions {
    match viewer {
        Some(user) if user.is_employer() => {
            if project.is_owned_by(user.id) {
                CardActions::Manage
            } else {
                CardActions::None
            }
        }
        Some(user) if user.is_freelancer() => match (project.is_open(), has_application) {
            (true, true) => CardActions::EditApplication,
            (true, false) => CardActions::Apply,
            (false, _) => CardActions::None,
        },
        _ if project.is_open() => CardActions::View,
        _ => CardActions::None,
    }
}

pub fn can_create_projects(viewer: Option<&CurrentUser>) -> bool {
    matches!(viewer, Some(user) if user.is_employer())
}

/// The owning employer gets a link to the applications review page.
pub fn can_view_applications(viewer: Option<&CurrentUser>, project: &Project) -> bool {
    matches!(viewer, Some(user) if user.is_employer() && project.is_owned_by(user.id))
}

/// First-stage decision for the application form on a project page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationGate {
    /// The project no longer takes applications.
    Closed,
    /// The viewer is not a freelancer.
    Hidden,
    /// Ask the server whether the viewer already applied.
    Probe,
}

pub fn application_gate(viewer: Option<&CurrentUser>, project: &Project) -> ApplicationGate {
    if !project.is_open() {
        return ApplicationGate::Closed;
    }
    match viewer {
        Some(user) if user.is_freelancer() => ApplicationGate::Probe,
        _ => ApplicationGate::Hidden,
    }
}

/// First-stage decision for the review form on a profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewGate {
    /// Guests are told to sign in.
    SignInRequired,
    /// Self-views and same-role pairs never review each other.
    Hidden,
    /// Ask the server whether the viewer already left a review.
    Probe,
}

pub fn review_gate(viewer: Option<&CurrentUser>, target: &CurrentUser) -> ReviewGate {
    match viewer {
        None => ReviewGate::SignInRequired,
        Some(user) if user.id == target.id || user.role == target.role => ReviewGate::Hidden,
        Some(_) => ReviewGate::Probe,
    }
}

/// Only a freelancer may edit, and only their own profile.
pub fn can_edit_profile(viewer: Option<&CurrentUser>, profile_id: UserId) -> bool {
    matches!(viewer, Some(user) if user.is_freelancer() && user.id == profile_id)
}
