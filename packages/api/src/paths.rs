//! Client-side route paths.
//!
//! The router in `web` declares the same shapes; controllers return these
//! paths when a page has to navigate somewhere else.

use crate::models::{ProjectId, UserId};

/// The login page, where denied visitors are sent.
pub const ENTRY: &str = "/";
pub const REGISTER: &str = "/register";
pub const PROJECTS: &str = "/projects";
pub const NEW_PROJECT: &str = "/projects/new";

pub fn project(id: ProjectId) -> String {
    format!("/projects/{id}")
}

pub fn project_applications(id: ProjectId) -> String {
    format!("/projects/{id}/applications")
}

pub fn profile(id: UserId) -> String {
    format!("/users/{id}/profile")
}
