//! # Page controllers
//!
//! One module per page. Each controller starts from the [`crate::Entry`]
//! produced by the guard, fetches what the page needs and reduces it to a
//! plain view model the UI renders without further decisions.
//!
//! Loaders return `Result` only where [`crate::ApiError::Unauthenticated`]
//! must reach the page (it navigates to [`crate::paths::ENTRY`]); every other
//! failure is folded into the view model.

pub mod applications;
pub mod create_project;
pub mod login;
pub mod profile;
pub mod project_detail;
pub mod projects;
pub mod register;

/// Delay before the register and create-project pages navigate away after
/// success, so the notice can be read.
pub const REDIRECT_DELAY_MS: u64 = 2000;
