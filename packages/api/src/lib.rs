//! # API crate: typed client and page logic for the marketplace
//!
//! Everything the front end decides lives here, free of any UI types, so it
//! can be exercised natively against a mock server. The `ui` crate only
//! renders what these modules return.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `reqwest` plumbing, bearer policy, error-body interpretation |
//! | [`session`] | [`Session`] token context and the [`ApiClient::enter`] guard |
//! | `endpoints` | One typed method per REST endpoint, as `impl ApiClient` blocks |
//! | [`models`] | Wire types: users, projects, applications, reviews |
//! | [`gate`] | Role-gated affordances, pure functions of viewer and entity |
//! | [`forms`] | Form submission protocol and local validation |
//! | [`enrich`] | Bounded, order-preserving per-item lookups |
//! | [`pages`] | One controller per page, producing view models |
//! | [`paths`] | Client route paths |
//! | [`format`] | Timestamp and money display |
//!
//! ## Page lifecycle
//!
//! 1. [`ApiClient::enter`] resolves the viewer ([`Entry`]).
//! 2. A controller in [`pages`] fetches data and applies [`gate`].
//! 3. User actions go through a [`forms::FormState`] and exactly one request.

pub mod client;
mod endpoints;
pub mod enrich;
pub mod error;
pub mod format;
pub mod forms;
pub mod gate;
pub mod models;
pub mod pages;
pub mod paths;
pub mod session;

pub use client::{error_message, ApiClient};
pub use error::{ApiError, Result};
pub use models::*;
pub use session::{Entry, PagePolicy, Session};
