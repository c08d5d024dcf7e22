//! Typed wrappers for each REST endpoint, grouped by resource.
//!
//! Every method is an inherent `async fn` on [`crate::ApiClient`].

mod applications;
mod projects;
mod reviews;
mod users;
