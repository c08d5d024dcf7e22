//! Data models exchanged with the marketplace API.

mod application;
mod project;
mod review;
mod user;

pub use application::{
    Application, ApplicationCreate, ApplicationId, ApplicationStatus, ApplicationUpdate,
};
pub use project::{
    Project, ProjectCreate, ProjectId, ProjectListQuery, ProjectStats, ProjectStatus, ProjectUpdate,
};
pub use review::{Review, ReviewCreate};
pub use user::{CurrentUser, ProfileUpdate, RegisterRequest, Role, Tag, TokenResponse, UserId};
