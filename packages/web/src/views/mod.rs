mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod projects;
pub use projects::Projects;

mod project_form;

mod create_project;
pub use create_project::CreateProject;

mod project_detail;
pub use project_detail::ProjectDetail;

mod applications;
pub use applications::Applications;

mod profile;
pub use profile::Profile;

mod not_found;
pub use not_found::PageNotFound;
