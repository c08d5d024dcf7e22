//! This crate contains all shared UI for the workspace.

pub mod components;

mod navbar;
pub use navbar::{Loading, LogoutButton, Navbar, PageShell};

mod session;
pub use session::{leave_if_signed_out, use_client, use_config, use_entry, SessionProvider};

mod time;
pub use time::sleep_ms;
