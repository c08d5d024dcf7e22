use api::{paths, CurrentUser};
use dioxus::prelude::*;

use crate::session::use_client;

/// Top bar with links for the signed-in viewer, or a sign-in link.
#[component]
pub fn Navbar(viewer: Option<CurrentUser>) -> Element {
    rsx! {
        nav {
            class: "navbar",
            Link { class: "navbar-brand", to: paths::PROJECTS, "Marketplace" }
            div {
                class: "navbar-links",
                Link { to: paths::PROJECTS, "Projects" }
                if let Some(user) = viewer {
                    if user.is_employer() {
                        Link { to: paths::NEW_PROJECT, "New project" }
                    }
                    Link { to: paths::profile(user.id), "{user.email}" }
                    LogoutButton {}
                } else {
                    Link { to: paths::ENTRY, "Sign in" }
                    Link { to: paths::REGISTER, "Register" }
                }
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let client = use_client();
    let nav = use_navigator();

    let onclick = move |_: MouseEvent| {
        client.logout();
        nav.replace(paths::ENTRY);
    };

    rsx! {
        button {
            class: "btn btn-ghost {class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Navbar plus the main content column.
#[component]
pub fn PageShell(viewer: Option<CurrentUser>, children: Element) -> Element {
    rsx! {
        Navbar { viewer: viewer }
        main { class: "page", {children} }
    }
}

#[component]
pub fn Loading() -> Element {
    rsx! {
        p { class: "loading", "Loading..." }
    }
}
