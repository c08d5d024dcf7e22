use api::pages::create_project::{create_access, CreateAccess, CREATED, EMPLOYERS_ONLY};
use api::pages::REDIRECT_DELAY_MS;
use api::{paths, CurrentUser, Entry, PagePolicy, Project};
use dioxus::prelude::*;
use ui::{sleep_ms, use_entry, Loading, PageShell};

use super::project_form::ProjectForm;

#[component]
pub fn CreateProject() -> Element {
    let entry = use_entry(PagePolicy::Protected);

    let page = match &*entry.read() {
        Some(Entry::Member(user)) => rsx! {
            CreateProjectPage { viewer: user.clone() }
        },
        _ => rsx! {
            Loading {}
        },
    };
    page
}

#[component]
fn CreateProjectPage(viewer: CurrentUser) -> Element {
    let nav = use_navigator();
    let access = create_access(&viewer);

    let on_created = move |_: Project| {
        spawn(async move {
            sleep_ms(REDIRECT_DELAY_MS).await;
            nav.push(paths::PROJECTS);
        });
    };

    rsx! {
        PageShell {
            viewer: Some(viewer.clone()),
            h1 { "New project" }
            {match access {
                CreateAccess::Allowed => rsx! {
                    ProjectForm { success_text: CREATED.to_string(), on_created: on_created }
                },
                CreateAccess::EmployersOnly => rsx! {
                    div { class: "notice notice-info", "{EMPLOYERS_ONLY}" }
                },
            }}
        }
    }
}
