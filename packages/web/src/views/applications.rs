//! Applications review for the owning employer.

use api::pages::applications::{self, ApplicationCard, ApplicationsView, EMPTY_TEXT};
use api::{paths, CurrentUser, Entry, PagePolicy, ProjectId};
use dioxus::prelude::*;
use ui::{leave_if_signed_out, use_client, use_entry, Loading, PageShell};

#[component]
pub fn Applications(id: ProjectId) -> Element {
    let entry = use_entry(PagePolicy::Protected);

    let page = match &*entry.read() {
        Some(Entry::Member(user)) => rsx! {
            ApplicationsPage { key: "{id}", viewer: user.clone(), project_id: id }
        },
        _ => rsx! {
            Loading {}
        },
    };
    page
}

#[component]
fn ApplicationsPage(viewer: CurrentUser, project_id: ProjectId) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let view = use_resource(move || {
        let client = client.clone();
        async move {
            match applications::load_applications(&client, project_id).await {
                Ok(view) => view,
                Err(e) => {
                    leave_if_signed_out(&e, nav);
                    ApplicationsView::Failed(e.to_string())
                }
            }
        }
    });

    let body = match &*view.read() {
        None => rsx! { Loading {} },
        Some(ApplicationsView::Denied(message))
        | Some(ApplicationsView::NotFound(message))
        | Some(ApplicationsView::Failed(message)) => rsx! {
            div { class: "notice notice-error", "{message}" }
        },
        Some(ApplicationsView::Empty) => rsx! {
            div { class: "notice notice-info", "{EMPTY_TEXT}" }
        },
        Some(ApplicationsView::Cards(cards)) => rsx! {
            div {
                class: "application-list",
                for card in cards.iter() {
                    ApplicationCardView { key: "{card.application.id}", card: card.clone() }
                }
            }
        },
    };

    rsx! {
        PageShell {
            viewer: Some(viewer.clone()),
            h1 { "Applications" }
            Link { to: paths::project(project_id), "Back to project" }
            {body}
        }
    }
}

#[component]
fn ApplicationCardView(card: ApplicationCard) -> Element {
    let heading = card.heading();
    let price = card.price_display();
    let status = card.application.status.as_str();
    let created = card.created_display.clone().unwrap_or_default();
    let freelancer_id = card.application.freelancer_id;

    rsx! {
        article {
            class: "card application-card",
            header {
                Link { to: paths::profile(freelancer_id), "{heading}" }
            }
            p { span { class: "label", "Proposal: " } "{card.application.proposal_text}" }
            p { span { class: "label", "Price: " } "{price}" }
            p { span { class: "label", "Status: " } "{status}" }
            footer { class: "muted", "Created: {created}" }
        }
    }
}
