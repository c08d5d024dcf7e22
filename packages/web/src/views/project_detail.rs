//! Project page with the freelancer's application form.

use api::pages::project_detail::{
    self, ApplicationForm, ProjectDetail as Detail, ProjectLoad, CLOSED_NOTICE,
};
use api::{paths, CurrentUser, PagePolicy, ProjectId};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label, NoticeBanner, Textarea};
use ui::{leave_if_signed_out, use_client, use_entry, Loading, PageShell};

#[component]
pub fn ProjectDetail(id: ProjectId) -> Element {
    let entry = use_entry(PagePolicy::Public);

    let page = match &*entry.read() {
        Some(resolved) if !resolved.is_denied() => rsx! {
            ProjectDetailPage {
                key: "{id}",
                viewer: resolved.viewer().cloned(),
                project_id: id,
            }
        },
        _ => rsx! {
            Loading {}
        },
    };
    page
}

#[component]
fn ProjectDetailPage(viewer: Option<CurrentUser>, project_id: ProjectId) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let load_viewer = viewer.clone();
    let load = use_resource(move || {
        let client = client.clone();
        let viewer = load_viewer.clone();
        async move {
            match project_detail::load_project_detail(&client, viewer.as_ref(), project_id).await {
                Ok(loaded) => loaded,
                Err(e) => {
                    leave_if_signed_out(&e, nav);
                    ProjectLoad::Failed(e.to_string())
                }
            }
        }
    });

    let body = match &*load.read() {
        None => rsx! { Loading {} },
        Some(loaded) => {
            let title = loaded.title().to_string();
            match loaded {
                ProjectLoad::Loaded(detail) => rsx! {
                    h1 { "{title}" }
                    ProjectSummary { detail: detail.clone() }
                },
                ProjectLoad::NotFound => rsx! {
                    h1 { "{title}" }
                    Link { to: paths::PROJECTS, "Back to projects" }
                },
                ProjectLoad::Failed(message) => rsx! {
                    h1 { "{title}" }
                    div { class: "notice notice-error", "{message}" }
                },
            }
        }
    };

    rsx! {
        PageShell {
            viewer: viewer.clone(),
            {body}
        }
    }
}

#[component]
fn ProjectSummary(detail: Detail) -> Element {
    let project = &detail.project;
    let project_id = project.id;
    let description = project.description.clone().unwrap_or_default();
    let budget = project.budget_display();
    let status = project.status.label();

    rsx! {
        section {
            class: "card",
            if !description.is_empty() {
                p { "{description}" }
            }
            p { strong { "Budget: " } "{budget}" }
            p { strong { "Status: " } "{status}" }
            p {
                strong { "Employer: " }
                Link { to: paths::profile(project.employer_id), "#{project.employer_id}" }
            }
            if detail.show_applications_link {
                Link {
                    class: "btn btn-secondary",
                    to: paths::project_applications(project_id),
                    "View applications"
                }
            }
        }

        {match &detail.form {
            ApplicationForm::Hidden => rsx! {},
            ApplicationForm::Closed => rsx! {
                div { class: "notice notice-info", "{CLOSED_NOTICE}" }
            },
            form => rsx! {
                ApplicationFormView { project_id: project_id, form: form.clone() }
            },
        }}
    }
}

#[component]
fn ApplicationFormView(project_id: ProjectId, form: ApplicationForm) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut mode = use_signal(|| form.clone());
    let mut proposal_text = use_signal(|| form.prefill().0);
    let mut proposed_price = use_signal(|| form.prefill().1);
    let mut state = use_signal(|| form.initial_state());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !state.write().begin() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            let current = mode();
            let result = project_detail::submit_application(
                &client,
                project_id,
                &current,
                &proposal_text(),
                &proposed_price(),
            )
            .await;
            match result {
                Ok(outcome) => {
                    state.write().succeed(outcome.message(), outcome.locks_form());
                    if let project_detail::SubmitOutcome::Updated(application) = outcome {
                        mode.set(ApplicationForm::Edit {
                            application_id: application.id,
                            proposal_text: application.proposal_text,
                            proposed_price: application.proposed_price,
                        });
                    }
                }
                Err(e) => {
                    if !leave_if_signed_out(&e, nav) {
                        state.write().fail(&e);
                    }
                }
            }
        });
    };

    let heading = match mode() {
        ApplicationForm::Edit { .. } => "Your application",
        _ => "Apply to this project",
    };
    let submit_label = mode().submit_label();

    rsx! {
        form {
            onsubmit: handle_submit,
            class: "form card",

            h2 { "{heading}" }

            NoticeBanner { notice: state().notice }

            Label { "Proposal" }
            Textarea {
                placeholder: "How would you approach this project?",
                value: proposal_text(),
                disabled: state().inputs_disabled(),
                oninput: move |evt: FormEvent| proposal_text.set(evt.value()),
            }

            Label { "Proposed price" }
            Input {
                r#type: "number",
                step: "0.01",
                value: proposed_price(),
                disabled: state().inputs_disabled(),
                oninput: move |evt: FormEvent| proposed_price.set(evt.value()),
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: state().inputs_disabled(),
                if state().is_submitting() { "Sending..." } else { "{submit_label}" }
            }
        }
    }
}
