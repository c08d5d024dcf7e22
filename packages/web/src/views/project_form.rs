use api::forms::FormState;
use api::pages::create_project;
use api::Project;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label, NoticeBanner, Textarea};
use ui::{leave_if_signed_out, use_client};

/// Create-project form, used inline on the list and on its own page.
///
/// With `success_text` set the form locks after success and shows that text;
/// otherwise it clears its inputs and stays usable.
#[component]
pub fn ProjectForm(success_text: Option<String>, on_created: EventHandler<Project>) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut budget = use_signal(String::new);
    let mut form = use_signal(FormState::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !form.write().begin() {
            return;
        }
        let client = client.clone();
        let success_text = success_text.clone();
        spawn(async move {
            let result =
                create_project::create_project(&client, &title(), &description(), &budget()).await;
            match result {
                Ok(project) => {
                    match success_text {
                        Some(text) => form.write().succeed(text, true),
                        None => {
                            form.write()
                                .succeed(format!("Project created: {}", project.title), false);
                            title.set(String::new());
                            description.set(String::new());
                            budget.set(String::new());
                        }
                    }
                    on_created.call(project);
                }
                Err(e) => {
                    if !leave_if_signed_out(&e, nav) {
                        form.write().fail(&e);
                    }
                }
            }
        });
    };

    rsx! {
        form {
            onsubmit: handle_submit,
            class: "form card",

            NoticeBanner { notice: form().notice }

            Label { "Title" }
            Input {
                placeholder: "What needs to be done?",
                value: title(),
                disabled: form().inputs_disabled(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }

            Label { "Description" }
            Textarea {
                placeholder: "Details, scope, deadlines",
                value: description(),
                disabled: form().inputs_disabled(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }

            Label { "Budget" }
            Input {
                r#type: "number",
                step: "0.01",
                placeholder: "1000",
                value: budget(),
                disabled: form().inputs_disabled(),
                oninput: move |evt: FormEvent| budget.set(evt.value()),
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: form().inputs_disabled(),
                if form().is_submitting() { "Creating..." } else { "Create project" }
            }
        }
    }
}
