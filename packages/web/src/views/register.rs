//! Registration page.

use api::forms::FormState;
use api::pages::{register, REDIRECT_DELAY_MS};
use api::paths;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label, NoticeBanner};
use ui::{sleep_ms, use_client};

#[component]
pub fn Register() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut form = use_signal(FormState::default);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if !form.write().begin() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            match register::register(&client, &email(), &password(), &role()).await {
                Ok(_) => {
                    form.write().succeed(register::REGISTERED, true);
                    sleep_ms(REDIRECT_DELAY_MS).await;
                    nav.push(paths::ENTRY);
                }
                Err(e) => form.write().fail(&e),
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h1 { "Create account" }

            form {
                onsubmit: handle_register,
                class: "form",

                NoticeBanner { notice: form().notice }

                Label { "Email" }
                Input {
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: email(),
                    disabled: form().inputs_disabled(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Label { "Password" }
                Input {
                    r#type: "password",
                    placeholder: "At least 6 characters",
                    value: password(),
                    disabled: form().inputs_disabled(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Label { "I am" }
                select {
                    class: "input",
                    value: role(),
                    disabled: form().inputs_disabled(),
                    onchange: move |evt: FormEvent| role.set(evt.value()),
                    option { value: "", "Choose a role" }
                    option { value: "employer", "an employer" }
                    option { value: "freelancer", "a freelancer" }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: form().inputs_disabled(),
                    if form().is_submitting() { "Creating account..." } else { "Register" }
                }
            }

            p {
                class: "muted",
                "Already registered? "
                Link { to: paths::ENTRY, "Sign in" }
            }
        }
    }
}
