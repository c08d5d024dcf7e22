//! Login page, the entry page of the app.

use api::forms::FormState;
use api::pages::login;
use api::paths;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label, NoticeBanner};
use ui::use_client;

#[component]
pub fn Login() -> Element {
    let client = use_client();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut form = use_signal(FormState::default);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if !form.write().begin() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            match login::login(&client, &email(), &password()).await {
                Ok(next) => {
                    form.set(FormState::default());
                    nav.push(next);
                }
                Err(e) => form.write().fail(&e),
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",

            h1 { "Sign in" }

            form {
                onsubmit: handle_login,
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
                    placeholder: "Password",
                    value: password(),
                    disabled: form().inputs_disabled(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: form().inputs_disabled(),
                    if form().is_submitting() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "muted",
                "No account yet? "
                Link { to: paths::REGISTER, "Register" }
            }
        }
    }
}
