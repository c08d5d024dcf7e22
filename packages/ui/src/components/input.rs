use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] step: Option<String>,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            r#type: r#type.clone(),
            placeholder: "{placeholder}",
            value: "{value}",
            disabled,
            step,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] class: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] disabled: bool,
    #[props(default = 4)] rows: u32,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            class: "input {class}",
            placeholder: "{placeholder}",
            value: "{value}",
            rows: "{rows}",
            disabled,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        label { class: "label {class}", {children} }
    }
}
