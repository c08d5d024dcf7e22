use api::forms::{Notice, NoticeKind};
use dioxus::prelude::*;

/// Inline message next to a form or section. Renders nothing for `None`.
#[component]
pub fn NoticeBanner(notice: Option<Notice>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };
    let kind = match notice.kind {
        NoticeKind::Success => "notice-success",
        NoticeKind::Error => "notice-error",
        NoticeKind::Info => "notice-info",
    };

    rsx! {
        div { class: "notice {kind}", "{notice.text}" }
    }
}
