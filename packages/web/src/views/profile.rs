//! Public profile with reviews, the review form and self-editing.

use api::forms::FormState;
use api::pages::profile::{
    self, LoadedProfile, ProfilePage, ReviewForm, ReviewsLoad, NOT_FOUND_TEXT, NO_REVIEWS_TEXT,
    PROFILE_SAVED, REVIEW_SENT,
};
use api::{CurrentUser, PagePolicy, UserId};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label, NoticeBanner, Textarea};
use ui::{leave_if_signed_out, use_client, use_entry, Loading, PageShell};

#[component]
pub fn Profile(id: UserId) -> Element {
    let entry = use_entry(PagePolicy::Public);

    let page = match &*entry.read() {
        Some(resolved) if !resolved.is_denied() => rsx! {
            ProfileScreen { key: "{id}", viewer: resolved.viewer().cloned(), user_id: id }
        },
        _ => rsx! {
            Loading {}
        },
    };
    page
}

#[component]
fn ProfileScreen(viewer: Option<CurrentUser>, user_id: UserId) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let load_viewer = viewer.clone();
    let mut page = use_resource(move || {
        let client = client.clone();
        let viewer = load_viewer.clone();
        async move {
            match profile::load_profile(&client, viewer.as_ref(), user_id).await {
                Ok(page) => page,
                Err(e) => {
                    leave_if_signed_out(&e, nav);
                    ProfilePage::Failed(e.to_string())
                }
            }
        }
    });

    let body = match &*page.read() {
        None => rsx! { Loading {} },
        Some(ProfilePage::NotFound) => rsx! {
            div { class: "notice notice-error", "{NOT_FOUND_TEXT}" }
        },
        Some(ProfilePage::Failed(message)) => rsx! {
            div { class: "notice notice-error", "{message}" }
        },
        Some(ProfilePage::Loaded(loaded)) => rsx! {
            ProfileDetails { user: loaded.user.clone() }
            if loaded.can_edit {
                ProfileEditForm {
                    user: loaded.user.clone(),
                    on_saved: move |_: CurrentUser| page.restart(),
                }
            }
            ReviewsSection { loaded: loaded.clone() }
        },
    };

    rsx! {
        PageShell {
            viewer: viewer.clone(),
            h1 { "Profile" }
            {body}
        }
    }
}

#[component]
fn ProfileDetails(user: CurrentUser) -> Element {
    let about = user.about.clone().unwrap_or_default();
    let tags = user.tag_line();

    rsx! {
        section {
            class: "card profile",
            div { class: "profile-field", span { class: "label", "ID: " } "{user.id}" }
            div { class: "profile-field", span { class: "label", "Email: " } "{user.email}" }
            div { class: "profile-field", span { class: "label", "Role: " } "{user.role}" }
            div { class: "profile-field", span { class: "label", "Status: " } "{user.status}" }
            if !about.is_empty() {
                div { class: "profile-field", span { class: "label", "About: " } "{about}" }
            }
            if !tags.is_empty() {
                div { class: "profile-field", span { class: "label", "Skills: " } "{tags}" }
            }
        }
    }
}

#[component]
fn ProfileEditForm(user: CurrentUser, on_saved: EventHandler<CurrentUser>) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let user_id = user.id;
    let mut about = use_signal(|| user.about.clone().unwrap_or_default());
    let mut tags = use_signal(|| user.tag_line());
    let mut form = use_signal(FormState::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !form.write().begin() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            match profile::update_profile(&client, user_id, &about(), &tags()).await {
                Ok(saved) => {
                    form.write().succeed(PROFILE_SAVED, false);
                    on_saved.call(saved);
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

            h2 { "Edit profile" }

            NoticeBanner { notice: form().notice }

            Label { "About" }
            Textarea {
                value: about(),
                disabled: form().inputs_disabled(),
                oninput: move |evt: FormEvent| about.set(evt.value()),
            }

            Label { "Skills (comma separated)" }
            Input {
                placeholder: "Rust, Axum, PostgreSQL",
                value: tags(),
                disabled: form().inputs_disabled(),
                oninput: move |evt: FormEvent| tags.set(evt.value()),
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: form().inputs_disabled(),
                if form().is_submitting() { "Saving..." } else { "Save" }
            }
        }
    }
}

#[component]
fn ReviewsSection(loaded: LoadedProfile) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let target_id = loaded.user.id;
    let mut reviews = use_signal(|| loaded.reviews.clone());
    let mut rating = use_signal(String::new);
    let mut comment = use_signal(String::new);
    let mut form = use_signal(FormState::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !form.write().begin() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            match profile::submit_review(&client, target_id, &rating(), &comment()).await {
                Ok(_) => {
                    form.write().succeed(REVIEW_SENT, true);
                    reviews.set(profile::load_reviews(&client, target_id).await);
                }
                Err(e) => {
                    if !leave_if_signed_out(&e, nav) {
                        form.write().fail(&e);
                    }
                }
            }
        });
    };

    let list = match reviews() {
        ReviewsLoad::Failed(message) => rsx! {
            div { class: "notice notice-error", "{message}" }
        },
        ReviewsLoad::Loaded(entries) if entries.is_empty() => rsx! {
            p { class: "muted", "{NO_REVIEWS_TEXT}" }
        },
        ReviewsLoad::Loaded(entries) => rsx! {
            ul {
                class: "review-list",
                for entry in entries {
                    li {
                        key: "{entry.review.id}",
                        class: "card review",
                        div { class: "stars", {entry.stars()} }
                        if let Some(text) = entry.review.comment.clone() {
                            p { "{text}" }
                        }
                        footer { class: "muted", "{entry.created_display}" }
                    }
                }
            }
        },
    };

    let notice_text = loaded.review_form.notice_text();

    rsx! {
        section {
            class: "reviews",
            h2 { "Reviews" }
            {list}

            if let Some(text) = notice_text {
                div { class: "notice notice-info", "{text}" }
            }

            if loaded.review_form == ReviewForm::Open {
                form {
                    onsubmit: handle_submit,
                    class: "form card",

                    h3 { "Leave a review" }

                    NoticeBanner { notice: form().notice }

                    Label { "Rating" }
                    select {
                        class: "input",
                        disabled: form().inputs_disabled(),
                        onchange: move |evt: FormEvent| rating.set(evt.value()),
                        option { value: "", "Choose a rating" }
                        for value in 1..=5u8 {
                            option { value: "{value}", "{value}" }
                        }
                    }

                    Label { "Comment" }
                    Textarea {
                        placeholder: "Optional",
                        value: comment(),
                        disabled: form().inputs_disabled(),
                        oninput: move |evt: FormEvent| comment.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: form().inputs_disabled(),
                        if form().is_submitting() { "Sending..." } else { "Submit review" }
                    }
                }
            }
        }
    }
}
