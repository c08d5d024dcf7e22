//! Project list with search, status filter, paging and per-card actions.

use api::forms::Notice;
use api::gate::CardActions;
use api::pages::projects::{self, ProjectCard, StatusControl};
use api::{
    paths, CurrentUser, Entry, PagePolicy, Project, ProjectListQuery, ProjectStats, ProjectStatus,
};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, NoticeBanner};
use ui::{
    leave_if_signed_out, sleep_ms, use_client, use_config, use_entry, Loading, PageShell,
};

use super::project_form::ProjectForm;

#[component]
pub fn Projects() -> Element {
    let entry = use_entry(PagePolicy::Public);

    let page = match &*entry.read() {
        Some(resolved) if !resolved.is_denied() => rsx! {
            ProjectsPage { viewer: resolved.viewer().cloned() }
        },
        _ => rsx! {
            Loading {}
        },
    };
    page
}

#[component]
fn ProjectsPage(viewer: Option<CurrentUser>) -> Element {
    let client = use_client();
    let config = use_config();
    let debounce_ms = config.ui.search_debounce_ms;

    let mut query = use_signal(|| ProjectListQuery {
        limit: config.ui.page_size,
        ..ProjectListQuery::default()
    });
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| Option::<ProjectStatus>::None);
    // Bumped on every keystroke; only the latest scheduled search runs.
    let mut generation = use_signal(|| 0u64);

    let nav = use_navigator();
    let list_viewer = viewer.clone();
    let mut list = use_resource(move || {
        let client = client.clone();
        let viewer = list_viewer.clone();
        let query = query();
        async move {
            let result = projects::load_project_list(&client, viewer.as_ref(), &query).await;
            if let Err(e) = &result {
                leave_if_signed_out(e, nav);
            }
            result
        }
    });

    let mut schedule_search = move || {
        let ticket = generation() + 1;
        generation.set(ticket);
        spawn(async move {
            sleep_ms(debounce_ms).await;
            if generation() != ticket {
                return;
            }
            let next = ProjectListQuery {
                search: search(),
                status: status_filter(),
                skip: 0,
                ..query()
            };
            if next != query() {
                query.set(next);
            }
        });
    };

    rsx! {
        PageShell {
            viewer: viewer.clone(),

            h1 { "Projects" }

            div {
                class: "toolbar",
                Input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search projects",
                    value: search(),
                    oninput: move |evt: FormEvent| {
                        search.set(evt.value());
                        schedule_search();
                    },
                }
                select {
                    class: "input",
                    onchange: move |evt: FormEvent| {
                        status_filter.set(ProjectStatus::parse(&evt.value()));
                        schedule_search();
                    },
                    option { value: "", "Any status" }
                    for status in ProjectStatus::ALL {
                        option { value: status.as_str(), {status.label()} }
                    }
                }
            }

            {match &*list.read() {
                None => rsx! { Loading {} },
                Some(Err(e)) => rsx! {
                    NoticeBanner { notice: Notice::error(e.to_string()) }
                },
                Some(Ok(view)) => rsx! {
                    if view.can_create {
                        section {
                            class: "create-inline",
                            h2 { "Create a project" }
                            ProjectForm { on_created: move |_: Project| list.restart() }
                        }
                    }

                    if let Some(text) = view.empty_text() {
                        p { class: "muted", "{text}" }
                    }

                    div {
                        class: "project-list",
                        for card in view.cards.iter() {
                            ProjectCardView {
                                key: "{card.project.id}-{card.project.status}",
                                card: card.clone(),
                            }
                        }
                    }

                    div {
                        class: "pager",
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: query().skip == 0,
                            onclick: move |_| query.set(query().previous_page()),
                            "Previous"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            disabled: !view.has_more,
                            onclick: move |_| query.set(query().next_page()),
                            "Next"
                        }
                    }
                },
            }}
        }
    }
}

#[component]
fn ProjectCardView(card: ProjectCard) -> Element {
    let client = use_client();
    let nav = use_navigator();
    let project_id = card.project.id;
    let mut control = use_signal(|| StatusControl::new(card.project.status));
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut stats = use_signal(|| Option::<Result<ProjectStats, String>>::None);
    let mut stats_open = use_signal(|| false);

    let status_client = client.clone();
    let change_status = move |evt: FormEvent| {
        let Some(next) = ProjectStatus::parse(&evt.value()) else {
            return;
        };
        control.write().select(next);
        let client = status_client.clone();
        spawn(async move {
            notice.set(None);
            match projects::change_status(&client, project_id, next).await {
                Ok(stored) => control.write().confirm(stored),
                Err(e) => {
                    control.write().reject();
                    if !leave_if_signed_out(&e, nav) {
                        notice.set(Some(Notice::from(&e)));
                    }
                }
            }
        });
    };

    let toggle_stats = move |_: MouseEvent| {
        if stats_open() {
            stats_open.set(false);
            return;
        }
        stats_open.set(true);
        let client = client.clone();
        spawn(async move {
            match projects::load_stats(&client, project_id).await {
                Ok(loaded) => stats.set(Some(Ok(loaded))),
                Err(e) => {
                    if !leave_if_signed_out(&e, nav) {
                        stats.set(Some(Err(e.to_string())));
                    }
                }
            }
        });
    };

    let project = &card.project;
    let description = project.description.clone().unwrap_or_default();
    let budget = project.budget_display();
    let status_label = control().label.label();
    let selected_status = control().selected;

    rsx! {
        article {
            class: "card project-card",

            h3 { "{project.title}" }
            if description.is_empty() {
                p { class: "muted", em { "No description" } }
            } else {
                p { "{description}" }
            }
            p {
                strong { "Budget: " }
                "{budget}"
            }
            p {
                class: "muted",
                "Status: {status_label} | "
                Link { to: paths::profile(project.employer_id), "Employer #{project.employer_id}" }
            }

            NoticeBanner { notice: notice() }

            div {
                class: "card-actions",
                {match card.actions {
                    CardActions::Manage => rsx! {
                        Link {
                            class: "btn btn-secondary",
                            to: paths::project_applications(project_id),
                            "View applications"
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: toggle_stats,
                            if stats_open() { "Hide statistics" } else { "Statistics" }
                        }
                        select {
                            class: "input",
                            onchange: change_status,
                            for option_status in ProjectStatus::ALL {
                                option {
                                    value: option_status.as_str(),
                                    selected: option_status == selected_status,
                                    {option_status.label()}
                                }
                            }
                        }
                    },
                    CardActions::Apply => rsx! {
                        Link { class: "btn btn-primary", to: paths::project(project_id), "Apply" }
                    },
                    CardActions::EditApplication => rsx! {
                        Link {
                            class: "btn btn-secondary",
                            to: paths::project(project_id),
                            "Edit application"
                        }
                    },
                    CardActions::View => rsx! {
                        Link { class: "btn btn-ghost", to: paths::project(project_id), "View" }
                    },
                    CardActions::None => rsx! {},
                }}
            }

            if stats_open() {
                div {
                    class: "stats",
                    {match stats() {
                        None => rsx! { Loading {} },
                        Some(Err(message)) => rsx! {
                            NoticeBanner { notice: Notice::error(message) }
                        },
                        Some(Ok(loaded)) => rsx! {
                            dl {
                                for (label, value) in projects::stats_rows(&loaded) {
                                    dt { "{label}" }
                                    dd { "{value}" }
                                }
                            }
                        },
                    }}
                }
            }
        }
    }
}
