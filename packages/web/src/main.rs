use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    Applications, CreateProject, Login, PageNotFound, Profile, ProjectDetail, Projects, Register,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/projects")]
    Projects {},
    #[route("/projects/new")]
    CreateProject {},
    #[route("/projects/:id")]
    ProjectDetail { id: i64 },
    #[route("/projects/:id/applications")]
    Applications { id: i64 },
    #[route("/users/:id/profile")]
    Profile { id: i64 },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
