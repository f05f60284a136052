use dioxus::prelude::*;
use ui::{
    AppShell, DashboardPage, DirectoryPage, LandingPage, LoginPage, MapPage, PollsPage, RegisterPage,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "iTribe" }

        AppShell {
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/register")]
    Register {},
    #[route("/login")]
    Login {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/polls")]
    Polls {},
    #[route("/users")]
    Users {},
    #[route("/map")]
    Map {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
fn Landing() -> Element {
    rsx! { LandingPage {} }
}

#[component]
fn Register() -> Element {
    rsx! { RegisterPage {} }
}

#[component]
fn Login() -> Element {
    rsx! { LoginPage {} }
}

#[component]
fn Dashboard() -> Element {
    rsx! { DashboardPage {} }
}

#[component]
fn Polls() -> Element {
    rsx! { PollsPage {} }
}

#[component]
fn Users() -> Element {
    rsx! { DirectoryPage {} }
}

#[component]
fn Map() -> Element {
    rsx! { MapPage {} }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::warn!("No route for /{}", segments.join("/"));
    rsx! {
        main {
            class: "not-found",
            h1 { "Page not found" }
            Link { to: Route::Landing {}, "Back to iTribe" }
        }
    }
}
