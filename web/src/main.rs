use dioxus::prelude::*;
use tracing::Level;
use types::Page;

mod config;
mod theme;
mod views;

use views::{Dashboard, DashboardLayout, Login, NotFound, Settings, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/users")]
        Users {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Route behind a sidebar entry, if it has one.
    pub fn for_page(page: Page) -> Option<Self> {
        match page {
            Page::Dashboard => Some(Route::Dashboard {}),
            Page::Users => Some(Route::Users {}),
            Page::Settings => Some(Route::Settings {}),
            Page::Widgets | Page::Statistics => None,
        }
    }

    /// Sidebar entry to highlight when this route is showing.
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Dashboard {} => Some(Page::Dashboard),
            Route::Users {} => Some(Page::Users),
            Route::Settings {} => Some(Page::Settings),
            Route::Login {} | Route::NotFound { .. } => None,
        }
    }
}

fn main() {
    let loaded = config::load();
    let level = loaded
        .as_ref()
        .ok()
        .and_then(|c| c.log_level.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    // The platform may already have installed a subscriber
    let _ = dioxus::logger::init(level);

    match loaded {
        Ok(config) => {
            if config.log_level.parse::<Level>().is_err() {
                tracing::warn!(log_level = %config.log_level, "unknown log level, using INFO");
            }
            config::install(config);
        }
        Err(err) => {
            tracing::error!(%err, "bundled dashboard config is invalid, using defaults");
        }
    }

    #[cfg(feature = "web")]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = config::config();
    let theme = theme::use_theme_provider(config.dark_mode);

    rsx! {
        document::Title { "{config.title}" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        div { class: "app-root {theme.class()}",
            Router::<Route> {}
        }
    }
}
