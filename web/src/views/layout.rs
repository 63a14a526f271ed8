use dioxus::prelude::*;
use tracing::info;
use types::{Page, Shell};
use ui::{SidebarItem, icons};

use crate::{Route, config::config};

fn page_icon(page: Page, size: u32) -> Element {
    match page {
        Page::Dashboard => rsx! { icons::Grid { size } },
        Page::Users => rsx! { icons::Users { size } },
        Page::Widgets => rsx! { icons::List { size } },
        Page::Statistics => rsx! { icons::BarChartIcon { size } },
        Page::Settings => rsx! { icons::Cog { size } },
    }
}

#[component]
pub fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let mut shell = use_signal(|| Shell::new(route.page().unwrap_or_default()));
    let profile = &config().profile;

    let Shell { page: current, sidebar_open } = shell();
    let icon_size = if sidebar_open { 20 } else { 24 };

    rsx! {
        div { class: "app-layout",
            aside { class: if sidebar_open { "sidebar" } else { "sidebar sidebar-collapsed" },
                div { class: "sidebar-header",
                    div { class: "sidebar-avatar" }
                    if sidebar_open {
                        div { class: "sidebar-user-info",
                            h3 { class: "sidebar-user-name", "{profile.name}" }
                            p { class: "sidebar-user-role", "{profile.role}" }
                        }
                    }
                }
                nav { class: "sidebar-nav",
                    for page in Page::ALL {
                        SidebarItem {
                            key: "{page}",
                            text: page.title(),
                            active: current == page,
                            is_open: sidebar_open,
                            icon: page_icon(page, icon_size),
                            on_select: move |_| {
                                let navigates = shell.write().select(page);
                                info!(%page, navigates, "sidebar entry selected");
                                if let Some(to) = Route::for_page(page).filter(|_| navigates) {
                                    navigator().push(to);
                                }
                            },
                        }
                    }
                }
            }
            main { class: "main-content",
                header { class: "topbar",
                    div { class: "topbar-left",
                        button {
                            class: "icon-btn",
                            r#type: "button",
                            title: "Toggle sidebar",
                            onclick: move |_| shell.write().toggle_sidebar(),
                            icons::Menu {}
                        }
                        h1 { class: "topbar-title", "{current.title()}" }
                    }
                    div { class: "topbar-right",
                        button { class: "icon-btn icon-btn-round", r#type: "button", title: "Messages",
                            icons::Mail {}
                        }
                        div { class: "topbar-avatar" }
                    }
                }
                Outlet::<Route> {}
            }
        }
    }
}
