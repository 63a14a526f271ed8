use dioxus::prelude::*;
use tracing::{debug, info};
use types::{ColorScheme, Preference};
use ui::{ColorSchemeOption, SettingToggle, icons};

use crate::{
    Route,
    config::config,
    theme::{use_theme, use_theme_switch},
};

fn preference_icon(pref: Preference) -> Element {
    match pref {
        Preference::Notifications => rsx! { icons::Bell {} },
        Preference::SoundEffects => rsx! { icons::Volume {} },
        Preference::AutoUpdate => rsx! { icons::Globe {} },
        Preference::HighContrast => rsx! { icons::Eye {} },
        Preference::CompactMode => rsx! { icons::Palette {} },
    }
}

#[component]
pub fn Settings() -> Element {
    use_hook(|| debug!("settings mounted"));
    let mut settings = use_signal(|| types::Settings::with_color_scheme(config().default_color_scheme));
    let selected = settings.read().color_scheme;

    rsx! {
        div { class: "page page-narrow",
            div { class: "page-header",
                div {
                    h1 { class: "page-title", "Settings" }
                    p { class: "page-subtitle", "Manage your application preferences and customize your experience" }
                }
            }

            div { class: "card settings-card",
                section { class: "settings-section",
                    h2 { class: "section-header", "Appearance" }
                    DarkModeToggle {}
                    PreferenceToggle { settings, pref: Preference::HighContrast }
                    div { class: "settings-subsection",
                        h3 { class: "setting-title", "Color Scheme" }
                        div { class: "scheme-grid",
                            for scheme in ColorScheme::ALL {
                                ColorSchemeOption {
                                    key: "{scheme.key()}",
                                    scheme,
                                    selected: selected == scheme,
                                    on_select: move |scheme: ColorScheme| {
                                        settings.write().select_color_scheme(scheme);
                                        info!(scheme = scheme.key(), "color scheme selected");
                                    },
                                }
                            }
                        }
                    }
                }

                section { class: "settings-section",
                    h2 { class: "section-header", "Notifications" }
                    PreferenceToggle { settings, pref: Preference::Notifications }
                    PreferenceToggle { settings, pref: Preference::SoundEffects }
                }

                section { class: "settings-section",
                    h2 { class: "section-header", "System" }
                    PreferenceToggle { settings, pref: Preference::AutoUpdate }
                    PreferenceToggle { settings, pref: Preference::CompactMode }
                }

                section { class: "settings-section",
                    h2 { class: "section-header", "Account" }
                    button {
                        class: "btn btn-link btn-danger-text",
                        r#type: "button",
                        onclick: move |_| {
                            info!("logging out");
                            navigator().push(Route::Login {});
                        },
                        icons::LogOut {}
                        span { "Logout" }
                    }
                }
            }
        }
    }
}

/// The only control holding the theme switch.
#[component]
fn DarkModeToggle() -> Element {
    let theme = use_theme();
    let mut switch = use_theme_switch();

    rsx! {
        SettingToggle {
            title: "Dark Mode",
            description: "Use dark theme for all windows",
            enabled: theme.is_dark(),
            icon: rsx! { icons::Moon {} },
            on_change: move |_| switch.toggle(),
        }
    }
}

#[component]
fn PreferenceToggle(mut settings: Signal<types::Settings>, pref: Preference) -> Element {
    let enabled = settings.read().preferences.get(pref);

    rsx! {
        SettingToggle {
            title: pref.title(),
            description: pref.description(),
            enabled,
            icon: preference_icon(pref),
            on_change: move |enabled: bool| {
                settings.write().toggle(pref, enabled);
                info!(?pref, enabled, "preference changed");
            },
        }
    }
}
