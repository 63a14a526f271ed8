use dioxus::prelude::*;
use types::ColorScheme;

/// A labelled on/off switch. `on_change` receives the requested new value.
#[component]
pub fn SettingToggle(
    #[props(into)] title: String,
    #[props(into)] description: String,
    enabled: bool,
    on_change: EventHandler<bool>,
    icon: Element,
) -> Element {
    rsx! {
        div { class: "setting-row",
            div { class: "setting-info",
                div { class: "setting-icon", {icon} }
                div {
                    h3 { class: "setting-title", "{title}" }
                    p { class: "setting-desc", "{description}" }
                }
            }
            button {
                r#type: "button",
                role: "switch",
                aria_checked: "{enabled}",
                class: if enabled { "switch switch-on" } else { "switch" },
                onclick: move |_| on_change.call(!enabled),
                span { class: "switch-knob", aria_hidden: "true" }
            }
        }
    }
}

#[component]
pub fn ColorSchemeOption(scheme: ColorScheme, selected: bool, on_select: EventHandler<ColorScheme>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: if selected { "scheme-option selected" } else { "scheme-option" },
            onclick: move |_| on_select.call(scheme),
            div { class: "scheme-swatches",
                for (i, color) in scheme.swatches().into_iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "scheme-swatch",
                        style: "background-color: {color}",
                    }
                }
            }
            span { class: "scheme-name", "{scheme.name()}" }
        }
    }
}

/// One sidebar entry. The label is hidden while the sidebar is collapsed.
#[component]
pub fn SidebarItem(
    #[props(into)] text: String,
    active: bool,
    is_open: bool,
    on_select: EventHandler<()>,
    icon: Element,
) -> Element {
    let mut class = String::from("sidebar-item");
    if active {
        class.push_str(" active");
    }
    if !is_open {
        class.push_str(" collapsed");
    }

    rsx! {
        button {
            r#type: "button",
            class,
            title: "{text}",
            onclick: move |_| on_select.call(()),
            div { class: "sidebar-item-icon", {icon} }
            if is_open {
                span { "{text}" }
            }
        }
    }
}
