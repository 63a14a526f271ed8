use dioxus::prelude::*;
use types::dashboard::{SCHEDULE_PERIODS, ScheduleEntry};

#[component]
pub fn ScheduleItem(#[props(into)] time: String, #[props(into)] title: String, on_options: EventHandler<()>) -> Element {
    rsx! {
        div { class: "schedule-item",
            div { class: "schedule-time", "{time}" }
            div { class: "schedule-title", "{title}" }
            button {
                r#type: "button",
                class: "schedule-options",
                onclick: move |_| on_options.call(()),
                "•••"
            }
        }
    }
}

/// Today's agenda. `on_options` receives the title of the clicked item.
#[component]
pub fn Schedule(
    entries: Vec<ScheduleEntry>,
    on_period_change: EventHandler<String>,
    on_options: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h2 { class: "card-title", "Schedule" }
                select {
                    class: "form-input form-input-sm",
                    onchange: move |e| on_period_change.call(e.value()),
                    for period in SCHEDULE_PERIODS {
                        option { key: "{period}", value: "{period}", "{period}" }
                    }
                }
            }
            div { class: "card-body schedule-list",
                for entry in entries {
                    ScheduleItem {
                        key: "{entry.title}",
                        time: entry.time_label(),
                        title: entry.title,
                        on_options: move |_| on_options.call(entry.title.to_string()),
                    }
                }
            }
        }
    }
}
