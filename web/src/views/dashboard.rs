use dioxus::prelude::*;
use tracing::{debug, info};
use types::dashboard::{
    self, MOOD_DOMAIN, TASK_PERIODS, mood_average, mood_trend, schedule, sentiment, task_distribution,
};
use ui::{BarChart, DonutChart, LineChart, Schedule, StatCard};

#[component]
pub fn Dashboard() -> Element {
    use_hook(|| debug!("dashboard mounted"));
    let mood = mood_trend();
    let average = mood_average(&mood);
    let on_period_change = move |period: String| info!(%period, "period changed");

    rsx! {
        div { class: "page",
            div { class: "stats-grid",
                for stat in dashboard::stats() {
                    StatCard {
                        key: "{stat.title}",
                        title: stat.title,
                        value: stat.value,
                        subtitle: stat.subtitle,
                        accent: stat.accent,
                    }
                }
            }

            div { class: "dashboard-row",
                div { class: "card",
                    div { class: "card-header",
                        div {
                            h2 { class: "card-title", "Employee Sentiment" }
                            p { class: "card-subtitle", "Department Overview" }
                        }
                    }
                    div { class: "card-body",
                        BarChart { data: sentiment() }
                    }
                }
                div { class: "card",
                    div { class: "card-header",
                        div {
                            h2 { class: "card-title", "Mood Trend" }
                            p { class: "card-subtitle", "6-Month Overview" }
                        }
                        span { class: "legend-item",
                            span { class: "legend-dot legend-dot-green" }
                            "Average: {average:.1}"
                        }
                    }
                    div { class: "card-body",
                        LineChart { points: mood, domain: MOOD_DOMAIN }
                    }
                }
            }

            div { class: "dashboard-row",
                div { class: "card",
                    div { class: "card-header",
                        div {
                            h2 { class: "card-title", "Task Distribution" }
                            p { class: "card-subtitle", "Overview of task status" }
                        }
                        select {
                            class: "form-input form-input-sm",
                            onchange: move |e| on_period_change(e.value()),
                            for (value, label) in TASK_PERIODS {
                                option { key: "{value}", value, "{label}" }
                            }
                        }
                    }
                    div { class: "card-body",
                        DonutChart { slices: task_distribution() }
                    }
                }
                Schedule {
                    entries: schedule(),
                    on_period_change,
                    on_options: move |title: String| info!(%title, "schedule options clicked"),
                }
            }
        }
    }
}
