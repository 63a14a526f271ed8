use dioxus::prelude::*;
use types::dashboard::Accent;

#[component]
pub fn StatCard(
    #[props(into)] title: String,
    #[props(into)] value: String,
    #[props(into)] subtitle: String,
    #[props(default)] accent: Accent,
) -> Element {
    rsx! {
        div { class: "card stat-card {accent.class()}",
            h3 { class: "stat-card-title", "{title}" }
            div { class: "stat-card-value", "{value}" }
            p { class: "stat-card-subtitle", "{subtitle}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness() -> Element {
        rsx! {
            StatCard { title: "Issues", value: "34", subtitle: "Closed today: 10", accent: Accent::Purple }
            StatCard { title: "Due Tasks", value: "45", subtitle: "Completed: 14" }
        }
    }

    #[test]
    fn renders_figures_and_accent() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Issues"));
        assert!(html.contains("34"));
        assert!(html.contains("Closed today: 10"));
        assert!(html.contains("accent-purple"));
        assert!(html.contains("accent-blue"));
    }
}
