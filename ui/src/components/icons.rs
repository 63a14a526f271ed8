//! Stroke icons, 24x24 viewBox, drawn with `currentColor`.

use dioxus::prelude::*;

#[component]
fn Icon(#[props(default = 20)] size: u32, children: Element) -> Element {
    rsx! {
        svg {
            class: "icon",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {children}
        }
    }
}

/// `icon!(Name, default_size, [path data, ...])`
macro_rules! icon {
    ($name:ident, $size:literal, [$($d:literal),+ $(,)?]) => {
        #[component]
        pub fn $name(#[props(default = $size)] size: u32) -> Element {
            rsx! {
                Icon { size, $(path { d: $d })+ }
            }
        }
    };
}

// Circles are two half arcs: "M{cx - r} {cy}a{r} {r} 0 1 0 {2r} 0a{r} {r} 0 1 0-{2r} 0"
icon!(Menu, 20, ["M4 6h16M4 12h16M4 18h16"]);
icon!(Mail, 20, [
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "m22 6-10 7L2 6",
]);
icon!(Plus, 20, ["M12 5v14M5 12h14"]);
icon!(Pencil, 18, ["M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z"]);
icon!(Trash, 18, [
    "M3 6h18",
    "M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6",
    "M10 11v6M14 11v6M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2",
]);
icon!(Search, 20, ["M3 11a8 8 0 1 0 16 0a8 8 0 1 0-16 0", "m21 21-4.35-4.35"]);
icon!(Grid, 20, [
    "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
    "M3 9h18M9 21V9",
]);
icon!(Users, 20, [
    "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
    "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
    "M22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75",
]);
icon!(List, 20, ["M8 6h13M8 12h13M8 18h13M3 6h.01M3 12h.01M3 18h.01"]);
icon!(BarChartIcon, 20, ["M12 20V10M18 20V4M6 20v-4"]);
icon!(Cog, 20, [
    "M9 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
    "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-2.82 1.17V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-2.82-1.17l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 3.2 14H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.17-2.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 10 3.2V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 2.82 1.17l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 20.8 10H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z",
]);
icon!(LogOut, 20, ["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "m16 17 5-5-5-5M21 12H9"]);
icon!(Moon, 20, ["M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"]);
icon!(Eye, 20, ["M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z", "M9 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0"]);
icon!(Bell, 20, ["M18 8A6 6 0 0 0 6 8c0 7-3 9-3 9h18s-3-2-3-9", "M13.73 21a2 2 0 0 1-3.46 0"]);
icon!(Volume, 20, ["M11 5 6 9H2v6h4l5 4V5z", "M15.54 8.46a5 5 0 0 1 0 7.07M19.07 4.93a10 10 0 0 1 0 14.14"]);
icon!(Globe, 20, [
    "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
    "M2 12h20",
    "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
]);
icon!(Palette, 20, [
    "M12 6.5a1.5 1.5 0 1 0 3 0a1.5 1.5 0 1 0-3 0M16 10.5a1.5 1.5 0 1 0 3 0a1.5 1.5 0 1 0-3 0",
    "M7 7.5a1.5 1.5 0 1 0 3 0a1.5 1.5 0 1 0-3 0M5 12.5a1.5 1.5 0 1 0 3 0a1.5 1.5 0 1 0-3 0",
    "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.93 0 1.5-.67 1.5-1.5 0-.39-.15-.74-.39-1.01-.23-.26-.38-.61-.38-.99 0-.83.67-1.5 1.5-1.5H16c3.31 0 6-2.69 6-6 0-4.96-4.49-9-10-9z",
]);
icon!(Clock, 20, ["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 6v6l4 2"]);
icon!(CheckCircle, 20, ["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "m9 12 2 2 4-4"]);
icon!(AlertCircle, 20, ["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 8v4M12 16h.01"]);
icon!(XCircle, 20, ["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "m15 9-6 6M9 9l6 6"]);

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness() -> Element {
        rsx! {
            Plus {}
            Pencil {}
            Clock { size: 32 }
        }
    }

    #[test]
    fn icons_draw_paths_at_their_size() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("width=\"20\""));
        assert!(html.contains("width=\"18\""));
        assert!(html.contains("width=\"32\""));
        assert!(html.contains("M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0"));
        assert_eq!(html.matches("<path").count(), 4);
    }
}
