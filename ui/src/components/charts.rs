//! Dashboard charts. Each one is drawn by `plotters` into an SVG string and
//! injected as raw markup; only the legends and the donut hover are Dioxus.

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::element::Pie;
use plotters::prelude::*;
use types::dashboard::{DepartmentSentiment, MoodPoint, TaskSlice, TaskStatus, percentages};

use super::icons;

type DrawResult<T> = Result<T, DrawingAreaErrorKind<std::io::Error>>;

const WIDTH: u32 = 560;
const HEIGHT: u32 = 300;

const DONUT: u32 = 240;
const RADIUS: f64 = 105.0;
const HOLE: f64 = 75.0;

const SATISFACTION: RGBColor = RGBColor(0x4F, 0x46, 0xE5);
const ENGAGEMENT: RGBColor = RGBColor(0x81, 0x8C, 0xF8);
const MOOD: RGBColor = RGBColor(0x22, 0xC5, 0x5E);
// Readable on both the light and the dark card background.
const MUTED: RGBColor = RGBColor(0x9C, 0xA3, 0xAF);
const GRID: RGBColor = RGBColor(0xE5, 0xE7, 0xEB);

/// Parse `#RRGGBB` into a plotters color.
fn rgb(hex: &str) -> RGBColor {
    let hex = hex.trim_start_matches('#');
    let channel = |at: usize| {
        hex.get(at..at + 2)
            .and_then(|c| u8::from_str_radix(c, 16).ok())
            .unwrap_or(0)
    };
    RGBColor(channel(0), channel(2), channel(4))
}

/// Halfway towards white.
fn faded(RGBColor(r, g, b): RGBColor) -> RGBColor {
    let mix = |c: u8| ((u16::from(c) + 255) / 2) as u8;
    RGBColor(mix(r), mix(g), mix(b))
}

/// Let the SVG fill its container; plotters already writes a `viewBox`.
fn fit_width(svg: String, width: u32, height: u32) -> String {
    svg.replacen(
        &format!("width=\"{width}\" height=\"{height}\""),
        "width=\"100%\" height=\"100%\" preserveAspectRatio=\"xMidYMid meet\"",
        1,
    )
}

fn or_blank(chart: &str, rendered: DrawResult<String>) -> String {
    rendered.unwrap_or_else(|e| {
        warn!("could not draw the {chart} chart: {e}");
        String::new()
    })
}

/// Category label for an x position on a `-0.5..n-0.5` axis.
fn category<'a>(names: &[&'a str], x: f64) -> &'a str {
    let i = x.round();
    if i < 0.0 {
        return "";
    }
    names.get(i as usize).copied().unwrap_or("")
}

fn render_sentiment(data: &[DepartmentSentiment]) -> DrawResult<String> {
    let names: Vec<_> = data.iter().map(|d| d.department).collect();
    let label = |x: &f64| category(&names, *x).to_string();
    let n = data.len() as f64;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        let mut chart = ChartBuilder::on(&root)
            .margin(8)
            .x_label_area_size(28)
            .y_label_area_size(36)
            .build_cartesian_2d(-0.5..n - 0.5, 0.0..100.0)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .max_light_lines(0)
            .bold_line_style(GRID)
            .x_labels(data.len())
            .y_labels(6)
            .axis_style(MUTED)
            .label_style(("sans-serif", 12, &MUTED))
            .x_label_formatter(&label)
            .y_label_formatter(&|y| format!("{y:.0}"))
            .draw()?;

        chart.draw_series(data.iter().enumerate().map(|(i, d)| {
            let x = i as f64;
            Rectangle::new([(x - 0.3, 0.0), (x, d.satisfaction)], SATISFACTION.filled())
        }))?;
        chart.draw_series(data.iter().enumerate().map(|(i, d)| {
            let x = i as f64;
            Rectangle::new([(x, 0.0), (x + 0.3, d.engagement)], ENGAGEMENT.filled())
        }))?;

        root.present()?;
    }
    Ok(fit_width(svg, WIDTH, HEIGHT))
}

fn render_mood(points: &[MoodPoint], domain: (f64, f64)) -> DrawResult<String> {
    let months: Vec<_> = points.iter().map(|p| p.month).collect();
    let label = |x: &f64| category(&months, *x).to_string();
    let n = points.len() as f64;
    let series: Vec<_> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.mood))
        .collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        let mut chart = ChartBuilder::on(&root)
            .margin(8)
            .x_label_area_size(28)
            .y_label_area_size(36)
            .build_cartesian_2d(-0.5..n - 0.5, domain.0..domain.1)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .max_light_lines(0)
            .bold_line_style(GRID)
            .x_labels(points.len())
            .y_labels(4)
            .axis_style(MUTED)
            .label_style(("sans-serif", 12, &MUTED))
            .x_label_formatter(&label)
            .y_label_formatter(&|y| format!("{y:.0}"))
            .draw()?;

        chart.draw_series(LineSeries::new(
            series.iter().copied(),
            ShapeStyle::from(&MOOD).stroke_width(2),
        ))?;
        chart.draw_series(series.iter().map(|&point| Circle::new(point, 4, MOOD.filled())))?;

        root.present()?;
    }
    Ok(fit_width(svg, WIDTH, HEIGHT))
}

fn render_donut(slices: &[TaskSlice], active: Option<usize>) -> DrawResult<String> {
    let sizes: Vec<_> = slices.iter().map(|s| s.value).collect();
    let colors: Vec<_> = slices
        .iter()
        .enumerate()
        .map(|(i, s)| match active {
            Some(a) if a != i => faded(rgb(s.color)),
            _ => rgb(s.color),
        })
        .collect();
    let labels = vec![""; slices.len()];
    let center = ((DONUT / 2) as i32, (DONUT / 2) as i32);

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (DONUT, DONUT)).into_drawing_area();
        if sizes.iter().sum::<f64>() > 0.0 {
            let mut pie = Pie::new(&center, &RADIUS, &sizes, &colors, &labels);
            pie.start_angle(-90.0);
            pie.donut_hole(HOLE);
            root.draw(&pie)?;
        }
        root.present()?;
    }
    Ok(svg)
}

/// Index of the ring slice under the pointer, `(dx, dy)` pixels from the
/// ring center. Slices run clockwise from 12 o'clock.
fn slice_at(shares: &[f64], dx: f64, dy: f64) -> Option<usize> {
    if !(HOLE..=RADIUS).contains(&dx.hypot(dy)) {
        return None;
    }
    let angle = (dy.atan2(dx).to_degrees() + 90.0).rem_euclid(360.0);
    let mut end = 0.0;
    shares.iter().position(|pct| {
        end += pct * 3.6;
        angle < end
    })
}

/// Grouped bars, satisfaction and engagement per department.
#[component]
pub fn BarChart(data: Vec<DepartmentSentiment>) -> Element {
    let svg = or_blank("sentiment", render_sentiment(&data));

    rsx! {
        div { class: "chart", dangerous_inner_html: "{svg}" }
        div { class: "chart-legend",
            span { class: "legend-item",
                span { class: "legend-dot", style: "background-color: #4F46E5" }
                "Satisfaction"
            }
            span { class: "legend-item",
                span { class: "legend-dot", style: "background-color: #818CF8" }
                "Engagement"
            }
        }
    }
}

/// Monthly mood line plotted over a fixed `domain`.
#[component]
pub fn LineChart(points: Vec<MoodPoint>, domain: (f64, f64)) -> Element {
    let svg = or_blank("mood", render_mood(&points, domain));

    rsx! {
        div { class: "chart", dangerous_inner_html: "{svg}" }
    }
}

#[component]
fn StatusIcon(status: TaskStatus) -> Element {
    match status {
        TaskStatus::InProgress => rsx! { icons::Clock {} },
        TaskStatus::Completed => rsx! { icons::CheckCircle {} },
        TaskStatus::Pending => rsx! { icons::AlertCircle {} },
        TaskStatus::Cancelled => rsx! { icons::XCircle {} },
    }
}

/// Ring chart with a legend. Hovering a slice highlights it and shows its
/// share in the middle.
#[component]
pub fn DonutChart(slices: Vec<TaskSlice>) -> Element {
    let mut active = use_signal(|| None::<usize>);
    let shares = percentages(&slices);
    let svg = or_blank("task distribution", render_donut(&slices, active()));
    let highlighted = active().and_then(|i| slices.get(i).zip(shares.get(i)));

    let hit_shares = shares.clone();
    let half = f64::from(DONUT) / 2.0;

    rsx! {
        div { class: "donut",
            div { class: "donut-ring",
                div { class: "donut-svg", dangerous_inner_html: "{svg}" }
                if let Some((slice, pct)) = highlighted {
                    div { class: "donut-center",
                        p { class: "donut-label", "{slice.name}" }
                        p { class: "donut-label-value", "{pct:.0}% of tasks" }
                    }
                }
                div {
                    class: "donut-hit",
                    onmousemove: move |e: MouseEvent| {
                        let at = e.element_coordinates();
                        let hit = slice_at(&hit_shares, at.x - half, at.y - half);
                        if *active.peek() != hit {
                            active.set(hit);
                        }
                    },
                    onmouseleave: move |_| active.set(None),
                }
            }
            div { class: "donut-legend",
                for (slice, pct) in slices.iter().zip(shares.iter()) {
                    div { key: "{slice.name}", class: "donut-legend-item",
                        span {
                            class: "legend-icon",
                            style: "color: {slice.color}; background-color: {slice.color}26",
                            StatusIcon { status: slice.status }
                        }
                        div {
                            p { class: "donut-legend-name", "{slice.name}" }
                            p { class: "text-muted text-sm", "{pct:.0}%" }
                        }
                    }
                }
            }
        }
    }
}
