//! Chart Component
//!
//! Line charts drawn on an HTML5 canvas. `provide_chart_theme` installs the
//! shared theme at bootstrap; every `Chart` reads it from context.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Colors and fonts shared by every chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTheme {
    pub series_colors: Vec<&'static str>,
    pub background: &'static str,
    pub grid: &'static str,
    pub label: &'static str,
    pub font: &'static str,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            series_colors: vec![
                "#4CAF50", // Green
                "#F44336", // Red
                "#2196F3", // Blue
                "#FF9800", // Orange
            ],
            background: "#1f2937", // gray-800
            grid: "#374151",       // gray-700
            label: "#9ca3af",      // gray-400
            font: "12px sans-serif",
        }
    }
}

impl ChartTheme {
    pub fn color(&self, index: usize) -> &'static str {
        self.series_colors[index % self.series_colors.len()]
    }
}

/// Register the chart theme for the component tree
pub fn provide_chart_theme(theme: ChartTheme) {
    provide_context(theme);
}

/// One plotted value; `x` is a timestamp in ms since epoch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A named line
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
}

/// Data range covered by the axes
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

/// Pixel rectangle the data is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    /// Canvas minus the margins used for axis labels
    fn inside(width: f64, height: f64) -> Self {
        Self {
            left: 60.0,
            top: 20.0,
            width: width - 60.0 - 20.0,
            height: height - 20.0 - 40.0,
        }
    }
}

impl Bounds {
    /// Range over all points, y padded by 10%; `None` without points
    fn of(series: &[Series]) -> Option<Self> {
        let mut points = series.iter().flat_map(|s| s.points.iter());
        let first = points.next()?;

        let mut bounds = Bounds {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        for point in points {
            bounds.x_min = bounds.x_min.min(point.x);
            bounds.x_max = bounds.x_max.max(point.x);
            bounds.y_min = bounds.y_min.min(point.y);
            bounds.y_max = bounds.y_max.max(point.y);
        }

        let y_range = bounds.y_max - bounds.y_min;
        let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
        bounds.y_min -= y_padding;
        bounds.y_max += y_padding;

        // A single instant still needs some width
        if bounds.x_min == bounds.x_max {
            bounds.x_min -= 1000.0;
            bounds.x_max += 1000.0;
        }

        Some(bounds)
    }

    /// Canvas position of a point (canvas y grows downward)
    fn project(&self, point: Point, area: PlotArea) -> (f64, f64) {
        let x = area.left + (point.x - self.x_min) / (self.x_max - self.x_min) * area.width;
        let y = area.top + (self.y_max - point.y) / (self.y_max - self.y_min) * area.height;
        (x, y)
    }
}

/// Line chart component
#[component]
pub fn Chart(
    #[prop(into)] series: Signal<Vec<Series>>,
    /// Shown when no series has points
    #[prop(default = "No data yet")]
    empty_label: &'static str,
) -> impl IntoView {
    let theme = use_context::<ChartTheme>().expect("ChartTheme not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let legend_theme = theme.clone();
    create_effect(move |_| {
        let data = series.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &data, &theme, empty_label);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="300"
                class="w-full h-48 md:h-72 rounded-lg"
            />

            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {move || {
                    series.get()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, s)| {
                            let color = legend_theme.color(idx);
                            view! {
                                <div class="flex items-center space-x-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", color)
                                    />
                                    <span class="text-sm text-gray-300">{s.name}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn draw_chart(
    canvas: &HtmlCanvasElement,
    series: &[Series],
    theme: &ChartTheme,
    empty_label: &str,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = PlotArea::inside(width, height);

    ctx.set_fill_style(&theme.background.into());
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_font(theme.font);

    let bounds = match Bounds::of(series) {
        Some(bounds) => bounds,
        None => {
            ctx.set_fill_style(&theme.label.into());
            let _ = ctx.fill_text(empty_label, width / 2.0 - 40.0, height / 2.0);
            return;
        }
    };

    // Horizontal grid lines with y labels
    ctx.set_stroke_style(&theme.grid.into());
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = area.top + (i as f64 / 5.0) * area.height;
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(area.left + area.width, y);
        ctx.stroke();

        let value = bounds.y_max - (i as f64 / 5.0) * (bounds.y_max - bounds.y_min);
        ctx.set_fill_style(&theme.label.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    for (idx, s) in series.iter().enumerate() {
        if s.points.is_empty() {
            continue;
        }

        let color = theme.color(idx);
        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, point) in s.points.iter().enumerate() {
            let (x, y) = bounds.project(*point, area);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&color.into());
        for point in &s.points {
            let (x, y) = bounds.project(*point, area);
            ctx.begin_path();
            let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
            ctx.fill();
        }
    }

    // Time labels along the x axis
    ctx.set_fill_style(&theme.label.into());
    let num_labels = 4;
    for i in 0..=num_labels {
        let fraction = i as f64 / num_labels as f64;
        let timestamp = bounds.x_min + fraction * (bounds.x_max - bounds.x_min);
        let x = area.left + fraction * area.width;

        let time = chrono::DateTime::from_timestamp_millis(timestamp as i64)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_default();

        let _ = ctx.fill_text(&time, x - 25.0, height - 10.0);
    }
}
