//! Chart Components
//!
//! A canvas line chart and the panel that keeps it sized to its host.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use agriboard::resize::{force_resize, observe, BridgeOptions, ChartHandle, ResizeOptions};

use crate::state::DashboardState;
use crate::web::{PanelElement, WebHost};

/// Chart colors for different series
pub const SERIES_COLORS: [&str; 6] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

/// One line of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: &'static str,
    /// `(epoch ms, value)` in time order
    pub points: Vec<(i64, f64)>,
}

impl Series {
    pub fn new(label: impl Into<String>, color: &'static str, points: Vec<(i64, f64)>) -> Self {
        Self {
            label: label.into(),
            color,
            points,
        }
    }
}

/// Line chart drawn onto a canvas; the canvas buffer always matches the last
/// size it was told.
pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    series: RefCell<Vec<Series>>,
}

impl CanvasChart {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self {
            canvas,
            series: RefCell::new(Vec::new()),
        }
    }

    pub fn set_series(&self, series: Vec<Series>) {
        *self.series.borrow_mut() = series;
        self.redraw();
    }

    fn redraw(&self) {
        draw_chart(&self.canvas, &self.series.borrow());
    }
}

impl ChartHandle for CanvasChart {
    // Canvas redraws are immediate, so `animation` has nothing to switch off.
    fn resize(&self, options: ResizeOptions) {
        self.canvas.set_width(options.width);
        self.canvas.set_height(options.height);
        self.redraw();
    }
}

/// Dashboard panel hosting one chart.
///
/// The chart is created when the host and canvas mount, resized through the
/// bridge whenever the host's box changes, and released on cleanup.
#[component]
pub fn ChartPanel(
    #[prop(into)]
    title: String,
    #[prop(into)]
    series: Signal<Vec<Series>>,
) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let options = BridgeOptions::from(&state.resize);

    let host_ref = create_node_ref::<html::Div>();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let chart = store_value::<Option<Rc<CanvasChart>>>(None);

    // Mount (or re-mount) the chart against its host
    create_effect(move |_| {
        let (Some(host), Some(canvas)) = (host_ref.get(), canvas_ref.get()) else {
            return;
        };

        let element = PanelElement::new((*host).clone());
        let mounted = Rc::new(CanvasChart::new((*canvas).clone()));
        mounted.set_series(series.get_untracked());
        force_resize(Some(&*mounted), Some(&element));
        chart.set_value(Some(mounted));

        let target = element.clone();
        let subscription = observe(
            &WebHost,
            &element,
            move |_| {
                let current = chart.try_with_value(|c| c.clone()).flatten();
                force_resize(current.as_deref(), Some(&target));
            },
            options,
        );

        on_cleanup(move || {
            subscription.unsubscribe();
            let _ = chart.try_set_value(None);
        });
    });

    // Redraw when the data changes
    create_effect(move |_| {
        let data = series.get();
        chart.with_value(|current| {
            if let Some(current) = current {
                current.set_series(data);
            }
        });
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-4 flex flex-col min-w-0">
            <h2 class="text-lg font-semibold mb-3">{title}</h2>
            <div node_ref=host_ref class="relative flex-1 h-64 md:h-80 min-w-0">
                <canvas node_ref=canvas_ref class="absolute inset-0 w-full h-full rounded-lg" />
            </div>
            <ChartLegend series=series />
        </section>
    }
}

/// Chart legend showing series colors
#[component]
fn ChartLegend(series: Signal<Vec<Series>>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-3">
            {move || {
                series.get()
                    .into_iter()
                    .map(|s| {
                        view! {
                            <div class="flex items-center space-x-2">
                                <div
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", s.color)
                                />
                                <span class="text-sm text-gray-300">{s.label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// Time span covered by all series, or `None` when there are no points
fn time_bounds(series: &[Series]) -> Option<(i64, i64)> {
    let mut points = series.iter().flat_map(|s| s.points.iter().map(|p| p.0));
    let first = points.next()?;
    Some(points.fold((first, first), |(lo, hi), ts| (lo.min(ts), hi.max(ts))))
}

/// Padded y range across all series
fn value_bounds(series: &[Series]) -> (f64, f64) {
    let (mut min, mut max) = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.1))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }

    let range = max - min;
    let padding = if range > 0.0 { range * 0.1 } else { 1.0 };
    min -= padding;
    max += padding;
    (min, max)
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, series: &[Series]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 56.0;
    let margin_right = 16.0;
    let margin_top = 16.0;
    let margin_bottom = 32.0;

    let chart_width = (width - margin_left - margin_right).max(1.0);
    let chart_height = (height - margin_top - margin_bottom).max(1.0);

    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let Some((start, end)) = time_bounds(series) else {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 24.0, height / 2.0);
        return;
    };
    let span = ((end - start) as f64).max(1.0);
    let (y_min, y_max) = value_bounds(series);

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("11px sans-serif");
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 4.0) * (y_max - y_min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format!("{:.1}", value), 4.0, y + 4.0);
    }

    for s in series {
        ctx.set_stroke_style(&s.color.into());
        ctx.set_line_width(1.5);
        ctx.begin_path();

        for (i, (ts, value)) in s.points.iter().enumerate() {
            let x = margin_left + ((ts - start) as f64 / span) * chart_width;
            let y = margin_top + ((y_max - value) / (y_max - y_min)) * chart_height;
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }

    // X-axis labels
    ctx.set_fill_style(&"#9ca3af".into());
    let labels = if chart_width < 240.0 { 2 } else { 4 };
    for i in 0..=labels {
        let ts = start + (i as i64 * (end - start) / labels as i64);
        let x = margin_left + (i as f64 / labels as f64) * chart_width;
        let label = chrono::DateTime::from_timestamp_millis(ts)
            .map(|dt| dt.format("%m/%d %H:%M").to_string())
            .unwrap_or_default();
        let _ = ctx.fill_text(&label, x - 28.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: Vec<(i64, f64)>) -> Series {
        Series::new("test", SERIES_COLORS[0], points)
    }

    #[test]
    fn test_time_bounds_spans_all_series() {
        let data = vec![series(vec![(10, 1.0), (20, 2.0)]), series(vec![(5, 0.0), (15, 3.0)])];
        assert_eq!(time_bounds(&data), Some((5, 20)));
        assert_eq!(time_bounds(&[series(Vec::new())]), None);
    }

    #[test]
    fn test_value_bounds_pads_range() {
        let data = vec![series(vec![(0, 10.0), (1, 20.0)])];
        assert_eq!(value_bounds(&data), (9.0, 21.0));
    }

    #[test]
    fn test_value_bounds_flat_and_empty() {
        assert_eq!(value_bounds(&[series(vec![(0, 5.0), (1, 5.0)])]), (4.0, 6.0));
        assert_eq!(value_bounds(&[]), (0.0, 1.0));
    }
}
