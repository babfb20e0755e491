//! Three filter charts bound to one shared range: edit mode, edit mode off
//! with custom colors, and simple mode. A scripted drag moves the min line.
//!
//! Run with `RUST_LOG=debug cargo run --example demo` to see state changes.

use rand::Rng;
use range_filter_chart::chart_view::MouseMoveEvent;
use range_filter_chart::{
    Boundary, ChartFrame, ChartTheme, DataPoint, FilterChartConfig, FilterChartView, FilterHost,
    FilterRange,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PLOT_WIDTH: f32 = 1000.0;

fn random_walk() -> Vec<DataPoint> {
    let mut rng = rand::rng();
    let mut data = Vec::new();
    let mut amount: f64 = 1000.0;
    for i in 0..500 {
        if i % 7 == 0 {
            continue;
        }
        amount = (amount + rng.random_range(-100..=100) as f64).max(0.0);
        data.push(DataPoint::new(i as f64, amount));
    }
    data
}

fn log_frame(name: &str, frame: &ChartFrame) {
    info!(
        chart = name,
        layers = frame.layers.len(),
        selection = ?frame.selection,
        hover = ?frame.hover,
        "frame"
    );
    for line in &frame.lines {
        info!(chart = name, label = %line.label, width = line.width, cursor = ?line.cursor, "line");
    }
    for label in &frame.labels {
        info!(
            chart = name,
            bucket = ?label.bucket,
            anchor = label.anchor,
            total = %label.total_text,
            percent = %label.percent_text,
            "area label"
        );
    }
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let data = random_walk();
    let mut host = FilterHost::new(FilterRange::new(25.0, 190.0)?);

    let mut charts = vec![
        (
            "edit mode",
            FilterChartView::new(
                data.clone(),
                FilterChartConfig::default()
                    .with_axis_labels("Value to Filter By", "# of Results"),
            ),
        ),
        (
            "edit mode off, custom colors",
            FilterChartView::new(
                data.clone(),
                FilterChartConfig::default()
                    .with_edit_mode(false)
                    .with_axis_labels("Value to Filter By", "# of Results")
                    .with_theme(
                        ChartTheme::default()
                            .with_filter("blue")
                            .with_valid("blue")
                            .with_invalid("darkblue")
                            .with_label("white"),
                    ),
            ),
        ),
        (
            "simple mode",
            FilterChartView::new(
                data,
                FilterChartConfig::default()
                    .with_simple_mode(true)
                    .with_theme(ChartTheme::default().with_valid("red").with_invalid("black")),
            ),
        ),
    ];

    // Drag the min line from 25 towards 60 on every chart; only the first accepts it.
    for (name, chart) in charts.iter_mut() {
        chart.handle_mouse_down(Boundary::Min);
        for step in 0..=12 {
            let x = PLOT_WIDTH * (25.0 + step as f32 * 3.0) / 500.0;
            let update = chart.handle_mouse_move(
                MouseMoveEvent {
                    x,
                    plot_width: PLOT_WIDTH,
                },
                &host.range(),
            );
            if host.apply_opt(update) {
                info!(chart = *name, min = host.range().min, "min moved");
            }
        }
        chart.handle_mouse_up();
    }

    let range = host.range();
    info!(min = range.min, max = range.max, "final range");
    for (name, chart) in &charts {
        log_frame(name, &chart.frame(&range));
    }
    Ok(())
}
