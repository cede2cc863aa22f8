use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph};

use spellwatch_core::DashboardView;
use spellwatch_core::render::ChartSample;

const LATENCY_COLOR: Color = Color::Rgb(255, 215, 0);
const EVENTS_COLOR: Color = Color::Rgb(0, 191, 255);

pub fn draw(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let readouts = view.readouts();
    let title = format!(
        " Performance  latency {}  events/s {} ",
        readout(readouts.latency_ms, " ms"),
        readout(readouts.events_per_second, "")
    );
    let block = Block::bordered().title(title);

    let samples = view.chart_samples();
    if samples.is_empty() {
        frame.render_widget(
            Paragraph::new("Waiting for data...".dark_gray())
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let latency = points(&samples, |s| s.latency_ms);
    let events = points(&samples, |s| s.events_per_second);

    let y_max = samples
        .iter()
        .flat_map(|s| [s.latency_ms, s.events_per_second])
        .fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.2 } else { 1.0 };
    let x_max = (samples.len().saturating_sub(1) as f64).max(1.0);

    let first_label = samples.first().map(|s| s.label.clone()).unwrap_or_default();
    let last_label = samples.last().map(|s| s.label.clone()).unwrap_or_default();

    let datasets = vec![
        Dataset::default()
            .name("Latency (ms)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::new().fg(LATENCY_COLOR))
            .data(&latency),
        Dataset::default()
            .name("Events/s")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::new().fg(EVENTS_COLOR))
            .data(&events),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(vec![Line::from(first_label), Line::from(last_label)])
                .style(Style::new().dark_gray()),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(vec![Line::from("0"), Line::from(format!("{:.1}", y_max))])
                .style(Style::new().dark_gray()),
        );

    frame.render_widget(chart, area);
}

fn points(samples: &[ChartSample], value: impl Fn(&ChartSample) -> f64) -> Vec<(f64, f64)> {
    samples
        .iter()
        .enumerate()
        .map(|(i, sample)| (i as f64, value(sample)))
        .collect()
}

fn readout(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(value) => format!("{}{}", value, unit),
        None => "-".to_string(),
    }
}
