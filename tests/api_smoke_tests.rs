use line_chart_rs::core::{DataPoint, SeriesDefinition, compute_axis_plan, partition};
use line_chart_rs::render::NullRenderer;
use line_chart_rs::telemetry::init_default_tracing;
use line_chart_rs::{DrawOptions, LineChart, LineChartConfig};

#[test]
fn chart_smoke_flow() {
    let _ = init_default_tracing();

    let points = vec![
        DataPoint::new(1_577_836_800.0, 1.5, "actual"),
        DataPoint::new(1_585_699_200.0, 2.25, "actual"),
        DataPoint::new(1_593_561_600.0, 3.0, "projected"),
        DataPoint::new(1_580_515_200.0, 1.75, "actual"),
    ];
    let series = vec![
        SeriesDefinition::new("actual", "line line__actual").with_legend_label("Actual"),
        SeriesDefinition::new("projected", "line line__projected").with_legend_label("Projected"),
    ];

    let data = partition(&points, &series);
    assert_eq!(data.len(), 2);
    let plan = compute_axis_plan(&points, 1.0).expect("plan");

    let chart = LineChart::new(
        LineChartConfig::new(points, series).with_labels("Year-over-year change", "%"),
    )
    .expect("chart init");
    let mut renderer = NullRenderer::default();
    let output = chart
        .draw(&mut renderer, DrawOptions::new(650, 300))
        .expect("draw should succeed");

    assert_eq!(output.plan, plan);
    assert_eq!(output.data, data);
    assert_eq!(renderer.last_path_count, 2);
    // Jan through Jul 2020 month starts, two labels each.
    assert!(renderer.last_text_count >= 14);
}
