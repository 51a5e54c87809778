use smoke_chart::api::{
    SmokeChart, SmokeChartConfig, estimate_text_width_px, label_line_height_px,
};
use smoke_chart::core::{Bounds, Viewport};
use smoke_chart::render::NullRenderer;

fn chart_with(config: SmokeChartConfig) -> SmokeChart<NullRenderer> {
    let mut chart = SmokeChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_bounds(Bounds::new(0.0, 0.0, 0.0, 100.0));
    chart.set_x_labels(vec!["jan".to_owned(), "feb".to_owned()]);
    chart
}

#[test]
fn layout_reserves_y_column_then_x_row() {
    let config = SmokeChartConfig::new(Viewport::new(400, 300))
        .with_y_interval(25.0)
        .with_y_legend_unit("ms");
    let layout = chart_with(config).compute_layout().expect("layout");

    // Widest tick label out of 0ms/25ms/50ms/75ms.
    let column = estimate_text_width_px("75ms", 12.0);
    let row = label_line_height_px(12.0);

    assert_eq!(layout.y_label_box.x, 0.0);
    assert_eq!(layout.y_label_box.width, column);
    assert_eq!(layout.y_label_box.height, 300.0 - row);

    assert_eq!(layout.x_label_box.x, column);
    assert_eq!(layout.x_label_box.width, 400.0 - column);
    assert_eq!(layout.x_label_box.y, 300.0 - row);
    assert_eq!(layout.x_label_box.height, row);
    assert_eq!(layout.x_label_box.bottom(), 300.0);

    assert_eq!(layout.chart_box.x, column);
    assert_eq!(layout.chart_box.y, 0.0);
    assert_eq!(layout.chart_box.width, 400.0 - column);
    assert_eq!(layout.chart_box.height, 300.0 - row);
}

#[test]
fn disabled_y_legend_leaves_no_left_column() {
    let config = SmokeChartConfig::new(Viewport::new(400, 300))
        .with_y_interval(25.0)
        .with_y_legend(false);
    let layout = chart_with(config).compute_layout().expect("layout");

    assert_eq!(layout.y_label_box.width, 0.0);
    assert_eq!(layout.chart_box.x, 0.0);
    assert_eq!(layout.chart_box.width, 400.0);
    assert_eq!(layout.x_label_box.x, 0.0);
}

#[test]
fn disabled_legends_leave_the_full_canvas_to_the_plot() {
    let config = SmokeChartConfig::new(Viewport::new(400, 300))
        .with_y_interval(25.0)
        .with_y_legend(false)
        .with_x_legend(false);
    let layout = chart_with(config).compute_layout().expect("layout");

    assert_eq!(layout.chart_box.x, 0.0);
    assert_eq!(layout.chart_box.y, 0.0);
    assert_eq!(layout.chart_box.width, 400.0);
    assert_eq!(layout.chart_box.height, 300.0);
    assert_eq!(layout.x_label_box.height, 0.0);
    assert_eq!(layout.y_label_box.width, 0.0);
}

#[test]
fn empty_x_label_list_reserves_no_bottom_row() {
    let config = SmokeChartConfig::new(Viewport::new(400, 300)).with_y_interval(25.0);
    let mut chart = chart_with(config);
    chart.set_x_labels(Vec::new());
    let layout = chart.compute_layout().expect("layout");

    assert_eq!(layout.x_label_box.height, 0.0);
    assert_eq!(layout.chart_box.height, 300.0);
}

#[test]
fn layout_is_idempotent_for_fixed_inputs() {
    let config = SmokeChartConfig::new(Viewport::new(640, 480)).with_y_legend_unit("%");
    let chart = chart_with(config);

    let first = chart.compute_layout().expect("first layout");
    let second = chart.compute_layout().expect("second layout");
    assert_eq!(first, second);
}
