mod chart;
mod chart_config;
mod layout;
mod marks;
mod projection;
mod text_metrics;

pub use chart::SmokeChart;
pub use chart_config::{SmokeChartConfig, Y_INTERVAL_AUTO};
pub use layout::{ChartLayout, format_tick_label, y_axis_ticks};
pub use marks::{
    AxisLabelStyle, GridLineStyle, HorizontalGridLine, ValueBox, ValueBoxStyle, ValueLine,
    ValueLineStyle, XAxisLabel, YAxisLabel,
};
pub use projection::{cell_width_px, snap_to_pixel_row, value_to_row_px, x_index_to_px};
pub use text_metrics::{estimate_text_width_px, label_line_height_px};
