use ordered_float::OrderedFloat;

use crate::core::{Bounds, BoundingBox};

use super::chart_config::SmokeChartConfig;
use super::marks::{XAxisLabel, YAxisLabel};

/// The three mutually exclusive pixel regions of one draw pass.
///
/// Recomputed from scratch on every draw; for fixed configuration,
/// bounds, and labels the result is identical across calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    /// Plot area holding value boxes, trend lines, and gridlines.
    pub chart_box: BoundingBox,
    /// Left column reserved for y-axis legend text.
    pub y_label_box: BoundingBox,
    /// Bottom row reserved for x-axis legend text.
    pub x_label_box: BoundingBox,
}

impl ChartLayout {
    /// Partitions the viewport into chart, y-label, and x-label boxes.
    ///
    /// The y-legend column is measured and reserved first, so the
    /// x-legend row's width already excludes it; the row is then removed
    /// from the bottom edge of the other two regions.
    /// `effective_y_interval` must already be resolved and positive —
    /// the auto sentinel never reaches this function.
    #[must_use]
    pub fn compute(
        config: &SmokeChartConfig,
        bounds: Bounds,
        x_labels: &[String],
        effective_y_interval: f64,
    ) -> Self {
        let width = f64::from(config.viewport.width);
        let height = f64::from(config.viewport.height);

        let mut chart_box = BoundingBox::new(0.0, 0.0, width, height);
        let mut y_label_box = BoundingBox::new(0.0, 0.0, 0.0, height);
        let mut x_label_box = BoundingBox::new(0.0, height, width, 0.0);

        if config.y_legend_enabled {
            let label = YAxisLabel::new(bounds, y_label_box);
            let max_text_width = y_axis_ticks(bounds, effective_y_interval)
                .into_iter()
                .map(|tick| {
                    let text = format_tick_label(tick, &config.y_legend_unit);
                    OrderedFloat(label.measure_width(&text))
                })
                .max()
                .map_or(0.0, |max| max.0);

            y_label_box = BoundingBox::new(
                y_label_box.x,
                y_label_box.y,
                max_text_width,
                y_label_box.height,
            );
            x_label_box = BoundingBox::new(
                max_text_width,
                x_label_box.y,
                x_label_box.width - max_text_width,
                x_label_box.height,
            );
            chart_box = BoundingBox::new(
                max_text_width,
                chart_box.y,
                chart_box.width - max_text_width,
                chart_box.height,
            );
        }

        if config.x_legend_enabled {
            let label = XAxisLabel::new(bounds, x_label_box);
            let max_text_height = x_labels
                .iter()
                .map(|_| OrderedFloat(label.line_height()))
                .max()
                .map_or(0.0, |max| max.0);

            x_label_box = BoundingBox::new(
                x_label_box.x,
                x_label_box.y - max_text_height,
                x_label_box.width,
                max_text_height,
            );
            y_label_box = BoundingBox::new(
                y_label_box.x,
                y_label_box.y,
                y_label_box.width,
                y_label_box.height - max_text_height,
            );
            chart_box = BoundingBox::new(
                chart_box.x,
                chart_box.y,
                chart_box.width,
                chart_box.height - max_text_height,
            );
        }

        Self {
            chart_box,
            y_label_box,
            x_label_box,
        }
    }
}

/// Tick values walked from `y_min` (inclusive) towards `y_max`
/// (exclusive), accumulating `interval` per step.
///
/// Non-positive or non-finite intervals yield no ticks; interval
/// validation happens upstream, this guard only keeps the walk total.
#[must_use]
pub fn y_axis_ticks(bounds: Bounds, interval: f64) -> Vec<f64> {
    if !interval.is_finite() || interval <= 0.0 {
        return Vec::new();
    }

    let mut ticks = Vec::new();
    let mut tick = bounds.y_min();
    while tick < bounds.y_max() {
        ticks.push(tick);
        tick += interval;
    }
    ticks
}

/// Formats one y-axis tick as `value + unit`, collapsing the float
/// noise the accumulating tick walk produces.
#[must_use]
pub fn format_tick_label(value: f64, unit: &str) -> String {
    let rounded = value.round();
    if (value - rounded).abs() <= 1e-9 {
        return format!("{rounded:.0}{unit}");
    }
    let snapped = (value * 1e6).round() / 1e6;
    format!("{snapped}{unit}")
}

#[cfg(test)]
mod tests {
    use crate::core::Bounds;

    use super::{format_tick_label, y_axis_ticks};

    #[test]
    fn ticks_exclude_the_upper_bound() {
        let ticks = y_axis_ticks(Bounds::new(0.0, 0.0, 0.0, 100.0), 10.0);
        assert_eq!(ticks.len(), 10);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(ticks[9], 90.0);
    }

    #[test]
    fn degenerate_vertical_bounds_produce_no_ticks() {
        assert!(y_axis_ticks(Bounds::new(0.0, 0.0, 50.0, 50.0), 10.0).is_empty());
    }

    #[test]
    fn non_positive_interval_produces_no_ticks() {
        let bounds = Bounds::new(0.0, 0.0, 0.0, 100.0);
        assert!(y_axis_ticks(bounds, 0.0).is_empty());
        assert!(y_axis_ticks(bounds, -10.0).is_empty());
        assert!(y_axis_ticks(bounds, f64::NAN).is_empty());
    }

    #[test]
    fn tick_labels_append_the_unit_suffix() {
        assert_eq!(format_tick_label(10.0, "ms"), "10ms");
        assert_eq!(format_tick_label(10.5, "%"), "10.5%");
        assert_eq!(format_tick_label(30.299_999_999_999_997, ""), "30.3");
    }
}
