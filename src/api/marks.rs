//! Mark drawers: each one owns the bounds/region pair for one draw pass
//! and maps a single value or sample into one draw primitive.

use smallvec::{SmallVec, smallvec};

use crate::core::{Bounds, BoundingBox};
use crate::render::{
    Color, GradientStop, LinePrimitive, RectFill, RectPrimitive, TextHAlign, TextPrimitive,
    TextVAlign,
};

use super::projection::{snap_to_pixel_row, value_to_row_px, x_index_to_px};
use super::text_metrics::{estimate_text_width_px, label_line_height_px};

/// Stroke style of the per-sample trend line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueLineStyle {
    pub color: Color,
    pub stroke_width: f64,
}

impl Default for ValueLineStyle {
    fn default() -> Self {
        Self {
            color: Color::rgba8(0, 200, 50, 1.0),
            stroke_width: 1.0,
        }
    }
}

/// Draws the one-cell-wide trend line of a smoke sample.
#[derive(Debug, Clone)]
pub struct ValueLine {
    bounds: Bounds,
    region: BoundingBox,
    pub style: ValueLineStyle,
}

impl ValueLine {
    #[must_use]
    pub fn new(bounds: Bounds, region: BoundingBox) -> Self {
        Self {
            bounds,
            region,
            style: ValueLineStyle::default(),
        }
    }

    /// Builds the line primitive for `y_value` across the cell at
    /// `x_index`, snapped onto the half-pixel grid.
    #[must_use]
    pub fn primitive(&self, y_value: f64, x_index: f64) -> LinePrimitive {
        let left = x_index_to_px(self.bounds, self.region, x_index);
        let right = x_index_to_px(self.bounds, self.region, x_index + 1.0);
        let row = snap_to_pixel_row(value_to_row_px(self.bounds, self.region, y_value));
        LinePrimitive::new(left, row, right, row, self.style.stroke_width, self.style.color)
    }
}

/// Stroke style of a horizontal gridline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLineStyle {
    pub color: Color,
    pub stroke_width: f64,
}

impl Default for GridLineStyle {
    fn default() -> Self {
        Self {
            color: Color::rgba8(10, 10, 10, 0.15),
            stroke_width: 1.0,
        }
    }
}

/// Draws a faint reference line across the full width of a region at
/// one y-value.
#[derive(Debug, Clone)]
pub struct HorizontalGridLine {
    bounds: Bounds,
    region: BoundingBox,
    pub style: GridLineStyle,
}

impl HorizontalGridLine {
    #[must_use]
    pub fn new(bounds: Bounds, region: BoundingBox) -> Self {
        Self {
            bounds,
            region,
            style: GridLineStyle::default(),
        }
    }

    #[must_use]
    pub fn primitive(&self, y_value: f64) -> LinePrimitive {
        let row = snap_to_pixel_row(value_to_row_px(self.bounds, self.region, y_value));
        LinePrimitive::new(
            self.region.x,
            row,
            self.region.x + self.region.width,
            row,
            self.style.stroke_width,
            self.style.color,
        )
    }
}

/// Font settings shared by both axis-label drawers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLabelStyle {
    pub font_size_px: f64,
    pub color: Color,
}

impl Default for AxisLabelStyle {
    fn default() -> Self {
        Self {
            font_size_px: 12.0,
            color: Color::rgb(0.0, 0.0, 0.0),
        }
    }
}

/// Draws y-axis legend text, left-aligned and vertically centered on
/// the tick row.
#[derive(Debug, Clone)]
pub struct YAxisLabel {
    bounds: Bounds,
    region: BoundingBox,
    pub style: AxisLabelStyle,
}

impl YAxisLabel {
    #[must_use]
    pub fn new(bounds: Bounds, region: BoundingBox) -> Self {
        Self {
            bounds,
            region,
            style: AxisLabelStyle::default(),
        }
    }

    #[must_use]
    pub fn primitive(&self, y_value: f64, text: &str) -> TextPrimitive {
        let row = value_to_row_px(self.bounds, self.region, y_value);
        TextPrimitive::new(
            text,
            self.region.left(),
            row,
            self.style.font_size_px,
            self.style.color,
            TextHAlign::Left,
            TextVAlign::Middle,
        )
    }

    /// Estimated pixel width of `text` at this drawer's font size.
    #[must_use]
    pub fn measure_width(&self, text: &str) -> f64 {
        estimate_text_width_px(text, self.style.font_size_px)
    }
}

/// Draws x-axis legend text, horizontally centered in its cell and
/// anchored to the region bottom.
#[derive(Debug, Clone)]
pub struct XAxisLabel {
    bounds: Bounds,
    region: BoundingBox,
    pub style: AxisLabelStyle,
}

impl XAxisLabel {
    #[must_use]
    pub fn new(bounds: Bounds, region: BoundingBox) -> Self {
        Self {
            bounds,
            region,
            style: AxisLabelStyle::default(),
        }
    }

    #[must_use]
    pub fn primitive(&self, x_index: f64, text: &str) -> TextPrimitive {
        let left = x_index_to_px(self.bounds, self.region, x_index);
        let right = x_index_to_px(self.bounds, self.region, x_index + 1.0);
        TextPrimitive::new(
            text,
            (left + right) / 2.0,
            self.region.bottom(),
            self.style.font_size_px,
            self.style.color,
            TextHAlign::Center,
            TextVAlign::Bottom,
        )
    }

    /// Row height reserved for one line of labels. Constant per font
    /// size regardless of string content.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        label_line_height_px(self.style.font_size_px)
    }
}

/// Gradient fill of a smoke value box, fading from the upper edge of
/// the band down to fully transparent at the lower edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueBoxStyle {
    pub stops: SmallVec<[GradientStop; 3]>,
}

impl Default for ValueBoxStyle {
    fn default() -> Self {
        Self {
            stops: smallvec![
                GradientStop::new(0.0, Color::rgba8(40, 40, 40, 0.5)),
                GradientStop::new(0.5, Color::rgba8(40, 40, 40, 0.3)),
                GradientStop::new(1.0, Color::rgba8(40, 40, 40, 0.0)),
            ],
        }
    }
}

/// Draws the gradient-filled `[lower, upper]` band of one smoke sample.
#[derive(Debug, Clone)]
pub struct ValueBox {
    bounds: Bounds,
    region: BoundingBox,
    pub style: ValueBoxStyle,
}

impl ValueBox {
    #[must_use]
    pub fn new(bounds: Bounds, region: BoundingBox) -> Self {
        Self {
            bounds,
            region,
            style: ValueBoxStyle::default(),
        }
    }

    /// Builds the filled rectangle for a `[lower, upper]` band in the
    /// cell at `x_index`. No outline is drawn.
    #[must_use]
    pub fn primitive(&self, lower: f64, upper: f64, x_index: f64) -> RectPrimitive {
        let left = x_index_to_px(self.bounds, self.region, x_index);
        let right = x_index_to_px(self.bounds, self.region, x_index + 1.0);
        let upper_row = value_to_row_px(self.bounds, self.region, upper);
        let lower_row = value_to_row_px(self.bounds, self.region, lower);

        RectPrimitive::new(
            left,
            upper_row,
            right - left,
            lower_row - upper_row,
            RectFill::VerticalGradient {
                start_y: upper_row,
                end_y: lower_row,
                stops: self.style.stops.clone(),
            },
        )
    }
}
