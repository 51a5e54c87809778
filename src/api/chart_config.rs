use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Viewport};
use crate::error::{ChartError, ChartResult};

/// Sentinel y-interval value requesting automatic tick spacing of one
/// tenth of the vertical range.
pub const Y_INTERVAL_AUTO: f64 = -1.0;

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmokeChartConfig {
    pub viewport: Viewport,
    /// Reserved: carried for surface parity, no vertical gridlines are
    /// emitted yet.
    #[serde(default = "default_enabled")]
    pub x_grid_lines_enabled: bool,
    #[serde(default = "default_enabled")]
    pub y_grid_lines_enabled: bool,
    /// Draws the per-sample trend line at each band's upper value.
    #[serde(default = "default_enabled")]
    pub y_average_enabled: bool,
    #[serde(default = "default_enabled")]
    pub x_legend_enabled: bool,
    #[serde(default = "default_enabled")]
    pub y_legend_enabled: bool,
    /// Tick spacing in value units, or `Y_INTERVAL_AUTO`.
    #[serde(default = "default_y_interval")]
    pub y_interval: f64,
    /// Suffix appended to every y-axis tick label.
    #[serde(default)]
    pub y_legend_unit: String,
}

impl SmokeChartConfig {
    /// Creates a config with every feature enabled and automatic tick
    /// spacing.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            x_grid_lines_enabled: true,
            y_grid_lines_enabled: true,
            y_average_enabled: true,
            x_legend_enabled: true,
            y_legend_enabled: true,
            y_interval: Y_INTERVAL_AUTO,
            y_legend_unit: String::new(),
        }
    }

    /// Sets the y-axis tick spacing in value units.
    #[must_use]
    pub fn with_y_interval(mut self, y_interval: f64) -> Self {
        self.y_interval = y_interval;
        self
    }

    /// Sets the suffix appended to y-axis tick labels.
    #[must_use]
    pub fn with_y_legend_unit(mut self, unit: impl Into<String>) -> Self {
        self.y_legend_unit = unit.into();
        self
    }

    /// Toggles the y-axis gridlines.
    #[must_use]
    pub fn with_y_grid_lines(mut self, enabled: bool) -> Self {
        self.y_grid_lines_enabled = enabled;
        self
    }

    /// Toggles the reserved x-axis gridline flag.
    #[must_use]
    pub fn with_x_grid_lines(mut self, enabled: bool) -> Self {
        self.x_grid_lines_enabled = enabled;
        self
    }

    /// Toggles the per-sample trend line.
    #[must_use]
    pub fn with_y_average(mut self, enabled: bool) -> Self {
        self.y_average_enabled = enabled;
        self
    }

    /// Toggles the x-axis legend row.
    #[must_use]
    pub fn with_x_legend(mut self, enabled: bool) -> Self {
        self.x_legend_enabled = enabled;
        self
    }

    /// Toggles the y-axis legend column.
    #[must_use]
    pub fn with_y_legend(mut self, enabled: bool) -> Self {
        self.y_legend_enabled = enabled;
        self
    }

    /// Validates viewport extents and the tick interval.
    ///
    /// `y_interval` must be strictly positive or exactly the auto
    /// sentinel; anything else (zero, other negatives, non-finite) is
    /// rejected here instead of hanging the tick walk later.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.y_interval != Y_INTERVAL_AUTO
            && !(self.y_interval.is_finite() && self.y_interval > 0.0)
        {
            return Err(ChartError::InvalidYInterval {
                value: self.y_interval,
            });
        }
        Ok(())
    }

    /// Resolves the tick spacing actually used for one draw pass.
    ///
    /// The auto sentinel resolves to a tenth of the vertical range; the
    /// config itself is never mutated, so resolution happens afresh on
    /// every draw.
    pub fn effective_y_interval(&self, bounds: Bounds) -> ChartResult<f64> {
        self.validate()?;
        if self.y_interval == Y_INTERVAL_AUTO {
            Ok(bounds.y_range() / 10.0)
        } else {
            Ok(self.y_interval)
        }
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_enabled() -> bool {
    true
}

fn default_y_interval() -> f64 {
    Y_INTERVAL_AUTO
}

#[cfg(test)]
mod tests {
    use crate::core::{Bounds, Viewport};
    use crate::error::ChartError;

    use super::{SmokeChartConfig, Y_INTERVAL_AUTO};

    #[test]
    fn auto_sentinel_resolves_to_a_tenth_of_the_vertical_range() {
        let config = SmokeChartConfig::new(Viewport::new(800, 400));
        let interval = config
            .effective_y_interval(Bounds::new(0.0, 0.0, 0.0, 99.0))
            .expect("auto interval");
        assert_eq!(interval, 10.0);
    }

    #[test]
    fn explicit_interval_passes_through_unchanged() {
        let config = SmokeChartConfig::new(Viewport::new(800, 400)).with_y_interval(25.0);
        let interval = config
            .effective_y_interval(Bounds::new(0.0, 0.0, 0.0, 99.0))
            .expect("explicit interval");
        assert_eq!(interval, 25.0);
    }

    #[test]
    fn zero_and_negative_intervals_are_rejected() {
        for bad in [0.0, -0.5, -2.0, f64::NAN, f64::INFINITY] {
            let config = SmokeChartConfig::new(Viewport::new(800, 400)).with_y_interval(bad);
            let err = config.validate().expect_err("interval must be rejected");
            assert!(matches!(err, ChartError::InvalidYInterval { .. }));
        }
    }

    #[test]
    fn the_auto_sentinel_itself_validates() {
        let config = SmokeChartConfig::new(Viewport::new(800, 400));
        assert_eq!(config.y_interval, Y_INTERVAL_AUTO);
        config.validate().expect("sentinel is valid");
    }

    #[test]
    fn empty_viewport_is_rejected() {
        let config = SmokeChartConfig::new(Viewport::new(0, 400));
        let err = config.validate().expect_err("viewport must be rejected");
        assert!(matches!(err, ChartError::InvalidViewport { .. }));
    }
}
