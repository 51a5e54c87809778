use tracing::{debug, trace};

use crate::core::{Bounds, SmokeSeries, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::chart_config::SmokeChartConfig;
use super::layout::{ChartLayout, format_tick_label, y_axis_ticks};
use super::marks::{HorizontalGridLine, ValueBox, ValueLine, XAxisLabel, YAxisLabel};

/// Main orchestration facade consumed by host applications.
///
/// `SmokeChart` owns the configuration, value bounds, sample series, and
/// x-axis labels, and turns them into a `RenderFrame` per draw pass.
/// Layout is recomputed from scratch on every pass, so repeated draws
/// with unchanged inputs produce geometrically identical frames.
/// Not reentrant; drive one chart from one logical thread at a time.
#[derive(Debug)]
pub struct SmokeChart<R: Renderer> {
    renderer: R,
    config: SmokeChartConfig,
    bounds: Bounds,
    series: SmokeSeries,
    x_labels: Vec<String>,
}

impl<R: Renderer> SmokeChart<R> {
    pub fn new(renderer: R, config: SmokeChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            bounds: Bounds::default(),
            series: SmokeSeries::default(),
            x_labels: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SmokeChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SmokeChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn series(&self) -> &SmokeSeries {
        &self.series
    }

    pub fn set_series(&mut self, series: SmokeSeries) {
        debug!(sample_count = series.len(), "set smoke series");
        self.series = series;
    }

    #[must_use]
    pub fn x_labels(&self) -> &[String] {
        &self.x_labels
    }

    pub fn set_x_labels(&mut self, labels: Vec<String>) {
        debug!(label_count = labels.len(), "set x-axis labels");
        self.x_labels = labels;
    }

    /// Computes the layout regions for the current inputs without
    /// drawing anything.
    pub fn compute_layout(&self) -> ChartResult<ChartLayout> {
        let interval = self.config.effective_y_interval(self.bounds)?;
        Ok(ChartLayout::compute(
            &self.config,
            self.bounds,
            &self.x_labels,
            interval,
        ))
    }

    /// Builds the backend-agnostic scene for one draw pass: y axis
    /// (legend text and gridlines), x axis (legend text), then the data
    /// marks in series order.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let interval = self.config.effective_y_interval(self.bounds)?;
        let layout = ChartLayout::compute(&self.config, self.bounds, &self.x_labels, interval);

        let mut frame = RenderFrame::new(self.config.viewport);
        self.push_y_axis(&mut frame, layout, interval);
        self.push_x_axis(&mut frame, layout);
        self.push_data(&mut frame, layout);

        trace!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            chart_w = layout.chart_box.width,
            chart_h = layout.chart_box.height,
            "built smoke chart frame"
        );
        Ok(frame)
    }

    /// Builds the frame and hands it to the renderer.
    pub fn draw(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Draws the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the
    /// renderer implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn draw_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn push_y_axis(&self, frame: &mut RenderFrame, layout: ChartLayout, interval: f64) {
        let ticks = y_axis_ticks(self.bounds, interval);

        if self.config.y_legend_enabled {
            let label = YAxisLabel::new(self.bounds, layout.y_label_box);
            for tick in &ticks {
                let text = format_tick_label(*tick, &self.config.y_legend_unit);
                frame.texts.push(label.primitive(*tick, &text));
            }
        }

        if self.config.y_grid_lines_enabled {
            let gridline = HorizontalGridLine::new(self.bounds, layout.chart_box);
            for tick in &ticks {
                frame.lines.push(gridline.primitive(*tick));
            }
        }
    }

    fn push_x_axis(&self, frame: &mut RenderFrame, layout: ChartLayout) {
        if !self.config.x_legend_enabled {
            return;
        }

        let label = XAxisLabel::new(self.bounds, layout.x_label_box);
        for (index, text) in self.x_labels.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            frame.texts.push(label.primitive((index + 1) as f64, text));
        }
    }

    fn push_data(&self, frame: &mut RenderFrame, layout: ChartLayout) {
        let value_box = ValueBox::new(self.bounds, layout.chart_box);
        let trend_line = ValueLine::new(self.bounds, layout.chart_box);

        for sample in self.series.plotted() {
            frame
                .rects
                .push(value_box.primitive(sample.lower, sample.upper, sample.x_index));

            if self.config.y_average_enabled {
                frame
                    .lines
                    .push(trend_line.primitive(sample.upper, sample.x_index));
            }
        }
    }
}
