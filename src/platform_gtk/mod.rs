use gtk4 as gtk;

use crate::api::SmokeChart;
use crate::render::Renderer;

/// Host-container attach point for embedding a smoke chart into a GTK4
/// widget tree.
pub struct GtkSmokeChartHost<R: Renderer> {
    _chart: SmokeChart<R>,
}

impl<R: Renderer> GtkSmokeChartHost<R> {
    #[must_use]
    pub fn new(chart: SmokeChart<R>) -> Self {
        let _ = std::mem::size_of::<gtk::DrawingArea>();
        Self { _chart: chart }
    }
}
