/// One smoke sample: a `[lower, upper]` value band anchored at an
/// x-axis cell index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmokeSample {
    /// X-axis cell the band occupies. The cell spans
    /// `[x_index, x_index + 1)` in value space.
    pub x_index: f64,
    /// Lower edge of the value band.
    pub lower: f64,
    /// Upper edge of the value band. The trend line is drawn at this
    /// value when trend rendering is enabled.
    pub upper: f64,
}

impl SmokeSample {
    #[must_use]
    pub const fn new(x_index: f64, lower: f64, upper: f64) -> Self {
        Self {
            x_index,
            lower,
            upper,
        }
    }
}

/// Ordered collection of smoke samples owned by one chart.
///
/// The first sample in the collection is a placeholder slot and is
/// never plotted: plotting starts at the second element. Callers that
/// index their data from 1 can push a dummy first sample and keep their
/// indices unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SmokeSeries {
    samples: Vec<SmokeSample>,
}

impl SmokeSeries {
    #[must_use]
    pub fn new(samples: Vec<SmokeSample>) -> Self {
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[SmokeSample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn push(&mut self, sample: SmokeSample) {
        self.samples.push(sample);
    }

    /// Iterates the samples that are actually plotted, skipping the
    /// placeholder first element.
    pub fn plotted(&self) -> impl Iterator<Item = &SmokeSample> {
        self.samples.iter().skip(1)
    }
}

#[cfg(test)]
mod tests {
    use super::{SmokeSample, SmokeSeries};

    #[test]
    fn plotted_skips_the_placeholder_slot() {
        let series = SmokeSeries::new(vec![
            SmokeSample::new(0.0, 0.0, 0.0),
            SmokeSample::new(10.0, 5.0, 50.0),
            SmokeSample::new(11.0, 6.0, 48.0),
        ]);
        let plotted: Vec<_> = series.plotted().collect();
        assert_eq!(plotted.len(), 2);
        assert_eq!(plotted[0].x_index, 10.0);
    }

    #[test]
    fn empty_and_single_sample_series_plot_nothing() {
        assert_eq!(SmokeSeries::default().plotted().count(), 0);
        let one = SmokeSeries::new(vec![SmokeSample::new(1.0, 0.0, 1.0)]);
        assert_eq!(one.plotted().count(), 0);
    }
}
