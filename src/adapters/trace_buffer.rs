//! In-memory plot target.
//!
//! Keeps whatever was last pushed to it. Useful for headless embedding (hand
//! the buffer to a renderer later) and for checking what a plot would show
//! without a GUI.

use crate::domain::{AxisRange, Sample};
use crate::ports::PlotTarget;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceBuffer {
    samples: Vec<Sample>,
    x_range: Option<AxisRange>,
    y_range: Option<AxisRange>,
    replots: usize,
}

impl TraceBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn x_range(&self) -> Option<AxisRange> {
        self.x_range
    }

    pub fn y_range(&self) -> Option<AxisRange> {
        self.y_range
    }

    /// How many times `replot` has been called
    pub fn replots(&self) -> usize {
        self.replots
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl PlotTarget for TraceBuffer {
    fn set_data(&mut self, samples: &[Sample]) {
        self.samples = samples.to_vec();
    }

    fn set_x_range(&mut self, range: AxisRange) {
        self.x_range = Some(range);
    }

    fn set_y_range(&mut self, range: AxisRange) {
        self.y_range = Some(range);
    }

    fn replot(&mut self) {
        self.replots += 1;
        log::trace!("trace buffer replot #{} ({} samples)", self.replots, self.samples.len());
    }
}
