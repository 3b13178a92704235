//! Plot surface port trait

use crate::domain::{AxisRange, Sample};

/// Something that can draw one waveform: a plot widget, a terminal
/// scope, an image writer.
///
/// Calls arrive in the order `set_data`, `set_x_range`, `set_y_range`,
/// `replot` for every trace.
pub trait PlotTarget {
    /// Replace the drawn samples
    fn set_data(&mut self, samples: &[Sample]);

    fn set_x_range(&mut self, range: AxisRange);

    fn set_y_range(&mut self, range: AxisRange);

    /// Redraw with the data and ranges set so far
    fn replot(&mut self);
}

impl<T: PlotTarget + ?Sized> PlotTarget for Box<T> {
    fn set_data(&mut self, samples: &[Sample]) {
        (**self).set_data(samples)
    }

    fn set_x_range(&mut self, range: AxisRange) {
        (**self).set_x_range(range)
    }

    fn set_y_range(&mut self, range: AxisRange) {
        (**self).set_y_range(range)
    }

    fn replot(&mut self) {
        (**self).replot()
    }
}
