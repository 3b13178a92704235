//! Render-ready traces: a clock above the selected schemes

use serde::{Deserialize, Serialize};

use crate::domain::{AxisRange, Scheme, Waveform};
use crate::encoding::WaveformGenerator;
use crate::ports::PlotTarget;

/// One waveform with the axes needed to draw it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub label: String,
    pub waveform: Waveform,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

impl Trace {
    fn new(label: String, waveform: Waveform, y_range: AxisRange) -> Self {
        let x_range = AxisRange::new(0.0, waveform.time_max);
        Self {
            label,
            waveform,
            x_range,
            y_range,
        }
    }

    /// Push this trace to a plot surface and redraw it
    pub fn draw<T: PlotTarget + ?Sized>(&self, target: &mut T) {
        target.set_data(&self.waveform.samples);
        target.set_x_range(self.x_range);
        target.set_y_range(self.y_range);
        target.replot();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub clock: Trace,
    /// One trace per selected scheme, in selection order
    pub traces: Vec<Trace>,
}

impl Plot {
    pub fn build(generator: &WaveformGenerator, schemes: &[Scheme]) -> Self {
        let amplitude = generator.config().amplitude;
        let clock = Trace::new(
            "Clock".to_string(),
            generator.clock(),
            AxisRange::new(0.0, amplitude),
        );
        let traces = schemes
            .iter()
            .map(|&scheme| {
                Trace::new(
                    scheme.to_string(),
                    generator.generate(scheme),
                    scheme.y_range(amplitude),
                )
            })
            .collect();
        Self { clock, traces }
    }

    /// Draw the clock on the first target and the scheme traces on the
    /// following ones. Traces without a target are skipped.
    pub fn render<T: PlotTarget>(&self, targets: &mut [T]) {
        let needed = self.traces.len() + 1;
        if targets.len() < needed {
            log::warn!(
                "{} plot targets for {needed} traces, extra traces not drawn",
                targets.len()
            );
        }
        let traces = std::iter::once(&self.clock).chain(&self.traces);
        for (trace, target) in traces.zip(targets.iter_mut()) {
            trace.draw(target);
        }
    }
}
