//! Waveform generator: bits in, oscilloscope-style samples out
//!
//! Pipeline: bits → line-code state machine → symbols → timed samples
//!
//! One bit lasts `T = 1 / symbol_rate`. A `Hold` symbol becomes two samples
//! at the same voltage, one at each end of the bit. A `Split` symbol becomes
//! four: the bit is cut at `T / 2` and each half gets its own flat segment.
//! Sample times are computed from the bit index rather than accumulated, so
//! long messages do not drift.

use crate::domain::{EncodingConfig, Sample, Scheme, Waveform};
use crate::encoding::line_code::{
    Bipolar, Clock, DifferentialManchester, LineCode, Manchester, Multilevel, NrzI, NrzL,
    Pseudoternary, Symbol, Ttl,
};

/// Fold a line code over `bits` and lay the symbols out in time.
///
/// The returned `time_max` is `bits.len() * bit_period`, the end of the
/// last bit.
pub fn render<C: LineCode>(code: &C, bits: &[bool], bit_period: f64) -> Waveform {
    let half = bit_period / 2.0;
    let mut samples = Vec::with_capacity(bits.len() * 4 + 1);
    let mut state = code.initial_state();

    for (i, &bit) in bits.iter().enumerate() {
        let (next, symbol) = code.step(state, bit);
        state = next;

        let start = i as f64 * bit_period;
        let end = (i + 1) as f64 * bit_period;
        match symbol {
            Symbol::Hold(v) => {
                samples.push(Sample::new(start, v));
                samples.push(Sample::new(end, v));
            }
            Symbol::Split(first, second) => {
                let mid = (2 * i + 1) as f64 * half;
                samples.push(Sample::new(start, first));
                samples.push(Sample::new(mid, first));
                samples.push(Sample::new(mid, second));
                samples.push(Sample::new(end, second));
            }
        }
    }

    let time_max = bits.len() as f64 * bit_period;
    if let Some(extra) = code.trailer(state, bits.last().copied(), time_max) {
        samples.push(extra);
    }

    Waveform::new(samples, time_max)
}

/// Generates every supported waveform from one configuration.
///
/// All methods take `&self`: the configuration is read-only, calls are
/// independent and may run in any order (or concurrently from several
/// threads sharing the generator).
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformGenerator {
    config: EncodingConfig,
}

impl WaveformGenerator {
    pub fn new(config: EncodingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncodingConfig {
        &self.config
    }

    /// Reference clock, low for the first half of every bit, high for the second
    pub fn clock(&self) -> Waveform {
        self.run("clock", &Clock { amplitude: self.config.amplitude })
    }

    pub fn ttl(&self) -> Waveform {
        self.run("TTL", &Ttl { amplitude: self.config.amplitude })
    }

    pub fn nrzl(&self) -> Waveform {
        self.run("NRZ-L", &NrzL { amplitude: self.config.amplitude })
    }

    pub fn nrzi(&self) -> Waveform {
        self.run("NRZ-I", &NrzI { amplitude: self.config.amplitude })
    }

    pub fn bipolar(&self) -> Waveform {
        self.run("Bipolar-AMI", &Bipolar { amplitude: self.config.amplitude })
    }

    pub fn pseudoternary(&self) -> Waveform {
        self.run("Pseudoternary", &Pseudoternary { amplitude: self.config.amplitude })
    }

    pub fn manchester(&self) -> Waveform {
        self.run("Manchester", &Manchester { amplitude: self.config.amplitude })
    }

    /// Differential Manchester; `4n + 1` samples when the last bit is 0
    pub fn differential_manchester(&self) -> Waveform {
        self.run(
            "Differential Manchester",
            &DifferentialManchester { amplitude: self.config.amplitude },
        )
    }

    /// Multilevel stepping over `levels` values.
    ///
    /// The caller must supply `levels >= 2`; smaller values are not clamped
    /// and leave the line at `-amplitude`.
    pub fn multilevel(&self, levels: usize) -> Waveform {
        if levels < 2 {
            log::warn!("multilevel: {levels} levels requested, at least 2 are required");
        }
        self.run(
            "Multilevel",
            &Multilevel {
                amplitude: self.config.amplitude,
                levels,
            },
        )
    }

    /// Generate the waveform for a scheme picked at runtime
    pub fn generate(&self, scheme: Scheme) -> Waveform {
        match scheme {
            Scheme::Ttl => self.ttl(),
            Scheme::NrzL => self.nrzl(),
            Scheme::NrzI => self.nrzi(),
            Scheme::Bipolar => self.bipolar(),
            Scheme::Pseudoternary => self.pseudoternary(),
            Scheme::Manchester => self.manchester(),
            Scheme::DifferentialManchester => self.differential_manchester(),
            Scheme::Multilevel(levels) => self.multilevel(levels.count()),
        }
    }

    fn run<C: LineCode>(&self, name: &str, code: &C) -> Waveform {
        if let Err(e) = self.config.validate() {
            log::warn!("{name}: {e}; generated times and voltages are meaningless");
        }
        let waveform = render(code, &self.config.bits, self.config.bit_period());
        log::debug!(
            "{name}: {} bits -> {} samples, time_max={}",
            self.config.bits.len(),
            waveform.len(),
            waveform.time_max
        );
        waveform
    }
}
