//! Core domain types

use serde::{Deserialize, Serialize};

/// One point of a generated signal: time in seconds, voltage in volts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub voltage: f64,
}

impl Sample {
    pub fn new(time: f64, voltage: f64) -> Self {
        Self { time, voltage }
    }
}

impl From<Sample> for (f64, f64) {
    fn from(sample: Sample) -> Self {
        (sample.time, sample.voltage)
    }
}

/// A generated signal plus the time coordinate of its last sample.
///
/// Samples come in pairs of equal voltage spanning each constant segment, so
/// drawing them as connected line segments yields flat steps joined by
/// vertical edges.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Waveform {
    pub samples: Vec<Sample>,
    pub time_max: f64,
}

impl Waveform {
    pub fn new(samples: Vec<Sample>, time_max: f64) -> Self {
        Self { samples, time_max }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.time)
    }

    pub fn voltages(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.voltage)
    }

    /// Flatten into `(time, voltage)` pairs, the shape plotting widgets take
    pub fn to_points(&self) -> Vec<(f64, f64)> {
        self.samples.iter().copied().map(Into::into).collect()
    }
}

/// Closed interval used for plot axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub lower: f64,
    pub upper: f64,
}

impl AxisRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Number of voltage levels offered for the multilevel scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Levels {
    Two,
    #[default]
    Four,
    Eight,
}

impl Levels {
    pub const ALL: [Levels; 3] = [Levels::Two, Levels::Four, Levels::Eight];

    pub fn count(self) -> usize {
        match self {
            Levels::Two => 2,
            Levels::Four => 4,
            Levels::Eight => 8,
        }
    }

    pub fn from_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.count() == count)
    }
}

/// The line codes a waveform can be generated for.
///
/// The reference clock is not a scheme; it is always drawn above the
/// selected schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    /// Unipolar: 1 is high, 0 is ground
    Ttl,
    NrzL,
    NrzI,
    /// Alternate mark inversion
    Bipolar,
    Pseudoternary,
    Manchester,
    DifferentialManchester,
    Multilevel(Levels),
}

impl Scheme {
    /// Every scheme, multilevel with its default level count
    pub const ALL: [Scheme; 8] = [
        Scheme::Ttl,
        Scheme::NrzL,
        Scheme::NrzI,
        Scheme::Bipolar,
        Scheme::Pseudoternary,
        Scheme::Manchester,
        Scheme::DifferentialManchester,
        Scheme::Multilevel(Levels::Four),
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Ttl => "TTL",
            Scheme::NrzL => "NRZ-L",
            Scheme::NrzI => "NRZ-I",
            Scheme::Bipolar => "Bipolar-AMI",
            Scheme::Pseudoternary => "Pseudoternary",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "Differential Manchester",
            Scheme::Multilevel(_) => "Multilevel",
        }
    }

    /// Samples emitted per bit (ignoring the differential Manchester
    /// trailing sample)
    pub fn samples_per_bit(&self) -> usize {
        match self {
            Scheme::Manchester | Scheme::DifferentialManchester => 4,
            _ => 2,
        }
    }

    /// True for schemes that only swing between ground and `+amplitude`
    pub fn is_unipolar(&self) -> bool {
        matches!(self, Scheme::Ttl | Scheme::NrzL | Scheme::NrzI)
    }

    /// Vertical axis range a plot needs to show this scheme
    pub fn y_range(&self, amplitude: f64) -> AxisRange {
        if self.is_unipolar() {
            AxisRange::new(0.0, amplitude)
        } else {
            AxisRange::new(-amplitude, amplitude)
        }
    }

    /// Same scheme ignoring the multilevel level count
    pub fn same_kind(&self, other: &Scheme) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scheme::Multilevel(levels) => write!(f, "Multilevel ({} levels)", levels.count()),
            other => f.write_str(other.name()),
        }
    }
}
