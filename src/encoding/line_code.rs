//! Line codes as small state machines
//!
//! Every scheme is a transition function `(state, bit) -> (state, symbol)`.
//! The generator folds it left to right over the bits and turns each symbol
//! into samples, so the schemes below only describe levels, never time.
//!
//! State is created fresh for every fold: two generation calls never share
//! polarity or level.

use crate::domain::Sample;

/// What one bit looks like on the wire
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol {
    /// One level for the whole bit period (two samples)
    Hold(f64),
    /// One level per half period, switching at mid-bit (four samples)
    Split(f64, f64),
}

/// A line code expressed as a transition function over bits
pub trait LineCode {
    type State: Copy;

    fn initial_state(&self) -> Self::State;

    fn step(&self, state: Self::State, bit: bool) -> (Self::State, Symbol);

    /// Sample appended after the last bit, if the code needs one.
    ///
    /// `last_bit` is `None` for an empty message.
    fn trailer(&self, _state: Self::State, _last_bit: Option<bool>, _end: f64) -> Option<Sample> {
        None
    }
}

/// Reference square wave: low then high in every bit, whatever the bit
pub struct Clock {
    pub amplitude: f64,
}

impl LineCode for Clock {
    type State = ();

    fn initial_state(&self) {}

    fn step(&self, _: (), _bit: bool) -> ((), Symbol) {
        ((), Symbol::Split(0.0, self.amplitude))
    }
}

/// Unipolar: 1 is `+amplitude`, 0 is ground
pub struct Ttl {
    pub amplitude: f64,
}

impl LineCode for Ttl {
    type State = ();

    fn initial_state(&self) {}

    fn step(&self, _: (), bit: bool) -> ((), Symbol) {
        let level = if bit { self.amplitude } else { 0.0 };
        ((), Symbol::Hold(level))
    }
}

/// NRZ-L: the inverse of TTL, 0 is high
pub struct NrzL {
    pub amplitude: f64,
}

impl LineCode for NrzL {
    type State = ();

    fn initial_state(&self) {}

    fn step(&self, _: (), bit: bool) -> ((), Symbol) {
        let level = if bit { 0.0 } else { self.amplitude };
        ((), Symbol::Hold(level))
    }
}

/// NRZ-I: a 1 toggles between ground and `+amplitude`, a 0 holds
pub struct NrzI {
    pub amplitude: f64,
}

impl LineCode for NrzI {
    /// Whether the line is currently high
    type State = bool;

    fn initial_state(&self) -> bool {
        false
    }

    fn step(&self, high: bool, bit: bool) -> (bool, Symbol) {
        let high = high ^ bit;
        let level = if high { self.amplitude } else { 0.0 };
        (high, Symbol::Hold(level))
    }
}

/// Emit a pulse of alternating polarity for `mark` bits, ground otherwise.
fn alternate_mark(amplitude: f64, polarity: f64, is_mark: bool) -> (f64, Symbol) {
    if is_mark {
        (-polarity, Symbol::Hold(polarity * amplitude))
    } else {
        (polarity, Symbol::Hold(0.0))
    }
}

/// Bipolar AMI: 1s alternate between `+amplitude` and `-amplitude`, 0 is ground
pub struct Bipolar {
    pub amplitude: f64,
}

impl LineCode for Bipolar {
    /// Sign of the next mark
    type State = f64;

    fn initial_state(&self) -> f64 {
        1.0
    }

    fn step(&self, polarity: f64, bit: bool) -> (f64, Symbol) {
        alternate_mark(self.amplitude, polarity, bit)
    }
}

/// Pseudoternary: AMI with the roles of 0 and 1 swapped
pub struct Pseudoternary {
    pub amplitude: f64,
}

impl LineCode for Pseudoternary {
    type State = f64;

    fn initial_state(&self) -> f64 {
        1.0
    }

    fn step(&self, polarity: f64, bit: bool) -> (f64, Symbol) {
        alternate_mark(self.amplitude, polarity, !bit)
    }
}

/// Manchester: 1 rises at mid-bit, 0 falls
pub struct Manchester {
    pub amplitude: f64,
}

impl LineCode for Manchester {
    type State = ();

    fn initial_state(&self) {}

    fn step(&self, _: (), bit: bool) -> ((), Symbol) {
        let a = self.amplitude;
        let symbol = if bit {
            Symbol::Split(-a, a)
        } else {
            Symbol::Split(a, -a)
        };
        ((), symbol)
    }
}

/// Differential Manchester.
///
/// Always transitions at mid-bit. A 0 also transitions at the start of the
/// bit, a 1 does not. When the message ends in 0 a final sample at the end
/// time closes the edge the last bit leaves open.
pub struct DifferentialManchester {
    pub amplitude: f64,
}

impl LineCode for DifferentialManchester {
    /// Level the line sits at when the next bit begins
    type State = f64;

    fn initial_state(&self) -> f64 {
        self.amplitude
    }

    fn step(&self, level: f64, bit: bool) -> (f64, Symbol) {
        if bit {
            (-level, Symbol::Split(level, -level))
        } else {
            (level, Symbol::Split(-level, level))
        }
    }

    fn trailer(&self, level: f64, last_bit: Option<bool>, end: f64) -> Option<Sample> {
        match last_bit {
            Some(false) => Some(Sample::new(end, -level)),
            _ => None,
        }
    }
}

/// Multilevel stepping over a grid of evenly spaced values.
///
/// Starts at `-amplitude`; the step is `amplitude / (levels - 1)`. A 1 moves
/// up one step while the level is below `+amplitude`, otherwise down one
/// step while it is above `-amplitude`. A 0 holds. Once at the top, a run
/// of 1s bounces between `+amplitude` and the value just below it instead
/// of wrapping around. `levels` must be at least 2; smaller values pin the
/// level at `-amplitude`.
pub struct Multilevel {
    pub amplitude: f64,
    pub levels: usize,
}

impl Multilevel {
    fn step_size(&self) -> f64 {
        self.amplitude / (self.levels as f64 - 1.0)
    }

    /// Highest grid index, the one that lands on `+amplitude`
    fn top(&self) -> usize {
        2 * self.levels.saturating_sub(1)
    }

    fn voltage(&self, index: usize) -> f64 {
        // Grid position instead of an accumulated sum keeps rounding from drifting
        if index == 0 {
            -self.amplitude
        } else if index == self.top() {
            self.amplitude
        } else {
            -self.amplitude + index as f64 * self.step_size()
        }
    }
}

impl LineCode for Multilevel {
    /// Position on the level grid, 0 is `-amplitude`
    type State = usize;

    fn initial_state(&self) -> usize {
        0
    }

    fn step(&self, index: usize, bit: bool) -> (usize, Symbol) {
        let index = if !bit {
            index
        } else if index < self.top() {
            index + 1
        } else if index > 0 {
            index - 1
        } else {
            index
        };
        (index, Symbol::Hold(self.voltage(index)))
    }
}
