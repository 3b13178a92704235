//! Encoder session
//!
//! Holds what a front end collects from the user (message, selected schemes,
//! level count, rate, amplitude) and turns it into a `Plot`. No widgets
//! here: a GUI or terminal front end drives these methods from its own
//! event handlers.

pub mod plot;
pub mod selection;

pub use plot::{Plot, Trace};
pub use selection::{SchemeSelection, PLOT_SLOTS};

use crate::domain::{
    EncoderProfile, EncodingConfig, LineCodeError, LineCodeResult, Levels, Scheme,
    DEFAULT_AMPLITUDE, DEFAULT_SYMBOL_RATE,
};
use crate::encoding::{hex, WaveformGenerator};

#[derive(Debug, Clone, PartialEq)]
pub struct EncoderSession {
    message: String,
    selection: SchemeSelection,
    levels: Levels,
    symbol_rate: f64,
    amplitude: f64,
}

impl EncoderSession {
    pub fn new() -> Self {
        Self {
            message: String::new(),
            selection: SchemeSelection::default(),
            levels: Levels::default(),
            symbol_rate: DEFAULT_SYMBOL_RATE,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Start a session with a stored profile's settings
    pub fn from_profile(profile: &EncoderProfile) -> LineCodeResult<Self> {
        profile.validate()?;
        Ok(Self {
            message: String::new(),
            selection: SchemeSelection::from_schemes(profile.schemes.iter().copied()),
            levels: profile.levels,
            symbol_rate: profile.symbol_rate,
            amplitude: profile.amplitude,
        })
    }

    /// Capture the current settings under `name`
    pub fn to_profile(&self, name: &str) -> EncoderProfile {
        EncoderProfile {
            name: name.to_string(),
            symbol_rate: self.symbol_rate,
            amplitude: self.amplitude,
            levels: self.levels,
            schemes: self.selection.schemes(),
        }
    }

    /// Take freshly edited message text.
    ///
    /// Non-hex characters are dropped and letters uppercased. Returns the
    /// binary rendering of the cleaned message.
    pub fn edit_message(&mut self, input: &str) -> String {
        self.message = hex::normalize_hex(input);
        self.binary()
    }

    /// The cleaned hex message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The message as a string of '0' and '1'
    pub fn binary(&self) -> String {
        // normalize_hex only keeps hex digits, so this cannot fail
        hex::hex_to_bits(&self.message)
            .map(|bits| hex::bits_to_string(&bits))
            .unwrap_or_default()
    }

    pub fn selection(&self) -> &SchemeSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SchemeSelection {
        &mut self.selection
    }

    pub fn levels(&self) -> Levels {
        self.levels
    }

    pub fn set_levels(&mut self, levels: Levels) {
        self.levels = levels;
        if self.selection.is_selected(Scheme::Multilevel(levels)) {
            self.selection.select(Scheme::Multilevel(levels));
        }
    }

    pub fn set_symbol_rate(&mut self, symbol_rate: f64) {
        self.symbol_rate = symbol_rate;
    }

    pub fn set_amplitude(&mut self, amplitude: f64) {
        self.amplitude = amplitude;
    }

    /// Generator input for the current message and parameters
    pub fn config(&self) -> LineCodeResult<EncodingConfig> {
        let config = EncodingConfig::from_hex(&self.message)?
            .with_symbol_rate(self.symbol_rate)
            .with_amplitude(self.amplitude);
        config.validate()?;
        Ok(config)
    }

    /// Generate the clock and every selected scheme.
    ///
    /// Requires all plot slots to be filled and a non-empty message.
    pub fn plot(&self) -> LineCodeResult<Plot> {
        if !self.selection.is_complete() {
            return Err(LineCodeError::IncompleteSelection {
                selected: self.selection.len(),
                required: PLOT_SLOTS,
            });
        }
        if self.message.is_empty() {
            return Err(LineCodeError::EmptyMessage);
        }
        let generator = WaveformGenerator::new(self.config()?);
        let schemes: Vec<Scheme> = self
            .selection
            .schemes()
            .into_iter()
            .map(|scheme| match scheme {
                Scheme::Multilevel(_) => Scheme::Multilevel(self.levels),
                other => other,
            })
            .collect();
        log::info!(
            "plotting {} bits with {}",
            generator.config().bits.len(),
            schemes
                .iter()
                .map(Scheme::name)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Plot::build(&generator, &schemes))
    }
}

impl Default for EncoderSession {
    fn default() -> Self {
        Self::new()
    }
}
