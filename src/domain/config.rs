//! Encoding configuration and saved profiles
//!
//! `EncodingConfig` is what the generators read: the bits plus the timing
//! and voltage parameters. `EncoderProfile` is the persisted subset of the
//! settings a user picks once and reuses (everything except the message).

use serde::{Deserialize, Serialize};

use super::error::{LineCodeError, LineCodeResult};
use super::types::{Levels, Scheme};
use crate::encoding::hex;

/// Symbols per second used when none is given
pub const DEFAULT_SYMBOL_RATE: f64 = 1.0;

/// Peak voltage used when none is given
pub const DEFAULT_AMPLITUDE: f64 = 5.0;

/// Input to every waveform generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// Bits to encode, first transmitted first
    pub bits: Vec<bool>,
    /// Bits per second
    pub symbol_rate: f64,
    /// Peak voltage
    pub amplitude: f64,
}

impl EncodingConfig {
    pub fn new(bits: Vec<bool>) -> Self {
        Self {
            bits,
            symbol_rate: DEFAULT_SYMBOL_RATE,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Build a configuration from hexadecimal text, four bits per digit.
    pub fn from_hex(hex_text: &str) -> LineCodeResult<Self> {
        Ok(Self::new(hex::hex_to_bits(hex_text)?))
    }

    pub fn with_symbol_rate(mut self, symbol_rate: f64) -> Self {
        self.symbol_rate = symbol_rate;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Duration of one bit in seconds
    pub fn bit_period(&self) -> f64 {
        1.0 / self.symbol_rate
    }

    /// Check the numeric parameters.
    ///
    /// The generators do not call this; it is for whoever builds the
    /// configuration from user input.
    pub fn validate(&self) -> LineCodeResult<()> {
        validate_parameters(self.symbol_rate, self.amplitude)
    }
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn validate_parameters(symbol_rate: f64, amplitude: f64) -> LineCodeResult<()> {
    if !(symbol_rate.is_finite() && symbol_rate > 0.0) {
        return Err(LineCodeError::InvalidSymbolRate(symbol_rate));
    }
    if !(amplitude.is_finite() && amplitude > 0.0) {
        return Err(LineCodeError::InvalidAmplitude(amplitude));
    }
    Ok(())
}

fn default_levels() -> Levels {
    Levels::default()
}

fn default_schemes() -> Vec<Scheme> {
    vec![Scheme::Ttl, Scheme::NrzI, Scheme::NrzL]
}

/// A saved settings profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderProfile {
    /// Profile name (e.g., "Lab bench", "Slow demo")
    pub name: String,
    pub symbol_rate: f64,
    pub amplitude: f64,
    /// Level count for the multilevel scheme
    #[serde(default = "default_levels")]
    pub levels: Levels,
    /// Schemes to plot, in selection order
    #[serde(default = "default_schemes")]
    pub schemes: Vec<Scheme>,
}

impl EncoderProfile {
    pub fn validate(&self) -> LineCodeResult<()> {
        validate_parameters(self.symbol_rate, self.amplitude)
    }

    /// Apply this profile's timing and voltage to a set of bits
    pub fn config_for(&self, bits: Vec<bool>) -> EncodingConfig {
        EncodingConfig::new(bits)
            .with_symbol_rate(self.symbol_rate)
            .with_amplitude(self.amplitude)
    }
}

impl Default for EncoderProfile {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            symbol_rate: DEFAULT_SYMBOL_RATE,
            amplitude: DEFAULT_AMPLITUDE,
            levels: default_levels(),
            schemes: default_schemes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_configuration_has_reference_values() {
        let config = EncodingConfig::default();
        assert!(config.bits.is_empty());
        assert_eq!(config.symbol_rate, 1.0);
        assert_eq!(config.amplitude, 5.0);
        assert_eq!(config.bit_period(), 1.0);
    }

    #[test]
    fn builder_overrides_parameters() {
        let config = EncodingConfig::new(vec![true])
            .with_symbol_rate(4.0)
            .with_amplitude(3.3);
        assert_eq!(config.bit_period(), 0.25);
        assert_eq!(config.amplitude, 3.3);
    }

    #[test]
    fn from_hex_keeps_leading_zeros() {
        let config = EncodingConfig::from_hex("0A").unwrap();
        assert_eq!(
            config.bits,
            vec![false, false, false, false, true, false, true, false]
        );
    }

    #[test]
    fn validate_rejects_degenerate_parameters() {
        let base = EncodingConfig::new(vec![true]);
        assert!(base.validate().is_ok());
        assert!(matches!(
            base.clone().with_symbol_rate(0.0).validate(),
            Err(LineCodeError::InvalidSymbolRate(_))
        ));
        assert!(matches!(
            base.clone().with_symbol_rate(f64::INFINITY).validate(),
            Err(LineCodeError::InvalidSymbolRate(_))
        ));
        assert!(matches!(
            base.with_amplitude(f64::NAN).validate(),
            Err(LineCodeError::InvalidAmplitude(_))
        ));
    }

    #[test]
    fn default_profile_selects_three_schemes() {
        let profile = EncoderProfile::default();
        assert_eq!(profile.name, "Default");
        assert_eq!(profile.schemes, vec![Scheme::Ttl, Scheme::NrzI, Scheme::NrzL]);
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn profile_serializes_to_json() {
        let profile = EncoderProfile::default();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"name\":\"Default\""));
        let back: EncoderProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn profile_fills_missing_fields() {
        let json = r#"{"name":"Old","symbol_rate":2.0,"amplitude":1.0}"#;
        let profile: EncoderProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.levels, Levels::Four);
        assert_eq!(profile.schemes.len(), 3);
        assert_eq!(profile.config_for(vec![true]).bit_period(), 0.5);
    }
}
