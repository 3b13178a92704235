//! Line encoding
//!
//! Hex message input, the line-code state machines and the waveform generator

pub mod generator;
pub mod hex;
pub mod line_code;

pub use generator::WaveformGenerator;
pub use line_code::{LineCode, Symbol};
