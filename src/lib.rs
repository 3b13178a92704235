//! Line-code waveform generator
//!
//! Turns a bit sequence into the step waveforms an oscilloscope would show
//! for the classic line codes: TTL, NRZ-L, NRZ-I, Bipolar-AMI,
//! Pseudoternary, Manchester, Differential Manchester and multilevel, plus a
//! reference clock.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Samples, waveforms, schemes, configuration, errors
//! - `encoding/` - Hex input, line-code state machines, the generator (pure)
//! - `session/` - Scheme selection and plot assembly for a front end
//! - `ports/` - Trait definitions for drawing and profile storage
//! - `adapters/` - Implementations of ports (in-memory traces, JSON profiles)

// Core (pure, no I/O)
pub mod domain;
pub mod encoding;
pub mod session;

// Boundaries
pub mod adapters;
pub mod ports;

pub use domain::{EncodingConfig, LineCodeError, LineCodeResult, Sample, Scheme, Waveform};
pub use encoding::WaveformGenerator;

/// Install `env_logger` as the log backend, defaulting to `info`.
///
/// Front ends call this once at startup; `RUST_LOG` overrides the level.
/// Calling it again is harmless.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already initialized");
    }
}
