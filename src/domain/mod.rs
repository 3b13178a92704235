//! Core domain types
//!
//! Pure types with no I/O dependencies: samples, waveforms, schemes and the
//! encoding configuration shared by every generator.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
