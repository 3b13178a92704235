//! Adapters: implementations of the port traits
//!
//! - `trace_buffer`: in-memory `PlotTarget`
//! - `json_profiles`: `ProfileRepository` backed by JSON files

pub mod json_profiles;
pub mod trace_buffer;

pub use json_profiles::JsonProfileStore;
pub use trace_buffer::TraceBuffer;
