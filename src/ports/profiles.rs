//! Profile storage port trait

use crate::domain::{EncoderProfile, LineCodeResult};

/// Named storage for encoder profiles
pub trait ProfileRepository {
    /// Store a profile under its own name, replacing any previous one
    fn save(&self, profile: &EncoderProfile) -> LineCodeResult<()>;

    fn load(&self, name: &str) -> LineCodeResult<EncoderProfile>;

    /// Names of all stored profiles, sorted
    fn list(&self) -> LineCodeResult<Vec<String>>;

    fn delete(&self, name: &str) -> LineCodeResult<()>;
}
