//! Port traits (interfaces)
//!
//! These traits define the boundaries between the encoding core and whatever
//! draws or stores its results. Adapters implement them.

pub mod plot;
pub mod profiles;

pub use plot::*;
pub use profiles::*;
