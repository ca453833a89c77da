//! Design token store
//!
//! Tokens are the raw material of the theme system: eight named color ramps,
//! each a shade-indexed scale from near-white (50) to near-black (950).
//! Semantic meaning is assigned one layer up, by the theme projector.

mod ramp;
mod store;

pub use ramp::{ColorRamp, Shade};
pub use store::{ramps, Palette, TokenStore, TOKENS};
