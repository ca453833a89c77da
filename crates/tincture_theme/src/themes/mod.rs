//! Theme projectors
//!
//! A projector turns the token store into concrete [`SemanticTheme`] values.
//! The engine ships one projector, [`StandardTheme`]; hosts with their own
//! design mapping construct [`SemanticTheme`]/[`ThemeBundle`] directly.
//!
//! [`SemanticTheme`]: crate::SemanticTheme
//! [`ThemeBundle`]: crate::ThemeBundle

mod standard;

pub use standard::StandardTheme;
