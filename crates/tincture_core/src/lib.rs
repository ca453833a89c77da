//! Tincture Core Primitives
//!
//! This crate provides the foundational value types shared across the
//! Tincture theme engine:
//!
//! - **Color**: RGBA color with hex parsing, CSS formatting, and relative
//!   luminance
//! - **ColorScheme**: the light/dark mode selector persisted and reported by
//!   the platform layer
//!
//! # Example
//!
//! ```rust
//! use tincture_core::{Color, ColorScheme};
//!
//! let brand = Color::from_hex(0x2563EB);
//! assert_eq!(brand.to_css_string(), "#2563eb");
//!
//! let veil = brand.with_alpha(0.35);
//! assert_eq!(veil.to_css_string(), "rgba(37,99,235,0.35)");
//!
//! assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
//! ```

pub mod color;
pub mod scheme;

pub use color::{Color, ParseColorError};
pub use scheme::ColorScheme;
