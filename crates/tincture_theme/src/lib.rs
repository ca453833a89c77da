//! Tincture Theme Engine
//!
//! A design-token theme engine for embedded UI shells: palette ramps,
//! light/dark semantic themes, a stateful theme context with preference
//! persistence and OS color-scheme sync, and CSS custom-property projection
//! for document-styled surfaces.
//!
//! # Overview
//!
//! - **Token store**: eight shade-indexed color ramps, defined once as
//!   constants
//! - **Semantic themes**: UI-meaningful roles (background, text, brand,
//!   surface, border, interactive, status, navigation, accent) mapped to
//!   token values, independently for light and dark
//! - **Theme context**: the single owner of the active scheme, with
//!   persistence and OS preference sync behind injected providers
//! - **Projection and resolution**: `--color-*` custom properties for
//!   stylesheet consumers, typed and dotted-path accessors for components
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use tincture_platform::{MemoryDocument, MemoryPreferences, StaticScheme};
//! use tincture_theme::{ColorRole, StandardTheme, ThemeContext};
//!
//! let context = ThemeContext::new(
//!     StandardTheme::bundle(),
//!     Arc::new(MemoryPreferences::new()),
//!     Arc::new(MemoryDocument::new()),
//!     Arc::new(StaticScheme(None)),
//! );
//! context.init();
//!
//! // Typed access in components
//! let brand = context.color(ColorRole::BrandPrimary);
//!
//! // Dotted paths for config-driven consumers
//! assert_eq!(context.resolve("brand.primary"), brand);
//!
//! context.toggle_scheme();
//! assert_ne!(context.color(ColorRole::BrandPrimary), brand);
//! ```
//!
//! # Architecture
//!
//! The engine never touches the environment directly. Persistence, the
//! document surface, and the OS scheme signal are [`tincture_platform`]
//! traits injected at construction, so the same context runs under a real
//! shell, a test harness, or a headless tool. Theming failures never
//! propagate: provider errors are logged and degraded, unknown names and
//! paths fall back to safe defaults.

pub mod css;
pub mod resolve;
pub mod state;
pub mod theme;
pub mod themes;
pub mod tokens;

#[cfg(feature = "watcher")]
pub mod watcher;

// Re-export commonly used types
pub use css::{apply_theme, css_var_name, variable_map};
pub use resolve::parse_token_path;
pub use state::{ThemeContext, DEFAULT_SCHEME};
pub use theme::{ColorRole, ColorScheme, SemanticTheme, ThemeBundle};
pub use themes::StandardTheme;
pub use tincture_core::Color;
pub use tokens::{ColorRamp, Palette, Shade, TokenStore, TOKENS};

#[cfg(feature = "watcher")]
pub use watcher::{SchemeWatcher, WatcherConfig};
