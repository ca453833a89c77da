//! Tincture Platform Providers
//!
//! The theme engine never touches the environment directly; everything that
//! depends on where the application runs is injected through one of three
//! capability traits:
//!
//! - [`PreferenceStore`]: persists the user's explicit scheme choice
//! - [`DocumentTarget`]: receives the CSS custom-property projection
//! - [`SchemeSource`]: reports the OS-level light/dark preference
//!
//! Each trait ships with a real implementation, an in-memory implementation
//! for tests, and a no-op implementation for headless contexts. A host that
//! embeds the engine somewhere unusual (a webview bridge, a remote render
//! target) implements the trait itself and passes it to the theme context.

pub mod document;
pub mod error;
pub mod prefs;
pub mod system;

pub use document::{DocumentTarget, MemoryDocument, NoopDocument};
pub use error::{Result, StoreError};
pub use prefs::{FilePreferences, MemoryPreferences, NoopPreferences, PreferenceStore, ThemePrefs};
pub use system::{detect_system_scheme, SchemeSource, StaticScheme, SystemScheme};
