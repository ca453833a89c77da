//! The theme context: owner of the active theme state
//!
//! One `ThemeContext` is constructed at the application root with its
//! platform providers and shared (by reference or `Arc`) with everything
//! that reads colors. All mutation goes through the context's own entry
//! points; provider failures are contained here and never block the
//! in-memory state.
//!
//! Lifecycle: a context starts unmounted with the default scheme. `init`
//! resolves the real scheme (persisted preference, then OS signal, then
//! default), projects it onto the document, and marks the context mounted.
//! Hosts that render before `init` completes should keep themed content
//! hidden until `mounted` reports true, to avoid a flash of the wrong
//! scheme.

use crate::css;
use crate::theme::{ColorRole, ColorScheme, SemanticTheme, ThemeBundle};
use crate::themes::StandardTheme;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tincture_core::Color;
use tincture_platform::{
    DocumentTarget, NoopDocument, NoopPreferences, PreferenceStore, SchemeSource, SystemScheme,
};

/// Scheme the context reports before `init` and when every source is silent
pub const DEFAULT_SCHEME: ColorScheme = ColorScheme::Light;

/// Active theme state and its entry points
pub struct ThemeContext {
    /// The light/dark pair this context selects from
    bundle: ThemeBundle,

    /// Currently active scheme
    scheme: RwLock<ColorScheme>,

    /// Whether `init` has completed
    mounted: AtomicBool,

    /// Whether the user ever chose a scheme explicitly; while false, the OS
    /// signal is followed
    explicit_choice: AtomicBool,

    /// Dynamic color overrides, in-memory only
    color_overrides: RwLock<FxHashMap<ColorRole, Color>>,

    prefs: Arc<dyn PreferenceStore>,
    document: Arc<dyn DocumentTarget>,
    system: Arc<dyn SchemeSource>,
}

impl ThemeContext {
    /// Build a context over explicit providers
    pub fn new(
        bundle: ThemeBundle,
        prefs: Arc<dyn PreferenceStore>,
        document: Arc<dyn DocumentTarget>,
        system: Arc<dyn SchemeSource>,
    ) -> Self {
        Self {
            bundle,
            scheme: RwLock::new(DEFAULT_SCHEME),
            mounted: AtomicBool::new(false),
            explicit_choice: AtomicBool::new(false),
            color_overrides: RwLock::new(FxHashMap::default()),
            prefs,
            document,
            system,
        }
    }

    /// Standard bundle, file-backed preferences, OS scheme detection, and no
    /// document surface
    ///
    /// Hosts with a styling surface pass their own [`DocumentTarget`] to
    /// [`ThemeContext::new`].
    pub fn with_system_defaults() -> Self {
        let prefs: Arc<dyn PreferenceStore> = match tincture_platform::FilePreferences::new() {
            Ok(store) => Arc::new(store),
            Err(err) => {
                tracing::warn!(%err, "preference store unavailable, scheme choices will not persist");
                Arc::new(NoopPreferences)
            }
        };
        Self::new(
            StandardTheme::bundle(),
            prefs,
            Arc::new(NoopDocument),
            Arc::new(SystemScheme),
        )
    }

    // ========== Lifecycle ==========

    /// Resolve the initial scheme and mount the context
    ///
    /// Resolution order: persisted preference, then OS signal, then
    /// [`DEFAULT_SCHEME`]. A failed preference read degrades to the next
    /// source. Calling `init` on a mounted context is a no-op.
    pub fn init(&self) {
        if self.mounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("theme context already mounted");
            return;
        }

        let persisted = match self.prefs.load() {
            Ok(persisted) => persisted,
            Err(err) => {
                tracing::warn!(%err, "failed to read persisted scheme preference");
                None
            }
        };

        let scheme = match persisted {
            Some(scheme) => {
                self.explicit_choice.store(true, Ordering::SeqCst);
                tracing::debug!(%scheme, "restored persisted scheme preference");
                scheme
            }
            None => match self.system.current() {
                Some(scheme) => {
                    tracing::debug!(%scheme, "following OS color scheme");
                    scheme
                }
                None => DEFAULT_SCHEME,
            },
        };

        *self.scheme.write().unwrap() = scheme;
        self.apply_to_document();
    }

    /// Whether `init` has completed
    pub fn mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    // ========== Scheme ==========

    /// Currently active scheme
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap()
    }

    /// The active semantic theme
    pub fn theme(&self) -> &SemanticTheme {
        self.bundle.for_scheme(self.scheme())
    }

    /// Explicitly select a scheme; persists and re-projects
    pub fn set_scheme(&self, scheme: ColorScheme) {
        self.explicit_choice.store(true, Ordering::SeqCst);
        if let Err(err) = self.prefs.save(scheme) {
            tracing::warn!(%err, "failed to persist scheme preference");
        }
        self.apply_scheme(scheme);
    }

    /// Select a scheme by name
    ///
    /// Unknown names are corrected to [`DEFAULT_SCHEME`] with a warning;
    /// this is the lenient edge for host configuration and scripting
    /// surfaces, never an error.
    pub fn set_scheme_by_name(&self, name: &str) {
        match ColorScheme::from_name(name) {
            Some(scheme) => self.set_scheme(scheme),
            None => {
                tracing::warn!(name, "unknown scheme name, falling back to light");
                self.set_scheme(DEFAULT_SCHEME);
            }
        }
    }

    /// Flip between light and dark
    pub fn toggle_scheme(&self) {
        self.set_scheme(self.scheme().toggle());
    }

    /// React to an OS color-scheme change
    ///
    /// Honored only while the user has never chosen explicitly; an explicit
    /// choice pins the scheme for the rest of the session.
    pub fn handle_system_scheme_change(&self, scheme: ColorScheme) {
        if self.explicit_choice.load(Ordering::SeqCst) {
            tracing::debug!(%scheme, "ignoring OS scheme change, user chose explicitly");
            return;
        }
        self.apply_scheme(scheme);
    }

    /// Update the in-memory scheme and re-project on change
    fn apply_scheme(&self, scheme: ColorScheme) {
        {
            let mut current = self.scheme.write().unwrap();
            if *current == scheme {
                return;
            }
            let previous = *current;
            *current = scheme;
            tracing::debug!(from = %previous, to = %scheme, "switching scheme");
        }
        self.apply_to_document();
    }

    // ========== Color access ==========

    /// Get a color by role (checks overrides first)
    pub fn color(&self, role: ColorRole) -> Color {
        if let Some(color) = self.color_overrides.read().unwrap().get(&role) {
            return *color;
        }
        self.theme().color(role)
    }

    /// Set a color override; wins over the semantic mapping until removed
    pub fn set_color_override(&self, role: ColorRole, color: Color) {
        self.color_overrides.write().unwrap().insert(role, color);
        self.apply_to_document();
    }

    /// Remove a single color override
    pub fn remove_color_override(&self, role: ColorRole) {
        self.color_overrides.write().unwrap().remove(&role);
        self.apply_to_document();
    }

    /// Clear all overrides
    pub fn clear_overrides(&self) {
        self.color_overrides.write().unwrap().clear();
        self.apply_to_document();
    }

    // ========== Projection ==========

    /// Re-project the active theme onto the document provider
    pub fn apply_to_document(&self) {
        css::project(&*self.document, &|role| self.color(role));
    }

    /// The active projection as a plain map (override-aware)
    pub fn variable_map(&self) -> HashMap<String, String> {
        let mut vars = HashMap::with_capacity(ColorRole::ALL.len());
        for role in ColorRole::ALL {
            vars.insert(css::css_var_name(role), self.color(role).to_css_string());
        }
        vars
    }
}
