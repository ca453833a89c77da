//! Document projection target
//!
//! The CSS projection writes `--color-*` custom properties and a theme-color
//! meta value through this trait. Writes must be cheap and safe to repeat;
//! the engine re-projects the full theme on every scheme change.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Sink for the flattened theme projection
pub trait DocumentTarget: Send + Sync {
    /// Set a custom property on the document root, e.g.
    /// `--color-background-primary` → `#fafafa`
    fn set_property(&self, name: &str, value: &str);

    /// Update the mobile-browser theme-color meta value
    fn set_meta_theme_color(&self, value: &str);
}

/// In-memory document for tests and headless inspection
///
/// Records the property map and counts writes that actually changed a value,
/// so idempotence is observable.
#[derive(Default)]
pub struct MemoryDocument {
    properties: Mutex<BTreeMap<String, String>>,
    meta_theme_color: Mutex<Option<String>>,
    mutations: AtomicUsize,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<String> {
        self.properties.lock().unwrap().get(name).cloned()
    }

    pub fn properties(&self) -> BTreeMap<String, String> {
        self.properties.lock().unwrap().clone()
    }

    pub fn meta_theme_color(&self) -> Option<String> {
        self.meta_theme_color.lock().unwrap().clone()
    }

    /// Number of writes that changed stored state
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }
}

impl DocumentTarget for MemoryDocument {
    fn set_property(&self, name: &str, value: &str) {
        let mut properties = self.properties.lock().unwrap();
        let changed = properties.get(name).map(String::as_str) != Some(value);
        if changed {
            properties.insert(name.to_owned(), value.to_owned());
            self.mutations.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn set_meta_theme_color(&self, value: &str) {
        let mut meta = self.meta_theme_color.lock().unwrap();
        if meta.as_deref() != Some(value) {
            *meta = Some(value.to_owned());
            self.mutations.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Document target for contexts with no styling surface; every write is a no-op
#[derive(Default)]
pub struct NoopDocument;

impl DocumentTarget for NoopDocument {
    fn set_property(&self, _name: &str, _value: &str) {}

    fn set_meta_theme_color(&self, _value: &str) {}
}
