//! Persisted scheme preference
//!
//! A single small value — the scheme the user last chose explicitly — lives
//! behind the [`PreferenceStore`] trait. Absence is a valid state: it means
//! the user never made an explicit choice and the OS signal may be followed.

use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use tincture_core::ColorScheme;

/// On-disk shape of the persisted preference
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePrefs {
    pub scheme: ColorScheme,
}

/// Storage for the user's explicit scheme choice
pub trait PreferenceStore: Send + Sync {
    /// Read the persisted preference; `Ok(None)` when nothing was stored
    fn load(&self) -> Result<Option<ColorScheme>>;

    /// Persist an explicit choice
    fn save(&self, scheme: ColorScheme) -> Result<()>;
}

/// In-memory store for tests and short-lived tools
#[derive(Default)]
pub struct MemoryPreferences {
    value: Mutex<Option<ColorScheme>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a stored preference, as if a prior session saved one
    pub fn with_stored(scheme: ColorScheme) -> Self {
        Self {
            value: Mutex::new(Some(scheme)),
        }
    }

    /// Current stored value, for assertions
    pub fn stored(&self) -> Option<ColorScheme> {
        *self.value.lock().unwrap()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Result<Option<ColorScheme>> {
        Ok(*self.value.lock().unwrap())
    }

    fn save(&self, scheme: ColorScheme) -> Result<()> {
        *self.value.lock().unwrap() = Some(scheme);
        Ok(())
    }
}

/// Store for contexts with no persistence at all; loads nothing, saves nowhere
#[derive(Default)]
pub struct NoopPreferences;

impl PreferenceStore for NoopPreferences {
    fn load(&self) -> Result<Option<ColorScheme>> {
        Ok(None)
    }

    fn save(&self, _scheme: ColorScheme) -> Result<()> {
        Ok(())
    }
}

/// TOML file under the user config directory
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Store at `<config_dir>/tincture/theme.toml`
    pub fn new() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| StoreError::Unavailable("no user config directory".into()))?;
        Ok(Self::at_path(base.join("tincture").join("theme.toml")))
    }

    /// Store at an explicit path (tests, portable installs)
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self) -> Result<Option<ColorScheme>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Read(err.to_string())),
        };

        let prefs: ThemePrefs =
            toml::from_str(&raw).map_err(|err| StoreError::Malformed(err.to_string()))?;
        Ok(Some(prefs.scheme))
    }

    fn save(&self, scheme: ColorScheme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| StoreError::Write(err.to_string()))?;
        }

        let raw = toml::to_string_pretty(&ThemePrefs { scheme })
            .map_err(|err| StoreError::Write(err.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|err| StoreError::Write(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefs_serialize_as_lowercase_scheme_name() {
        let raw = toml::to_string(&ThemePrefs {
            scheme: ColorScheme::Dark,
        })
        .unwrap();
        assert_eq!(raw.trim(), r#"scheme = "dark""#);

        let parsed: ThemePrefs = toml::from_str(r#"scheme = "light""#).unwrap();
        assert_eq!(parsed.scheme, ColorScheme::Light);
    }

    #[test]
    fn test_memory_store_round_trips() {
        let store = MemoryPreferences::new();
        assert_eq!(store.load().unwrap(), None);

        store.save(ColorScheme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(ColorScheme::Dark));
        assert_eq!(store.stored(), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_file_store_round_trips_and_treats_absence_as_none() {
        let dir = std::env::temp_dir().join("tincture-prefs-test");
        let _ = std::fs::remove_dir_all(&dir);
        let store = FilePreferences::at_path(dir.join("theme.toml"));

        assert_eq!(store.load().unwrap(), None);

        store.save(ColorScheme::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(ColorScheme::Dark));

        store.save(ColorScheme::Light).unwrap();
        assert_eq!(store.load().unwrap(), Some(ColorScheme::Light));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_store_reports_malformed_data() {
        let dir = std::env::temp_dir().join("tincture-prefs-malformed");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("theme.toml");
        std::fs::write(&path, "scheme = \"purple\"").unwrap();

        let store = FilePreferences::at_path(path);
        assert!(matches!(store.load(), Err(StoreError::Malformed(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
