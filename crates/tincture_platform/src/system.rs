//! OS color-scheme signal
//!
//! The OS preference is consumed, never written. `None` means the platform
//! gave no answer; the theme context falls back to its default scheme.

use tincture_core::ColorScheme;

/// Read-only source for the OS-level light/dark preference
pub trait SchemeSource: Send + Sync {
    /// Current OS preference, if the platform exposes one
    fn current(&self) -> Option<ColorScheme>;
}

/// Fixed answer, for tests and hosts that resolve the scheme themselves
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticScheme(pub Option<ColorScheme>);

impl SchemeSource for StaticScheme {
    fn current(&self) -> Option<ColorScheme> {
        self.0
    }
}

/// Best-effort query of the running desktop's preference
#[derive(Default)]
pub struct SystemScheme;

impl SchemeSource for SystemScheme {
    fn current(&self) -> Option<ColorScheme> {
        let scheme = detect_system_scheme();
        tracing::debug!(?scheme, "queried OS color scheme");
        scheme
    }
}

/// Query the OS light/dark preference
///
/// macOS reads `AppleInterfaceStyle` from the global defaults domain; the key
/// is only present in dark mode, so a clean miss means light. GNOME exposes
/// `color-scheme` through gsettings. Platforms without a known query return
/// `None`.
pub fn detect_system_scheme() -> Option<ColorScheme> {
    #[cfg(target_os = "macos")]
    {
        let output = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .ok()?;
        if output.status.success() {
            let style = String::from_utf8_lossy(&output.stdout);
            if style.trim().eq_ignore_ascii_case("dark") {
                return Some(ColorScheme::Dark);
            }
        }
        Some(ColorScheme::Light)
    }

    #[cfg(target_os = "linux")]
    {
        let output = std::process::Command::new("gsettings")
            .args(["get", "org.gnome.desktop.interface", "color-scheme"])
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        let value = String::from_utf8_lossy(&output.stdout);
        if value.contains("prefer-dark") {
            Some(ColorScheme::Dark)
        } else {
            Some(ColorScheme::Light)
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_scheme_reports_its_value() {
        assert_eq!(StaticScheme(None).current(), None);
        assert_eq!(
            StaticScheme(Some(ColorScheme::Dark)).current(),
            Some(ColorScheme::Dark)
        );
    }
}
