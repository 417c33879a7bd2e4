//! Light and dark color modes.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

/// The user's preferred color mode.
///
/// Themes may provide per-mode colors under `colors.modes.<mode>`; the
/// token engine consults them before the base `colors` scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Detects the current color mode using the installed detector.
    ///
    /// Defaults to asking the operating system.
    pub fn detect() -> Self {
        let detector = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
        (*detector)()
    }

    /// Returns the name used for this mode under `colors.modes`.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used by [`ColorMode::detect`].
///
/// The CLI's `--mode auto` and the token engine callers go through this
/// hook; tests install a fixed mode here instead of querying the desktop.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
