//! User settings stored as JSON in the application data directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::border::BORDER_WIDTH;
use crate::error::OverlayError;
use crate::placement::PlacementConfig;

/// File name of the settings file inside the data directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Tooltip settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Placement tunables.
    pub placement: PlacementConfig,
    /// Width of the border drawn around every overlay.
    pub border_width: f64,
    /// Log filter directive overriding the build default.
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self { placement: PlacementConfig::default(), border_width: BORDER_WIDTH, log_filter: None }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, OverlayError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), "Settings loaded");
        Ok(settings)
    }

    /// Read the settings file in `data_dir` before logging is up.
    ///
    /// Never fails: an unreadable file yields the defaults, and the error is
    /// kept so it can be reported once a subscriber is installed.
    pub fn load_at_startup(data_dir: &Path) -> StartupSettings {
        let path = settings_path(data_dir);
        match Self::load(&path) {
            Ok(settings) => StartupSettings { settings, path, error: None },
            Err(e) => StartupSettings { settings: Self::default(), path, error: Some(e) },
        }
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), OverlayError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        tracing::debug!(path = %path.display(), "Settings saved");
        Ok(())
    }

    fn validate(&self) -> Result<(), OverlayError> {
        let numbers = [
            ("border_width", self.border_width),
            ("placement.h_safety_margin", self.placement.h_safety_margin),
            ("placement.v_padding", self.placement.v_padding),
        ];
        for (name, value) in numbers {
            if !value.is_finite() || value < 0.0 {
                return Err(OverlayError::settings(
                    format!("{name} must be a non-negative number, got {value}"),
                    Some("Fix or delete the settings file"),
                ));
            }
        }
        Ok(())
    }
}

/// Settings read at startup, with the load failure if there was one.
#[derive(Debug)]
pub struct StartupSettings {
    pub settings: Settings,
    pub path: PathBuf,
    pub error: Option<OverlayError>,
}

impl StartupSettings {
    /// Log the load failure, if any. Call after logging is initialized.
    pub fn report(&self) {
        if let Some(e) = &self.error {
            tracing::warn!(
                path = %self.path.display(),
                error = %e,
                hint = e.hint().unwrap_or_default(),
                "Ignoring unreadable settings, using defaults"
            );
        }
    }
}

/// Path of the settings file inside `data_dir`.
pub fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SETTINGS_FILE)
}

/// Get the default data directory based on OS and build type.
pub fn default_data_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from("./overtip_data")
    }

    #[cfg(not(debug_assertions))]
    {
        dirs::data_dir()
            .map(|d| {
                #[cfg(target_os = "macos")]
                {
                    d.join("dev.overtip.Overtip")
                }
                #[cfg(not(target_os = "macos"))]
                {
                    d.join("overtip")
                }
            })
            .unwrap_or_else(|| PathBuf::from("./overtip_data"))
    }
}

#[cfg(feature = "gpui")]
impl gpui::Global for Settings {}
