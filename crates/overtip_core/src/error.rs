//! Error types for overlay windows and handler interception.
//!
//! Placement itself is infallible; these cover the edges that touch the
//! host platform, the handler registry and the settings file.

use thiserror::Error;

use crate::interception::HandlerKey;

/// Main error type for the overtip crates.
#[derive(Debug, Error)]
pub enum OverlayError {
    /// The host could not create or show the overlay window.
    #[error("Window error: {message}")]
    Window {
        /// Human-readable error message.
        message: String,
    },

    /// A handler was already intercepted for this key.
    #[error("Handler already intercepted: {key}")]
    AlreadyIntercepted {
        /// The (target, event) pair that was registered twice.
        key: HandlerKey,
    },

    /// Settings could not be read or written.
    #[error("Settings error: {message}")]
    Settings {
        /// Human-readable error message.
        message: String,
        /// Actionable hint for the user.
        hint: Option<String>,
        /// Optional underlying error source.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl OverlayError {
    // ========== Constructors ==========

    /// Create a new window error.
    pub fn window(message: impl Into<String>) -> Self {
        Self::Window { message: message.into() }
    }

    /// Create a duplicate-interception error.
    pub fn already_intercepted(key: HandlerKey) -> Self {
        Self::AlreadyIntercepted { key }
    }

    /// Create a new settings error.
    pub fn settings(message: impl Into<String>, hint: Option<&str>) -> Self {
        Self::Settings { message: message.into(), hint: hint.map(String::from), source: None }
    }

    // ========== Methods ==========

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Window { .. } => "Window",
            Self::AlreadyIntercepted { .. } => "Interception",
            Self::Settings { .. } => "Settings",
        }
    }

    /// Get actionable hint for the user.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Window { .. } => None,
            Self::AlreadyIntercepted { .. } => {
                Some("Install tracking once per owner during application setup")
            }
            Self::Settings { hint, .. } => hint.as_deref(),
        }
    }
}

// ========== Error Conversions ==========

/// Convert from std::io::Error to OverlayError.
impl From<std::io::Error> for OverlayError {
    fn from(err: std::io::Error) -> Self {
        OverlayError::Settings {
            message: err.to_string(),
            hint: Some("Check file permissions and disk space".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

/// Convert from serde_json::Error to OverlayError.
impl From<serde_json::Error> for OverlayError {
    fn from(err: serde_json::Error) -> Self {
        OverlayError::Settings {
            message: format!("JSON error: {err}"),
            hint: Some("Fix or delete the settings file".to_string()),
            source: Some(Box::new(err)),
        }
    }
}
