//! Tracing subscriber setup driven by [`Settings`].
//!
//! The filter comes from the first usable source of: the `log_filter`
//! setting, `OVERTIP_LOG`, `RUST_LOG`, the build default. Sources holding a
//! directive that does not parse are skipped and reported once the
//! subscriber is up.
//!
//! Events always go to stdout. When stdout is not a terminal (the demo was
//! launched from the desktop) they also go to a daily rolling file.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::settings::{default_data_dir, Settings};

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "OVERTIP_LOG";

const LOG_FILE_PREFIX: &str = "overtip";

/// Where the active filter directive came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    Settings,
    OvertipLog,
    RustLog,
    Default,
}

/// The resolved filter directive.
#[derive(Debug, Clone, PartialEq)]
pub struct LogFilter {
    pub directive: String,
    pub source: FilterSource,
    /// Directives that were set but did not parse.
    pub rejected: Vec<(FilterSource, String)>,
}

/// Guard that must be held for the lifetime of the application.
///
/// Dropping it flushes the log file.
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber configured from `settings`.
pub fn init_logging(settings: &Settings) -> LoggingGuard {
    init_logging_in(settings, log_dir())
}

/// Like [`init_logging`], with log files written to `log_dir`.
pub fn init_logging_in(settings: &Settings, log_dir: PathBuf) -> LoggingGuard {
    let filter = resolve_filter(settings, |key| std::env::var(key).ok());
    let interactive = atty::is(atty::Stream::Stdout);

    let (file_writer, file_guard, file_error) = if interactive {
        (None, None, None)
    } else {
        match open_log_file(&log_dir) {
            Ok((writer, guard)) => (Some(writer), Some(guard), None),
            Err(e) => (None, None, Some(e)),
        }
    };

    let file_layer = file_writer.map(|writer| fmt::layer().with_writer(writer).with_ansi(false));
    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(&filter.directive))
        .with(fmt::layer().with_ansi(interactive).with_target(!interactive))
        .with(file_layer)
        .try_init();

    if installed.is_err() {
        tracing::debug!("Global subscriber already installed, keeping it");
    }
    for (source, directive) in &filter.rejected {
        tracing::warn!(?source, %directive, "Ignoring unparsable log filter");
    }
    if let Some(e) = file_error {
        tracing::warn!(dir = %log_dir.display(), error = %e, "File logging disabled");
    }
    tracing::debug!(directive = %filter.directive, source = ?filter.source, "Logging initialized");

    LoggingGuard { _file: file_guard }
}

/// Pick the filter directive. `env` looks up environment variables.
pub fn resolve_filter(settings: &Settings, env: impl Fn(&str) -> Option<String>) -> LogFilter {
    let candidates = [
        (FilterSource::Settings, settings.log_filter.clone()),
        (FilterSource::OvertipLog, env(LOG_ENV)),
        (FilterSource::RustLog, env("RUST_LOG")),
    ];

    let mut rejected = Vec::new();
    for (source, directive) in candidates {
        let Some(directive) = directive.filter(|d| !d.trim().is_empty()) else {
            continue;
        };
        if EnvFilter::try_new(&directive).is_ok() {
            return LogFilter { directive, source, rejected };
        }
        rejected.push((source, directive));
    }

    LogFilter {
        directive: default_log_filter().to_string(),
        source: FilterSource::Default,
        rejected,
    }
}

fn open_log_file(
    log_dir: &Path,
) -> Result<(NonBlocking, WorkerGuard), Box<dyn std::error::Error + Send + Sync>> {
    std::fs::create_dir_all(log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(log_dir)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Get the default log filter based on build type.
pub fn default_log_filter() -> &'static str {
    #[cfg(debug_assertions)]
    {
        "info,overtip=trace,overtip_core=trace,overtip_ui=debug"
    }
    #[cfg(not(debug_assertions))]
    {
        "warn,overtip=info,overtip_core=info,overtip_ui=info"
    }
}

/// Get the default log directory.
pub fn log_dir() -> PathBuf {
    default_data_dir().join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    fn with_filter(filter: &str) -> Settings {
        Settings { log_filter: Some(filter.to_string()), ..Settings::default() }
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(default_log_filter()).is_ok());
    }

    #[test]
    fn test_settings_filter_wins_over_environment() {
        let env = env_of(&[(LOG_ENV, "warn"), ("RUST_LOG", "error")]);
        let filter = resolve_filter(&with_filter("overtip_core=trace"), env);
        assert_eq!(filter.directive, "overtip_core=trace");
        assert_eq!(filter.source, FilterSource::Settings);
        assert!(filter.rejected.is_empty());
    }

    #[test]
    fn test_environment_order() {
        let both = env_of(&[(LOG_ENV, "warn"), ("RUST_LOG", "error")]);
        assert_eq!(resolve_filter(&Settings::default(), both).source, FilterSource::OvertipLog);

        let rust_log = env_of(&[("RUST_LOG", "error")]);
        let filter = resolve_filter(&Settings::default(), rust_log);
        assert_eq!((filter.source, filter.directive.as_str()), (FilterSource::RustLog, "error"));
    }

    #[test]
    fn test_unparsable_directive_falls_through() {
        let env = env_of(&[(LOG_ENV, "debug")]);
        let filter = resolve_filter(&with_filter("overtip_core=loud"), env);
        assert_eq!(filter.source, FilterSource::OvertipLog);
        assert_eq!(
            filter.rejected,
            vec![(FilterSource::Settings, "overtip_core=loud".to_string())]
        );
    }

    #[test]
    fn test_blank_sources_use_build_default() {
        let env = env_of(&[(LOG_ENV, "  ")]);
        let filter = resolve_filter(&with_filter(""), env);
        assert_eq!(filter.source, FilterSource::Default);
        assert_eq!(filter.directive, default_log_filter());
        assert!(filter.rejected.is_empty());
    }

    #[test]
    fn test_log_file_directory_is_created() {
        let dir = tempfile::TempDir::new().unwrap();
        let logs = dir.path().join("nested").join("logs");
        let (_writer, _guard) = open_log_file(&logs).unwrap();
        assert!(logs.is_dir());
    }
}
