//! Default stderr sink for applications without their own subscriber.
//!
//! ```no_run
//! use tenet::logging::LoggingConfig;
//!
//! LoggingConfig::builder()
//!     .filter("tenet=error,my_service=info")
//!     .init()
//!     .expect("logging already configured");
//! ```

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::TARGET;

/// Level applied to [`TARGET`] when no filter is configured.
pub const DEFAULT_LEVEL: &str = "error";

/// Filter used when none is configured: only assertion diagnostics.
pub fn default_filter() -> String {
    format!("{}={}", TARGET, DEFAULT_LEVEL)
}

/// Errors from installing the stderr sink.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid filter directive: {0}")]
    InvalidFilter(#[from] ParseError),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Configuration for the stderr sink.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    filter: String,
    ansi: bool,
    respect_env: bool,
}

impl LoggingConfig {
    /// Creates a new configuration builder with default settings.
    pub fn builder() -> LoggingConfigBuilder {
        LoggingConfigBuilder::default()
    }

    /// The configured filter directive, before any `RUST_LOG` override.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Resolves the filter, letting `RUST_LOG` win when allowed and set.
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        if self.respect_env {
            if let Ok(directives) = std::env::var(EnvFilter::DEFAULT_ENV) {
                return Ok(EnvFilter::try_new(directives)?);
            }
        }
        Ok(EnvFilter::try_new(&self.filter)?)
    }

    /// Installs the sink as the global default subscriber.
    pub fn init(self) -> Result<(), LoggingError> {
        let filter = self.env_filter()?;

        // Event metadata points at the sink module; the failing call site is
        // carried in the `file`/`line`/`column` fields instead.
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(self.ansi)
            .with_target(true)
            .with_file(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(layer)
            .with(filter)
            .try_init()?;

        Ok(())
    }
}

/// Builder for `LoggingConfig`.
#[derive(Debug, Default)]
pub struct LoggingConfigBuilder {
    filter: Option<String>,
    ansi: Option<bool>,
    respect_env: Option<bool>,
}

impl LoggingConfigBuilder {
    /// Sets the filter directive (default: [`default_filter`]).
    pub fn filter(mut self, directive: impl Into<String>) -> Self {
        self.filter = Some(directive.into());
        self
    }

    /// Enables ANSI colours (default: false).
    pub fn ansi(mut self, ansi: bool) -> Self {
        self.ansi = Some(ansi);
        self
    }

    /// Whether `RUST_LOG` overrides the configured filter (default: true).
    pub fn respect_env(mut self, respect: bool) -> Self {
        self.respect_env = Some(respect);
        self
    }

    /// Builds the configuration, filling unset options with defaults.
    pub fn build(self) -> LoggingConfig {
        LoggingConfig {
            filter: self.filter.unwrap_or_else(default_filter),
            ansi: self.ansi.unwrap_or(false),
            respect_env: self.respect_env.unwrap_or(true),
        }
    }

    /// Builds the configuration and installs it.
    pub fn init(self) -> Result<(), LoggingError> {
        self.build().init()
    }
}
