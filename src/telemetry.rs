//! Structured logging setup.

use tracing_subscriber::EnvFilter;

use crate::error::{Result, TelemetryError};

/// Filter applied when `RUST_LOG` is unset or unusable.
pub const DEFAULT_FILTER: &str = "info";

/// Logging configuration, usually read from the environment.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// `EnvFilter` directives; `None` means [`DEFAULT_FILTER`].
    pub filter: Option<String>,
    pub ansi: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: None,
            ansi: true,
        }
    }
}

impl TelemetryConfig {
    /// Reads `RUST_LOG` and `NO_COLOR`.
    ///
    /// A `RUST_LOG` value that does not parse is ignored in favour of the
    /// default filter.
    pub fn from_env() -> Self {
        let filter = std::env::var(EnvFilter::DEFAULT_ENV)
            .ok()
            .filter(|directives| EnvFilter::try_new(directives).is_ok());
        let ansi = std::env::var_os("NO_COLOR").map_or(true, |value| value.is_empty());
        Self { filter, ansi }
    }

    pub fn with_filter(mut self, directives: impl Into<String>) -> Self {
        self.filter = Some(directives.into());
        self
    }

    pub fn env_filter(&self) -> Result<EnvFilter> {
        let directives = self.filter.as_deref().unwrap_or(DEFAULT_FILTER);
        EnvFilter::try_new(directives).map_err(|source| TelemetryError::InvalidFilter {
            filter: directives.to_string(),
            source,
        })
    }
}

/// Installs the global subscriber described by `config`.
pub fn init(config: &TelemetryConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_ansi(config.ansi)
        .compact()
        .try_init()
        .map_err(TelemetryError::Install)
}

/// Setup tracing once for the entire application, configured from the environment.
pub fn setup_tracing() -> Result<()> {
    init(&TelemetryConfig::from_env())
}
