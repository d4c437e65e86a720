//! Log subscriber setup.
//!
//! Lambda forwards the process stdout to CloudWatch, which stamps every line
//! on arrival, so the subscriber writes plain lines without timestamps or
//! colour codes.

use crate::Error;
use tracing::Subscriber;
use tracing_subscriber::{fmt::MakeWriter, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is unset or blank.
pub const DEFAULT_FILTER: &str = "info";

/// Settings for the global `tracing` subscriber.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// An [`EnvFilter`] directive string, e.g. `info` or `cloudguard_app=debug`.
    pub filter: String,
    /// Emit ANSI colour codes.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            ansi: false,
        }
    }
}

impl LogConfig {
    /// Read the filter from `RUST_LOG`.
    pub fn from_env() -> Self {
        Self::with_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok())
    }

    fn with_filter(filter: Option<String>) -> Self {
        match filter {
            Some(filter) if !filter.trim().is_empty() => Self {
                filter,
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    /// Parse the configured directive.
    pub fn env_filter(&self) -> Result<EnvFilter, Error> {
        Ok(EnvFilter::try_new(&self.filter)?)
    }
}

/// Install the global subscriber, writing to stdout. Fails if one is already
/// set.
pub fn init(config: &LogConfig) -> Result<(), Error> {
    subscriber(config, std::io::stdout)?.try_init()?;
    Ok(())
}

fn subscriber<W>(config: &LogConfig, make_writer: W) -> Result<impl Subscriber + Send + Sync + 'static, Error>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    Ok(tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_ansi(config.ansi)
        .with_target(false)
        .without_time()
        .with_writer(make_writer)
        .finish())
}
