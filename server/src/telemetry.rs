//! `tracing` subscriber setup.
//!
//! `RUST_LOG` controls the filter (default `info,depot_server=debug,tower_http=debug`);
//! `LOG_FORMAT` picks JSON or human-readable lines.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer as _};

const DEFAULT_FILTER: &str = "info,depot_server=debug,tower_http=debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl LogFormat {
    /// Unknown values fall back to [`LogFormat::Pretty`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

pub fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
