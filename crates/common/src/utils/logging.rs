//! Process-wide `tracing` subscriber for the company service.
//!
//! Request spans come from `tower_http`'s `TraceLayer`, repository calls are
//! `#[instrument]`ed in `service`, and sqlx statement logs stay quiet unless
//! `RUST_LOG` asks for them.

use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info,sqlx=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Human-readable compact lines on stdout. Later calls are no-ops.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event; the enclosing span's fields ride along under `span`.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .json()
        .with_current_span(true)
        .with_writer(io::stdout)
        .try_init();
}

/// `LOG_FORMAT=json` selects [`init_logging_json`]; anything else is compact.
pub fn init_logging_from_env() {
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
