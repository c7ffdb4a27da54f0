use thiserror::Error;
use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Initialize structured logging.
///
/// Logs are written to stderr so stdout only carries the reports the binary
/// prints. `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_observability(
    service_name: &str,
    service_version: &str,
    log_level: &str,
    enable_json_logging: bool,
) -> Result<(), ObservabilityError> {
    let env_filter = build_env_filter(log_level)?;

    if enable_json_logging {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .with_span_events(FmtSpan::NONE)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| ObservabilityError::TracingInit(e.to_string()))?;
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .with_span_events(FmtSpan::NONE)
            .compact()
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| ObservabilityError::TracingInit(e.to_string()))?;
    }

    info!(
        "Observability initialized for service: {} v{}",
        service_name, service_version
    );
    Ok(())
}

/// Filter scoped to this crate at `log_level`, unless `RUST_LOG` is set
pub fn build_env_filter(log_level: &str) -> Result<EnvFilter, ObservabilityError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(format!("{}={}", env!("CARGO_CRATE_NAME"), log_level))
        .map_err(|e| ObservabilityError::Config(format!("Invalid log level {}: {}", log_level, e)))
}
