use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Tracing Error: {0}")]
    TracingError(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Kubernetes recommended labels for operator-managed resources
pub mod labels;

/// Log integrations
pub mod telemetry;
