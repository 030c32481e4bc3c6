use thiserror::Error;

/// Errors raised by the sampling pipeline and the terminal front-end.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// The host API for interface byte counters failed or is missing.
    #[error("network counters unavailable: {0}")]
    CounterSourceUnavailable(String),

    /// Elapsed time between two samples was zero or negative.
    #[error("degenerate sampling interval ({elapsed_secs:.6}s)")]
    DegenerateInterval { elapsed_secs: f64 },

    #[error("config error: {0}")]
    Config(String),

    #[error("terminal I/O error: {source}")]
    Terminal {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = MonitorError> = std::result::Result<T, E>;
