use thiserror::Error;

/// Result alias used by the estimator constructors.
pub type ParamResult<T> = Result<T, ParameterError>;

/// Rejected configuration or input, reported before any matching work starts.
///
/// Construction is the only fallible step: once an estimator exists, every
/// query on it is infallible and degenerate arithmetic (empty counts, zero
/// denominators) flows through as NaN or infinity instead of an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("embedding dimension must be at least 1, got {0}")]
    EmbeddingDimension(usize),

    #[error("time delay must be at least 1, got {0}")]
    TimeDelay(usize),

    #[error("distance threshold must be a non-negative number, got {0}")]
    Radius(f64),

    #[error("logarithm base must be positive, got {0}")]
    LogBase(f64),

    #[error("series must hold more than 10 samples, got {0}")]
    SeriesTooShort(usize),
}
