use thiserror::Error;

/// Top-level error type for graph generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The optional attempt cap was hit before enough points were accepted.
    #[error(
        "gave up after {attempts} attempts with {accepted} of {requested} points accepted"
    )]
    AttemptsExhausted {
        accepted: usize,
        requested: usize,
        attempts: u64,
    },
}

/// A generation run was configured in a way that can never succeed.
///
/// All of these are fatal: no partial graph is ever produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown region `{0}`, expected one of: circle, rect, disk, nbox, custom")]
    UnknownRegion(String),

    #[error("region `{0}` is not implemented")]
    Unimplemented(&'static str),

    #[error("inner radius {inner} is bigger than outer radius {outer}")]
    InvertedDisk { inner: f64, outer: f64 },

    #[error("region `{region}` needs {expected}-dimensional points, got {got}")]
    DimensionMismatch {
        region: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("region `{region}` takes {expected} argument(s), got {got}")]
    RegionArity {
        region: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Errors raised while drawing a graph.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("vertex {0} has no position")]
    MissingPosition(usize),
}

/// Convenience type alias for results using [`GenerateError`].
pub type Result<T> = std::result::Result<T, GenerateError>;
