use evt_container::ContainerError;
use thiserror::Error;

/// Errors produced by the slimming pipeline.
#[derive(Debug, Error)]
pub enum SlimError {
    /// The input container carries no event-count record under the expected
    /// name. Nothing is written to the output in this case.
    #[error("event count record {0:?} not found in input")]
    MissingEventCount(String),

    /// The input container carries no event table under the expected name.
    #[error("event table {0:?} not found in input")]
    MissingTable(String),

    #[error("container error: {0}")]
    Container(#[from] ContainerError),
}

/// Result alias for slimming operations.
pub type SlimResult<T> = Result<T, SlimError>;
