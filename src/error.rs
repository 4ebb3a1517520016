use thiserror::Error;

/// Errors produced by direction lookups and atom bookkeeping.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("unknown direction {0:?}")]
    InvalidDirection(String),
    #[error("no free direction found among the 12 compass slots")]
    ExhaustedDirections,
    #[error("{0} has not been set")]
    NotInitialized(&'static str),
    #[error("bond group {0:?} already occupies every compass slot")]
    Saturated(String),
    #[error("invalid geometry configuration: {0}")]
    InvalidConfiguration(String),
}
