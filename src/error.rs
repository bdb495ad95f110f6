use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Bounded policy requires a delegate")]
    MissingDelegate,

    #[error("Duration of {millis}ms does not fit into signed nanoseconds")]
    DurationOverflow { millis: u64 },

    #[error("Invalid expiry configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
