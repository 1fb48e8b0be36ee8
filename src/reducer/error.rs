use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReduceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Forecast entry {index} is missing required field '{field}'")]
    MalformedSample { index: usize, field: &'static str },
}
