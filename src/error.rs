use crate::config::ConfigError;
use crate::reducer::error::ReduceError;
use crate::source::error::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Reduce(#[from] ReduceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
