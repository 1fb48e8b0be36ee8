use crate::source::error::SourceError;
use crate::types::sample::ForecastEntry;
use async_trait::async_trait;

/// Supplies raw forecast entries for one fixed location.
///
/// Implementations return entries ordered by timestamp, ascending. Nothing downstream
/// checks this ordering.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<ForecastEntry>, SourceError>;
}
