// Data source trait for on-demand dashboard fetches
use async_trait::async_trait;

use crate::domain::payload::{CategoryPayload, ChartPayload};

#[async_trait]
pub trait ChartDataSource: Send + Sync {
    /// Fetch a time-series chart payload from a named endpoint.
    async fn fetch_chart(&self, endpoint: &str) -> anyhow::Result<ChartPayload>;

    /// Fetch a categorical chart payload from a named endpoint.
    async fn fetch_categories(&self, endpoint: &str) -> anyhow::Result<CategoryPayload>;

    /// Fetch the identifiers of the currently most-shared posts.
    async fn fetch_top_posts(&self, endpoint: &str) -> anyhow::Result<Vec<String>>;
}
