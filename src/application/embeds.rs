// Embed loading - third-party post widgets for the top shared posts
use std::sync::Arc;

use anyhow::Context;

use crate::application::data_source::ChartDataSource;
use crate::presentation::surface::{DashboardSurface, EmbedOptions};

#[derive(Clone)]
pub struct EmbedService {
    source: Arc<dyn ChartDataSource>,
    surface: Arc<dyn DashboardSurface>,
}

impl EmbedService {
    pub fn new(source: Arc<dyn ChartDataSource>, surface: Arc<dyn DashboardSurface>) -> Self {
        Self { source, surface }
    }

    /// Fetches the top post ids and embeds each into its numbered
    /// container, returning how many were placed.
    pub async fn load_top_posts(&self, endpoint: &str) -> anyhow::Result<usize> {
        let ids = self
            .source
            .fetch_top_posts(endpoint)
            .await
            .with_context(|| format!("failed to fetch top post ids from /{endpoint}"))?;

        let options = EmbedOptions::default();
        for (i, id) in ids.iter().enumerate() {
            let container = format!("embed-{}", i + 1);
            self.surface.embed_post(&container, id, &options);
        }

        Ok(ids.len())
    }
}
