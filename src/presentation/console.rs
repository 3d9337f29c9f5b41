// Console surface - logs dashboard updates instead of drawing them
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::chart::{ChartConfig, ChartHandle};
use crate::presentation::surface::{DashboardSurface, EmbedOptions};

#[derive(Debug, Default)]
pub struct ConsoleSurface {
    next_handle: AtomicU64,
}

impl DashboardSurface for ConsoleSurface {
    fn set_text(&self, region: &str, text: &str) {
        tracing::info!("[{region}] {text}");
    }

    fn remove_loading(&self, indicator: &str) {
        tracing::debug!("removed loading indicator {indicator}");
    }

    fn render_chart(&self, target: &str, config: ChartConfig) -> ChartHandle {
        tracing::info!(
            "rendered {:?} chart {:?} into {target}: {} labels, {} series, y [{:.1}, {:.1}]",
            config.kind,
            config.title,
            config.labels.len(),
            config.series.len(),
            config.y_bounds.min,
            config.y_bounds.max,
        );
        ChartHandle::new(self.next_handle.fetch_add(1, Ordering::Relaxed))
    }

    fn embed_post(&self, container: &str, post_id: &str, _options: &EmbedOptions) {
        tracing::info!("embedded post {post_id} into {container}");
    }
}
