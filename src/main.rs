// Main entry point - dependency injection and dashboard startup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;

use crate::application::data_source::ChartDataSource;
use crate::application::embeds::EmbedService;
use crate::application::live_feed::LiveFeedService;
use crate::application::loader::ChartLoader;
use crate::infrastructure::config::{load_backend_config, load_widgets_config};
use crate::infrastructure::http_source::HttpDataSource;
use crate::infrastructure::sse::SseSubscriber;
use crate::presentation::console::ConsoleSurface;
use crate::presentation::surface::DashboardSurface;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let backend = load_backend_config()?;
    let widgets = load_widgets_config()?;
    let base_url = backend.backend.base_url;

    let source: Arc<dyn ChartDataSource> = Arc::new(HttpDataSource::new(base_url.clone()));
    let surface: Arc<dyn DashboardSurface> = Arc::new(ConsoleSurface::default());

    // Live feeds: one connection each, held for the lifetime of the process.
    let subscriber = SseSubscriber::new(base_url.clone());
    let feeds = LiveFeedService::new(surface.clone());

    let tweet_sub = subscriber.subscribe(&widgets.feeds.tweet_stream);
    let count_sub = subscriber.subscribe(&widgets.feeds.count_stream);
    {
        let feeds = feeds.clone();
        tokio::spawn(async move { feeds.run_tweet_feed(tweet_sub).await });
    }
    {
        let feeds = feeds.clone();
        let region = widgets.feeds.count_region.clone();
        tokio::spawn(async move { feeds.run_count_feed(count_sub, &region).await });
    }

    // Charts load independently; a failed load is logged and its spinner
    // stays on the page.
    let loader = ChartLoader::new(source.clone(), surface.clone());
    for request in widgets.charts {
        let loader = loader.clone();
        tokio::spawn(async move {
            match loader.load(&request).await {
                Ok(handle) => {
                    tracing::debug!("chart {} rendered as handle {}", request.chart_id, handle.id());
                }
                Err(e) => tracing::error!("chart {} failed to load: {e:#}", request.chart_id),
            }
        });
    }
    for request in widgets.category_charts {
        let loader = loader.clone();
        tokio::spawn(async move {
            match loader.load_categorical(&request).await {
                Ok(handle) => {
                    tracing::debug!("chart {} rendered as handle {}", request.chart_id, handle.id());
                }
                Err(e) => tracing::error!("chart {} failed to load: {e:#}", request.chart_id),
            }
        });
    }

    if let Some(embeds) = widgets.embeds {
        let service = EmbedService::new(source.clone(), surface.clone());
        tokio::spawn(async move {
            match service.load_top_posts(&embeds.endpoint).await {
                Ok(placed) => tracing::debug!("embedded {placed} posts"),
                Err(e) => tracing::error!("embed loading failed: {e:#}"),
            }
        });
    }

    println!("tweetboard engine running against {base_url}");
    tokio::signal::ctrl_c().await?;

    Ok(())
}
