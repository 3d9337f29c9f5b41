// On-demand chart loading - fetch, trim, color and hand off to the surface
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;

use crate::application::builder::build_chart;
use crate::application::data_source::ChartDataSource;
use crate::application::extract::{extract_categories, extract_series};
use crate::domain::chart::{ChartHandle, ChartKind};
use crate::domain::palette::ColorName;
use crate::domain::ticks::TickGranularity;
use crate::presentation::surface::DashboardSurface;

/// One time-series chart widget as declared in the widgets config file.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartRequest {
    pub chart_id: String,
    pub spinner_id: String,
    pub endpoint: String,
    pub kind: ChartKind,
    pub title: String,
    pub color: ColorName,
    pub granularity: TickGranularity,
    pub last_exclusive: bool,
}

/// A categorical chart widget: no timestamps, so no tick granularity.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryChartRequest {
    pub chart_id: String,
    pub spinner_id: String,
    pub endpoint: String,
    pub kind: ChartKind,
    pub title: String,
    pub color: ColorName,
    #[serde(default)]
    pub last_exclusive: bool,
}

#[derive(Clone)]
pub struct ChartLoader {
    source: Arc<dyn ChartDataSource>,
    surface: Arc<dyn DashboardSurface>,
}

impl ChartLoader {
    pub fn new(source: Arc<dyn ChartDataSource>, surface: Arc<dyn DashboardSurface>) -> Self {
        Self { source, surface }
    }

    /// Loads one time-series chart: fetch the payload, pick the trend
    /// accent, drop the loading indicator and render.
    ///
    /// The indicator goes away as soon as data has arrived; a failed fetch
    /// leaves it in place so the page keeps signalling that the chart never
    /// loaded.
    pub async fn load(&self, request: &ChartRequest) -> anyhow::Result<ChartHandle> {
        let payload = self
            .source
            .fetch_chart(&request.endpoint)
            .await
            .with_context(|| format!("failed to fetch chart payload from /{}", request.endpoint))?;

        let accent = payload.trend.accent();
        self.surface.remove_loading(&request.spinner_id);

        let extracted = extract_series(&payload, request.granularity, request.last_exclusive);
        let config = build_chart(extracted, &[request.color, accent], &request.title, request.kind)?;

        Ok(self.surface.render_chart(&request.chart_id, config))
    }

    /// Loads one categorical chart. There is no trendline and therefore no
    /// trend accent; the single series takes the declared color.
    pub async fn load_categorical(
        &self,
        request: &CategoryChartRequest,
    ) -> anyhow::Result<ChartHandle> {
        let payload = self
            .source
            .fetch_categories(&request.endpoint)
            .await
            .with_context(|| format!("failed to fetch category payload from /{}", request.endpoint))?;

        self.surface.remove_loading(&request.spinner_id);

        let extracted = extract_categories(&payload, request.last_exclusive);
        let config = build_chart(extracted, &[request.color], &request.title, request.kind)?;

        Ok(self.surface.render_chart(&request.chart_id, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payload::{CategoryPayload, ChartPayload, TrendSignal};
    use crate::presentation::surface::testing::{RecordingSurface, SurfaceEvent};
    use async_trait::async_trait;

    struct StubSource {
        chart: Option<ChartPayload>,
        categories: Option<CategoryPayload>,
    }

    #[async_trait]
    impl ChartDataSource for StubSource {
        async fn fetch_chart(&self, _endpoint: &str) -> anyhow::Result<ChartPayload> {
            self.chart.clone().ok_or_else(|| anyhow::anyhow!("backend unreachable"))
        }

        async fn fetch_categories(&self, _endpoint: &str) -> anyhow::Result<CategoryPayload> {
            self.categories.clone().ok_or_else(|| anyhow::anyhow!("backend unreachable"))
        }

        async fn fetch_top_posts(&self, _endpoint: &str) -> anyhow::Result<Vec<String>> {
            Ok(vec![])
        }
    }

    fn minute_request() -> ChartRequest {
        ChartRequest {
            chart_id: "tweet-minute-count-line".to_string(),
            spinner_id: "tweet-minute-loading".to_string(),
            endpoint: "tweets_min_chart".to_string(),
            kind: ChartKind::Line,
            title: "# tweets in the last 6hr".to_string(),
            color: ColorName::Blue,
            granularity: TickGranularity::Minute,
            last_exclusive: true,
        }
    }

    #[tokio::test]
    async fn load_trims_colors_and_renders_once() {
        let source = Arc::new(StubSource {
            chart: Some(ChartPayload {
                timestamps: vec![1.0, 2.0, 3.0],
                counts: vec![10.0, 20.0, 30.0],
                trendline: vec![12.0, 18.0, 28.0],
                trend: TrendSignal::Rising,
            }),
            categories: None,
        });
        let surface = Arc::new(RecordingSurface::default());

        let loader = ChartLoader::new(source, surface.clone());
        loader.load(&minute_request()).await.unwrap();

        let events = surface.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], SurfaceEvent::LoadingRemoved("tweet-minute-loading".to_string()));

        let SurfaceEvent::Chart { target, config } = &events[1] else {
            panic!("expected a chart render, got {:?}", events[1]);
        };
        assert_eq!(target, "tweet-minute-count-line");
        assert_eq!(config.labels.len(), 2);
        assert_eq!(config.series[0].values, vec![10.0, 20.0]);
        assert!(config.series[0].fill);
        assert_eq!(config.series[0].colors, ColorName::Blue.pair());
        assert_eq!(config.series[1].values, vec![12.0, 18.0]);
        assert!(!config.series[1].fill);
        // Rising trend picks the green accent for the trendline.
        assert_eq!(config.series[1].colors, ColorName::Green.pair());
    }

    #[tokio::test]
    async fn failed_fetch_leaves_the_spinner_alone() {
        let source = Arc::new(StubSource { chart: None, categories: None });
        let surface = Arc::new(RecordingSurface::default());

        let loader = ChartLoader::new(source, surface.clone());
        let result = loader.load(&minute_request()).await;

        assert!(result.is_err());
        assert!(surface.events().is_empty());
    }

    #[tokio::test]
    async fn categorical_load_uses_the_declared_color_only() {
        let source = Arc::new(StubSource {
            chart: None,
            categories: Some(CategoryPayload {
                xticks: vec!["CA".to_string(), "NY".to_string()],
                counts: vec![42.0, 17.0],
            }),
        });
        let surface = Arc::new(RecordingSurface::default());

        let request = CategoryChartRequest {
            chart_id: "loc-count-hist".to_string(),
            spinner_id: "loc-loading".to_string(),
            endpoint: "tweets_loc_chart".to_string(),
            kind: ChartKind::Bar,
            title: "# tweets by state".to_string(),
            color: ColorName::Purple,
            last_exclusive: false,
        };

        let loader = ChartLoader::new(source, surface.clone());
        loader.load_categorical(&request).await.unwrap();

        let events = surface.events();
        let SurfaceEvent::Chart { config, .. } = &events[1] else {
            panic!("expected a chart render, got {:?}", events[1]);
        };
        assert_eq!(config.kind, ChartKind::Bar);
        assert_eq!(config.labels, vec!["CA", "NY"]);
        assert_eq!(config.series.len(), 1);
        assert_eq!(config.series[0].colors, ColorName::Purple.pair());
    }
}
