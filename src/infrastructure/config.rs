use serde::Deserialize;

use crate::application::loader::{CategoryChartRequest, ChartRequest};

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub backend: BackendSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
}

/// Everything the dashboard shows, declared in `config/widgets.toml`.
#[derive(Debug, Deserialize, Clone)]
pub struct WidgetsConfig {
    pub feeds: FeedsConfig,
    #[serde(default)]
    pub charts: Vec<ChartRequest>,
    #[serde(default)]
    pub category_charts: Vec<CategoryChartRequest>,
    pub embeds: Option<EmbedsConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedsConfig {
    pub tweet_stream: String,
    pub count_stream: String,
    pub count_region: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmbedsConfig {
    pub endpoint: String,
}

pub fn load_backend_config() -> anyhow::Result<BackendConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/backend"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_widgets_config() -> anyhow::Result<WidgetsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/widgets"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
