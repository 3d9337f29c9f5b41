// Dashboard surface - the seam between this engine and whatever draws pixels
use crate::domain::chart::{ChartConfig, ChartHandle};

/// Display configuration for third-party post embeds. Fixed for every
/// embed on the page: light theme, media cards shown, no conversation
/// thread, no reply threading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedOptions {
    pub theme: EmbedTheme,
    pub show_media_cards: bool,
    pub show_conversation: bool,
    pub threaded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedTheme {
    Light,
    Dark,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            theme: EmbedTheme::Light,
            show_media_cards: true,
            show_conversation: false,
            threaded: false,
        }
    }
}

pub trait DashboardSurface: Send + Sync {
    /// Replaces the text content of a named display region.
    fn set_text(&self, region: &str, text: &str);

    /// Removes a loading indicator. Removing one that is already gone is a
    /// no-op.
    fn remove_loading(&self, indicator: &str);

    /// Hands a finished chart configuration to the renderer.
    fn render_chart(&self, target: &str, config: ChartConfig) -> ChartHandle;

    /// Embeds a third-party post into a named container.
    fn embed_post(&self, container: &str, post_id: &str, options: &EmbedOptions);
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    use super::{DashboardSurface, EmbedOptions};
    use crate::domain::chart::{ChartConfig, ChartHandle};

    #[derive(Debug, Clone, PartialEq)]
    pub enum SurfaceEvent {
        Text { region: String, text: String },
        LoadingRemoved(String),
        Chart { target: String, config: ChartConfig },
        Embed { container: String, post_id: String },
    }

    impl SurfaceEvent {
        pub fn text(region: &str, text: &str) -> Self {
            Self::Text { region: region.to_string(), text: text.to_string() }
        }
    }

    /// Records every surface call for assertions.
    #[derive(Default)]
    pub struct RecordingSurface {
        events: Mutex<Vec<SurfaceEvent>>,
        next_handle: AtomicU64,
    }

    impl RecordingSurface {
        pub fn events(&self) -> Vec<SurfaceEvent> {
            self.events.lock().unwrap().clone()
        }

        fn record(&self, event: SurfaceEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl DashboardSurface for RecordingSurface {
        fn set_text(&self, region: &str, text: &str) {
            self.record(SurfaceEvent::text(region, text));
        }

        fn remove_loading(&self, indicator: &str) {
            self.record(SurfaceEvent::LoadingRemoved(indicator.to_string()));
        }

        fn render_chart(&self, target: &str, config: ChartConfig) -> ChartHandle {
            self.record(SurfaceEvent::Chart { target: target.to_string(), config });
            ChartHandle::new(self.next_handle.fetch_add(1, Ordering::Relaxed))
        }

        fn embed_post(&self, container: &str, post_id: &str, _options: &EmbedOptions) {
            self.record(SurfaceEvent::Embed {
                container: container.to_string(),
                post_id: post_id.to_string(),
            });
        }
    }
}
