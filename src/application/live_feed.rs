// Live feed routing - push stream events into display regions
use std::sync::Arc;

use crate::infrastructure::sse::Subscription;
use crate::presentation::surface::DashboardSurface;

/// Number of rolling tweet slots on the page.
pub const TWEET_SLOTS: usize = 5;

#[derive(Clone)]
pub struct LiveFeedService {
    surface: Arc<dyn DashboardSurface>,
}

impl LiveFeedService {
    pub fn new(surface: Arc<dyn DashboardSurface>) -> Self {
        Self { surface }
    }

    /// Consumes the rolling tweet feed until the subscription closes.
    ///
    /// Each event is a JSON array ordered oldest-first, while the slots
    /// display newest-first, so the mapping reverses: the last array
    /// element lands in slot 1. Undecodable events are logged and skipped.
    pub async fn run_tweet_feed(&self, mut subscription: Subscription) {
        while let Some(event) = subscription.next_event().await {
            match serde_json::from_str::<Vec<String>>(&event) {
                Ok(tweets) => self.apply_tweets(&tweets),
                Err(e) => tracing::warn!("skipping undecodable tweet feed event: {e}"),
            }
        }
    }

    /// Consumes the scalar counter feed, writing each event verbatim.
    pub async fn run_count_feed(&self, mut subscription: Subscription, region: &str) {
        while let Some(event) = subscription.next_event().await {
            self.surface.set_text(region, &event);
        }
    }

    fn apply_tweets(&self, tweets: &[String]) {
        for (slot, tweet) in tweets.iter().rev().take(TWEET_SLOTS).enumerate() {
            let region = format!("tweet-{}", slot + 1);
            self.surface.set_text(&region, tweet);
        }
    }
}
