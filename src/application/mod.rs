// Application layer - use cases driving the dashboard
pub mod builder;
pub mod data_source;
pub mod embeds;
pub mod extract;
pub mod live_feed;
pub mod loader;
