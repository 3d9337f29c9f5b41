// Domain layer - payloads, palette, chart config and tick formatting
pub mod chart;
pub mod palette;
pub mod payload;
pub mod ticks;
