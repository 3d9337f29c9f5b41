// Axis tick formatting, fixed to US Eastern regardless of host timezone
use chrono::DateTime;
use chrono_tz::America::New_York;
use serde::Deserialize;

const FMT_MINUTE: &str = "%-I:%M %p";
const FMT_DAY: &str = "%a %-m/%-d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickGranularity {
    Minute,
    Day,
}

/// Formats a Unix timestamp (seconds, possibly fractional) for axis labels.
///
/// The instant is always rendered in US Eastern so that every viewer sees
/// the same labels the backend bucketed by. Returns `None` when the
/// timestamp falls outside chrono's representable range.
pub fn format_tick(timestamp_secs: f64, granularity: TickGranularity) -> Option<String> {
    let millis = (timestamp_secs * 1000.0) as i64;
    DateTime::from_timestamp_millis(millis).map(|utc| {
        let eastern = utc.with_timezone(&New_York);
        match granularity {
            TickGranularity::Minute => eastern.format(FMT_MINUTE).to_string(),
            TickGranularity::Day => eastern.format(FMT_DAY).to_string(),
        }
    })
}
