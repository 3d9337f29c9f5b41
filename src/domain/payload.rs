// Wire payloads served by the dashboard backend
use serde::de::{self, Deserializer};
use serde::Deserialize;

/// Time-series chart payload.
///
/// `timestamps`, `counts` and `trendline` are equal-length, ordered
/// sequences. The final bucket may still be filling; whether it is plotted
/// is the caller's last-exclusive policy, not a property of the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartPayload {
    pub timestamps: Vec<f64>,
    pub counts: Vec<f64>,
    pub trendline: Vec<f64>,
    pub trend: TrendSignal,
}

/// Categorical chart payload: counts keyed by label, no trend.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPayload {
    pub xticks: Vec<String>,
    pub counts: Vec<f64>,
}

/// Regression trend over the charted window.
///
/// The wire contract is versioned: current backends send `1 | 0 | -1`,
/// legacy ones a bare boolean. Both decode into the tri-state form; the
/// boolean form can never produce `Flat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendSignal {
    Rising,
    Flat,
    Falling,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireTrend {
    Legacy(bool),
    Signed(i8),
}

impl<'de> Deserialize<'de> for TrendSignal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match WireTrend::deserialize(deserializer)? {
            WireTrend::Legacy(true) => Ok(TrendSignal::Rising),
            WireTrend::Legacy(false) => Ok(TrendSignal::Falling),
            WireTrend::Signed(1) => Ok(TrendSignal::Rising),
            WireTrend::Signed(0) => Ok(TrendSignal::Flat),
            WireTrend::Signed(-1) => Ok(TrendSignal::Falling),
            WireTrend::Signed(other) => {
                Err(de::Error::custom(format!("trend value out of range: {other}")))
            }
        }
    }
}
