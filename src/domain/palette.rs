// Color palette - fixed fill/stroke pairs shared by every chart
use serde::Deserialize;

use crate::domain::payload::TrendSignal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorName {
    Red,
    Blue,
    Yellow,
    Green,
    Purple,
    Orange,
    Grey,
}

/// Translucent area fill plus an opaque stroke of the same hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fill: &'static str,
    pub stroke: &'static str,
}

impl ColorName {
    pub fn pair(self) -> ColorPair {
        match self {
            ColorName::Red => ColorPair {
                fill: "rgba(255, 99, 132, 0.2)",
                stroke: "rgba(255, 99, 132, 1)",
            },
            ColorName::Blue => ColorPair {
                fill: "rgba(54, 162, 235, 0.2)",
                stroke: "rgba(54, 162, 235, 1)",
            },
            ColorName::Yellow => ColorPair {
                fill: "rgba(255, 206, 86, 0.2)",
                stroke: "rgba(255, 206, 86, 1)",
            },
            ColorName::Green => ColorPair {
                fill: "rgba(75, 192, 192, 0.2)",
                stroke: "rgba(75, 192, 192, 1)",
            },
            ColorName::Purple => ColorPair {
                fill: "rgba(153, 102, 255, 0.2)",
                stroke: "rgba(153, 102, 255, 1)",
            },
            ColorName::Orange => ColorPair {
                fill: "rgba(255, 159, 64, 0.2)",
                stroke: "rgba(255, 159, 64, 1)",
            },
            ColorName::Grey => ColorPair {
                fill: "rgba(201, 203, 207, 0.2)",
                stroke: "rgba(201, 203, 207, 1)",
            },
        }
    }
}

impl TrendSignal {
    /// Accent color for the trendline of a chart with this trend.
    pub fn accent(self) -> ColorName {
        match self {
            TrendSignal::Rising => ColorName::Green,
            TrendSignal::Flat => ColorName::Grey,
            TrendSignal::Falling => ColorName::Red,
        }
    }
}
