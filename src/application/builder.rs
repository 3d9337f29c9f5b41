// Chart building - colors, axis bounds and the final renderer-ready config
use thiserror::Error;

use crate::application::extract::ExtractedSeries;
use crate::domain::chart::{AxisBounds, ChartConfig, ChartKind, ChartSeries};
use crate::domain::palette::ColorName;

const Y_FOOTROOM: f64 = 0.95;
const Y_HEADROOM: f64 = 1.05;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartBuildError {
    #[error("{series} series to color but only {colors} colors supplied")]
    PaletteExhausted { series: usize, colors: usize },
    #[error("chart has no series to plot")]
    NoSeries,
}

/// Combines extracted series with a positional color list into a final
/// `ChartConfig`. The Nth series takes the Nth color; supplying fewer
/// colors than series is a caller error surfaced as `PaletteExhausted`.
pub fn build_chart(
    extracted: ExtractedSeries,
    colors: &[ColorName],
    title: &str,
    kind: ChartKind,
) -> Result<ChartConfig, ChartBuildError> {
    if extracted.series.is_empty() {
        return Err(ChartBuildError::NoSeries);
    }
    if colors.len() < extracted.series.len() {
        return Err(ChartBuildError::PaletteExhausted {
            series: extracted.series.len(),
            colors: colors.len(),
        });
    }

    let y_bounds = axis_bounds(&extracted.series[0].values);

    let series = extracted
        .series
        .into_iter()
        .zip(colors)
        .map(|(raw, color)| ChartSeries {
            name: raw.name,
            values: raw.values,
            fill: raw.fill,
            colors: color.pair(),
        })
        .collect();

    Ok(ChartConfig {
        labels: extracted.labels,
        series,
        y_bounds,
        title: title.to_string(),
        kind,
        point_radius: 0,
    })
}

/// Bounds come from the first series only: these dashboards plot one data
/// series plus its trendline, and the trendline stays within the data range.
/// The axis top is clamped so zero remains visible when values dip negative.
/// An empty series gets a degenerate zero range rather than infinities.
fn axis_bounds(values: &[f64]) -> AxisBounds {
    if values.is_empty() {
        return AxisBounds { min: 0.0, max: 0.0 };
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    AxisBounds {
        min: min * Y_FOOTROOM,
        max: max * Y_HEADROOM,
    }
}
