// Chart configuration domain models
use serde::Deserialize;

use crate::domain::palette::ColorPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One plottable series with its colors resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub fill: bool,
    pub colors: ColorPair,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

/// Renderer-ready chart configuration. Built once, handed to a surface,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
    pub y_bounds: AxisBounds,
    pub title: String,
    pub kind: ChartKind,
    /// Always zero: dense minute-level series render without point glyphs.
    pub point_radius: u32,
}

/// Opaque token issued by a surface once a chart has been handed over.
/// There is no further lifecycle; charts are not updated or destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }
}
