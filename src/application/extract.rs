// Series extraction - payload sequences to plottable labels and values
use crate::domain::payload::{CategoryPayload, ChartPayload};
use crate::domain::ticks::{format_tick, TickGranularity};

/// Extractor output: one plottable series, colors not yet assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSeries {
    pub name: String,
    pub values: Vec<f64>,
    pub fill: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSeries {
    pub labels: Vec<String>,
    pub series: Vec<RawSeries>,
}

fn trimmed<T: Clone>(values: &[T], last_exclusive: bool) -> Vec<T> {
    if last_exclusive && !values.is_empty() {
        values[..values.len() - 1].to_vec()
    } else {
        values.to_vec()
    }
}

/// Turns a time-series payload into labels plus plottable series.
///
/// Field order is part of the contract: `timestamps` become labels, then
/// `counts` (area-filled), then `trendline` (outline only). `trend` is
/// metadata and never plotted. With `last_exclusive` set, the final element
/// of every sequence is dropped; the most recent bucket is usually still
/// filling.
pub fn extract_series(
    payload: &ChartPayload,
    granularity: TickGranularity,
    last_exclusive: bool,
) -> ExtractedSeries {
    let labels = trimmed(&payload.timestamps, last_exclusive)
        .into_iter()
        .map(|ts| format_tick(ts, granularity).unwrap_or_default())
        .collect();

    let series = vec![
        RawSeries {
            name: "counts".to_string(),
            values: trimmed(&payload.counts, last_exclusive),
            fill: true,
        },
        RawSeries {
            name: "trendline".to_string(),
            values: trimmed(&payload.trendline, last_exclusive),
            fill: false,
        },
    ];

    ExtractedSeries { labels, series }
}

/// Categorical variant: labels come straight from the payload's tick
/// strings, with a single filled series.
pub fn extract_categories(payload: &CategoryPayload, last_exclusive: bool) -> ExtractedSeries {
    ExtractedSeries {
        labels: trimmed(&payload.xticks, last_exclusive),
        series: vec![RawSeries {
            name: "counts".to_string(),
            values: trimmed(&payload.counts, last_exclusive),
            fill: true,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payload::TrendSignal;

    fn payload() -> ChartPayload {
        ChartPayload {
            timestamps: vec![1.0, 2.0, 3.0],
            counts: vec![10.0, 20.0, 30.0],
            trendline: vec![12.0, 18.0, 28.0],
            trend: TrendSignal::Rising,
        }
    }

    #[test]
    fn last_exclusive_drops_the_final_bucket_everywhere() {
        let extracted = extract_series(&payload(), TickGranularity::Minute, true);

        assert_eq!(extracted.labels.len(), 2);
        assert_eq!(extracted.series.len(), 2);
        assert_eq!(extracted.series[0].name, "counts");
        assert_eq!(extracted.series[0].values, vec![10.0, 20.0]);
        assert!(extracted.series[0].fill);
        assert_eq!(extracted.series[1].name, "trendline");
        assert_eq!(extracted.series[1].values, vec![12.0, 18.0]);
        assert!(!extracted.series[1].fill);
    }

    #[test]
    fn inclusive_extraction_keeps_every_bucket() {
        let extracted = extract_series(&payload(), TickGranularity::Minute, false);

        assert_eq!(extracted.labels.len(), 3);
        assert_eq!(extracted.series[0].values, vec![10.0, 20.0, 30.0]);
        assert_eq!(extracted.series[1].values, vec![12.0, 18.0, 28.0]);
    }

    #[test]
    fn series_lengths_match_label_count() {
        for last_exclusive in [true, false] {
            let extracted = extract_series(&payload(), TickGranularity::Day, last_exclusive);
            for series in &extracted.series {
                assert_eq!(series.values.len(), extracted.labels.len());
            }
        }
    }

    #[test]
    fn empty_payload_survives_trimming() {
        let empty = ChartPayload {
            timestamps: vec![],
            counts: vec![],
            trendline: vec![],
            trend: TrendSignal::Flat,
        };
        let extracted = extract_series(&empty, TickGranularity::Minute, true);
        assert!(extracted.labels.is_empty());
        assert!(extracted.series.iter().all(|s| s.values.is_empty()));
    }

    #[test]
    fn categories_use_payload_labels_verbatim() {
        let payload = CategoryPayload {
            xticks: vec!["CA".to_string(), "NY".to_string(), "TX".to_string()],
            counts: vec![42.0, 17.0, 9.0],
        };
        let extracted = extract_categories(&payload, false);

        assert_eq!(extracted.labels, vec!["CA", "NY", "TX"]);
        assert_eq!(extracted.series.len(), 1);
        assert!(extracted.series[0].fill);
    }
}
