use std::collections::BTreeMap;

use crate::model::{BenchmarkFigures, CandidateMetrics, OverallMetrics};

pub fn summarize(
    totals: &BTreeMap<String, CandidateMetrics>,
    benchmark: &BTreeMap<String, BenchmarkFigures>,
) -> BTreeMap<String, OverallMetrics> {
    let mut summary = BTreeMap::new();

    for (candidate, metrics) in totals {
        let total = metrics.total();
        if total == 0 {
            continue;
        }

        let figures = benchmark.get(candidate).cloned().unwrap_or_default();
        summary.insert(
            candidate.clone(),
            OverallMetrics {
                accuracy: metrics.correct as f64 / total as f64,
                incorrect_field_rate: metrics.incorrect_field as f64 / total as f64,
                incorrect_transcription_rate: metrics.incorrect_transcription as f64 / total as f64,
                missing_rate: metrics.missing as f64 / total as f64,
                cost_per_image: figures.average_cost_per_image,
                time_per_image: figures.average_time_per_image,
                total_cost: figures.total_cost,
                total_time: figures.total_time,
            },
        );
    }

    summary
}
