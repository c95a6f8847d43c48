use std::collections::BTreeMap;

use crate::model::CandidateMetrics;

#[derive(Debug, Default)]
pub struct MetricsAggregator {
    totals: BTreeMap<String, CandidateMetrics>,
}

impl MetricsAggregator {
    pub fn absorb_document(&mut self, document_metrics: &BTreeMap<String, CandidateMetrics>) {
        for (candidate, metrics) in document_metrics {
            self.totals
                .entry(candidate.clone())
                .or_default()
                .absorb(metrics);
        }
    }

    pub fn into_totals(self) -> BTreeMap<String, CandidateMetrics> {
        self.totals
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::MetricsAggregator;
    use crate::model::{CandidateMetrics, Verdict};

    #[test]
    fn totals_sum_across_documents() {
        let mut first = CandidateMetrics::default();
        first.record(Verdict::Correct);
        first.record(Verdict::Missing);

        let mut second = CandidateMetrics::default();
        second.record(Verdict::Correct);
        second.record(Verdict::IncorrectTranscription);

        let mut aggregator = MetricsAggregator::default();
        aggregator.absorb_document(&BTreeMap::from([("gpt-4o".to_string(), first)]));
        aggregator.absorb_document(&BTreeMap::from([("gpt-4o".to_string(), second)]));

        let totals = aggregator.into_totals();
        let metrics = totals.get("gpt-4o").copied().unwrap_or_default();
        assert_eq!(metrics.correct, 2);
        assert_eq!(metrics.missing, 1);
        assert_eq!(metrics.incorrect_transcription, 1);
        assert_eq!(metrics.total(), 4);
    }

    #[test]
    fn candidates_are_tracked_independently() {
        let mut only_one = CandidateMetrics::default();
        only_one.record(Verdict::Correct);

        let mut aggregator = MetricsAggregator::default();
        aggregator.absorb_document(&BTreeMap::from([
            ("gpt-4o".to_string(), only_one),
            ("o1".to_string(), CandidateMetrics::default()),
        ]));

        let totals = aggregator.into_totals();
        assert_eq!(totals.get("gpt-4o").map(|m| m.total()), Some(1));
        assert_eq!(totals.get("o1").map(|m| m.total()), Some(0));
    }
}
