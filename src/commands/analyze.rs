use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde_json::Value;
use tracing::info;

use crate::cli::AnalyzeArgs;
use crate::eval::metrics::MetricsAggregator;
use crate::eval::report::summarize;
use crate::eval::{EvalConfig, evaluate_document};
use crate::model::{DatasetInfo, DatasetReport, GroundTruthHash, ImageAnalysis};
use crate::store::DocumentStore;
use crate::util::{now_utc_string, sha256_file, write_json_pretty};

const REPORT_MANIFEST_VERSION: u32 = 1;

pub fn run(args: AnalyzeArgs) -> Result<()> {
    if args.candidates.is_empty() {
        bail!("at least one --candidate is required");
    }

    let store = DocumentStore::new(&args.ground_truth_dir, &args.benchmark_dir);
    let config = EvalConfig {
        candidates: args.candidates.clone(),
        strict_unknown_fields: args.strict_unknown_fields,
    };

    let image_ids = store.list_image_ids()?;
    let benchmark = store.load_benchmark_summary()?;
    info!(
        image_count = image_ids.len(),
        candidate_count = config.candidates.len(),
        "starting analysis"
    );

    let mut aggregator = MetricsAggregator::default();
    let mut analyses = BTreeMap::new();
    let mut ground_truth_hashes = Vec::with_capacity(image_ids.len());

    for image_id in &image_ids {
        let ground_truth = store.load_ground_truth(image_id)?;
        ground_truth_hashes.push(GroundTruthHash {
            image_id: image_id.clone(),
            sha256: sha256_file(&store.ground_truth_path(image_id))?,
        });

        let mut candidates: BTreeMap<String, Value> = BTreeMap::new();
        for candidate in &config.candidates {
            if let Some(annotations) = store.load_candidate_annotations(candidate, image_id) {
                candidates.insert(candidate.clone(), annotations);
            }
        }

        let evaluation = evaluate_document(&ground_truth, &candidates, &config);
        aggregator.absorb_document(&evaluation.metrics);

        info!(
            image_id = %image_id,
            field_count = evaluation.fields.len(),
            candidates_present = candidates.len(),
            "image analyzed"
        );

        let (front_url, back_url) = image_urls(&args.image_url_template, image_id);
        analyses.insert(
            image_id.clone(),
            ImageAnalysis {
                image_id: image_id.clone(),
                front_url,
                back_url,
                fields: evaluation.fields,
                metrics: evaluation.metrics,
            },
        );
    }

    let totals = aggregator.into_totals();
    let overall_metrics = summarize(&totals, &benchmark);

    for (candidate, metrics) in &overall_metrics {
        info!(
            candidate = %candidate,
            accuracy = metrics.accuracy,
            missing_rate = metrics.missing_rate,
            incorrect_transcription_rate = metrics.incorrect_transcription_rate,
            "candidate summary"
        );
    }

    let report = DatasetReport {
        manifest_version: REPORT_MANIFEST_VERSION,
        generated_at: now_utc_string(),
        dataset: DatasetInfo {
            image_count: image_ids.len(),
            candidates: config.candidates.clone(),
            strict_unknown_fields: config.strict_unknown_fields,
            ground_truth_hashes,
        },
        overall_metrics,
        analyses,
    };

    write_json_pretty(&args.output_path, &report)?;
    info!(path = %args.output_path.display(), "wrote analysis report");

    Ok(())
}

fn image_urls(template: &str, image_id: &str) -> (String, String) {
    let front = template.replace("{id}", image_id).replace("{side}", "1");
    let back = template.replace("{id}", image_id).replace("{side}", "2");
    (front, back)
}
