use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::model::{CandidateMetrics, FieldRecord};

pub mod align;
pub mod compare;
pub mod field;
pub mod flatten;
pub mod matcher;
pub mod metrics;
pub mod normalize;
pub mod report;

#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub candidates: Vec<String>,
    pub strict_unknown_fields: bool,
}

#[derive(Debug)]
pub struct DocumentEvaluation {
    pub fields: Vec<FieldRecord>,
    pub metrics: BTreeMap<String, CandidateMetrics>,
}

pub fn evaluate_document(
    ground_truth: &Value,
    candidates: &BTreeMap<String, Value>,
    config: &EvalConfig,
) -> DocumentEvaluation {
    let mut paths: BTreeSet<String> = flatten::flatten_paths(ground_truth).into_iter().collect();
    for document in candidates.values() {
        paths.extend(flatten::flatten_paths(document));
    }

    let mut fields = Vec::new();
    let mut metrics: BTreeMap<String, CandidateMetrics> = candidates
        .keys()
        .map(|name| (name.clone(), CandidateMetrics::default()))
        .collect();

    for path in &paths {
        field::evaluate_path(path, ground_truth, candidates, config, &mut fields, &mut metrics);
    }

    DocumentEvaluation { fields, metrics }
}
