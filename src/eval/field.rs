use std::collections::BTreeMap;

use serde_json::Value;

use crate::eval::EvalConfig;
use crate::eval::align::{classify_item, whole_list_verdict};
use crate::eval::compare::values_equal;
use crate::eval::flatten::lookup_path;
use crate::model::{CandidateMetrics, FieldRecord, Verdict};

pub fn classify_scalar(
    ground_truth_exists: bool,
    ground_truth: &Value,
    candidate_exists: bool,
    candidate: &Value,
    strict_unknown_fields: bool,
) -> Verdict {
    match (ground_truth_exists, candidate_exists) {
        (false, false) => Verdict::Correct,
        (true, false) => Verdict::Missing,
        (false, true) => {
            if strict_unknown_fields {
                Verdict::IncorrectField
            } else {
                Verdict::Correct
            }
        }
        (true, true) => {
            if values_equal(ground_truth, candidate) {
                Verdict::Correct
            } else {
                Verdict::IncorrectTranscription
            }
        }
    }
}

pub fn evaluate_path(
    field_path: &str,
    ground_truth: &Value,
    candidates: &BTreeMap<String, Value>,
    config: &EvalConfig,
    fields: &mut Vec<FieldRecord>,
    metrics: &mut BTreeMap<String, CandidateMetrics>,
) {
    let (gt_value, gt_exists) = lookup_path(ground_truth, field_path);

    let gt_items = if gt_exists {
        gt_value.as_array().filter(|items| !items.is_empty()).cloned()
    } else {
        None
    };

    match gt_items {
        Some(items) => evaluate_list_path(field_path, &gt_value, &items, candidates, fields, metrics),
        None => evaluate_scalar_path(
            field_path, &gt_value, gt_exists, candidates, config, fields, metrics,
        ),
    }
}

fn evaluate_scalar_path(
    field_path: &str,
    gt_value: &Value,
    gt_exists: bool,
    candidates: &BTreeMap<String, Value>,
    config: &EvalConfig,
    fields: &mut Vec<FieldRecord>,
    metrics: &mut BTreeMap<String, CandidateMetrics>,
) {
    let mut model_values = BTreeMap::new();
    let mut status = BTreeMap::new();

    for (name, document) in candidates {
        let (cand_value, cand_exists) = lookup_path(document, field_path);
        let verdict = classify_scalar(
            gt_exists,
            gt_value,
            cand_exists,
            &cand_value,
            config.strict_unknown_fields,
        );

        metrics.entry(name.clone()).or_default().record(verdict);
        model_values.insert(name.clone(), cand_value);
        status.insert(name.clone(), verdict);
    }

    fields.push(FieldRecord::scalar(
        field_path.to_string(),
        gt_value.clone(),
        model_values,
        status,
    ));
}

fn evaluate_list_path(
    field_path: &str,
    gt_value: &Value,
    gt_items: &[Value],
    candidates: &BTreeMap<String, Value>,
    fields: &mut Vec<FieldRecord>,
    metrics: &mut BTreeMap<String, CandidateMetrics>,
) {
    let mut candidate_items: BTreeMap<String, Option<Vec<Value>>> = BTreeMap::new();
    let mut summary_values = BTreeMap::new();
    let mut summary_status = BTreeMap::new();

    for (name, document) in candidates {
        let (cand_value, cand_exists) = lookup_path(document, field_path);
        let items = if cand_exists {
            Some(cand_value.as_array().cloned().unwrap_or_default())
        } else {
            None
        };

        let verdict = whole_list_verdict(gt_items, items.as_deref());
        summary_values.insert(name.clone(), cand_value);
        summary_status.insert(name.clone(), verdict);
        candidate_items.insert(name.clone(), items);
    }

    fields.push(FieldRecord::scalar(
        field_path.to_string(),
        gt_value.clone(),
        summary_values,
        summary_status,
    ));

    for (index, gt_item) in gt_items.iter().enumerate() {
        let mut model_values = BTreeMap::new();
        let mut status = BTreeMap::new();

        for name in candidates.keys() {
            let candidate_item = candidate_items
                .get(name)
                .and_then(|items| items.as_ref())
                .and_then(|items| items.get(index));

            let verdict = classify_item(gt_item, candidate_item);
            metrics.entry(name.clone()).or_default().record(verdict);
            model_values.insert(name.clone(), candidate_item.cloned().unwrap_or(Value::Null));
            status.insert(name.clone(), verdict);
        }

        fields.push(FieldRecord::list_item(
            field_path,
            index,
            gt_item.clone(),
            model_values,
            status,
        ));
    }
}
