use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::{debug, warn};

use crate::model::BenchmarkFigures;

const CANDIDATE_ENVELOPE_KEY: &str = "annotations";
const BENCHMARK_SUMMARY_FILENAME: &str = "benchmark_summary.json";

#[derive(Debug, Clone)]
pub struct DocumentStore {
    ground_truth_dir: PathBuf,
    benchmark_dir: PathBuf,
}

impl DocumentStore {
    pub fn new(ground_truth_dir: &Path, benchmark_dir: &Path) -> Self {
        Self {
            ground_truth_dir: ground_truth_dir.to_path_buf(),
            benchmark_dir: benchmark_dir.to_path_buf(),
        }
    }

    pub fn list_image_ids(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.ground_truth_dir).with_context(|| {
            format!(
                "failed to read ground truth directory: {}",
                self.ground_truth_dir.display()
            )
        })?;

        let mut image_ids = Vec::new();
        for entry in entries {
            let entry = entry.with_context(|| {
                format!(
                    "failed to read entry in {}",
                    self.ground_truth_dir.display()
                )
            })?;
            let path = entry.path();

            let is_json = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            if !is_json {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                image_ids.push(stem.to_string());
            }
        }

        if image_ids.is_empty() {
            bail!(
                "no ground truth files found in {}",
                self.ground_truth_dir.display()
            );
        }

        image_ids.sort();
        Ok(image_ids)
    }

    pub fn ground_truth_path(&self, image_id: &str) -> PathBuf {
        self.ground_truth_dir.join(format!("{image_id}.json"))
    }

    pub fn load_ground_truth(&self, image_id: &str) -> Result<Value> {
        let path = self.ground_truth_path(image_id);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed to read ground truth: {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("failed to parse ground truth: {}", path.display()))
    }

    pub fn candidate_path(&self, candidate: &str, image_id: &str) -> PathBuf {
        self.benchmark_dir
            .join(candidate)
            .join(format!("{image_id}.json"))
    }

    pub fn load_candidate_annotations(&self, candidate: &str, image_id: &str) -> Option<Value> {
        let path = self.candidate_path(candidate, image_id);

        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) => {
                debug!(
                    candidate,
                    image_id,
                    error = %err,
                    "candidate output unavailable"
                );
                return None;
            }
        };

        let envelope: Value = match serde_json::from_str(&data) {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(
                    candidate,
                    image_id,
                    error = %err,
                    "candidate output is not valid json, treating as absent"
                );
                return None;
            }
        };

        match extract_annotations(&envelope) {
            Some(annotations) => Some(annotations),
            None => {
                warn!(
                    candidate,
                    image_id,
                    "candidate output lacks an annotations object, treating as absent"
                );
                None
            }
        }
    }

    pub fn load_benchmark_summary(&self) -> Result<BTreeMap<String, BenchmarkFigures>> {
        let path = self.benchmark_dir.join(BENCHMARK_SUMMARY_FILENAME);
        if !path.exists() {
            debug!(path = %path.display(), "benchmark summary not found, skipping cost merge");
            return Ok(BTreeMap::new());
        }

        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed to read benchmark summary: {}", path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("failed to parse benchmark summary: {}", path.display()))
    }
}

fn extract_annotations(envelope: &Value) -> Option<Value> {
    envelope
        .get(CANDIDATE_ENVELOPE_KEY)
        .filter(|annotations| annotations.is_object())
        .cloned()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::extract_annotations;

    #[test]
    fn annotations_object_is_extracted_from_envelope() {
        let envelope = json!({
            "photo_id": "100001",
            "annotations": {"artwork": {"title": "Pietà"}},
            "request_time": 4200
        });

        let annotations = extract_annotations(&envelope).expect("annotations present");
        assert_eq!(annotations, json!({"artwork": {"title": "Pietà"}}));
    }

    #[test]
    fn missing_or_non_object_annotations_are_rejected() {
        assert!(extract_annotations(&json!({"photo_id": "1"})).is_none());
        assert!(extract_annotations(&json!({"annotations": "text"})).is_none());
        assert!(extract_annotations(&json!({"annotations": null})).is_none());
        assert!(extract_annotations(&json!("not an object")).is_none());
    }
}
