use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Missing,
    IncorrectTranscription,
    IncorrectField,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldRecord {
    pub field_path: String,
    pub ground_truth: Value,
    pub model_values: BTreeMap<String, Value>,
    pub status: BTreeMap<String, Verdict>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_list_item: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_index: Option<usize>,
}

impl FieldRecord {
    pub fn scalar(
        field_path: String,
        ground_truth: Value,
        model_values: BTreeMap<String, Value>,
        status: BTreeMap<String, Verdict>,
    ) -> Self {
        Self {
            field_path,
            ground_truth,
            model_values,
            status,
            is_list_item: false,
            parent_path: None,
            list_index: None,
        }
    }

    pub fn list_item(
        parent_path: &str,
        index: usize,
        ground_truth: Value,
        model_values: BTreeMap<String, Value>,
        status: BTreeMap<String, Verdict>,
    ) -> Self {
        Self {
            field_path: format!("{parent_path}[{index}]"),
            ground_truth,
            model_values,
            status,
            is_list_item: true,
            parent_path: Some(parent_path.to_string()),
            list_index: Some(index),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMetrics {
    pub correct: usize,
    pub incorrect_field: usize,
    pub incorrect_transcription: usize,
    pub missing: usize,
}

impl CandidateMetrics {
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Correct => self.correct += 1,
            Verdict::Missing => self.missing += 1,
            Verdict::IncorrectTranscription => self.incorrect_transcription += 1,
            Verdict::IncorrectField => self.incorrect_field += 1,
        }
    }

    pub fn absorb(&mut self, other: &CandidateMetrics) {
        self.correct += other.correct;
        self.incorrect_field += other.incorrect_field;
        self.incorrect_transcription += other.incorrect_transcription;
        self.missing += other.missing;
    }

    pub fn total(&self) -> usize {
        self.correct + self.incorrect_field + self.incorrect_transcription + self.missing
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageAnalysis {
    pub image_id: String,
    pub front_url: String,
    pub back_url: String,
    pub fields: Vec<FieldRecord>,
    pub metrics: BTreeMap<String, CandidateMetrics>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct BenchmarkFigures {
    pub average_cost_per_image: Option<f64>,
    pub average_time_per_image: Option<f64>,
    pub total_cost: Option<f64>,
    pub total_time: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallMetrics {
    pub accuracy: f64,
    pub incorrect_field_rate: f64,
    pub incorrect_transcription_rate: f64,
    pub missing_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_per_image: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_per_image: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroundTruthHash {
    pub image_id: String,
    pub sha256: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetInfo {
    pub image_count: usize,
    pub candidates: Vec<String>,
    pub strict_unknown_fields: bool,
    pub ground_truth_hashes: Vec<GroundTruthHash>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetReport {
    pub manifest_version: u32,
    pub generated_at: String,
    pub dataset: DatasetInfo,
    pub overall_metrics: BTreeMap<String, OverallMetrics>,
    pub analyses: BTreeMap<String, ImageAnalysis>,
}
