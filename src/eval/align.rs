use serde_json::Value;

use crate::eval::matcher::strings_match;
use crate::model::Verdict;

pub fn items_match(ground_truth: &Value, candidate: &Value) -> bool {
    match (ground_truth, candidate) {
        (Value::String(a), Value::String(b)) => strings_match(a, b),
        (a, b) => a == b,
    }
}

pub fn classify_item(ground_truth_item: &Value, candidate_item: Option<&Value>) -> Verdict {
    match candidate_item {
        None => Verdict::Missing,
        Some(candidate) if items_match(ground_truth_item, candidate) => Verdict::Correct,
        Some(_) => Verdict::IncorrectTranscription,
    }
}

pub fn classify_items(ground_truth: &[Value], candidate: &[Value]) -> Vec<Verdict> {
    ground_truth
        .iter()
        .enumerate()
        .map(|(index, item)| classify_item(item, candidate.get(index)))
        .collect()
}

pub fn whole_list_verdict(ground_truth: &[Value], candidate: Option<&[Value]>) -> Verdict {
    let Some(candidate) = candidate else {
        return Verdict::Missing;
    };

    let overlap = ground_truth.len().min(candidate.len());
    if overlap == 0 {
        return Verdict::IncorrectTranscription;
    }

    let all_match = ground_truth.iter().enumerate().all(|(index, gt)| {
        candidate
            .get(index)
            .is_some_and(|cand| items_match(gt, cand))
    });

    if all_match {
        Verdict::Correct
    } else {
        Verdict::IncorrectTranscription
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{classify_items, whole_list_verdict};
    use crate::model::Verdict;

    fn items(value: Value) -> Vec<Value> {
        value.as_array().cloned().unwrap_or_default()
    }

    #[test]
    fn positional_classification_flags_single_divergence() {
        let verdicts = classify_items(
            &items(json!(["a", "b", "c"])),
            &items(json!(["a", "X", "c"])),
        );
        assert_eq!(
            verdicts,
            vec![
                Verdict::Correct,
                Verdict::IncorrectTranscription,
                Verdict::Correct
            ]
        );

        let candidate = items(json!(["a", "X", "c"]));
        let whole = whole_list_verdict(&items(json!(["a", "b", "c"])), Some(candidate.as_slice()));
        assert_eq!(whole, Verdict::IncorrectTranscription);
    }

    #[test]
    fn short_candidate_marks_tail_items_missing() {
        let verdicts = classify_items(&items(json!(["a", "b"])), &items(json!(["a"])));
        assert_eq!(verdicts, vec![Verdict::Correct, Verdict::Missing]);

        let candidate = items(json!(["a"]));
        let whole = whole_list_verdict(&items(json!(["a", "b"])), Some(candidate.as_slice()));
        assert_eq!(whole, Verdict::IncorrectTranscription);
    }

    #[test]
    fn item_matching_is_fuzzy_for_strings_only() {
        let verdicts = classify_items(
            &items(json!(["Firenze, Uffizi.", 1920])),
            &items(json!(["firenze uffizi", "1920"])),
        );
        assert_eq!(
            verdicts,
            vec![Verdict::Correct, Verdict::IncorrectTranscription]
        );
    }

    #[test]
    fn absent_candidate_is_missing_not_incorrect() {
        let whole = whole_list_verdict(&items(json!(["a"])), None);
        assert_eq!(whole, Verdict::Missing);
    }

    #[test]
    fn empty_overlap_is_incorrect_transcription() {
        let whole = whole_list_verdict(&items(json!(["a", "b"])), Some(&[]));
        assert_eq!(whole, Verdict::IncorrectTranscription);
    }

    #[test]
    fn matching_prefix_with_longer_candidate_is_correct() {
        let candidate = items(json!(["a", "b", "extra"]));
        let whole = whole_list_verdict(&items(json!(["a", "b"])), Some(candidate.as_slice()));
        assert_eq!(whole, Verdict::Correct);
    }
}
