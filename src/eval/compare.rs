use serde_json::Value;

use crate::eval::align::items_match;
use crate::eval::matcher::strings_match;
use crate::eval::normalize::normalize_value;

const LIST_OVERLAP_MATCH_THRESHOLD: f64 = 0.8;

pub fn values_equal(ground_truth: &Value, candidate: &Value) -> bool {
    let gt = normalize_value(ground_truth);
    let cand = normalize_value(candidate);

    match (&gt, &cand) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::String(a), Value::String(b)) => strings_match(a, b),
        (Value::Array(a), Value::Array(b)) => lists_roughly_equal(a, b),
        (a, b) => a == b,
    }
}

fn lists_roughly_equal(ground_truth: &[Value], candidate: &[Value]) -> bool {
    let overlap = ground_truth.len().min(candidate.len());
    if overlap == 0 {
        return false;
    }

    let matched = ground_truth
        .iter()
        .zip(candidate.iter())
        .filter(|(gt, cand)| items_match(gt, cand))
        .count();

    matched as f64 / overlap as f64 >= LIST_OVERLAP_MATCH_THRESHOLD
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::values_equal;

    #[test]
    fn null_equivalence() {
        assert!(values_equal(&json!(null), &json!(null)));
        assert!(values_equal(&json!(""), &json!(null)));
        assert!(values_equal(&json!(null), &json!([])));
        assert!(!values_equal(&json!(null), &json!("x")));
        assert!(!values_equal(&json!("x"), &json!(null)));
    }

    #[test]
    fn strings_compare_fuzzily() {
        assert!(values_equal(&json!("Hello,  World!"), &json!("hello world")));
        assert!(values_equal(&json!("  'Tempera.'  "), &json!("tempera")));
        assert!(!values_equal(&json!("tempera"), &json!("oil")));
    }

    #[test]
    fn lists_are_equal_at_eighty_percent_overlap() {
        let gt = json!(["a", "b", "c", "d", "e"]);
        let four_of_five = json!(["a", "b", "c", "d", "X"]);
        let three_of_five = json!(["a", "b", "c", "X", "Y"]);

        assert!(values_equal(&gt, &four_of_five));
        assert!(!values_equal(&gt, &three_of_five));
    }

    #[test]
    fn list_comparison_uses_positional_overlap() {
        assert!(values_equal(&json!(["a"]), &json!(["a", "b", "c"])));
        assert!(!values_equal(&json!(["z"]), &json!(["a", "z"])));
    }

    #[test]
    fn other_scalars_compare_directly() {
        assert!(values_equal(&json!(42), &json!(42)));
        assert!(!values_equal(&json!(42), &json!(43)));
        assert!(!values_equal(&json!(42), &json!("42")));
        assert!(values_equal(&json!(true), &json!(true)));
    }
}
