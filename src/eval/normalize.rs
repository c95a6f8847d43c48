use serde_json::Value;

const EMPTY_MARKERS: [&str; 3] = ["\"\"", "[]", "null"];

pub fn normalize_value(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::String(raw) => normalize_string(raw),
        Value::Array(items) => {
            let kept: Vec<Value> = items
                .iter()
                .map(normalize_value)
                .filter(|item| !item.is_null())
                .collect();
            if kept.is_empty() {
                Value::Null
            } else {
                Value::Array(kept)
            }
        }
        other => other.clone(),
    }
}

fn normalize_string(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() || EMPTY_MARKERS.contains(&trimmed) {
        return Value::Null;
    }

    let stripped = strip_enclosing_quotes(trimmed);
    if stripped == trimmed {
        Value::String(trimmed.to_string())
    } else {
        normalize_string(stripped)
    }
}

fn strip_enclosing_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
