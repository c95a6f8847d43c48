use serde_json::Value;

pub fn flatten_paths(document: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    if let Value::Object(map) = document {
        for (key, value) in map {
            collect_paths(key.clone(), value, &mut paths);
        }
    }
    paths
}

fn collect_paths(prefix: String, value: &Value, paths: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                collect_paths(format!("{prefix}.{key}"), child, paths);
            }
        }
        _ => paths.push(prefix),
    }
}

pub fn lookup_path(document: &Value, field_path: &str) -> (Value, bool) {
    let mut current = document;
    for key in field_path.split('.') {
        match current.get(key) {
            Some(child) => current = child,
            None => return (Value::Null, false),
        }
    }
    (current.clone(), true)
}
