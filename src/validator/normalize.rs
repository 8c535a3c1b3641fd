//! Normalization pass: defaults and one-sided ranges

use serde_json::{Map, Value};

/// Normalize an intent document before validation
///
/// * a `between` range with only one of `from`/`to` becomes a one-day range
/// * an absent or `null` `filters` becomes `{}`
///
/// Documents that are not objects are returned unchanged; `validate` rejects them.
pub fn normalize(doc: Value) -> Value {
    let Value::Object(mut root) = doc else {
        return doc;
    };

    if let Some(Value::Object(time_range)) = root.get_mut("time_range") {
        fill_one_sided_between(time_range);
    }

    if root.get("filters").map_or(true, Value::is_null) {
        root.insert("filters".to_string(), Value::Object(Map::new()));
    }

    Value::Object(root)
}

fn fill_one_sided_between(time_range: &mut Map<String, Value>) {
    if time_range.get("type").and_then(Value::as_str) != Some("between") {
        return;
    }
    let from = present(time_range.get("from"));
    let to = present(time_range.get("to"));
    match (from, to) {
        (None, Some(to)) => {
            time_range.insert("from".to_string(), to);
        }
        (Some(from), None) => {
            time_range.insert("to".to_string(), from);
        }
        _ => {}
    }
}

fn present(value: Option<&Value>) -> Option<Value> {
    value.filter(|v| !v.is_null()).cloned()
}
