//! Field-level change summaries for audit entries

use serde_json::Value;

/// Describe which top-level fields differ between two serialized records
///
/// Returns `None` when nothing changed. Fields only present in `after` are
/// listed last.
pub fn field_changes(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return (before != after).then(|| format!("{} -> {}", render(before), render(after)));
    };

    let mut changes: Vec<String> = before_obj
        .iter()
        .filter_map(|(key, old)| match after_obj.get(key) {
            Some(new) if new == old => None,
            Some(new) => Some(format!("{}: {} -> {}", key, render(old), render(new))),
            None => Some(format!("{}: {} -> (removed)", key, render(old))),
        })
        .collect();

    changes.extend(
        after_obj
            .iter()
            .filter(|(key, _)| !before_obj.contains_key(*key))
            .map(|(key, new)| format!("{}: (added) -> {}", key, render(new))),
    );

    (!changes.is_empty()).then(|| changes.join(", "))
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > 40 => {
            let head: String = s.chars().take(37).collect();
            format!("\"{}...\"", head)
        }
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let v = json!({"name": "Feed", "cost": 40.0});
        assert_eq!(field_changes(&v, &v), None);
    }

    #[test]
    fn test_changed_fields() {
        let before = json!({"name": "Feed", "cost": 40.0, "buyer": null});
        let after = json!({"name": "Hay", "cost": 40.0, "buyer": "Market"});

        assert_eq!(
            field_changes(&before, &after).unwrap(),
            "buyer: null -> \"Market\", name: \"Feed\" -> \"Hay\""
        );
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"a": 1});
        let after = json!({"b": 2});
        let diff = field_changes(&before, &after).unwrap();

        assert!(diff.contains("a: 1 -> (removed)"));
        assert!(diff.contains("b: (added) -> 2"));
    }

    #[test]
    fn test_long_strings_truncated() {
        let before = json!({"name": "x"});
        let after = json!({"name": "y".repeat(60)});
        let diff = field_changes(&before, &after).unwrap();
        assert!(diff.ends_with("...\""));
    }

    #[test]
    fn test_non_object_values() {
        assert_eq!(field_changes(&json!(1), &json!(2)).unwrap(), "1 -> 2");
        assert_eq!(field_changes(&json!(1), &json!(1)), None);
    }
}
