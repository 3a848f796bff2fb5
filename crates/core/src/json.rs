use serde_json::Value;

/// Recursively remove all object fields whose value is `Value::Null`.
///
/// Array elements that are null are left alone so indices keep their meaning;
/// objects nested inside arrays are still pruned.
pub fn prune_null_fields(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for v in map.values_mut() {
                prune_null_fields(v);
            }
            map.retain(|_, v| !matches!(v, Value::Null));
        }
        Value::Array(arr) => {
            for v in arr.iter_mut() {
                prune_null_fields(v);
            }
        }
        _ => {}
    }
}

/// Return a cloned JSON value with all null-valued object fields removed.
pub fn without_null_fields(value: &Value) -> Value {
    let mut cloned = value.clone();
    prune_null_fields(&mut cloned);
    cloned
}

#[cfg(test)]
mod tests {
    use super::without_null_fields;
    use serde_json::json;

    #[test]
    fn prunes_nested_object_nulls_but_keeps_array_nulls() {
        let input = json!({
            "a": null,
            "b": {"c": null, "d": 1},
            "e": [null, {"f": null, "g": 2}]
        });
        let pruned = without_null_fields(&input);
        assert_eq!(
            pruned,
            json!({"b": {"d": 1}, "e": [null, {"g": 2}]})
        );
    }
}
