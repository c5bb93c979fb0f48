use serde_json::Value;

/// Deep-merges `override_value` onto `base`: where both sides are objects,
/// merge key-wise recursively; otherwise `override_value` wins outright
/// (arrays are replaced wholesale, never concatenated or zipped).
pub(crate) fn merge(base: Value, override_value: Value) -> Value {
    match (base, override_value) {
        (Value::Object(mut base_map), Value::Object(override_map)) => {
            for (key, override_val) in override_map {
                let merged = match base_map.remove(&key) {
                    Some(base_val) => merge(base_val, override_val),
                    None => override_val,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, override_value) => override_value,
    }
}
