use serde_json::json;
use serde_json::Value;

use crate::schema::EffectiveSchema;

/// The value to use when a property or element has no parsed content at all.
///
/// 1. An explicit `default` on the schema always wins.
/// 2. Otherwise, if `use_type_defaults` and the schema declares a `type`,
///    return that type's canonical zero value (first entry of a union type
///    governs).
/// 3. Otherwise, `null`.
pub(crate) fn default_for(schema: &EffectiveSchema, use_type_defaults: bool) -> Value {
    if let Some(default) = schema.default_value() {
        return default.clone();
    }
    if use_type_defaults {
        if let Some(first_type) = schema.type_list().first() {
            return canonical_zero(first_type);
        }
    }
    Value::Null
}

fn canonical_zero(type_name: &str) -> Value {
    match type_name {
        "object" => json!({}),
        "array" => json!([]),
        "string" => json!(""),
        "number" | "integer" => json!(0),
        "boolean" => json!(false),
        "null" => Value::Null,
        _ => Value::Null,
    }
}
