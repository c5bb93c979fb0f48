//! Turns a (possibly incomplete) parse tree into a schema-conformant
//! `serde_json::Value`, filling in missing optional properties from schema
//! defaults and dropping whatever the user hadn't finished typing.

mod default_value;
mod merge;

#[cfg(test)]
mod tests;

use serde_json::Map;
use serde_json::Value;

use crate::node::{ObjectEntry, ParseNode};
use crate::schema::EffectiveSchema;

pub(crate) use default_value::default_for;

/// Completes a single parse node against `schema`.
///
/// `Value::Null` plays double duty: it's a legitimate completed value (a
/// parsed `null`, or a schema default of `null`) and also the sentinel for
/// an Object prefix that is pure, unrecognised garbage (see
/// [`is_unresolvable_garbage`]). Callers at the object/array/top level that
/// need to tell the two apart do so by context, per the public contract.
pub(crate) fn complete(node: &ParseNode, schema: &EffectiveSchema) -> Value {
    match node {
        ParseNode::Object { entries, end, .. } => complete_object(entries, end.is_some(), schema),
        ParseNode::Array { elements, .. } => complete_array(elements, schema),
        ParseNode::String { value, .. } => Value::String(value.clone()),
        ParseNode::Number { text, .. } => complete_number(text),
        ParseNode::Bool { value, .. } => Value::Bool(*value),
        ParseNode::Null { .. } => complete_null(schema),
    }
}

fn complete_null(schema: &EffectiveSchema) -> Value {
    if schema.allows_null() {
        Value::Null
    } else {
        default_for(schema, true)
    }
}

fn complete_number(text: &str) -> Value {
    let stripped = text
        .strip_suffix("e+")
        .or_else(|| text.strip_suffix("e-"))
        .or_else(|| text.strip_suffix("E+"))
        .or_else(|| text.strip_suffix("E-"))
        .or_else(|| text.strip_suffix('e'))
        .or_else(|| text.strip_suffix('E'))
        .or_else(|| text.strip_suffix('.'))
        .unwrap_or(text);

    if stripped == "-" || stripped.is_empty() {
        return Value::from(0);
    }

    // Prefer an exact integer representation when the slice has no fraction
    // or exponent: parsing "42" as `f64` and back would silently turn it into
    // `42.0`, changing how it re-serializes even though nothing was truncated.
    if let Ok(i) = stripped.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(u) = stripped.parse::<u64>() {
        return Value::from(u);
    }

    match stripped.parse::<f64>() {
        Ok(n) => serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or_else(|| Value::from(0)),
        Err(_) => Value::from(0),
    }
}

fn complete_array(elements: &[ParseNode], schema: &EffectiveSchema) -> Value {
    let completed: Vec<Value> = elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let item_schema = EffectiveSchema::resolve(&schema.items().schema_for_index(index));
            complete(element, &item_schema)
        })
        .collect();
    Value::Array(completed)
}

/// An entry counts as "garbage" for the malformed-prefix sentinel when its
/// key isn't a *declared* property (pattern matches don't count here) and it
/// never got a colon — i.e. the user typed a fragment that never became a
/// recognisable key-value pair.
fn is_unresolved_garbage(entry: &ObjectEntry, schema: &EffectiveSchema) -> bool {
    let key_known = entry
        .key
        .as_deref()
        .is_some_and(|k| schema.has_declared_property(k));
    !key_known && !entry.has_colon
}

fn complete_object(entries: &[ObjectEntry], is_closed: bool, schema: &EffectiveSchema) -> Value {
    if entries.is_empty() {
        if let Some(default) = schema.default_value() {
            return default.clone();
        }
    } else if !is_closed && entries.iter().all(|e| is_unresolved_garbage(e, schema)) {
        return Value::Null;
    }

    let mut collected = Map::new();
    for entry in entries {
        let key = match entry.key.as_deref() {
            Some(k) if !k.is_empty() => k,
            _ => continue,
        };
        let property_schema = EffectiveSchema::resolve(&schema.property_schema(key));

        if let Some(value_node) = &entry.value {
            collected.insert(key.to_string(), complete(value_node, &property_schema));
        } else if entry.has_colon {
            let use_type_defaults = !schema.is_required(key);
            collected.insert(
                key.to_string(),
                default_for(&property_schema, use_type_defaults),
            );
        }
        // Else: dangling key with no colon — contributes nothing.
    }

    let mut output = match schema.default_value() {
        Some(default) => merge::merge(default.clone(), Value::Object(collected)),
        None => Value::Object(collected),
    };

    if let Value::Object(map) = &mut output {
        for name in schema.property_names() {
            if schema.is_required(name) || map.contains_key(name) {
                continue;
            }
            let property_schema = EffectiveSchema::resolve(&schema.property_schema(name));
            if let Some(default) = property_schema.default_value() {
                map.insert(name.to_string(), default.clone());
            }
        }

        if !schema.additional_properties_allowed() {
            map.retain(|key, _| schema.is_recognized_key(key));
        }
    }

    output
}
