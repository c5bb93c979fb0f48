use serde_json::Value;

/// An unopinionated view over a raw JSON Schema document.
///
/// `RawSchema` performs no interpretation of its own beyond field access —
/// all structural decisions (flattening `allOf`, picking a property sub-schema,
/// computing defaults) live in [`crate::schema::EffectiveSchema`]. This is the
/// standalone, dependency-free "data" half of schema handling; `EffectiveSchema`
/// is the "operations" half.
#[derive(Clone, Debug, PartialEq)]
pub struct RawSchema<'a> {
    value: &'a Value,
}

impl<'a> RawSchema<'a> {
    /// An empty schema: no properties, no constraints, no default.
    ///
    /// `Value` doesn't have a `'static` empty-object constant we can borrow, so
    /// callers that need an always-empty schema should keep a `Value::Object`
    /// alive and wrap it; [`EffectiveSchema::empty`](crate::schema::EffectiveSchema::empty)
    /// is the usual way to get an empty *effective* schema without needing a
    /// `RawSchema` at all.
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.value.as_object()?.get(key)
    }

    pub(crate) fn has_ref(&self) -> bool {
        self.get("$ref").and_then(Value::as_str).is_some()
    }

    pub(crate) fn properties(&self) -> Option<&'a serde_json::Map<String, Value>> {
        self.get("properties").and_then(Value::as_object)
    }

    pub(crate) fn pattern_properties(&self) -> Option<&'a serde_json::Map<String, Value>> {
        self.get("patternProperties").and_then(Value::as_object)
    }

    pub(crate) fn required(&self) -> Vec<&'a str> {
        self.get("required")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub(crate) fn items(&self) -> Option<&'a Value> {
        self.get("items")
    }

    pub(crate) fn additional_properties(&self) -> Option<&'a Value> {
        self.get("additionalProperties")
    }

    pub(crate) fn all_of(&self) -> Option<&'a Vec<Value>> {
        self.get("allOf").and_then(Value::as_array)
    }

    pub(crate) fn type_list(&self) -> Vec<&'a str> {
        match self.get("type") {
            Some(Value::String(s)) => vec![s.as_str()],
            Some(Value::Array(arr)) => arr.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether an explicit `default` key is present, and its value if so.
    ///
    /// Distinguishing "absent" from "present and `null`" requires checking
    /// presence rather than just unwrapping to `Value::Null`.
    pub(crate) fn default_value(&self) -> Option<&'a Value> {
        self.get("default")
    }
}
