use serde_json::json;
use serde_json::Value;

/// The `items` keyword of an object schema, in either of its two JSON Schema
/// forms.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ItemsSchema {
    /// No `items` keyword was present.
    #[default]
    None,
    /// A single schema applied to every array element.
    Single(Value),
    /// Tuple form: a per-index schema. Indices beyond the tuple's length fall
    /// back to an empty schema (`additional items` semantics are not otherwise
    /// enforced, per the unsupported-features list).
    Tuple(Vec<Value>),
}

impl ItemsSchema {
    /// The raw schema that applies to the element at `index`.
    pub fn schema_for_index(&self, index: usize) -> Value {
        match self {
            ItemsSchema::None => json!({}),
            ItemsSchema::Single(schema) => schema.clone(),
            ItemsSchema::Tuple(schemas) => schemas.get(index).cloned().unwrap_or_else(|| json!({})),
        }
    }
}
