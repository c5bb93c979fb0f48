use std::collections::BTreeMap;
use std::collections::HashSet;

use regex::Regex;
use serde_json::json;
use serde_json::Value;

use crate::schema::items_schema::ItemsSchema;
use crate::schema::raw_schema::RawSchema;

/// A flattened, query-ready view over a schema: the result of [`resolve`](EffectiveSchema::resolve).
///
/// Property and item sub-schemas are kept as raw (unresolved) `Value`s — the
/// parser and completer call [`resolve`](EffectiveSchema::resolve) again on them
/// lazily, one level at a time, rather than eagerly resolving the whole schema
/// tree up front. This is what keeps `$ref: "#"` self-reference inside `items`
/// safe: resolving it only ever produces one more (empty, since any `$ref`
/// resolves to [`EffectiveSchema::empty`]) level, never an unbounded expansion.
#[derive(Clone, Debug, Default)]
pub struct EffectiveSchema {
    properties: BTreeMap<String, Value>,
    pattern_properties: Vec<(Regex, Value)>,
    required: HashSet<String>,
    items: ItemsSchema,
    additional_properties_allowed: bool,
    type_list: Vec<String>,
    default_value: Option<Value>,
    all_of_merged: bool,
}

impl EffectiveSchema {
    /// The empty schema: no properties, no required keys, `additionalProperties`
    /// implicitly allowed, no default. Used for property/item positions that
    /// have no applicable sub-schema, and as the result of resolving any `$ref`
    /// (external refs are unsupported; the `#` self-reference sentinel inside
    /// `items` is deliberately *not* followed, to cut off recursive default
    /// expansion — see the module docs).
    pub fn empty() -> Self {
        EffectiveSchema {
            additional_properties_allowed: true,
            ..Default::default()
        }
    }

    /// Resolves a raw schema value into its effective, flattened form.
    ///
    /// `allOf` branches are merged left-to-right (later branches overwrite
    /// earlier ones on key collision) into the outer schema's own `properties`/
    /// `required`/`default`, which form the lowest-precedence layer. `anyOf` and
    /// `oneOf` are intentionally left unresolved: callers only ever see the raw
    /// schema's direct `properties`, never a branch picked from inside either
    /// keyword.
    pub fn resolve(value: &Value) -> Self {
        let raw = RawSchema::new(value);

        // Any $ref — including the array-items self-reference sentinel `"#"` —
        // resolves to the empty schema. External refs are unsupported; the
        // self-reference is deliberately not followed, which is exactly the
        // "cut recursion at the first schema level inside arrays" rule.
        if raw.has_ref() {
            return EffectiveSchema::empty();
        }

        let mut properties: BTreeMap<String, Value> = BTreeMap::new();
        let mut required: HashSet<String> = HashSet::new();
        let mut default_value: Option<Value> = None;

        if let Some(props) = raw.properties() {
            for (key, schema) in props {
                properties.insert(key.clone(), schema.clone());
            }
        }
        for key in raw.required() {
            required.insert(key.to_string());
        }

        let all_of_branches = raw.all_of().filter(|branches| !branches.is_empty());
        let all_of_merged = all_of_branches.is_some();

        if let Some(branches) = all_of_branches {
            for branch in branches {
                let branch_raw = RawSchema::new(branch);
                if let Some(props) = branch_raw.properties() {
                    for (key, schema) in props {
                        properties.insert(key.clone(), schema.clone());
                    }
                }
                for key in branch_raw.required() {
                    required.insert(key.to_string());
                }
                if let Some(d) = branch_raw.default_value() {
                    default_value = Some(d.clone());
                }
            }
        }
        // The outer schema's own `default`, if present, is the most specific
        // layer and wins over anything contributed by `allOf`.
        if let Some(d) = raw.default_value() {
            default_value = Some(d.clone());
        }

        let pattern_properties = raw
            .pattern_properties()
            .map(|props| {
                props
                    .iter()
                    .filter_map(|(pattern, schema)| {
                        Regex::new(pattern).ok().map(|re| (re, schema.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let additional_properties_allowed =
            !matches!(raw.additional_properties(), Some(Value::Bool(false)));

        let items = match raw.items() {
            Some(Value::Array(tuple)) => ItemsSchema::Tuple(tuple.clone()),
            Some(other) => ItemsSchema::Single(other.clone()),
            None => ItemsSchema::None,
        };

        let type_list = raw.type_list().into_iter().map(str::to_string).collect();

        EffectiveSchema {
            properties,
            pattern_properties,
            required,
            items,
            additional_properties_allowed,
            type_list,
            default_value,
            all_of_merged,
        }
    }

    /// The raw sub-schema for `key`: `properties[key]`, else the first
    /// `patternProperties` entry whose regex matches, else the empty schema.
    pub fn property_schema(&self, key: &str) -> Value {
        if let Some(schema) = self.properties.get(key) {
            return schema.clone();
        }
        for (pattern, schema) in &self.pattern_properties {
            if pattern.is_match(key) {
                return schema.clone();
            }
        }
        json!({})
    }

    /// Whether `key` is a *direct* `properties` entry (not a pattern match).
    ///
    /// This is deliberately narrower than "has an applicable sub-schema" — it's
    /// used for the malformed-prefix sentinel, which only asks whether a key is
    /// a recognised declared property, not whether `patternProperties` happens
    /// to match it.
    pub fn has_declared_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Whether `key` is recognised at all: a direct `properties` entry or a
    /// `patternProperties` match. Used by the additional-properties removal
    /// pass, which (unlike the malformed-prefix sentinel) does care about
    /// pattern matches.
    pub fn is_recognized_key(&self, key: &str) -> bool {
        self.has_declared_property(key)
            || self.pattern_properties.iter().any(|(re, _)| re.is_match(key))
    }

    /// The set of declared property names, used by the parser's unique-prefix
    /// partial-key matching.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn is_required(&self, key: &str) -> bool {
        self.required.contains(key)
    }

    pub fn items(&self) -> &ItemsSchema {
        &self.items
    }

    pub fn additional_properties_allowed(&self) -> bool {
        self.additional_properties_allowed
    }

    pub fn type_list(&self) -> &[String] {
        &self.type_list
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn all_of_merged(&self) -> bool {
        self.all_of_merged
    }

    /// Whether `null` is an acceptable value per this schema's `type` list.
    ///
    /// Used to decide, per the "preserve if allowed" rule, whether a parsed
    /// `null` should be kept verbatim or replaced with this schema's default.
    pub fn allows_null(&self) -> bool {
        self.type_list.is_empty() || self.type_list.iter().any(|t| t == "null")
    }
}
