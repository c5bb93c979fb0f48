//! The crate's single public entry point.
//!
//! `expand` wires the three internal components together: resolve the schema,
//! hand the prefix to the [`Parser`], and fold the resulting tree (if any)
//! with the [`completer`] against the resolved schema. Every other module is
//! reachable only through this function and the types it returns.

use serde_json::Value;

use crate::completer;
use crate::parser::Parser;
use crate::schema::EffectiveSchema;

/// Completes a partial JSON `prefix` into a value conforming to `schema`.
///
/// - An empty (or whitespace-only) `prefix` returns the schema's own default,
///   falling back to the schema's declared type's canonical zero value, or
///   `Value::Null` if neither is available.
/// - A non-empty `prefix` that is unrecoverably malformed (see the parser's
///   module docs for the exact rejection rules) returns `Value::Null` — the
///   failure sentinel. Because a legitimately parsed `null` also serializes
///   to `Value::Null`, callers distinguish the two only by context: was the
///   prefix non-empty?
/// - Otherwise, returns the best completion of the prefix: parsed content is
///   preserved verbatim, and optional properties missing from the prefix are
///   filled in from schema defaults. Required properties are never
///   synthesized.
///
/// `schema` is taken as a raw `serde_json::Value` — the same representation
/// used throughout this crate for both the schema and the value being built —
/// and resolved internally via [`EffectiveSchema::resolve`].
pub fn expand(schema: &Value, prefix: &str) -> Value {
    let effective = EffectiveSchema::resolve(schema);

    match Parser::parse(prefix, &effective) {
        Some(tree) => completer::complete(&tree, &effective),
        None if prefix.trim().is_empty() => completer::default_for(&effective, true),
        None => Value::Null,
    }
}
