
use crate::completer::complete;
use crate::parser::Parser;
use crate::schema::EffectiveSchema;
use serde_json::Value;

pub(crate) fn run(schema_json: Value, input: &str) -> Value {
    let schema = EffectiveSchema::resolve(&schema_json);
    match Parser::parse(input, &schema) {
        Some(tree) => complete(&tree, &schema),
        None if input.trim().is_empty() => crate::completer::default_for(&schema, true),
        None => Value::Null,
    }
}
