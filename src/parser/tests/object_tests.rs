use super::schema;
use crate::node::ParseNode;
use crate::parser::Parser;
use serde_json::json;

#[test]
fn partial_key_resolves_via_unique_prefix() {
    let s = schema(json!({
        "properties": {"temperature": {"type": "number"}, "humidity": {"type": "number"}}
    }));
    let tree = Parser::parse(r#"{"temp"#, &s).expect("expected a tree");
    match tree {
        ParseNode::Object { entries, end, .. } => {
            assert_eq!(end, None);
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].key.as_deref(), Some("temperature"));
        }
        _ => panic!("expected object node"),
    }
}

#[test]
fn ambiguous_partial_key_is_left_as_typed() {
    let s = schema(json!({
        "properties": {"temperature": {"type": "number"}, "temp": {"type": "number"}}
    }));
    let tree = Parser::parse(r#"{"te"#, &s).expect("expected a tree");
    match tree {
        ParseNode::Object { entries, .. } => {
            assert_eq!(entries[0].key.as_deref(), Some("te"));
        }
        _ => panic!("expected object node"),
    }
}

#[test]
fn closed_string_key_is_never_reinterpreted() {
    let s = schema(json!({"properties": {"a": {}, "ab": {}}}));
    let tree = Parser::parse(r#"{"a":1}"#, &s).expect("expected a tree");
    match tree {
        ParseNode::Object { entries, end, .. } => {
            assert!(end.is_some());
            assert_eq!(entries[0].key.as_deref(), Some("a"));
        }
        _ => panic!("expected object node"),
    }
}

#[test]
fn dangling_colon_entry_is_recorded() {
    let s = schema(json!({}));
    let tree = Parser::parse(r#"{"a":"#, &s).expect("expected a tree");
    match tree {
        ParseNode::Object { entries, end, .. } => {
            assert_eq!(end, None);
            assert_eq!(entries.len(), 1);
            assert!(entries[0].has_colon);
            assert!(entries[0].value.is_none());
        }
        _ => panic!("expected object node"),
    }
}

#[test]
fn trailing_comma_before_close_is_tolerated() {
    let s = schema(json!({}));
    let tree = Parser::parse(r#"{"a":1,}"#, &s).expect("expected a tree");
    match tree {
        ParseNode::Object { entries, end, .. } => {
            assert!(end.is_some());
            assert_eq!(entries.len(), 1);
        }
        _ => panic!("expected object node"),
    }
}

#[test]
fn nested_object_uses_property_sub_schema() {
    let s = schema(json!({
        "properties": {"inner": {"properties": {"x": {"type": "number"}}}}
    }));
    let tree = Parser::parse(r#"{"inner":{"x":1"#, &s).expect("expected a tree");
    match tree {
        ParseNode::Object { entries, .. } => match &entries[0].value {
            Some(ParseNode::Object {
                entries: inner_entries,
                end,
                ..
            }) => {
                assert_eq!(end, &None);
                assert_eq!(inner_entries[0].key.as_deref(), Some("x"));
            }
            other => panic!("expected nested object, got {other:?}"),
        },
        _ => panic!("expected object node"),
    }
}

#[test]
fn closing_brace_completes_object() {
    let s = schema(json!({}));
    let tree = Parser::parse(r#"{"a":1,"b":2}"#, &s).expect("expected a tree");
    match tree {
        ParseNode::Object { end, entries, .. } => {
            assert!(end.is_some());
            assert_eq!(entries.len(), 2);
        }
        _ => panic!("expected object node"),
    }
}

#[test]
fn key_without_colon_followed_by_close_is_a_dangling_entry() {
    let s = schema(json!({}));
    let tree = Parser::parse(r#"{"ab"}"#, &s).expect("expected a tree");
    match tree {
        ParseNode::Object { end, entries, .. } => {
            assert!(end.is_some());
            assert_eq!(entries.len(), 1);
            assert!(!entries[0].has_colon);
            assert!(entries[0].value.is_none());
        }
        _ => panic!("expected object node"),
    }
}
