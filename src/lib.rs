//! Completes partial JSON text — byte prefixes of a valid JSON document, as
//! they arrive from a streaming producer such as an LLM token stream — into a
//! fully-formed value conforming to a JSON Schema.
//!
//! [`expand`] is the crate's only public entry point. Internally it composes
//! four pieces, leaves first:
//!
//! - [`cursor`]: a byte-stream cursor with line/column tracking, embedded
//!   directly in the parser rather than factored into a standalone tokenizer.
//! - [`parser`]: a schema-aware, position-tracking, prefix-tolerant recursive
//!   descent parser that turns a prefix into a [`node::ParseNode`] tree with
//!   per-node completion flags.
//! - [`schema`]: a pure resolver from a raw `serde_json::Value` schema to an
//!   [`schema::EffectiveSchema`] view (`allOf` flattened, `anyOf`/`oneOf`
//!   passed through), plus the free functions that query it.
//! - [`completer`]: folds a parse tree against an effective schema into a
//!   final `serde_json::Value`, applying defaults, merging sub-defaults, and
//!   disambiguating partial property names.
//!
//! The core is pure and single-threaded per call: no global state, no I/O, no
//! retries. A schema is read-only and safely shared across concurrent calls.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "name": {"type": "string", "default": "Unknown"},
//!         "age": {"type": "integer", "default": 0}
//!     }
//! });
//!
//! let completed = json_expand::expand(&schema, r#"{"name":"Ada"#);
//! assert_eq!(completed, json!({"name": "Ada", "age": 0}));
//! ```

mod completer;
mod cursor;
mod expand;
mod node;
mod parser;
mod position;
mod schema;

pub use expand::expand;
pub use node::ObjectEntry;
pub use node::ParseNode;
pub use position::Position;
pub use schema::EffectiveSchema;
pub use schema::ItemsSchema;
pub use schema::RawSchema;

#[cfg(test)]
mod tests;
