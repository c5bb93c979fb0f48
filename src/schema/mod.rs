//! Schema representation and resolution.
//!
//! A [`RawSchema`] is an unopinionated view over a `serde_json::Value` schema
//! document. [`EffectiveSchema::resolve`] turns one into an [`EffectiveSchema`]:
//! a flattened, query-ready view exposing only the attributes the parser and
//! completer actually use (properties, pattern properties, required set,
//! items, additional-properties policy, type list, default). This mirrors the
//! teacher's "schema as data, not polymorphism" design: resolution is a pure
//! function, not a trait hierarchy.

mod effective_schema;
mod items_schema;
mod raw_schema;

pub use effective_schema::EffectiveSchema;
pub use items_schema::ItemsSchema;
pub use raw_schema::RawSchema;
