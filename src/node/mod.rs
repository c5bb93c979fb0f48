//! The parse tree produced by [`crate::parser::Parser`].
//!
//! Parse trees are built in a single bottom-up pass and never mutated
//! afterward; the completer consumes them immutably.

mod object_entry;
mod parse_node;

pub use object_entry::ObjectEntry;
pub use parse_node::ParseNode;
