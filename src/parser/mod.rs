//! The schema-aware, position-tracking, prefix-tolerant parser.
//!
//! [`Parser::parse`] is the only public entry point. It never panics and never
//! raises: every rejection surfaces as `None`, with the specific reason
//! tracked internally by [`MalformedReason`] for unit tests (see the module's
//! `tests/` directory) but not exposed as part of the public contract.

mod literal_parser;
mod malformed_reason;
mod number_parser;
mod object_parser;
mod partial_key;
mod string_parser;

#[cfg(test)]
mod tests;

use crate::cursor::Cursor;
use crate::node::ParseNode;
use crate::schema::EffectiveSchema;

pub(crate) use malformed_reason::MalformedReason;

/// A recursive-descent parser over a single input string, schema-aware at
/// every value position so that partial object keys can be disambiguated
/// against the active schema's declared properties.
pub struct Parser<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Parser<'src> {
    /// Parses `input` against `schema`, returning a (possibly incomplete)
    /// parse tree, or `None` if `input` is empty/whitespace-only or is an
    /// unrecoverably malformed prefix.
    pub fn parse(input: &'src str, schema: &EffectiveSchema) -> Option<ParseNode> {
        if input.trim().is_empty() {
            return None;
        }

        let mut parser = Parser {
            cursor: Cursor::new(input),
        };
        parser.cursor.skip_whitespace();
        if parser.cursor.is_at_end() {
            return None;
        }

        let node = parser.parse_value(schema).ok()?;

        if node.is_complete() {
            parser.cursor.skip_whitespace();
            // Extra trailing characters after an otherwise complete root value
            // are only malformed when they *begin* with a stray closing
            // delimiter; anything else trailing the root is out of scope (the
            // caller is expected to feed us a prefix, not validate the tail).
            if matches!(parser.cursor.peek(), Some('}') | Some(']')) {
                return None;
            }
        }

        Some(node)
    }

    pub(crate) fn parse_value(
        &mut self,
        schema: &EffectiveSchema,
    ) -> Result<ParseNode, MalformedReason> {
        self.cursor.skip_whitespace();
        match self.cursor.peek_byte() {
            Some(b'{') => self.parse_object(schema),
            Some(b'[') => self.parse_array(schema),
            Some(b'"') => Ok(self.parse_string()),
            Some(b'-') | Some(b'0'..=b'9') => Ok(self.parse_number()),
            Some(b't') | Some(b'f') => Ok(self.parse_bool()),
            Some(b'n') => Ok(self.parse_null()),
            Some(other) => Err(MalformedReason::UnexpectedValueStart {
                found: other as char,
            }),
            None => Err(MalformedReason::UnexpectedEndOfInput),
        }
    }

    fn parse_array(&mut self, schema: &EffectiveSchema) -> Result<ParseNode, MalformedReason> {
        let start = self.cursor.position();
        self.cursor.advance(); // consume '['

        let mut elements = Vec::new();
        let mut end = None;
        let mut index = 0usize;

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                None => break,
                Some(']') => {
                    self.cursor.advance();
                    end = Some(self.cursor.position());
                    break;
                }
                Some(_) => {
                    let item_schema = EffectiveSchema::resolve(&schema.items().schema_for_index(index));
                    let element = self.parse_value(&item_schema)?;
                    let element_complete = element.is_complete();
                    elements.push(element);
                    index += 1;
                    if !element_complete {
                        break;
                    }
                    self.cursor.skip_whitespace();
                    match self.cursor.peek() {
                        Some(',') => {
                            self.cursor.advance();
                        }
                        Some(']') => {
                            self.cursor.advance();
                            end = Some(self.cursor.position());
                            break;
                        }
                        _ => break,
                    }
                }
            }
        }

        Ok(ParseNode::Array {
            start,
            end,
            elements,
        })
    }

    fn parse_string(&mut self) -> ParseNode {
        string_parser::parse_string(&mut self.cursor)
    }

    fn parse_number(&mut self) -> ParseNode {
        number_parser::parse_number(&mut self.cursor)
    }

    fn parse_bool(&mut self) -> ParseNode {
        literal_parser::parse_bool(&mut self.cursor)
    }

    fn parse_null(&mut self) -> ParseNode {
        literal_parser::parse_null(&mut self.cursor)
    }
}
