use crate::node::{ObjectEntry, ParseNode};
use crate::schema::EffectiveSchema;

use super::malformed_reason::MalformedReason;
use super::partial_key;
use super::Parser;

impl<'src> Parser<'src> {
    pub(super) fn parse_object(
        &mut self,
        schema: &EffectiveSchema,
    ) -> Result<ParseNode, MalformedReason> {
        let start = self.cursor.position();
        self.cursor.advance(); // consume '{'

        let mut entries = Vec::new();
        let mut end = None;

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                None => break,
                Some('}') => {
                    self.cursor.advance();
                    end = Some(self.cursor.position());
                    break;
                }
                Some(',') | Some(':') => {
                    return Err(MalformedReason::UnexpectedKeyStart {
                        found: self.cursor.peek().unwrap(),
                    });
                }
                Some(_) => {
                    let entry = self.parse_object_entry(schema)?;
                    entries.push(entry);

                    // Whatever state the entry ended in (dangling key, dangling
                    // colon, incomplete value, or a clean value), the loop
                    // always falls through to the same comma/close check: if
                    // the entry left the cursor somewhere other than right
                    // before `,` or `}`, that's simply where the object runs
                    // out (incomplete), not a separate case to special-case.
                    self.cursor.skip_whitespace();
                    match self.cursor.peek() {
                        Some(',') => {
                            self.cursor.advance();
                            self.cursor.skip_whitespace();
                            if self.cursor.peek() == Some(',') {
                                return Err(MalformedReason::DoubleComma);
                            }
                        }
                        Some('}') => {
                            self.cursor.advance();
                            end = Some(self.cursor.position());
                            break;
                        }
                        _ => break,
                    }
                }
            }
        }

        Ok(ParseNode::Object {
            start,
            end,
            entries,
        })
    }

    /// Parses one `key[: value]` slot. Assumes the cursor sits on a character
    /// that is a valid key start (checked by the caller).
    fn parse_object_entry(
        &mut self,
        schema: &EffectiveSchema,
    ) -> Result<ObjectEntry, MalformedReason> {
        let (key_text, key_is_final) = self.parse_object_key();

        let key = if key_text.is_empty() {
            None
        } else if key_is_final {
            Some(key_text)
        } else {
            // A partial (bare or unclosed-string) key: try unique-prefix
            // disambiguation against the schema's declared properties before
            // committing to the as-typed text.
            match partial_key::unique_prefix_match(&key_text, schema.property_names()) {
                Some(resolved) => Some(resolved.to_string()),
                None => Some(key_text),
            }
        };

        self.cursor.skip_whitespace();
        let has_colon = self.cursor.eat(':');

        let value = if has_colon {
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(',') | Some('}') | None => None,
                Some(_) => {
                    let property_schema = key
                        .as_deref()
                        .map(|k| schema.property_schema(k))
                        .unwrap_or_else(|| serde_json::json!({}));
                    let resolved = EffectiveSchema::resolve(&property_schema);
                    Some(self.parse_value(&resolved)?)
                }
            }
        } else {
            None
        };

        Ok(ObjectEntry::new(key, value, has_colon))
    }

    /// Scans an object key starting at the current cursor position: either a
    /// quoted string (returning `(decoded, closed)`) or a bare run of
    /// characters up to the first of `:`, `,`, `}`, or whitespace.
    ///
    /// Returns `(text, is_final)`; `is_final` is `true` only for a quoted key
    /// whose closing `"` was consumed (an exact key, not subject to
    /// unique-prefix completion).
    fn parse_object_key(&mut self) -> (String, bool) {
        if self.cursor.peek() == Some('"') {
            match self.parse_string() {
                ParseNode::String { value, closed, .. } => (value, closed),
                _ => unreachable!("parse_string always returns ParseNode::String"),
            }
        } else {
            let mut key = String::new();
            while let Some(ch) = self.cursor.peek() {
                if ch == ':' || ch == ',' || ch == '}' || ch.is_whitespace() {
                    break;
                }
                self.cursor.advance();
                key.push(ch);
            }
            (key, false)
        }
    }
}
