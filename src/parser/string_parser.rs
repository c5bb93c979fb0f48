use crate::cursor::Cursor;
use crate::node::ParseNode;

/// Parses a JSON string starting at the opening `"`, tolerating truncation at
/// any point: inside an escape sequence, inside a `\uXXXX` hex run, or before
/// the closing quote. Whatever has been decoded so far is kept; truncated
/// input is simply where the value stops, never an error.
///
/// Runs of plain (non-`"`, non-`\`) characters are bulk-copied in one slice
/// via [`Cursor::find_string_boundary`], instead of matching and pushing one
/// `char` at a time; only the boundary byte itself (a quote, a backslash, or
/// end of input) falls back to the char-at-a-time handling below.
pub(crate) fn parse_string(cursor: &mut Cursor) -> ParseNode {
    let start = cursor.position();
    cursor.advance(); // consume opening '"'

    let mut value = String::new();
    let mut closed = false;

    loop {
        match cursor.peek() {
            None => break,
            Some('"') => {
                cursor.advance();
                closed = true;
                break;
            }
            Some('\\') => {
                cursor.advance();
                match cursor.peek() {
                    None => break,
                    Some(escape) => {
                        cursor.advance();
                        match escape {
                            '"' => value.push('"'),
                            '\\' => value.push('\\'),
                            '/' => value.push('/'),
                            'b' => value.push('\u{0008}'),
                            'f' => value.push('\u{000C}'),
                            'n' => value.push('\n'),
                            'r' => value.push('\r'),
                            't' => value.push('\t'),
                            'u' => {
                                if let Some(decoded) = parse_unicode_escape(cursor) {
                                    value.push(decoded);
                                } else {
                                    // Truncated \u escape: stop here, keep what we have.
                                    break;
                                }
                            }
                            other => {
                                // Not a recognised escape sequence; keep the
                                // character verbatim rather than rejecting the
                                // whole string.
                                value.push(other);
                            }
                        }
                    }
                }
            }
            Some(_) => {
                let boundary = cursor
                    .find_string_boundary()
                    .unwrap_or_else(|| cursor.remaining().len());
                value.push_str(cursor.advance_by_bytes(boundary));
            }
        }
    }

    let end = if closed { Some(cursor.position()) } else { None };
    ParseNode::String {
        start,
        end,
        value,
        closed,
    }
}

/// Reads exactly 4 hex digits following `\u` and decodes them as a `char`.
/// Returns `None` on truncation (fewer than 4 digits available) or on a
/// surrogate-half code point that doesn't decode to a standalone `char`.
fn parse_unicode_escape(cursor: &mut Cursor) -> Option<char> {
    let mut code_point: u32 = 0;
    for _ in 0..4 {
        let digit = cursor.peek()?.to_digit(16)?;
        cursor.advance();
        code_point = code_point * 16 + digit;
    }
    char::from_u32(code_point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ParseNode {
        let mut cursor = Cursor::new(input);
        parse_string(&mut cursor)
    }

    #[test]
    fn closed_string_decodes_escapes() {
        let node = parse(r#""a\nb\tc""#);
        match node {
            ParseNode::String { value, closed, .. } => {
                assert!(closed);
                assert_eq!(value, "a\nb\tc");
            }
            _ => panic!("expected string node"),
        }
    }

    #[test]
    fn unterminated_string_is_incomplete() {
        let node = parse(r#""hello"#);
        match node {
            ParseNode::String { value, closed, end, .. } => {
                assert!(!closed);
                assert_eq!(value, "hello");
                assert_eq!(end, None);
            }
            _ => panic!("expected string node"),
        }
    }

    #[test]
    fn truncated_unicode_escape_stops_before_it() {
        let node = parse(r#""ab\u00"#);
        match node {
            ParseNode::String { value, closed, .. } => {
                assert!(!closed);
                assert_eq!(value, "ab");
            }
            _ => panic!("expected string node"),
        }
    }

    #[test]
    fn unicode_escape_decodes() {
        let node = parse(r#""A""#);
        match node {
            ParseNode::String { value, closed, .. } => {
                assert!(closed);
                assert_eq!(value, "A");
            }
            _ => panic!("expected string node"),
        }
    }

    #[test]
    fn bulk_plain_run_handles_multibyte_characters() {
        let node = parse(r#""café party""#);
        match node {
            ParseNode::String { value, closed, .. } => {
                assert!(closed);
                assert_eq!(value, "café party");
            }
            _ => panic!("expected string node"),
        }
    }

    #[test]
    fn plain_run_followed_by_escape_decodes_both() {
        let node = parse(r#""abc\ndef""#);
        match node {
            ParseNode::String { value, closed, .. } => {
                assert!(closed);
                assert_eq!(value, "abc\ndef");
            }
            _ => panic!("expected string node"),
        }
    }

    #[test]
    fn position_after_closing_quote_accounts_for_bulk_run_length() {
        let mut cursor = Cursor::new(r#""hello" rest"#);
        let node = parse_string(&mut cursor);
        match node {
            ParseNode::String { end, .. } => {
                let end = end.expect("closed string has an end position");
                assert_eq!(end.offset(), 7);
                assert_eq!(end.column(), 8);
            }
            _ => panic!("expected string node"),
        }
    }
}
