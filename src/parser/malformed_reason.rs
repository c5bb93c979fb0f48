use thiserror::Error;

/// Why a prefix was rejected outright (as opposed to merely truncated).
///
/// This never reaches a caller of the crate: [`crate::parser::Parser::parse`]
/// collapses every variant to `None`. It exists so the parser's internal
/// control flow threads named causes through `Result` instead of ad hoc
/// `bool`/`Option` juggling, and so the `tests` module can assert on *why* a
/// prefix was rejected rather than only *that* it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum MalformedReason {
    #[error("value cannot start with '{found}'")]
    UnexpectedValueStart { found: char },

    #[error("unexpected end of input where a value was required")]
    UnexpectedEndOfInput,

    #[error("two consecutive commas with no entry between them")]
    DoubleComma,

    #[error("unexpected character '{found}' where an object key must begin")]
    UnexpectedKeyStart { found: char },
}
