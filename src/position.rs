/// A source position within an input byte string.
///
/// This is a pure data struct with no mutation methods; the [`Cursor`](crate::cursor::Cursor)
/// is responsible for computing position values as it scans input.
///
/// # Indexing Convention
///
/// All fields are 1-based except `offset`, which is the 0-based byte offset from
/// the start of the document. `line` and `column` advance past `\n`; `column`
/// counts UTF-8 characters (not bytes) since the last newline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Position {
    /// Byte offset from the start of the document (0-based).
    offset: usize,
    /// Line number (1-based: the first line is 1).
    line: usize,
    /// Character column within the current line (1-based: the first column is 1).
    column: usize,
}

impl Position {
    /// The position at the very start of a document.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    pub(crate) fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Returns the 0-based byte offset from the start of the document.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based column (in UTF-8 characters) within the current line.
    pub fn column(&self) -> usize {
        self.column
    }
}
