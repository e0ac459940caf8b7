//! Line cursor over the `.chart` source.

use std::io::{self, BufRead};

/// A line read by [`LineCursor`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    /// The line number, starts with 1.
    pub number: usize,
    /// The line content, without the line terminator.
    pub text: String,
}

/// Reads the source line by line, counting the line numbers.
///
/// The cursor never owns more than the line being read, so the caller keeps the lifetime of
/// the underlying stream.
#[derive(Debug)]
pub struct LineCursor<R> {
    /// The line number of the last line read, starts with 1.
    line: usize,
    /// The source stream.
    reader: R,
}

impl<R: BufRead> LineCursor<R> {
    /// Creates a cursor at the beginning of the stream.
    pub const fn new(reader: R) -> Self {
        Self { line: 0, reader }
    }

    /// Move cursor, through and return the next line.
    ///
    /// Both `\n` and `\r\n` terminators are removed. Returns `None` at the end of the stream.
    ///
    /// # Errors
    ///
    /// Fails if the stream fails or the line is not valid UTF-8.
    pub fn next_line(&mut self) -> io::Result<Option<Line>> {
        let mut text = String::new();
        if self.reader.read_line(&mut text)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }
        Ok(Some(Line {
            number: self.line,
            text,
        }))
    }

    /// Returns the line number of the last line read, or `0` if nothing was read yet.
    pub const fn line(&self) -> usize {
        self.line
    }
}

#[test]
fn test_next_line_crlf() {
    const SOURCE: &str = "[Song]\r\n{\r\n}\r\n";

    let mut cursor = LineCursor::new(SOURCE.as_bytes());
    assert_eq!(cursor.line(), 0);

    let line = cursor.next_line().unwrap().unwrap();
    assert_eq!(line.number, 1);
    assert_eq!(line.text, "[Song]");
    assert_eq!(cursor.next_line().unwrap().unwrap().text, "{");
    assert_eq!(cursor.next_line().unwrap().unwrap().text, "}");
    assert_eq!(cursor.next_line().unwrap(), None);
    assert_eq!(cursor.line(), 3);
}

#[test]
fn test_next_line_no_trailing_newline() {
    const SOURCE: &str = "a\n\nb";

    let mut cursor = LineCursor::new(SOURCE.as_bytes());
    assert_eq!(cursor.next_line().unwrap().unwrap().text, "a");
    assert_eq!(cursor.next_line().unwrap().unwrap().text, "");
    let last = cursor.next_line().unwrap().unwrap();
    assert_eq!(last.number, 3);
    assert_eq!(last.text, "b");
    assert_eq!(cursor.next_line().unwrap(), None);
}

#[test]
fn test_invalid_utf8() {
    let source: &[u8] = b"[Song]\n\xff\xfe\n";

    let mut cursor = LineCursor::new(source);
    assert!(cursor.next_line().is_ok());
    let err = cursor.next_line().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
