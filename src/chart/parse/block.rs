//! Reading the body of one section, `{ key = value ... }`.

use std::io::BufRead;

use crate::chart::{
    LoadError,
    command::mixin::{SourceLineMixin, SourceLineMixinExt},
    lex::{Line, LineCursor, Token},
};

use super::ParseError;

/// An entry `key = value` in the body of a section.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// The text before `=`.
    pub key: String,
    /// The text after `=`, without surrounding whitespaces.
    pub value: String,
}

/// An entry with its source line.
pub type EntryWithLine = SourceLineMixin<Entry>;

/// Iterates the entries of the section just after its header line.
///
/// `{` lines are skipped and the first `}` line ends the iteration. Every other line must be
/// an entry. After an error the iteration ends.
pub struct DataBlockReader<'a, R> {
    cursor: &'a mut LineCursor<R>,
    header: &'a Line,
    section: &'a str,
    done: bool,
}

impl<'a, R: BufRead> DataBlockReader<'a, R> {
    /// Creates a reader for the section `section` started at the line `header`.
    pub const fn new(cursor: &'a mut LineCursor<R>, header: &'a Line, section: &'a str) -> Self {
        Self {
            cursor,
            header,
            section,
            done: false,
        }
    }

    fn read_entry(&mut self) -> Result<Option<EntryWithLine>, LoadError> {
        loop {
            let Some(line) = self.cursor.next_line()? else {
                return Err(ParseError::UnterminatedBlock {
                    section: self.section.to_owned(),
                }
                .into_wrapper_line(self.header.number, self.header.text.as_str())
                .into());
            };
            match Token::parse(&line.text) {
                Token::OpenBrace => {}
                Token::CloseBrace => return Ok(None),
                Token::Entry { key, value } => {
                    let entry = Entry {
                        key: key.to_owned(),
                        value: value.to_owned(),
                    };
                    return Ok(Some(entry.into_wrapper_line(line.number, line.text)));
                }
                Token::Blank | Token::Header(_) | Token::Unknown(_) => {
                    return Err(ParseError::InvalidBlockLine
                        .into_wrapper_line(line.number, line.text)
                        .into());
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for DataBlockReader<'_, R> {
    type Item = Result<EntryWithLine, LoadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let read = self.read_entry();
        if !matches!(read, Ok(Some(_))) {
            self.done = true;
        }
        read.transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(source: &str) -> (Vec<(usize, String, String)>, Option<LoadError>) {
        let mut cursor = LineCursor::new(source.as_bytes());
        let header = cursor.next_line().unwrap().unwrap();
        let mut entries = vec![];
        let mut error = None;
        for entry in DataBlockReader::new(&mut cursor, &header, "Song") {
            match entry {
                Ok(entry) => {
                    let line = entry.line();
                    let Entry { key, value } = entry.into_content();
                    entries.push((line, key, value));
                }
                Err(err) => error = Some(err),
            }
        }
        (entries, error)
    }

    #[test]
    fn entries_until_close() {
        let (entries, error) = read_all("[Song]\n{\n  Name = \"x\"\n  Offset = 0\n}\n  Rest = 1\n");
        assert!(error.is_none());
        assert_eq!(
            entries,
            vec![
                (3, "Name".to_owned(), "\"x\"".to_owned()),
                (4, "Offset".to_owned(), "0".to_owned()),
            ]
        );
    }

    #[test]
    fn blank_line_is_invalid() {
        let (entries, error) = read_all("[Song]\n{\n  Name = \"x\"\n\n}\n");
        assert_eq!(entries.len(), 1);
        let Some(LoadError::Parse(err)) = error else {
            panic!("expected a parse error, got {error:?}");
        };
        assert_eq!(err.content(), &ParseError::InvalidBlockLine);
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn eof_is_unterminated() {
        let (_, error) = read_all("[Song]\n{\n  Name = \"x\"\n");
        let Some(LoadError::Parse(err)) = error else {
            panic!("expected a parse error, got {error:?}");
        };
        assert_eq!(
            err.content(),
            &ParseError::UnterminatedBlock {
                section: "Song".to_owned()
            }
        );
        assert_eq!(err.line(), 1);
        assert_eq!(err.text(), "[Song]");
    }
}
