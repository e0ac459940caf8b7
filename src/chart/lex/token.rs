//! Definitions of the token in `.chart` format.

/// A token content of `.chart` format, one per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token<'a> {
    /// A line with only whitespaces.
    Blank,
    /// `[name]`. Starts a section. The name is not validated yet.
    Header(&'a str),
    /// `{`. Opens the body of a section.
    OpenBrace,
    /// `}`. Closes the body of a section.
    CloseBrace,
    /// `key = value`. An entry in the body of a section.
    Entry {
        /// The key consisting of `[A-Za-z0-9_]`.
        key: &'a str,
        /// The value without surrounding whitespaces, never empty.
        value: &'a str,
    },
    /// Any other line.
    Unknown(&'a str),
}

const BOMS: [&str; 2] = ["\u{feff}", "\u{ef}\u{bb}\u{bf}"];

impl<'a> Token<'a> {
    /// Classifies the line.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let line = strip_bom(line.trim()).trim();
        match line {
            "" => Self::Blank,
            "{" => Self::OpenBrace,
            "}" => Self::CloseBrace,
            _ => {
                if let Some(name) = line
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                {
                    return Self::Header(name);
                }
                parse_entry(line).unwrap_or(Self::Unknown(line))
            }
        }
    }
}

fn strip_bom(line: &str) -> &str {
    BOMS.iter()
        .find_map(|bom| line.strip_prefix(bom))
        .unwrap_or(line)
}

fn parse_entry(line: &str) -> Option<Token<'_>> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim_end();
    let value = value.trim();
    let key_is_valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    (key_is_valid && !value.is_empty()).then_some(Token::Entry { key, value })
}
