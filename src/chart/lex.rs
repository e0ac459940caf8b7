//! Lexical analyzer of the `.chart` format.
//!
//! Raw lines (from any [`std::io::BufRead`]) == [`cursor::LineCursor`] ==> [`cursor::Line`] == [`token::Token::parse`] ==> [`token::Token`]
//!
//! The format is line-oriented, so every line makes exactly one token. Whether a token is
//! acceptable depends on where it appears (e.g. an entry outside of a section), so this
//! module never fails by itself except for I/O errors. The parser decides on the rest.

pub mod cursor;
pub mod token;

pub use self::{
    cursor::{Line, LineCursor},
    token::Token,
};
