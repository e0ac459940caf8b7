//! Scanners for the parts of a track entry, `time = CODE field...`.

use std::str::FromStr;

use super::ParseError;

/// Reads the key of a track entry as a tick.
///
/// # Errors
///
/// [`ParseError::InvalidTime`] unless the key is ASCII digits, and
/// [`ParseError::InvalidNumber`] if it does not fit.
pub(crate) fn parse_time(key: &str) -> Result<u64, ParseError> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidTime(key.to_owned()));
    }
    parse_number(key)
}

/// Splits the value into the code and the rest, at the first whitespace.
///
/// The rest is empty when there is no whitespace, and otherwise keeps its text after the
/// separating whitespaces.
pub(crate) fn split_code(value: &str) -> (&str, Option<&str>) {
    match value.split_once(char::is_whitespace) {
        Some((code, rest)) => (code, Some(rest.trim_start())),
        None => (value, None),
    }
}

/// Reads the whitespace-separated numbers after the code of `kind`.
///
/// `invalid` makes the error for a field which is not a non-negative integer.
///
/// # Errors
///
/// [`ParseError::InvalidFieldCount`] unless there are `min..=max` fields, the error from
/// `invalid` for a malformed field, and [`ParseError::InvalidNumber`] for a field too large.
pub(crate) fn parse_fields<T: FromStr>(
    kind: &str,
    rest: Option<&str>,
    (min, max): (usize, usize),
    invalid: impl Fn() -> ParseError,
) -> Result<Vec<T>, ParseError> {
    let fields: Vec<_> = rest.unwrap_or_default().split_whitespace().collect();
    if !(min..=max).contains(&fields.len()) {
        return Err(ParseError::InvalidFieldCount {
            kind: kind.to_owned(),
            min,
            max,
            found: fields.len(),
        });
    }
    fields
        .into_iter()
        .map(|field| {
            if field.bytes().all(|b| b.is_ascii_digit()) {
                parse_number(field)
            } else {
                Err(invalid())
            }
        })
        .collect()
}

fn parse_number<T: FromStr>(digits: &str) -> Result<T, ParseError> {
    digits
        .parse()
        .map_err(|_| ParseError::InvalidNumber(digits.to_owned()))
}
