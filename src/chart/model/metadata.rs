//! The `[Song]` section.

use std::fmt;

use super::ModelError;

/// A value in the metadata, either an integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetadataValue {
    /// Written bare, such as `Resolution = 192`.
    Integer(i64),
    /// Written in double quotes, such as `Name = "Song Title"`. Stored without the quotes.
    String(String),
}

impl MetadataValue {
    /// Reads the raw value text.
    ///
    /// Integers are tried first, then one pair of surrounding double quotes is stripped. A
    /// quoted numeral like `"120"` is still an integer. Nothing is unescaped.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if let Ok(integer) = raw.parse() {
            return Self::Integer(integer);
        }
        let unquoted = strip_quotes(raw);
        unquoted
            .parse()
            .map_or_else(|_| Self::String(unquoted.to_owned()), Self::Integer)
    }

    /// Returns the integer if the value is.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(integer) => Some(*integer),
            Self::String(_) => None,
        }
    }

    /// Returns the string if the value is.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Integer(_) => None,
            Self::String(string) => Some(string),
        }
    }
}

/// Strips exactly one pair of surrounding double quotes, if any.
pub(crate) fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(text)
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(integer) => write!(f, "{integer}"),
            Self::String(string) => write!(f, "\"{string}\""),
        }
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for MetadataValue {
    /// Numerals become [`MetadataValue::Integer`], as they would after a round trip.
    fn from(value: &str) -> Self {
        value
            .parse()
            .map_or_else(|_| Self::String(value.to_owned()), Self::Integer)
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(integer) => Self::Integer(integer),
            Err(_) => Self::String(value),
        }
    }
}

/// Whether the text is an identifier for the metadata, `[A-Za-z][A-Za-z0-9_]*`.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The metadata of the song, in the order the keys were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    entries: Vec<(String, MetadataValue)>,
}

impl Metadata {
    /// The key of the ticks per quarter note.
    pub const RESOLUTION: &'static str = "Resolution";
    /// The key of the song title.
    pub const NAME: &'static str = "Name";

    /// Creates empty metadata.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the value of the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries
            .iter()
            .find_map(|(k, value)| (k == key).then_some(value))
    }

    /// Returns the mutable value of the key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut MetadataValue> {
        self.entries
            .iter_mut()
            .find_map(|(k, value)| (k == key).then_some(value))
    }

    /// Whether the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Sets the value of the key, returning the replaced one. A replaced key keeps its place.
    ///
    /// # Errors
    ///
    /// Fails if the key is not an identifier, see [`is_valid_key`].
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Result<Option<MetadataValue>, ModelError> {
        let key = key.into();
        if !is_valid_key(&key) {
            return Err(ModelError::InvalidMetadataKey(key));
        }
        let value = value.into();
        if let Some(old) = self.get_mut(&key) {
            return Ok(Some(std::mem::replace(old, value)));
        }
        self.entries.push((key, value));
        Ok(None)
    }

    /// Removes the key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<MetadataValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterates the entries in order.
    pub fn iter(&self) -> Iter<'_> {
        let entry_ref: fn(&(String, MetadataValue)) -> (&str, &MetadataValue) = entry_ref;
        self.entries.iter().map(entry_ref)
    }

    /// Number of the entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Moves all the entries of `other` in, overwriting the values of the same keys.
    pub fn merge(&mut self, other: Self) {
        for (key, value) in other.entries {
            if let Some(old) = self.get_mut(&key) {
                *old = value;
            } else {
                self.entries.push((key, value));
            }
        }
    }

    /// Ticks per quarter note, `Resolution`.
    #[must_use]
    pub fn resolution(&self) -> Option<i64> {
        self.get(Self::RESOLUTION).and_then(MetadataValue::as_integer)
    }

    /// The song title, `Name`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get(Self::NAME).and_then(MetadataValue::as_str)
    }
}

/// The iterator over the entries of [`Metadata`].
pub type Iter<'a> = std::iter::Map<
    std::slice::Iter<'a, (String, MetadataValue)>,
    fn(&(String, MetadataValue)) -> (&str, &MetadataValue),
>;

fn entry_ref((key, value): &(String, MetadataValue)) -> (&str, &MetadataValue) {
    (key.as_str(), value)
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a str, &'a MetadataValue);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_values() {
        assert_eq!(MetadataValue::parse("192"), MetadataValue::Integer(192));
        assert_eq!(MetadataValue::parse("-3"), MetadataValue::Integer(-3));
        assert_eq!(MetadataValue::parse("\"120\""), MetadataValue::Integer(120));
        assert_eq!(
            MetadataValue::parse("\"Song Title\""),
            MetadataValue::String("Song Title".to_owned())
        );
        assert_eq!(
            MetadataValue::parse("0.5"),
            MetadataValue::String("0.5".to_owned())
        );
    }

    #[test]
    fn only_one_pair_of_quotes_is_stripped() {
        assert_eq!(
            MetadataValue::parse("\"\"quoted\"\""),
            MetadataValue::String("\"quoted\"".to_owned())
        );
        assert_eq!(
            MetadataValue::parse("\"half"),
            MetadataValue::String("\"half".to_owned())
        );
        assert_eq!(
            MetadataValue::parse(r#""back\slash""#),
            MetadataValue::String(r"back\slash".to_owned())
        );
        assert_eq!(MetadataValue::parse("\"\""), MetadataValue::String(String::new()));
    }

    #[test]
    fn keys() {
        assert!(is_valid_key("Name"));
        assert!(is_valid_key("Player2"));
        assert!(is_valid_key("Music_Stream"));
        assert!(!is_valid_key("2Player"));
        assert!(!is_valid_key("_Name"));
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("Na me"));
    }

    #[test]
    fn insert_keeps_order_and_replaces() {
        let mut metadata = Metadata::new();
        assert_eq!(metadata.insert("Name", "Title"), Ok(None));
        assert_eq!(metadata.insert("Resolution", 192_i64), Ok(None));
        assert_eq!(
            metadata.insert("Name", "Other"),
            Ok(Some(MetadataValue::String("Title".to_owned())))
        );
        assert_eq!(
            metadata.iter().map(|(key, _)| key).collect::<Vec<_>>(),
            vec!["Name", "Resolution"]
        );
        assert_eq!(metadata.name(), Some("Other"));
        assert_eq!(metadata.resolution(), Some(192));
        assert_eq!(
            metadata.insert("1st", 0_i64),
            Err(ModelError::InvalidMetadataKey("1st".to_owned()))
        );
    }

    #[test]
    fn iterates_by_reference_in_order() {
        let mut metadata = Metadata::new();
        metadata.insert("Name", "Title").unwrap();
        metadata.insert("Offset", 0_i64).unwrap();
        let mut keys = Vec::new();
        for (key, value) in &metadata {
            keys.push((key, value.clone()));
        }
        assert_eq!(
            keys,
            vec![
                ("Name", MetadataValue::String("Title".to_owned())),
                ("Offset", MetadataValue::Integer(0)),
            ]
        );
        assert_eq!(metadata.iter().len(), 2);
    }

    #[test]
    fn display_quotes_strings_only() {
        assert_eq!(MetadataValue::Integer(0).to_string(), "0");
        assert_eq!(MetadataValue::from("Song").to_string(), "\"Song\"");
        assert_eq!(MetadataValue::from("120"), MetadataValue::Integer(120));
    }
}
