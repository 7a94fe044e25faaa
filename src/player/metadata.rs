//! Typed view over the loosely typed d-bus variants a player reports

use std::collections::HashMap;

use zbus::zvariant::Value;

pub const TITLE: &str = "xesam:title";
pub const ALBUM: &str = "xesam:album";
pub const ARTIST: &str = "xesam:artist";
pub const LENGTH: &str = "mpris:length";

/// A decoded variant value.
///
/// Anything that is not a string, a list of strings or an integer is `Other`
/// and reads as the zero value of whatever the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataValue {
    Text(String),
    TextList(Vec<String>),
    Integer(i64),
    Other,
}

impl MetadataValue {
    pub fn decode(value: &Value<'_>) -> Self {
        match value {
            Value::Str(s) => Self::Text(s.to_string()),
            Value::ObjectPath(p) => Self::Text(p.to_string()),
            Value::I64(n) => Self::Integer(*n),
            Value::I32(n) => Self::Integer(i64::from(*n)),
            Value::I16(n) => Self::Integer(i64::from(*n)),
            Value::U32(n) => Self::Integer(i64::from(*n)),
            Value::U16(n) => Self::Integer(i64::from(*n)),
            Value::U8(n) => Self::Integer(i64::from(*n)),
            Value::U64(n) => i64::try_from(*n).map(Self::Integer).unwrap_or(Self::Other),
            Value::Array(items) => {
                let mut texts = Vec::new();
                for item in items.iter() {
                    match Self::decode(item) {
                        Self::Text(s) => texts.push(s),
                        _ => return Self::Other,
                    }
                }
                Self::TextList(texts)
            }
            Value::Value(inner) => Self::decode(inner),
            _ => Self::Other,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// first element of a string list; a lone string counts as a one element list
    pub fn first_text(&self) -> Option<&str> {
        match self {
            Self::TextList(items) => items.first().map(String::as_str),
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

/// The metadata property bag of the current track
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata(HashMap<String, MetadataValue>);

impl Metadata {
    pub fn from_entries<'a, 'v: 'a, K, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, &'a Value<'v>)>,
    {
        Self(
            entries
                .into_iter()
                .map(|(key, value)| (key.as_ref().to_string(), MetadataValue::decode(value)))
                .collect(),
        )
    }

    pub fn insert(&mut self, key: &str, value: MetadataValue) {
        self.0.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.0.get(key)
    }

    /// string field, empty when absent or of another type
    pub fn text(&self, key: &str) -> String {
        self.get(key)
            .and_then(MetadataValue::as_text)
            .unwrap_or_default()
            .to_string()
    }

    pub fn first_text(&self, key: &str) -> String {
        self.get(key)
            .and_then(MetadataValue::first_text)
            .unwrap_or_default()
            .to_string()
    }

    /// integer field, zero when absent or of another type
    pub fn integer(&self, key: &str) -> i64 {
        self.get(key)
            .and_then(MetadataValue::as_integer)
            .unwrap_or(0)
    }
}
