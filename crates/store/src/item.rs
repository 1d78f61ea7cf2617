//! Stored items and their attribute values

use chrono::{DateTime, Utc};
use listo_core::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;

/// A typed attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    S(String),
    N(i64),
    Bool(bool),
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::S(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::S(value.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::N(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::S(value.to_rfc3339())
    }
}

pub type Attributes = BTreeMap<String, AttributeValue>;

/// Composite primary key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    pub partition: String,
    pub sort: String,
}

impl Key {
    pub fn new(partition: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            sort: sort.into(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.partition, self.sort)
    }
}

/// One stored record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: Key,
    pub attributes: Attributes,
}

impl Item {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            attributes: Attributes::new(),
        }
    }

    /// Builder-style attribute setter
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn string(&self, name: &str) -> Result<&str> {
        match self.attributes.get(name) {
            Some(AttributeValue::S(value)) => Ok(value),
            other => Err(self.decode_error(name, "string", other)),
        }
    }

    pub fn number(&self, name: &str) -> Result<i64> {
        match self.attributes.get(name) {
            Some(AttributeValue::N(value)) => Ok(*value),
            other => Err(self.decode_error(name, "number", other)),
        }
    }

    pub fn boolean(&self, name: &str) -> Result<bool> {
        match self.attributes.get(name) {
            Some(AttributeValue::Bool(value)) => Ok(*value),
            other => Err(self.decode_error(name, "boolean", other)),
        }
    }

    pub fn timestamp(&self, name: &str) -> Result<DateTime<Utc>> {
        let raw = self.string(name)?;
        DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|e| {
                Error::storage(
                    "item-store",
                    "decode",
                    format!("{} attribute {name} is not RFC 3339: {e}", self.key),
                )
            })
    }

    /// Whether the string attribute `name` equals `expected`
    pub fn is(&self, name: &str, expected: &str) -> bool {
        matches!(self.attributes.get(name), Some(AttributeValue::S(v)) if v == expected)
    }

    fn decode_error(&self, name: &str, wanted: &str, found: Option<&AttributeValue>) -> Error {
        let found = match found {
            None => "nothing",
            Some(AttributeValue::S(_)) => "a string",
            Some(AttributeValue::N(_)) => "a number",
            Some(AttributeValue::Bool(_)) => "a boolean",
        };
        Error::storage(
            "item-store",
            "decode",
            format!("{} attribute {name}: expected {wanted}, found {found}", self.key),
        )
    }
}
