//! Core types for WARC records.

use crate::error::WarcError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;

/// Record format (the version line written at the top of every record).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "WARC/0.17")]
    Warc0_17,
    #[serde(rename = "WARC/0.18")]
    Warc0_18,
    #[serde(rename = "WARC/1.0")]
    Warc1_0,
    #[serde(rename = "WARC/1.1")]
    Warc1_1,
}

impl Format {
    /// All recognized formats, oldest first.
    pub const ALL: [Format; 4] = [
        Format::Warc0_17,
        Format::Warc0_18,
        Format::Warc1_0,
        Format::Warc1_1,
    ];

    /// The version token, e.g. `WARC/1.0`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Warc0_17 => "WARC/0.17",
            Format::Warc0_18 => "WARC/0.18",
            Format::Warc1_0 => "WARC/1.0",
            Format::Warc1_1 => "WARC/1.1",
        }
    }
}

impl Default for Format {
    fn default() -> Self {
        Format::Warc1_0
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = WarcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| WarcError::UnknownFormat(s.to_string()))
    }
}

/// Named metadata fields of a record.
///
/// Empty values count as absent and are never serialized.
pub type Fields = HashMap<String, String>;

/// A single WARC record, ready to be written.
///
/// The content source is consumed by the write: writing the same record
/// twice emits an empty block the second time.
pub struct Record {
    /// Version line.
    pub format: Format,

    /// Metadata fields.
    pub fields: Fields,

    /// Block payload.
    pub content: Box<dyn Read + Send>,
}

impl Record {
    /// Create a record with no fields and an empty block.
    pub fn new(format: Format) -> Self {
        Self {
            format,
            fields: Fields::new(),
            content: Box::new(io::empty()),
        }
    }

    /// Create a record whose block is an in-memory buffer.
    pub fn from_bytes(format: Format, content: impl Into<Vec<u8>>) -> Self {
        Self::new(format).with_content(io::Cursor::new(content.into()))
    }

    /// Set a field, replacing any previous value.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Replace the content source.
    pub fn with_content(mut self, content: impl Read + Send + 'static) -> Self {
        self.content = Box::new(content);
        self
    }

    /// Look up a field value.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("format", &self.format)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Records in archive write order.
pub type Records = Vec<Record>;
