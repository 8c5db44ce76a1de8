//! Status codes reported by status documents

use std::fmt;

use serde::{Serialize, Serializer};

/// Status reported by a status document.
///
/// Parsing upper-cases the text. Anything outside the known set is kept
/// verbatim (upper-cased) in [`StatusCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Good,
    Basic,
    Cfh,
    Cft,
    Wip,
    Unknown,
    Other(String),
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Blue,
    Green,
    Red,
    Gray,
}

impl StatusCode {
    /// Parse status text, or `Unknown` when the field is absent.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return StatusCode::Unknown;
        };
        match raw.trim().to_uppercase().as_str() {
            "GOOD" => StatusCode::Good,
            "BASIC" => StatusCode::Basic,
            "CFH" => StatusCode::Cfh,
            "CFT" => StatusCode::Cft,
            "WIP" => StatusCode::Wip,
            "UNKNOWN" => StatusCode::Unknown,
            other => StatusCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            StatusCode::Good => "GOOD",
            StatusCode::Basic => "BASIC",
            StatusCode::Cfh => "CFH",
            StatusCode::Cft => "CFT",
            StatusCode::Wip => "WIP",
            StatusCode::Unknown => "UNKNOWN",
            StatusCode::Other(text) => text,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            StatusCode::Good => StatusTone::Blue,
            StatusCode::Basic => StatusTone::Green,
            StatusCode::Cfh => StatusTone::Red,
            _ => StatusTone::Gray,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StatusCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
