//! # S3KEY TYPE DEFINITIONS
//!
//! **CRITICAL**: Core data structures for key input and verdict output
//! **MANDATE**: ALL public APIs MUST use these standardized types

use crate::errors::{error_codes, ProjectError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// **KEY UNDER TEST**
///
/// **PURPOSE**: The object key as an ordered sequence of codepoints, plus
/// whether the source data survived decoding without loss.
/// **GUARANTEE**: Immutable for the duration of one validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key<'a> {
    text: Cow<'a, str>,
    round_trips: bool,
}

impl<'a> Key<'a> {
    /// **CONSTRUCTOR** - A `&str` is valid UTF-8 and always round-trips.
    pub fn new(text: &'a str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            round_trips: true,
        }
    }

    /// **UTF-8 CONSTRUCTOR**
    ///
    /// Invalid sequences are replaced with U+FFFD and the key is marked as
    /// not round-trippable.
    pub fn from_utf8(bytes: &'a [u8]) -> Self {
        match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => Self::new(text),
            Cow::Owned(text) => Self {
                text: Cow::Owned(text),
                round_trips: false,
            },
        }
    }

    /// **UTF-16 CONSTRUCTOR**
    ///
    /// Unpaired surrogates are replaced with U+FFFD and the key is marked as
    /// not round-trippable.
    pub fn from_utf16(units: &[u16]) -> Key<'static> {
        let mut round_trips = true;
        let text: String = char::decode_utf16(units.iter().copied())
            .map(|decoded| {
                decoded.unwrap_or_else(|_| {
                    round_trips = false;
                    char::REPLACEMENT_CHARACTER
                })
            })
            .collect();

        Key {
            text: Cow::Owned(text),
            round_trips,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether encoding the key and decoding it again yields the source data.
    pub fn round_trips(&self) -> bool {
        self.round_trips
    }

    /// **UTF-8 BYTE LENGTH** - Not the codepoint count.
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Converts a byte offset into the key into a zero-based codepoint index.
    pub fn char_position(&self, byte_offset: usize) -> usize {
        self.text
            .get(..byte_offset)
            .map_or_else(|| self.char_len(), |prefix| prefix.chars().count())
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// **ERROR CATEGORY**
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorKind {
    Length,
    Character,
    Path,
    Encoding,
}

/// **WARNING CATEGORY**
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WarningKind {
    Compatibility,
    Performance,
    Security,
    Encoding,
}

/// **BLOCKING PROBLEM IN A KEY**
///
/// `position` is a zero-based codepoint index into the key when the problem
/// can be located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<char>,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            position: None,
            character: None,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_character(mut self, character: char) -> Self {
        self.character = Some(character);
        self
    }
}

/// **NON-BLOCKING ADVISORY**
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    #[serde(rename = "type")]
    pub kind: WarningKind,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// **VERDICT**
///
/// **GUARANTEE**: `is_valid == errors.is_empty()`. `warnings` and
/// `suggestions` are `None` rather than empty, and are omitted when
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<ValidationWarning>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl ValidationResult {
    /// **ASSEMBLY** - Derives validity from the error list.
    pub fn from_parts(
        errors: Vec<ValidationError>,
        warnings: Vec<ValidationWarning>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings: (!warnings.is_empty()).then_some(warnings),
            suggestions: (!suggestions.is_empty()).then_some(suggestions),
        }
    }

    pub fn valid() -> Self {
        Self::from_parts(Vec::new(), Vec::new(), Vec::new())
    }

    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        Self::from_parts(errors, Vec::new(), Vec::new())
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        self.warnings.as_deref().unwrap_or_default()
    }

    pub fn suggestions(&self) -> &[String] {
        self.suggestions.as_deref().unwrap_or_default()
    }

    pub fn errors_of(&self, kind: ErrorKind) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |error| error.kind == kind)
    }

    pub fn to_json(&self) -> Result<String, ProjectError> {
        serde_json::to_string(self).map_err(|e| ProjectError::Validation {
            code: error_codes::SERIALIZATION_FAILED.to_string(),
            message: format!("Failed to serialize verdict: {}", e),
        })
    }
}
