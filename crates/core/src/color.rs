//! Validated piece colors.
//!
//! Colors are plain alphabetic labels stored in uppercase (e.g. `BLACK`).
//! Parsing rejects any input containing a non-alphabetic character, so a
//! constructed [`Color`] is always in canonical form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an invalid [`Color`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("color contains non-alphabetic character {0:?}")]
pub struct ColorError(pub char);

/// An uppercase alphabetic color label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a label, uppercasing it. Fails on the first non-alphabetic
    /// character.
    pub fn parse(label: &str) -> Result<Self, ColorError> {
        match label.chars().find(|c| !c.is_ascii_alphabetic()) {
            Some(bad) => Err(ColorError(bad)),
            None => Ok(Self(label.to_ascii_uppercase())),
        }
    }

    /// Parse a label, falling back to [`Color::black`] on invalid input.
    pub fn parse_or_default(label: &str) -> Self {
        Self::parse(label).unwrap_or_else(|_| Self::black())
    }

    /// The default piece color, `BLACK`.
    pub fn black() -> Self {
        Self("BLACK".to_string())
    }

    /// The conventional second player color, `WHITE`.
    pub fn white() -> Self {
        Self("WHITE".to_string())
    }

    /// The canonical uppercase label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl PartialEq<str> for Color {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
