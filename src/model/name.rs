//! Validated worm names
//!
//! A name starts with an uppercase ASCII letter followed by at least one
//! more character, each an ASCII letter, a space, or a quote (`'` or `"`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WormError;

/// Minimum number of characters in a name
pub const MIN_NAME_LENGTH: usize = 2;

/// A validated worm name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WormName(String);

impl WormName {
    /// Create a new validated name.
    ///
    /// # Errors
    ///
    /// Returns `WormError::InvalidArgument` if the name is shorter than two
    /// characters, does not start with an uppercase letter, or contains
    /// anything other than letters, spaces and quotes.
    pub fn new(name: impl Into<String>) -> Result<Self, WormError> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(WormError::invalid_argument(format!(
                "{name:?} is not a valid worm name"
            )));
        }
        Ok(Self(name))
    }

    /// Whether `name` is acceptable for any worm
    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        first.is_ascii_uppercase()
            && name.chars().count() >= MIN_NAME_LENGTH
            && chars.all(|c| c.is_ascii_alphabetic() || matches!(c, ' ' | '\'' | '"'))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WormName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WormName {
    type Error = WormError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for WormName {
    type Error = WormError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<WormName> for String {
    fn from(name: WormName) -> String {
        name.0
    }
}
