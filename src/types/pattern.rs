//! Compiled regular expression that (de)serializes as its pattern text

use crate::error::{Result, UtilError};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A compiled pattern, usable directly in config structs.
///
/// Derefs to [`regex::Regex`] for matching; compares by pattern text.
#[derive(Debug, Clone)]
pub struct Regex(regex::Regex);

impl Regex {
    /// Compile `pattern`
    pub fn compile(pattern: &str) -> Result<Self> {
        regex::Regex::new(pattern)
            .map(Regex)
            .map_err(UtilError::from)
    }

    /// The source pattern
    pub fn pattern(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for Regex {
    type Target = regex::Regex;

    fn deref(&self) -> &regex::Regex {
        &self.0
    }
}

impl FromStr for Regex {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        Regex::compile(s)
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

impl PartialEq for Regex {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern()
    }
}

impl Eq for Regex {}

impl Serialize for Regex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.pattern())
    }
}

impl<'de> Deserialize<'de> for Regex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let pattern = String::deserialize(deserializer)?;
        Regex::compile(&pattern).map_err(de::Error::custom)
    }
}
