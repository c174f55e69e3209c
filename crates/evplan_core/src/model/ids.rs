//! Identifiers for decision analysis entities

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a binary keep/drop decision.
///
/// Unique within a scenario. Used as the column name of enumeration output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecisionKey(pub String);

impl DecisionKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DecisionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DecisionKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DecisionKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for DecisionKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}
