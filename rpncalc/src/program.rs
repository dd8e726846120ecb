use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Portable form of an operation stack: registry symbols and decimal
/// literals, bottom of the stack first.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program(pub Vec<String>);

impl Program {
    /// Parse a JSON array of strings, eg: `["3", "4", "+"]`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Deref for Program {
    type Target = [String];
    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for Program {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Program(iter.into_iter().map(Into::into).collect())
    }
}
