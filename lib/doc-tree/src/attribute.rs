use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocError {
    #[error("node \"{node}\" has no attribute \"{attribute}\"")]
    MissingAttribute { node: String, attribute: String },
    #[error("node \"{node}\" has no child \"{name}\" at index {index}")]
    MissingChild {
        node: String,
        name: String,
        index: usize,
    },
    #[error("attribute \"{attribute}\" has the value \"{value}\", which is not a valid {expected}")]
    InvalidValue {
        attribute: String,
        value: String,
        expected: &'static str,
    },
}

/// A borrowed view of a single `name="value"` pair of a [`crate::DocNode`].
///
/// Values are always stored as text, the typed reads below
/// parse them on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    name: &'a str,
    value: &'a str,
}

impl<'a> Attribute<'a> {
    pub fn new(name: &'a str, value: &'a str) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn value(&self) -> &'a str {
        self.value
    }

    fn invalid(&self, expected: &'static str) -> DocError {
        DocError::InvalidValue {
            attribute: self.name.to_string(),
            value: self.value.to_string(),
            expected,
        }
    }

    pub fn int_value(&self) -> Result<i32, DocError> {
        self.value
            .trim()
            .parse()
            .map_err(|_| self.invalid("signed 32-bit integer"))
    }

    pub fn uint_value(&self) -> Result<u32, DocError> {
        self.value
            .trim()
            .parse()
            .map_err(|_| self.invalid("unsigned 32-bit integer"))
    }

    /// Booleans are written as `0`/`1`, any non-zero integer reads as `true`.
    pub fn bool_value(&self) -> Result<bool, DocError> {
        self.int_value()
            .map(|v| v != 0)
            .map_err(|_| self.invalid("integer encoded boolean"))
    }
}

impl Display for Attribute<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}
