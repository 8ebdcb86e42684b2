use doc_tree::DocError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A per-slot accessor was called with an index outside of `0..MAX_PLAYERS`.
    #[error("In [{context}] invalid slot index = {index}")]
    OutOfRangeSlot { index: i32, context: &'static str },
    #[error("required field \"{0}\" is missing")]
    MissingRequiredField(String),
    #[error("field \"{attribute}\" has the invalid value \"{value}\"")]
    InvalidValue { attribute: String, value: String },
}

impl From<DocError> for SettingsError {
    fn from(err: DocError) -> Self {
        match err {
            DocError::MissingAttribute { attribute, .. } => Self::MissingRequiredField(attribute),
            DocError::MissingChild { name, index, .. } => {
                Self::MissingRequiredField(format!("{name}[{index}]"))
            }
            DocError::InvalidValue {
                attribute, value, ..
            } => Self::InvalidValue { attribute, value },
        }
    }
}
