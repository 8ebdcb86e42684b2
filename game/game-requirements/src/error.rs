use strum::Display;
use thiserror::Error;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum RequirementKind {
    Unit,
    Upgrade,
    Cost,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequirementError {
    #[error("{kind} requirement {index} of {entity} is not resolved")]
    NullPrerequisite {
        entity: String,
        kind: RequirementKind,
        index: usize,
    },
}
