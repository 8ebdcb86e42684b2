#![deny(clippy::all)]

pub mod describe;
pub mod error;
pub mod lang;
pub mod types;

pub use describe::{producible_req_desc, req_desc, resource_req_desc, unit_and_upgrade_req_desc};
pub use error::{RequirementError, RequirementKind};
pub use lang::{Lang, NoTranslation};
pub use types::{Displayable, NamedType, Producible, ProducibleEntity, Requirable, ResourceCost};
