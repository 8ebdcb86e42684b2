use serde::{Deserialize, Serialize};

use crate::lang::Lang;

pub const COMMAND_NAME_PREFIX: &str = "CommandName_";

pub trait Displayable {
    fn raw_name(&self) -> &str;

    fn name(&self, translated: bool, lang: &dyn Lang) -> String {
        let name = self.raw_name();
        if translated {
            lang.tech_tree_string(&format!("{COMMAND_NAME_PREFIX}{name}"), name)
        } else {
            name.to_string()
        }
    }
}

/// Something that needs other units or upgrades before it becomes available.
///
/// The counts are authoritative, `None` for an index below the count means the
/// reference could not be resolved.
pub trait Requirable: Displayable {
    fn unit_req_count(&self) -> usize;
    fn unit_req(&self, index: usize) -> Option<&dyn Displayable>;
    fn upgrade_req_count(&self) -> usize;
    fn upgrade_req(&self, index: usize) -> Option<&dyn Displayable>;
}

pub trait Producible: Requirable {
    fn cost_count(&self) -> usize;
    fn cost(&self, index: usize) -> Option<&ResourceCost>;

    fn cost_for(&self, resource_name: &str) -> Option<&ResourceCost> {
        (0..self.cost_count())
            .filter_map(|i| self.cost(i))
            .find(|cost| cost.resource.raw_name() == resource_name)
    }
}

/// A content type that is only known by its name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedType {
    pub name: String,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Displayable for NamedType {
    fn raw_name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCost {
    pub resource: NamedType,
    pub amount: i32,
}

impl ResourceCost {
    pub fn new(resource: impl Into<String>, amount: i32) -> Self {
        Self {
            resource: NamedType::new(resource),
            amount,
        }
    }
}

/// A unit or upgrade as declared by content data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducibleEntity {
    pub name: String,
    #[serde(default)]
    pub unit_reqs: Vec<Option<NamedType>>,
    #[serde(default)]
    pub upgrade_reqs: Vec<Option<NamedType>>,
    #[serde(default)]
    pub costs: Vec<ResourceCost>,
}

impl ProducibleEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_unit_req(mut self, name: impl Into<String>) -> Self {
        self.unit_reqs.push(Some(NamedType::new(name)));
        self
    }

    pub fn with_upgrade_req(mut self, name: impl Into<String>) -> Self {
        self.upgrade_reqs.push(Some(NamedType::new(name)));
        self
    }

    pub fn with_cost(mut self, resource: impl Into<String>, amount: i32) -> Self {
        self.costs.push(ResourceCost::new(resource, amount));
        self
    }
}

impl Displayable for ProducibleEntity {
    fn raw_name(&self) -> &str {
        &self.name
    }
}

impl Requirable for ProducibleEntity {
    fn unit_req_count(&self) -> usize {
        self.unit_reqs.len()
    }

    fn unit_req(&self, index: usize) -> Option<&dyn Displayable> {
        self.unit_reqs
            .get(index)?
            .as_ref()
            .map(|req| req as &dyn Displayable)
    }

    fn upgrade_req_count(&self) -> usize {
        self.upgrade_reqs.len()
    }

    fn upgrade_req(&self, index: usize) -> Option<&dyn Displayable> {
        self.upgrade_reqs
            .get(index)?
            .as_ref()
            .map(|req| req as &dyn Displayable)
    }
}

impl Producible for ProducibleEntity {
    fn cost_count(&self) -> usize {
        self.costs.len()
    }

    fn cost(&self, index: usize) -> Option<&ResourceCost> {
        self.costs.get(index)
    }
}
