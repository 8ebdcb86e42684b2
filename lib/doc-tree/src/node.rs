use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, DocError};

/// A node of a hierarchical document.
///
/// Every node has a name, an ordered set of text attributes and an
/// ordered list of children. Children with the same name form a
/// repeated sequence that is addressed by `(name, index)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocNode {
    name: String,
    #[serde(default)]
    attributes: IndexMap<String, String>,
    #[serde(default)]
    children: Vec<DocNode>,
}

impl DocNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a new, empty child and returns it for further writes.
    pub fn add_child(&mut self, name: impl Into<String>) -> &mut DocNode {
        let index = self.children.len();
        self.children.push(DocNode::new(name));
        &mut self.children[index]
    }

    /// Sets an attribute, an existing attribute with the same name is replaced
    /// in place.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl ToString) {
        self.attributes.insert(name.into(), value.to_string());
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn get_attribute(&self, name: &str) -> Result<Attribute<'_>, DocError> {
        self.attributes
            .get_key_value(name)
            .map(|(name, value)| Attribute::new(name, value))
            .ok_or_else(|| DocError::MissingAttribute {
                node: self.name.clone(),
                attribute: name.to_string(),
            })
    }

    pub fn attributes(&self) -> impl Iterator<Item = Attribute<'_>> {
        self.attributes
            .iter()
            .map(|(name, value)| Attribute::new(name, value))
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a DocNode> {
        self.children.iter().filter(move |child| child.name == name)
    }

    pub fn child_count(&self, name: &str) -> usize {
        self.children_named(name).count()
    }

    pub fn has_child_at_index(&self, name: &str, index: usize) -> bool {
        self.children_named(name).nth(index).is_some()
    }

    /// The `index`-th child called `name`, counting only children with that name.
    pub fn get_child_at(&self, name: &str, index: usize) -> Result<&DocNode, DocError> {
        self.children
            .iter()
            .filter(|child| child.name == name)
            .nth(index)
            .ok_or_else(|| DocError::MissingChild {
                node: self.name.clone(),
                name: name.to_string(),
                index,
            })
    }

    pub fn get_child(&self, name: &str) -> Result<&DocNode, DocError> {
        self.get_child_at(name, 0)
    }

    pub fn get_child_mut(&mut self, name: &str) -> Result<&mut DocNode, DocError> {
        let node = self.name.clone();
        self.children
            .iter_mut()
            .find(|child| child.name == name)
            .ok_or_else(|| DocError::MissingChild {
                node,
                name: name.to_string(),
                index: 0,
            })
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.shift_remove(name)
    }

    /// Removes the `index`-th child called `name`, later children of that
    /// name move up by one.
    pub fn remove_child_at(&mut self, name: &str, index: usize) -> Option<DocNode> {
        let pos = self
            .children
            .iter()
            .enumerate()
            .filter(|(_, child)| child.name == name)
            .nth(index)
            .map(|(pos, _)| pos)?;
        Some(self.children.remove(pos))
    }

    pub fn to_json_string(&self) -> anyhow::Result<String> {
        let res = serde_json::to_string(self)?;
        Ok(res)
    }

    pub fn from_json_string(json_str: &str) -> anyhow::Result<Self> {
        let res = serde_json::from_str(json_str)?;
        Ok(res)
    }
}
