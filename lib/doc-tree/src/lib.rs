#![deny(clippy::all)]

pub mod attribute;
pub mod node;

pub use attribute::{Attribute, DocError};
pub use node::DocNode;
