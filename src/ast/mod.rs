//! This module defines the node taxonomy of the language.
//!
//! Nodes are grouped into families: expressions (with literals as a sub-family),
//! definitions, types, and the connectors between them (struct pairs, parameters,
//! function headers). The namespace chain that qualifies references lives in
//! [`namespace`]. [`AnyNode`] offers a single view over every kind.
//!
//! Nothing here validates meaning. A variable definition whose value contradicts
//! its declared type is represented just as faithfully as a correct one.

mod any_node;
mod ast_types;
mod namespace;

pub use any_node::{AnyNode, NodeKind};
pub use ast_types::*;
pub use namespace::{Ancestors, Namespace, NamespaceNode, NamespaceTable};

#[cfg(test)]
mod tests;
