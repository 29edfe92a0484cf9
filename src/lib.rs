//! The abstract syntax tree of a small expression-oriented language, and the
//! double dispatch protocol used to walk it.
//!
//! Trees arrive from an external parser, serialized as JSON (see [`read_tree`]).
//! Any number of independent traversals can then run over them by implementing
//! [`visit::Visitor`]. Two ship with the crate: the indented tree printer in
//! [`printer`], and the shape summary in [`stats`].

// I use `cargo clippy -- -D clippy::pedantic`
#![allow(
    clippy::missing_errors_doc,  // The error types document themselves.
    clippy::must_use_candidate,  // Accessors everywhere.
    clippy::module_name_repetitions,  // `ast::AnyNode` reads fine.
    clippy::return_self_not_must_use,  // Visitor handlers return the next visitor; dispatch may drop it.
)]

pub mod ast;
pub mod error;
pub mod printer;
pub mod stats;
pub mod visit;

use serde::Deserialize;

use std::io::Read;
use std::path::Path;

pub use error::{pretty_error_message, LoadError};
pub use printer::{print_tree, print_tree_with, write_printed_tree, PrintOptions, TreeDisplay};
pub use stats::{collect_stats, TreeStats};

/// Decodes a tree from its JSON hand-off form.
///
/// Nesting depth is unbounded; the stack grows as needed while decoding.
pub fn read_tree(input: &str) -> Result<ast::FileNode, LoadError> {
    let mut deserializer = serde_json::Deserializer::from_str(input);
    deserializer.disable_recursion_limit();

    let file = ast::FileNode::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;

    log::debug!("loaded tree from {} bytes of input", input.len());
    Ok(file)
}

pub fn read_tree_file(path: &Path) -> Result<ast::FileNode, LoadError> {
    let input =
        std::fs::read_to_string(path).map_err(|source| LoadError::Io { path: Some(path.to_path_buf()), source })?;
    read_tree(&input)
}

/// Reads all of standard input and decodes it as a tree.
pub fn read_tree_stdin() -> Result<ast::FileNode, LoadError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input).map_err(|source| LoadError::Io { path: None, source })?;
    read_tree(&input)
}

/// Encodes a tree in its JSON hand-off form.
///
/// Fails on numbers JSON cannot hold (NaN and the infinities), rather than writing
/// something [`read_tree`] would reject.
pub fn write_tree(file: &ast::FileNode) -> Result<String, LoadError> {
    serde_json::to_string_pretty(file).map_err(LoadError::Encode)
}
