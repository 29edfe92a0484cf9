//! Errors for everything outside the AST itself.
//!
//! The node model and dispatch never fail. What can fail is getting a tree in
//! or out: reading input and decoding the hand-off format.

mod error_types;
mod pretty_messages;

pub use error_types::LoadError;
pub use pretty_messages::pretty_error_message;
