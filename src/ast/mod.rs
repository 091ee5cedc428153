// Abstract Syntax Tree definitions consumed by the tree printer.
// Nodes live in an arena; children are owned by position, decorations are
// plain handles into the same arena.

mod node;
mod tree;

pub use node::{Node, NodeId, NodeKind, NodeNumber, Symbol};
pub use tree::Ast;
