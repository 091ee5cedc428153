pub mod ast;
pub mod config;
pub mod errors;
pub mod printer;
pub mod samples;
pub mod visitor;

pub use ast::{Ast, NodeId, NodeKind, NodeNumber, Symbol};
pub use errors::{XTreeError, XTreeResult};
pub use printer::{render, TreePrinter};

