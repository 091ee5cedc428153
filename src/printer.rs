//! Indented dump of a decorated syntax tree.
//!
//! Every node produces exactly one line:
//!
//! ```text
//! 1:  Program
//! 2:    Block
//! 3:      FunctionDecl  Dec: 40
//! 9:        Id: n  Addr: 0
//! ```
//!
//! The leading field is the node number padded to a common width, followed by
//! two spaces of indentation per level, the node's label and then whichever of
//! the decoration, label and address segments apply.

use std::io::Write;

use log::debug;

use crate::ast::{Ast, NodeId, NodeKind, NodeNumber};
use crate::config::layout::{
    indentation, ADDRESS_PREFIX, DECORATION_PREFIX, LABEL_PREFIX, NUMBER_SUFFIX, NUMBER_WIDTH,
    PAYLOAD_SEPARATOR,
};
use crate::errors::XTreeResult;
use crate::visitor::{walk_children, AstVisitor};

/// `Kind` for structural nodes, `Kind: symbol` for literals, identifiers and operators.
pub fn base_label(kind: &NodeKind) -> String {
    match kind.payload() {
        Some(symbol) => format!("{}{}{}", kind.name(), PAYLOAD_SEPARATOR, symbol),
        None => kind.name().to_string(),
    }
}

/// Node number and colon, padded so that numbers below 1000 line up.
/// Wider numbers are written as-is.
pub fn number_field(number: NodeNumber) -> String {
    let digits = number.to_string();
    let padding = NUMBER_WIDTH.saturating_sub(digits.len());
    format!("{}{}{}", digits, NUMBER_SUFFIX, " ".repeat(padding))
}

/// Assemble the line for `id` at `depth`, without a line terminator.
pub fn format_line(ast: &Ast, id: NodeId, label: &str, depth: usize) -> XTreeResult<String> {
    let node = ast.node(id)?;
    let mut line = number_field(node.number);
    line.push_str(&indentation(depth));
    line.push_str(label);

    if let Some(target) = node.decoration {
        line.push_str(DECORATION_PREFIX);
        line.push_str(&ast.number(target)?.to_string());
    }
    if !node.label.is_empty() {
        line.push_str(LABEL_PREFIX);
        line.push_str(&node.label);
    }
    if let Some(offset) = node.kind.frame_offset() {
        line.push_str(ADDRESS_PREFIX);
        line.push_str(&offset.to_string());
    }
    Ok(line)
}

pub struct TreePrinter<W: Write> {
    out: W,
    lines: usize,
}

impl<W: Write> TreePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Print the tree rooted at `root`, using `root_label` for the root line
    /// and each descendant's own kind label below it.
    ///
    /// Traversal recurses once per level, so a tree deep enough to exhaust
    /// the thread's stack (a single chain of a few hundred thousand nodes)
    /// aborts the process. Run very deep trees on a thread with a larger stack.
    pub fn print(&mut self, root_label: &str, ast: &Ast, root: NodeId) -> XTreeResult<()> {
        debug!("printing tree rooted at node {}", ast.number(root)?);
        let before = self.lines;
        self.emit(ast, root, root_label, 0)?;
        walk_children(self, ast, root, 0)?;
        self.out.flush()?;
        debug!("printed {} lines", self.lines - before);
        Ok(())
    }

    pub fn print_tree(&mut self, ast: &Ast, root: NodeId) -> XTreeResult<()> {
        let label = base_label(ast.kind(root)?);
        self.print(&label, ast, root)
    }

    /// Lines written so far across every `print` call.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, ast: &Ast, id: NodeId, label: &str, depth: usize) -> XTreeResult<()> {
        let line = format_line(ast, id, label, depth)?;
        writeln!(self.out, "{}", line)?;
        self.lines += 1;
        Ok(())
    }
}

impl<W: Write> AstVisitor for TreePrinter<W> {
    fn visit_node(&mut self, ast: &Ast, id: NodeId, depth: usize) -> XTreeResult<()> {
        let label = base_label(ast.kind(id)?);
        self.emit(ast, id, &label, depth)?;
        walk_children(self, ast, id, depth)
    }
}

/// Render the tree rooted at `root` into a string.
pub fn render(ast: &Ast, root: NodeId) -> XTreeResult<String> {
    let mut printer = TreePrinter::new(Vec::new());
    printer.print_tree(ast, root)?;
    Ok(String::from_utf8(printer.into_inner())?)
}
