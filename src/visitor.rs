use crate::ast::{Ast, NodeId};
use crate::errors::XTreeResult;

/// Pre-order traversal hook. Depth is handed down by value, so a visitor
/// never has to restore any indentation state on the way back up.
pub trait AstVisitor {
    fn visit_node(&mut self, ast: &Ast, id: NodeId, depth: usize) -> XTreeResult<()>;
}

/// Visit every child of `id` in stored order, one level deeper.
pub fn walk_children<V: AstVisitor + ?Sized>(
    visitor: &mut V,
    ast: &Ast,
    id: NodeId,
    depth: usize,
) -> XTreeResult<()> {
    for &child in ast.children(id)? {
        visitor.visit_node(ast, child, depth + 1)?;
    }
    Ok(())
}

/// Tree statistics for the driver's timing report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NodeCounter {
    pub nodes: usize,
    pub max_depth: usize,
    pub decorated: usize,
}

impl NodeCounter {
    pub fn count(ast: &Ast, root: NodeId) -> XTreeResult<Self> {
        let mut counter = Self::default();
        counter.visit_node(ast, root, 0)?;
        Ok(counter)
    }
}

impl AstVisitor for NodeCounter {
    fn visit_node(&mut self, ast: &Ast, id: NodeId, depth: usize) -> XTreeResult<()> {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
        if ast.decoration(id)?.is_some() {
            self.decorated += 1;
        }
        walk_children(self, ast, id, depth)
    }
}
