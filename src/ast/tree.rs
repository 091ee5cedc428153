use std::sync::atomic::{AtomicU32, Ordering};

use log::{debug, trace};

use crate::ast::{Node, NodeId, NodeKind, NodeNumber};
use crate::config::numbering::FIRST_NODE_NUMBER;
use crate::errors::{XTreeError, XTreeResult};

/// Arena owning every node of a syntax tree, plus any detached nodes
/// (shared type nodes and the like) that decorations may point at.
/// Handles carry the tag of the arena that issued them; a clone keeps the
/// tag, so handles stay valid in both copies.
#[derive(Debug, Clone)]
pub struct Ast {
    tag: u32,
    nodes: Vec<Node>,
}

static NEXT_ARENA_TAG: AtomicU32 = AtomicU32::new(0);

impl Default for Ast {
    fn default() -> Self {
        Self::new()
    }
}

impl Ast {
    pub fn new() -> Self {
        Self {
            tag: NEXT_ARENA_TAG.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.arena == self.tag && id.index < self.nodes.len()
    }

    /// Construct a detached node and give it the next node number.
    pub fn add(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId { arena: self.tag, index: self.nodes.len() };
        let number = NodeNumber(FIRST_NODE_NUMBER + self.nodes.len() as u32);
        trace!("new {} node {} as {}", kind.name(), number, id);
        self.nodes.push(Node::new(number, kind));
        id
    }

    pub fn add_with_children(&mut self, kind: NodeKind, children: &[NodeId]) -> XTreeResult<NodeId> {
        let id = self.add(kind);
        for &child in children {
            self.add_child(id, child)?;
        }
        Ok(id)
    }

    /// Append `child` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> XTreeResult<()> {
        self.check(parent)?;
        self.check(child)?;

        if let Some(owner) = self.nodes[child.index].parent {
            return Err(XTreeError::AlreadyAttached { child, parent: owner });
        }
        // child has no parent, so it can only close a cycle by being `parent`
        // itself or one of its ancestors
        if self.ancestors(parent).any(|ancestor| ancestor == child) {
            return Err(XTreeError::CycleDetected { parent, child });
        }

        self.nodes[child.index].parent = Some(parent);
        self.nodes[parent.index].children.push(child);
        Ok(())
    }

    /// Record a non-owning cross reference from `node` to `target`.
    pub fn decorate(&mut self, node: NodeId, target: NodeId) -> XTreeResult<()> {
        self.check(node)?;
        self.check(target)?;
        debug!(
            "decorating node {} with node {}",
            self.nodes[node.index].number, self.nodes[target.index].number
        );
        self.nodes[node.index].decoration = Some(target);
        Ok(())
    }

    pub fn clear_decoration(&mut self, node: NodeId) -> XTreeResult<()> {
        self.node_mut(node)?.decoration = None;
        Ok(())
    }

    pub fn set_label(&mut self, node: NodeId, label: impl Into<String>) -> XTreeResult<()> {
        self.node_mut(node)?.label = label.into();
        Ok(())
    }

    pub fn set_frame_offset(&mut self, node: NodeId, offset: u32) -> XTreeResult<()> {
        self.update_frame_offset(node, Some(offset))
    }

    pub fn clear_frame_offset(&mut self, node: NodeId) -> XTreeResult<()> {
        self.update_frame_offset(node, None)
    }

    fn update_frame_offset(&mut self, node: NodeId, offset: Option<u32>) -> XTreeResult<()> {
        let entry = self.node_mut(node)?;
        match &mut entry.kind {
            NodeKind::Id { frame_offset, .. } => {
                *frame_offset = offset;
                Ok(())
            }
            other => Err(XTreeError::NotAnIdentifier { node, kind: other.name() }),
        }
    }

    pub fn node(&self, id: NodeId) -> XTreeResult<&Node> {
        self.slot(id).map(|index| &self.nodes[index])
    }

    fn node_mut(&mut self, id: NodeId) -> XTreeResult<&mut Node> {
        let index = self.slot(id)?;
        Ok(&mut self.nodes[index])
    }

    fn slot(&self, id: NodeId) -> XTreeResult<usize> {
        if self.contains(id) {
            Ok(id.index)
        } else {
            Err(XTreeError::UnknownNode(id))
        }
    }

    fn check(&self, id: NodeId) -> XTreeResult<()> {
        self.slot(id).map(|_| ())
    }

    pub fn number(&self, id: NodeId) -> XTreeResult<NodeNumber> {
        Ok(self.node(id)?.number)
    }

    pub fn kind(&self, id: NodeId) -> XTreeResult<&NodeKind> {
        Ok(&self.node(id)?.kind)
    }

    pub fn children(&self, id: NodeId) -> XTreeResult<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    pub fn parent(&self, id: NodeId) -> XTreeResult<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn decoration(&self, id: NodeId) -> XTreeResult<Option<NodeId>> {
        Ok(self.node(id)?.decoration)
    }

    pub fn label(&self, id: NodeId) -> XTreeResult<&str> {
        Ok(&self.node(id)?.label)
    }

    pub fn frame_offset(&self, id: NodeId) -> XTreeResult<Option<u32>> {
        Ok(self.node(id)?.kind.frame_offset())
    }

    /// Walks from `id` up to the root, starting with `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.contains(id).then_some(id), move |current| {
            self.nodes[current.index].parent
        })
    }

    pub fn depth(&self, id: NodeId) -> XTreeResult<usize> {
        self.check(id)?;
        Ok(self.ancestors(id).count() - 1)
    }

    pub fn subtree_size(&self, id: NodeId) -> XTreeResult<usize> {
        let mut pending = vec![id];
        let mut count = 0;
        while let Some(current) = pending.pop() {
            count += 1;
            pending.extend_from_slice(self.children(current)?);
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_follow_construction_order() {
        let mut ast = Ast::new();
        let a = ast.add(NodeKind::Program);
        let b = ast.add(NodeKind::Block);
        assert_eq!(ast.number(a).unwrap(), NodeNumber(1));
        assert_eq!(ast.number(b).unwrap(), NodeNumber(2));
    }

    #[test]
    fn depth_counts_edges_to_root() {
        let mut ast = Ast::new();
        let decl = ast.add(NodeKind::Decl);
        let block = ast.add_with_children(NodeKind::Block, &[decl]).unwrap();
        let program = ast.add_with_children(NodeKind::Program, &[block]).unwrap();
        assert_eq!(ast.depth(program).unwrap(), 0);
        assert_eq!(ast.depth(decl).unwrap(), 2);
    }
}
