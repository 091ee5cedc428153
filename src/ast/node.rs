use std::fmt;

/// Arena handle for a node. Only meaningful for the `Ast` that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) arena: u32,
    pub(crate) index: usize,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// Human-facing node number, assigned once when the node is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeNumber(pub u32);

impl NodeNumber {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source spelling carried by literal, identifier and operator nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(text: &str) -> Self {
        Symbol::new(text)
    }
}

impl From<String> for Symbol {
    fn from(text: String) -> Self {
        Symbol(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Program,
    Block,
    FunctionDecl,
    Call,
    Decl,
    IntType,
    BoolType,
    Formals,
    ActualArgs,
    If,
    While,
    Return,
    Assign,
    Int(Symbol),
    Id {
        symbol: Symbol,
        // None until storage allocation assigns a slot
        frame_offset: Option<u32>,
    },
    RelOp(Symbol),
    AddOp(Symbol),
    MultOp(Symbol),
}

impl NodeKind {
    pub fn int(text: impl Into<Symbol>) -> Self {
        NodeKind::Int(text.into())
    }

    pub fn id(name: impl Into<Symbol>) -> Self {
        NodeKind::Id { symbol: name.into(), frame_offset: None }
    }

    pub fn rel_op(op: impl Into<Symbol>) -> Self {
        NodeKind::RelOp(op.into())
    }

    pub fn add_op(op: impl Into<Symbol>) -> Self {
        NodeKind::AddOp(op.into())
    }

    pub fn mult_op(op: impl Into<Symbol>) -> Self {
        NodeKind::MultOp(op.into())
    }

    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::Block => "Block",
            NodeKind::FunctionDecl => "FunctionDecl",
            NodeKind::Call => "Call",
            NodeKind::Decl => "Decl",
            NodeKind::IntType => "IntType",
            NodeKind::BoolType => "BoolType",
            NodeKind::Formals => "Formals",
            NodeKind::ActualArgs => "ActualArgs",
            NodeKind::If => "If",
            NodeKind::While => "While",
            NodeKind::Return => "Return",
            NodeKind::Assign => "Assign",
            NodeKind::Int(_) => "Int",
            NodeKind::Id { .. } => "Id",
            NodeKind::RelOp(_) => "RelOp",
            NodeKind::AddOp(_) => "AddOp",
            NodeKind::MultOp(_) => "MultOp",
        }
    }

    pub fn payload(&self) -> Option<&Symbol> {
        match self {
            NodeKind::Int(symbol)
            | NodeKind::Id { symbol, .. }
            | NodeKind::RelOp(symbol)
            | NodeKind::AddOp(symbol)
            | NodeKind::MultOp(symbol) => Some(symbol),
            NodeKind::Program
            | NodeKind::Block
            | NodeKind::FunctionDecl
            | NodeKind::Call
            | NodeKind::Decl
            | NodeKind::IntType
            | NodeKind::BoolType
            | NodeKind::Formals
            | NodeKind::ActualArgs
            | NodeKind::If
            | NodeKind::While
            | NodeKind::Return
            | NodeKind::Assign => None,
        }
    }

    pub fn frame_offset(&self) -> Option<u32> {
        match self {
            NodeKind::Id { frame_offset, .. } => *frame_offset,
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub number: NodeNumber,
    pub kind: NodeKind,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    pub decoration: Option<NodeId>,
    pub label: String,
}

impl Node {
    pub fn new(number: NodeNumber, kind: NodeKind) -> Self {
        Self {
            number,
            kind,
            children: Vec::new(),
            parent: None,
            decoration: None,
            label: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_kinds_expose_their_symbol() {
        assert_eq!(NodeKind::int("42").payload().map(Symbol::as_str), Some("42"));
        assert_eq!(NodeKind::id("x").payload().map(Symbol::as_str), Some("x"));
        assert_eq!(NodeKind::rel_op("<=").payload().map(Symbol::as_str), Some("<="));
        assert_eq!(NodeKind::add_op("+").payload().map(Symbol::as_str), Some("+"));
        assert_eq!(NodeKind::mult_op("*").payload().map(Symbol::as_str), Some("*"));
        assert!(NodeKind::Block.payload().is_none());
    }

    #[test]
    fn frame_offset_only_on_identifiers() {
        let id = NodeKind::Id { symbol: Symbol::new("n"), frame_offset: Some(3) };
        assert_eq!(id.frame_offset(), Some(3));
        assert_eq!(NodeKind::id("n").frame_offset(), None);
        assert_eq!(NodeKind::int("3").frame_offset(), None);
    }
}
