use std::fmt;
use std::io;

use crate::ast::NodeId;

#[derive(Debug)]
pub enum XTreeError {
    // Output sink errors
    IoError(io::Error),
    OutputError(String),

    // Tree construction errors
    UnknownNode(NodeId),
    AlreadyAttached {
        child: NodeId,
        parent: NodeId,
    },
    CycleDetected {
        parent: NodeId,
        child: NodeId,
    },
    NotAnIdentifier {
        node: NodeId,
        kind: &'static str,
    },
}

impl XTreeError {
    /// Create an output error for a sink that could not be written or finalized
    pub fn output_error(message: impl Into<String>) -> Self {
        XTreeError::OutputError(message.into())
    }
}

impl fmt::Display for XTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XTreeError::IoError(err) => write!(f, "I/O error: {}", err),
            XTreeError::OutputError(msg) => write!(f, "Output error: {}", msg),

            XTreeError::UnknownNode(id) => {
                write!(f, "Node {} does not belong to this tree", id)
            }
            XTreeError::AlreadyAttached { child, parent } => {
                write!(f, "Node {} is already a child of node {}", child, parent)
            }
            XTreeError::CycleDetected { parent, child } => {
                write!(f, "Attaching node {} under node {} would create a cycle", child, parent)
            }
            XTreeError::NotAnIdentifier { node, kind } => {
                write!(f, "Node {} is a {} node; only Id nodes carry a frame offset", node, kind)
            }
        }
    }
}

impl std::error::Error for XTreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            XTreeError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for XTreeError {
    fn from(err: io::Error) -> Self {
        XTreeError::IoError(err)
    }
}

impl From<std::string::FromUtf8Error> for XTreeError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        XTreeError::OutputError(err.to_string())
    }
}

// Type alias for Result with XTreeError
pub type XTreeResult<T> = Result<T, XTreeError>;
