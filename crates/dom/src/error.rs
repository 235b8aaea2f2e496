//! Error types for DOM operations
//!
//! Simple, flat error hierarchy. A missing element is never an error here:
//! lookups return `Option`, only stale node ids and bad input fail.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(u32),

    #[error("Invalid node type: expected {expected}, got {actual}")]
    InvalidNodeType { expected: String, actual: String },

    #[error("Cannot insert node {child} under {parent}: would create a cycle")]
    HierarchyRequest { parent: u32, child: u32 },

    #[error("No root node set")]
    NoRoot,

    #[error("Load error: {0}")]
    LoadError(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}
