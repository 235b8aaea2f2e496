//! Core type definitions for the host tree
//!
//! Key design principles:
//! 1. Use u32 for indices (4 bytes vs 8 bytes pointer)
//! 2. Use SmallVec for child lists (most nodes have a handful of children)
//! 3. Element names are stored upper-case, the way `Element.tagName` reports them

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

use crate::utils;

/// Node identifier (index into arena)
pub type NodeId = u32;

/// Node type matching DOM specification numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Text = 3,
    Comment = 8,
    Document = 9,
    DocumentFragment = 11,
}

impl NodeType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(NodeType::Element),
            3 => Some(NodeType::Text),
            8 => Some(NodeType::Comment),
            9 => Some(NodeType::Document),
            11 => Some(NodeType::DocumentFragment),
            _ => None,
        }
    }
}

/// Tag names the helpers create or look for
pub mod tags {
    pub const HTML: &str = "HTML";
    pub const BODY: &str = "BODY";
    pub const DIV: &str = "DIV";
    pub const BUTTON: &str = "BUTTON";
    pub const FORM: &str = "FORM";
    pub const INPUT: &str = "INPUT";
}

/// A node in the host tree
///
/// Navigation is index based: `parent_id` and `children_ids` point back into
/// the owning [`DomArena`](crate::arena::DomArena).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomNode {
    pub node_id: NodeId,
    pub node_type: NodeType,

    pub parent_id: Option<NodeId>,
    pub children_ids: SmallVec<[NodeId; 4]>,

    pub node_name: String,
    pub node_value: String,
    pub attributes: HashMap<String, String>,

    /// Live value of a form control. `None` means "use the `value` attribute".
    pub value: Option<String>,

    // UUID for tracing
    pub uuid: String,
}

impl DomNode {
    /// Create a new node with required fields
    pub fn new(node_id: NodeId, node_type: NodeType, node_name: String) -> Self {
        Self {
            node_id,
            node_type,
            parent_id: None,
            children_ids: SmallVec::new(),
            node_name,
            node_value: String::new(),
            attributes: HashMap::new(),
            value: None,
            uuid: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Create an element node; the tag is normalized to upper case
    pub fn element(node_id: NodeId, tag: &str) -> Self {
        Self::new(node_id, NodeType::Element, tag.to_ascii_uppercase())
    }

    /// Create a text node
    pub fn text(node_id: NodeId, content: &str) -> Self {
        let mut node = Self::new(node_id, NodeType::Text, "#text".to_string());
        node.node_value = content.to_string();
        node
    }

    /// Get tag name for element nodes
    pub fn tag_name(&self) -> Option<&str> {
        if self.node_type == NodeType::Element {
            Some(&self.node_name)
        } else {
            None
        }
    }

    /// Check if node is an element with the given tag (case-insensitive)
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name()
            .map(|name| name.eq_ignore_ascii_case(tag))
            .unwrap_or(false)
    }

    /// Check if node is an element
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if node is text
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Get attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// The `id` attribute, if any
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|list| utils::class_tokens(list).any(|token| token == class))
            .unwrap_or(false)
    }

    /// Check if the node is a control that submits its form when clicked
    pub fn is_submit_control(&self) -> bool {
        let kind = self.attr("type").map(str::to_ascii_lowercase);
        if self.is_tag(tags::BUTTON) {
            // Buttons default to submit
            matches!(kind.as_deref(), None | Some("submit"))
        } else if self.is_tag(tags::INPUT) {
            kind.as_deref() == Some("submit")
        } else {
            false
        }
    }
}

/// Default attributes to include in serialization
pub const DEFAULT_INCLUDE_ATTRIBUTES: &[&str] = &["id", "class", "type", "name", "value"];
