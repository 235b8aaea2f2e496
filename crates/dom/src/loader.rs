//! Document Loader - build a [`Document`] from a JSON node description
//!
//! Accepts the node shape CDP's `DOM.getDocument` returns, which makes it easy
//! to seed a page with pre-existing markup:
//!
//! ```json
//! {
//!   "root": {
//!     "nodeType": 9,
//!     "nodeName": "#document",
//!     "children": [
//!       { "nodeType": 1, "nodeName": "DIV", "attributes": ["id", "greeting"],
//!         "children": [{ "nodeType": 3, "nodeName": "#text", "nodeValue": "hi" }] }
//!     ]
//!   }
//! }
//! ```
//!
//! `nodeId`/`backendNodeId` are ignored; arena indices are assigned fresh.
//! Input elements may carry a `value` string for their live value.

use serde_json::Value;

use crate::arena::DomArena;
use crate::document::Document;
use crate::error::{DomError, Result};
use crate::types::{DomNode, NodeId, NodeType};

/// Parse a JSON string and load it
pub fn load_document_str(json: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(json)?;
    load_document(&value)
}

/// Load a document from an already-parsed JSON value
pub fn load_document(description: &Value) -> Result<Document> {
    let root = description
        .get("root")
        .ok_or_else(|| DomError::LoadError("Missing 'root' in description".to_string()))?;

    let mut arena = DomArena::new();
    let root_id = parse_node(&mut arena, root, None)?;
    if arena.get(root_id)?.node_type != NodeType::Document {
        return Err(DomError::InvalidNodeType {
            expected: "Document".to_string(),
            actual: format!("{:?}", arena.get(root_id)?.node_type),
        });
    }
    arena.set_root(root_id)?;

    Document::from_arena(arena)
}

/// Recursively parse one node and its children
fn parse_node(arena: &mut DomArena, json: &Value, parent_id: Option<NodeId>) -> Result<NodeId> {
    let node_type_val = json["nodeType"]
        .as_u64()
        .ok_or_else(|| DomError::LoadError("Missing nodeType".to_string()))?;

    let node_type = u8::try_from(node_type_val)
        .ok()
        .and_then(NodeType::from_u8)
        .ok_or_else(|| DomError::InvalidNodeType {
            expected: "valid NodeType".to_string(),
            actual: format!("{}", node_type_val),
        })?;

    let node_name = json["nodeName"].as_str().unwrap_or("");
    let mut node = match node_type {
        NodeType::Element => {
            if node_name.is_empty() {
                return Err(DomError::LoadError("Element without nodeName".to_string()));
            }
            DomNode::element(0, node_name)
        }
        _ => DomNode::new(0, node_type, node_name.to_string()),
    };

    node.node_value = json["nodeValue"].as_str().unwrap_or("").to_string();
    node.value = json["value"].as_str().map(String::from);

    // Attributes come as a flat [name, value, name, value, ...] array
    if let Some(attrs) = json["attributes"].as_array() {
        for pair in attrs.chunks_exact(2) {
            if let (Some(key), Some(value)) = (pair[0].as_str(), pair[1].as_str()) {
                node.attributes.insert(key.to_string(), value.to_string());
            }
        }
    }

    let current_node_id = arena.add_node(node);
    if let Some(parent_id) = parent_id {
        arena.append_child(parent_id, current_node_id)?;
    }

    if let Some(children) = json["children"].as_array() {
        for child in children {
            parse_node(arena, child, Some(current_node_id))?;
        }
    }

    Ok(current_node_id)
}
