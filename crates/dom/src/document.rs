//! Document - the host tree the interaction helpers mutate
//!
//! Wraps a [`DomArena`] with the small slice of the browser `Document` /
//! `Element` API the helpers rely on. Every mutation is announced on the
//! document's [`EventBus`].

use crate::arena::DomArena;
use crate::error::{DomError, Result};
use crate::events::{EventBus, MutationEvent};
use crate::types::{tags, DomNode, NodeId, NodeType};
use crate::utils;

/// An HTML document: `#document > HTML > BODY` plus whatever gets attached
#[derive(Debug)]
pub struct Document {
    arena: DomArena,
    body_id: NodeId,
    bus: EventBus,
}

impl Document {
    /// Create an empty document with `<html><body></body></html>`
    pub fn new() -> Self {
        let mut arena = DomArena::new();
        let root = arena.add_node(DomNode::new(0, NodeType::Document, "#document".into()));
        let html = arena.add_node(DomNode::element(0, tags::HTML));
        let body = arena.add_node(DomNode::element(0, tags::BODY));

        // Fresh ids, cannot fail
        let _ = arena.set_root(root);
        let _ = arena.append_child(root, html);
        let _ = arena.append_child(html, body);

        Self {
            arena,
            body_id: body,
            bus: EventBus::new(),
        }
    }

    /// Adopt an already-built arena. A missing `<html>`/`<body>` is created.
    pub fn from_arena(mut arena: DomArena) -> Result<Self> {
        let root = arena.root_id().ok_or(DomError::NoRoot)?;

        let body_id = match arena.find_by_tag(tags::BODY)?.first() {
            Some(&body) => body,
            None => {
                let html = match arena.find_by_tag(tags::HTML)?.first() {
                    Some(&html) => html,
                    None => {
                        let html = arena.add_node(DomNode::element(0, tags::HTML));
                        arena.append_child(root, html)?;
                        html
                    }
                };
                let body = arena.add_node(DomNode::element(0, tags::BODY));
                arena.append_child(html, body)?;
                body
            }
        };

        Ok(Self {
            arena,
            body_id,
            bus: EventBus::new(),
        })
    }

    pub fn arena(&self) -> &DomArena {
        &self.arena
    }

    /// The `<body>` element; helpers attach new nodes here
    pub fn body(&self) -> NodeId {
        self.body_id
    }

    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    pub fn node(&self, node_id: NodeId) -> Result<&DomNode> {
        self.arena.get(node_id)
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.arena.add_node(DomNode::element(0, tag))
    }

    /// Create a detached text node
    pub fn create_text_node(&mut self, text: &str) -> NodeId {
        self.arena.add_node(DomNode::text(0, text))
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let old_parent = self.arena.get(child)?.parent_id;
        self.arena.append_child(parent, child)?;

        if let Some(old_parent) = old_parent {
            self.bus.publish(MutationEvent::NodeRemoved {
                node: child,
                parent: old_parent,
            });
        }
        self.bus.publish(MutationEvent::NodeInserted {
            node: child,
            parent,
        });
        Ok(())
    }

    /// Detach a node from its parent. Returns false if it was not attached.
    pub fn remove(&mut self, node_id: NodeId) -> Result<bool> {
        match self.arena.detach(node_id)? {
            Some(parent) => {
                self.bus.publish(MutationEvent::NodeRemoved {
                    node: node_id,
                    parent,
                });
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn is_connected(&self, node_id: NodeId) -> Result<bool> {
        self.arena.is_connected(node_id)
    }

    /// `document.getElementById`: first connected match in document order
    pub fn get_element_by_id(&self, id: &str) -> Result<Option<NodeId>> {
        self.arena.find_by_id(id)
    }

    /// Every connected element carrying `id`
    pub fn elements_by_id(&self, id: &str) -> Result<Vec<NodeId>> {
        self.arena.find_all_by_id(id)
    }

    /// `scope.querySelector`-style lookup with a predicate
    pub fn query_descendant<F>(&self, scope: NodeId, predicate: F) -> Result<Option<NodeId>>
    where
        F: Fn(&DomNode) -> bool,
    {
        self.arena.find_descendant(scope, predicate)
    }

    pub fn get_attribute(&self, node_id: NodeId, name: &str) -> Result<Option<&str>> {
        Ok(self.arena.get(node_id)?.attr(name))
    }

    pub fn set_attribute(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let node = self.element_mut(node_id)?;
        if node.attr(name) == Some(value) {
            return Ok(());
        }

        node.attributes.insert(name.to_string(), value.to_string());
        self.bus.publish(MutationEvent::AttributeChanged {
            node: node_id,
            name: name.to_string(),
        });
        Ok(())
    }

    pub fn has_class(&self, node_id: NodeId, class: &str) -> Result<bool> {
        Ok(self.arena.get(node_id)?.has_class(class))
    }

    /// `classList.add`
    pub fn add_class(&mut self, node_id: NodeId, class: &str) -> Result<()> {
        let current = self.get_attribute(node_id, "class")?.unwrap_or("");
        match utils::add_class_token(current, class) {
            Some(updated) => self.set_attribute(node_id, "class", &updated),
            None => Ok(()),
        }
    }

    /// `classList.remove`
    pub fn remove_class(&mut self, node_id: NodeId, class: &str) -> Result<()> {
        let current = self.get_attribute(node_id, "class")?.unwrap_or("");
        match utils::remove_class_token(current, class) {
            Some(updated) => self.set_attribute(node_id, "class", &updated),
            None => Ok(()),
        }
    }

    /// `Node.textContent` getter
    pub fn text_content(&self, node_id: NodeId) -> Result<String> {
        utils::get_text_content(&self.arena, node_id)
    }

    /// `Node.textContent` setter: replaces all children with one text node
    pub fn set_text_content(&mut self, node_id: NodeId, text: &str) -> Result<()> {
        let node = self.arena.get_mut(node_id)?;
        match node.node_type {
            NodeType::Document => return Ok(()),
            NodeType::Text | NodeType::Comment => {
                node.node_value = text.to_string();
            }
            NodeType::Element | NodeType::DocumentFragment => {
                let children: Vec<NodeId> = node.children_ids.to_vec();
                for child in children {
                    self.arena.detach(child)?;
                }
                if !text.is_empty() {
                    let text_node = self.create_text_node(text);
                    self.arena.append_child(node_id, text_node)?;
                }
            }
        }

        self.bus.publish(MutationEvent::TextChanged { node: node_id });
        Ok(())
    }

    /// Current value of a form control (`HTMLInputElement.value`)
    pub fn value(&self, node_id: NodeId) -> Result<String> {
        let node = self.arena.get(node_id)?;
        Ok(node
            .value
            .clone()
            .or_else(|| node.attr("value").map(String::from))
            .unwrap_or_default())
    }

    pub fn set_value(&mut self, node_id: NodeId, value: &str) -> Result<()> {
        self.element_mut(node_id)?.value = Some(value.to_string());
        self.bus.publish(MutationEvent::ValueChanged { node: node_id });
        Ok(())
    }

    fn element_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        let node = self.arena.get_mut(node_id)?;
        if !node.is_element() {
            return Err(DomError::InvalidNodeType {
                expected: "Element".to_string(),
                actual: format!("{:?}", node.node_type),
            });
        }
        Ok(node)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
