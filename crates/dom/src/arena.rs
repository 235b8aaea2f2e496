//! Arena-based DOM tree storage
//!
//! All nodes live in one `Vec<DomNode>` and refer to each other by index.
//! Detaching a node only unlinks it; the slot stays allocated so ids handed
//! out earlier never dangle.
//!
//! ## Memory Layout
//!
//! ```text
//! Arena: Vec<DomNode>
//!        [Node0][Node1][Node2]...
//!         ↑ 4-byte index, not 8-byte pointer
//! ```

use crate::error::{DomError, Result};
use crate::types::{DomNode, NodeId};

/// Arena allocator for DOM nodes
#[derive(Debug)]
pub struct DomArena {
    /// All nodes stored sequentially, attached or not
    nodes: Vec<DomNode>,

    /// Root node ID (if set)
    root_id: Option<NodeId>,
}

impl DomArena {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create arena with specific capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root_id: None,
        }
    }

    /// Add a node to the arena, returns its ID
    ///
    /// The node's `node_id` is overwritten with its slot index.
    pub fn add_node(&mut self, mut node: DomNode) -> NodeId {
        let node_id = self.nodes.len() as NodeId;
        node.node_id = node_id;
        self.nodes.push(node);
        node_id
    }

    /// Get node by ID (immutable)
    pub fn get(&self, node_id: NodeId) -> Result<&DomNode> {
        self.nodes
            .get(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Get node by ID (mutable)
    pub fn get_mut(&mut self, node_id: NodeId) -> Result<&mut DomNode> {
        self.nodes
            .get_mut(node_id as usize)
            .ok_or(DomError::NodeNotFound(node_id))
    }

    /// Set root node
    pub fn set_root(&mut self, node_id: NodeId) -> Result<()> {
        // Verify node exists
        self.get(node_id)?;
        self.root_id = Some(node_id);
        Ok(())
    }

    /// Get root node ID
    pub fn root_id(&self) -> Option<NodeId> {
        self.root_id
    }

    /// Get root node
    pub fn root(&self) -> Result<&DomNode> {
        let root_id = self.root_id.ok_or(DomError::NoRoot)?;
        self.get(root_id)
    }

    /// Total number of nodes, including detached ones
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get children of a node
    pub fn children(&self, node_id: NodeId) -> Result<Vec<&DomNode>> {
        let node = self.get(node_id)?;
        node.children_ids
            .iter()
            .map(|&child_id| self.get(child_id))
            .collect()
    }

    /// Node followed by its ancestors, nearest first
    pub fn ancestors_inclusive(&self, node_id: NodeId) -> Result<Vec<NodeId>> {
        let mut path = vec![node_id];
        let mut current = self.get(node_id)?.parent_id;
        while let Some(id) = current {
            path.push(id);
            current = self.get(id)?.parent_id;
        }
        Ok(path)
    }

    /// Check whether `ancestor` is `node_id` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node_id: NodeId) -> Result<bool> {
        Ok(self.ancestors_inclusive(node_id)?.contains(&ancestor))
    }

    /// Check whether the node is reachable from the root
    pub fn is_connected(&self, node_id: NodeId) -> Result<bool> {
        match self.root_id {
            Some(root_id) => self.is_inclusive_ancestor(root_id, node_id),
            None => Ok(false),
        }
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.get(child)?;
        if self.is_inclusive_ancestor(child, parent)? {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child)?;
        self.get_mut(parent)?.children_ids.push(child);
        self.get_mut(child)?.parent_id = Some(parent);
        Ok(())
    }

    /// Unlink a node from its parent. Returns the old parent, if any.
    pub fn detach(&mut self, node_id: NodeId) -> Result<Option<NodeId>> {
        let parent_id = match self.get_mut(node_id)?.parent_id.take() {
            Some(parent_id) => parent_id,
            None => return Ok(None),
        };

        self.get_mut(parent_id)?
            .children_ids
            .retain(|id| *id != node_id);
        Ok(Some(parent_id))
    }

    /// Traverse tree depth-first (iterative, no recursion)
    pub fn traverse_df<F>(&self, start_id: NodeId, mut visit: F) -> Result<()>
    where
        F: FnMut(&DomNode) -> Result<()>,
    {
        let mut stack = vec![start_id];

        while let Some(node_id) = stack.pop() {
            let node = self.get(node_id)?;
            visit(node)?;

            // Push children in reverse order (so they're visited left-to-right)
            for &child_id in node.children_ids.iter().rev() {
                stack.push(child_id);
            }
        }

        Ok(())
    }

    /// Descendants of `scope` in document order, `scope` itself excluded
    pub fn descendants(&self, scope: NodeId) -> Result<Vec<NodeId>> {
        let mut found = Vec::new();
        self.traverse_df(scope, |node| {
            if node.node_id != scope {
                found.push(node.node_id);
            }
            Ok(())
        })?;
        Ok(found)
    }

    /// First descendant of `scope` (document order) matching predicate
    pub fn find_descendant<F>(&self, scope: NodeId, predicate: F) -> Result<Option<NodeId>>
    where
        F: Fn(&DomNode) -> bool,
    {
        for node_id in self.descendants(scope)? {
            if predicate(self.get(node_id)?) {
                return Ok(Some(node_id));
            }
        }
        Ok(None)
    }

    /// All connected elements carrying the given `id` attribute
    pub fn find_all_by_id(&self, id: &str) -> Result<Vec<NodeId>> {
        let Some(root_id) = self.root_id else {
            return Ok(Vec::new());
        };

        let mut found = Vec::new();
        self.traverse_df(root_id, |node| {
            if node.is_element() && node.id() == Some(id) {
                found.push(node.node_id);
            }
            Ok(())
        })?;
        Ok(found)
    }

    /// Find connected element by ID attribute (first in document order)
    pub fn find_by_id(&self, id: &str) -> Result<Option<NodeId>> {
        match self.root_id {
            Some(root_id) => self.find_descendant(root_id, |node| {
                node.is_element() && node.id() == Some(id)
            }),
            None => Ok(None),
        }
    }

    /// Find all connected elements by tag name
    pub fn find_by_tag(&self, tag: &str) -> Result<Vec<NodeId>> {
        let Some(root_id) = self.root_id else {
            return Ok(Vec::new());
        };

        let mut found = Vec::new();
        self.traverse_df(root_id, |node| {
            if node.is_tag(tag) {
                found.push(node.node_id);
            }
            Ok(())
        })?;
        Ok(found)
    }
}

impl Default for DomArena {
    fn default() -> Self {
        Self::new()
    }
}
