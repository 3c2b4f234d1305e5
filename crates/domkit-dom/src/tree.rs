//! DOM Tree (arena-based allocation)

use crate::{Node, NodeData, NodeId, ElementData, HostError, Result};

/// Arena-based DOM tree
///
/// Slot 0 is always the document node.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self { nodes: vec![Node::document()] }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Element data for `id`, or the reason there is none
    pub fn element(&self, id: NodeId) -> Result<&ElementData> {
        self.get(id)
            .ok_or(HostError::NoSuchNode(id))?
            .as_element()
            .ok_or(HostError::NotAnElement(id))
    }

    /// Mutable element data for `id`
    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData> {
        self.get_mut(id)
            .ok_or(HostError::NoSuchNode(id))?
            .as_element_mut()
            .ok_or(HostError::NotAnElement(id))
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds only the document node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content.to_string()))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() || parent == child {
            return;
        }
        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
    }

    /// Remove `child` from `parent`; returns false if it was not a child
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        match self.get(child) {
            Some(node) if node.parent == parent => {
                self.detach(child);
                true
            }
            _ => false,
        }
    }

    fn detach(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let node = &self.nodes[id.index()];
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }
        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Structural parent
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Iterate over direct children
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &Node)> {
        let mut current = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        std::iter::from_fn(move || {
            let node = self.get(current)?;
            let this = current;
            current = node.next_sibling;
            Some((this, node))
        })
    }

    /// Whether `id` has the document node among its ancestors (or is it)
    pub fn is_connected(&self, id: NodeId) -> bool {
        let mut current = id;
        // Bounded by node count
        for _ in 0..=self.nodes.len() {
            if current == NodeId::ROOT {
                return true;
            }
            match self.parent(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
        false
    }

    /// First element child of the document (`<html>`)
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .find(|(_, node)| node.is_element())
            .map(|(id, _)| id)
    }

    /// Whether `id` is the document node
    pub fn is_document(&self, id: NodeId) -> bool {
        matches!(self.get(id).map(|n| &n.data), Some(NodeData::Document))
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}
