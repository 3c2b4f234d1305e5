//! domkit DOM - host document and window
//!
//! Arena-backed document tree plus the window-level facilities a UI layer
//! feature-detects: event subscription, class tokens, inline and computed
//! style, legacy alpha filters and layout rectangles. Each facility can be
//! switched off through [`HostFeatures`] to stand in for an older engine.

mod node;
mod tree;
mod classlist;
mod style;
mod geometry;
mod events;
mod window;

pub use node::{Node, NodeData, ElementData};
pub use tree::DomTree;
pub use classlist::DOMTokenList;
pub use style::{CssStyleDeclaration, ComputedStyle};
pub use geometry::DOMRect;
pub use events::{Event, EventListener, WeakListener, ListenerRegistry};
pub use window::{Window, HostFeatures};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Document node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Invalid / absent node
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this refers to a node slot
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Anything an event listener can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The window object
    Window,
    /// A node in the document tree (the document itself is [`NodeId::ROOT`])
    Node(NodeId),
}

impl Target {
    /// Node ID, if this target is a node
    pub fn node(self) -> Option<NodeId> {
        match self {
            Target::Node(id) => Some(id),
            Target::Window => None,
        }
    }
}

impl From<NodeId> for Target {
    fn from(id: NodeId) -> Self {
        Target::Node(id)
    }
}

/// Host refusal
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    #[error("no such node: {0:?}")]
    NoSuchNode(NodeId),

    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error("node {0:?} is not connected to the document")]
    Detached(NodeId),

    #[error("host does not provide {0}")]
    Unsupported(&'static str),

    #[error("element {0:?} has no alpha filter")]
    NoAlphaFilter(NodeId),

    #[error("malformed alpha filter: {0}")]
    MalformedFilter(String),
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;
