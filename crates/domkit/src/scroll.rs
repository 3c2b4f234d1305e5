//! Scroll containers
//!
//! Finds the element that scrolls a given element into view and tests
//! whether one element's box overlaps another's (or the viewport).

use std::rc::Rc;

use domkit_dom::{DOMRect, NodeId, Target, Window};
use serde::{Deserialize, Serialize};

use crate::StyleAccessor;

/// Overflow values that make a box scroll
const SCROLLING_OVERFLOW: [&str; 3] = ["scroll", "auto", "overlay"];

/// Which overflow property decides scrollability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollAxis {
    /// Generic `overflow`
    #[default]
    Any,
    /// `overflow-x`
    Horizontal,
    /// `overflow-y`
    Vertical,
}

impl ScrollAxis {
    /// Style property consulted for this axis
    pub fn property(self) -> &'static str {
        match self {
            ScrollAxis::Any => "overflow",
            ScrollAxis::Horizontal => "overflow-x",
            ScrollAxis::Vertical => "overflow-y",
        }
    }
}

/// Box edges in viewport coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Rect {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// The viewport itself
    pub fn viewport(width: f64, height: f64) -> Self {
        Self::new(0.0, width, height, 0.0)
    }

    /// Strict overlap on both axes; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.top < other.bottom
            && self.bottom > other.top
            && self.right > other.left
            && self.left < other.right
    }
}

impl From<DOMRect> for Rect {
    fn from(rect: DOMRect) -> Self {
        Self::new(rect.top(), rect.right(), rect.bottom(), rect.left())
    }
}

/// Scroll-container discovery and containment tests
#[derive(Debug, Clone)]
pub struct ScrollResolver {
    host: Option<Rc<Window>>,
    style: StyleAccessor,
    max_depth: usize,
}

impl ScrollResolver {
    pub fn new(host: Option<Rc<Window>>, style: StyleAccessor, max_depth: usize) -> Self {
        Self { host, style, max_depth }
    }

    /// Whether `element` scrolls along `axis`; None without a host
    pub fn is_scrollable(&self, element: Option<NodeId>, axis: ScrollAxis) -> Option<bool> {
        if self.host.is_none() {
            return None;
        }
        let overflow = self.style.get(element, axis.property()).unwrap_or_default();
        Some(SCROLLING_OVERFLOW.iter().any(|value| overflow.contains(value)))
    }

    /// Window, document and root element all stand for the viewport
    fn is_viewport(window: &Window, target: Target) -> bool {
        match target {
            Target::Window => true,
            Target::Node(id) => id == window.document() || Some(id) == window.document_element(),
        }
    }

    /// Closest ancestor-or-self of `element` that scrolls along `axis`
    ///
    /// Reaching the window, the document or the root element yields
    /// [`Target::Window`]. None when the chain ends without reaching any of
    /// those (a detached subtree), without a host, or when the walk exceeds
    /// the configured depth.
    pub fn nearest_scroll_container(&self, element: Option<Target>, axis: ScrollAxis) -> Option<Target> {
        let window = self.host.as_deref()?;
        let mut current = element;
        let mut depth = 0;

        while let Some(target) = current {
            if Self::is_viewport(window, target) {
                return Some(Target::Window);
            }
            let node = target.node()?;
            if self.is_scrollable(Some(node), axis) == Some(true) {
                return Some(target);
            }

            depth += 1;
            if depth > self.max_depth {
                tracing::warn!(?element, max_depth = self.max_depth, "scroll container walk exceeded depth bound");
                return None;
            }
            current = window.parent_node(node).map(Target::Node);
        }
        None
    }

    /// Whether `element`'s box overlaps `container`'s (or the viewport's)
    pub fn is_within_container(&self, element: Option<NodeId>, container: Option<Target>) -> bool {
        let (Some(window), Some(element), Some(container)) = (self.host.as_deref(), element, container) else {
            return false;
        };

        let element_rect = match window.bounding_client_rect(element) {
            Ok(rect) => Rect::from(rect),
            Err(err) => {
                tracing::trace!(?element, %err, "no bounding rect");
                return false;
            }
        };
        let container_rect = match container {
            Target::Node(id) if !Self::is_viewport(window, container) => match window.bounding_client_rect(id) {
                Ok(rect) => Rect::from(rect),
                Err(err) => {
                    tracing::trace!(container = ?id, %err, "no bounding rect");
                    return false;
                }
            },
            _ => Rect::viewport(window.inner_width(), window.inner_height()),
        };

        element_rect.overlaps(&container_rect)
    }
}
